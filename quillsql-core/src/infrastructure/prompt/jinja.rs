// quillsql-core/src/infrastructure/prompt/jinja.rs

// Renders the fixed prompt templates. Values are inserted verbatim: no
// escaping, and template syntax inside a value is not evaluated.

use minijinja::{Environment, UndefinedBehavior};

use crate::application::ports::TemplateEngine;
use crate::error::QuillError;
use crate::infrastructure::error::InfrastructureError;

pub struct JinjaRenderer<'a> {
    env: Environment<'a>,
}

impl<'a> JinjaRenderer<'a> {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // A missing context key is a bug in the caller, not an empty string
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }
}

impl<'a> Default for JinjaRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TemplateEngine for JinjaRenderer<'a> {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, QuillError> {
        self.env
            .render_str(template, context)
            .map_err(|e| QuillError::Infrastructure(InfrastructureError::TemplateError(e)))
    }
}
