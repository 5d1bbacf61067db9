// quillsql-core/src/application/generate.rs

use tracing::{debug, instrument};

use crate::application::ports::TemplateEngine;
use crate::application::prompt_builder::PromptBuilder;
use crate::domain::query::GeneratedQuery;
use crate::domain::settings::ModelSettings;
use crate::error::QuillError;
use crate::ports::chat::{ChatModel, CompletionRequest};

/// Turn a schema and a question into one bare SQL statement.
///
/// Any failure after the schema is in hand (prompt rendering, provider call,
/// malformed reply) comes back wrapped as `QuillError::Generation`.
#[instrument(skip_all, fields(model = %settings.model, ddl.len = ddl.len()))]
pub async fn generate_sql(
    model: &dyn ChatModel,
    templates: &dyn TemplateEngine,
    settings: &ModelSettings,
    ddl: &str,
    question: &str,
) -> Result<GeneratedQuery, QuillError> {
    let messages = PromptBuilder::new(templates)
        .text_to_sql(ddl, question)
        .map_err(QuillError::generation)?;
    debug!(
        prompt.chars = messages.iter().map(|m| m.content.len()).sum::<usize>(),
        "prompt assembled"
    );

    let request = CompletionRequest::new(settings.clone(), messages);
    let raw = model
        .complete(&request)
        .await
        .map_err(QuillError::generation)?;

    let query = GeneratedQuery::from_completion(&raw);
    debug!(raw.len = raw.len(), sql.len = query.as_str().len(), "completion normalized");
    Ok(query)
}
