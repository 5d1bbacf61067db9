// quillsql-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Structured output does not match '{schema}': {reason}")]
    #[diagnostic(
        code(quillsql::domain::structured_output),
        help("The model reply did not conform to the declared record schema.")
    )]
    StructuredOutput { schema: String, reason: String },

    #[error("Invalid settings: {0}")]
    #[diagnostic(code(quillsql::domain::settings))]
    InvalidSettings(String),

    #[error("Unknown model identifier '{0}'")]
    #[diagnostic(
        code(quillsql::domain::model),
        help("Use '<provider>:<model>', e.g. 'anthropic:claude-sonnet-4-20250514'.")
    )]
    UnknownModel(String),
}
