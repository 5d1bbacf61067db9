// quillsql-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum QuillError {
    // --- DOMAIN ERRORS (records, structured output) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, HTTP, database, config) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- USE CASE WRAPPERS ---
    #[error("Error generating SQL query: {0}")]
    #[diagnostic(code(quillsql::generation))]
    Generation(#[source] Box<QuillError>),

    #[error("Error generating answer: {0}")]
    #[diagnostic(code(quillsql::answer))]
    Answer(#[source] Box<QuillError>),
}

impl QuillError {
    pub fn generation(err: QuillError) -> Self {
        QuillError::Generation(Box::new(err))
    }

    pub fn answer(err: QuillError) -> Self {
        QuillError::Answer(Box::new(err))
    }
}
