// quillsql-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("SQLite Engine Error: {0}")]
    #[diagnostic(
        code(quillsql::infra::database::sqlite),
        help("An error occurred inside the SQL engine.")
    )]
    Sqlite(#[from] rusqlite::Error),

    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(quillsql::infra::database::duckdb),
        help("An error occurred inside the SQL engine.")
    )]
    DuckDB(#[from] duckdb::Error),

    #[error("Unsupported database URL '{0}'")]
    #[diagnostic(
        code(quillsql::infra::database::url),
        help("Use sqlite:///path.db, sqlite:// (in memory) or duckdb:///path.duckdb.")
    )]
    UnsupportedUrl(String),

    #[error("Connection lock poisoned")]
    LockPoisoned,
}

#[derive(Error, Debug, Diagnostic)]
pub enum LlmError {
    #[error("{0} environment variable not set")]
    #[diagnostic(code(quillsql::infra::llm::api_key))]
    MissingApiKey(String),

    #[error("Provider request failed: {0}")]
    #[diagnostic(
        code(quillsql::infra::llm::transport),
        help("Check network access and the configured API base URL.")
    )]
    Transport(#[from] reqwest::Error),

    #[error("Provider API error {status}: {body}")]
    #[diagnostic(code(quillsql::infra::llm::status))]
    Status { status: u16, body: String },

    #[error("Malformed provider response: {0}")]
    #[diagnostic(code(quillsql::infra::llm::malformed))]
    MalformedResponse(String),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- LLM PROVIDER ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Llm(#[from] LlmError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(quillsql::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    #[diagnostic(code(quillsql::infra::file_not_found))]
    FileNotFound(PathBuf),

    #[error("Error reading file {}: {source}", path.display())]
    #[diagnostic(code(quillsql::infra::file_read))]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(quillsql::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Configuration file not found at '{0}'")]
    #[diagnostic(code(quillsql::infra::config_missing))]
    ConfigNotFound(String),

    // --- TEMPLATING ---
    #[error("Template Rendering Error: {0}")]
    #[diagnostic(code(quillsql::infra::template))]
    TemplateError(#[from] minijinja::Error),
}

// Shortcuts for `?` on driver calls
impl From<rusqlite::Error> for InfrastructureError {
    fn from(err: rusqlite::Error) -> Self {
        InfrastructureError::Database(DatabaseError::Sqlite(err))
    }
}

impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}

impl From<reqwest::Error> for InfrastructureError {
    fn from(err: reqwest::Error) -> Self {
        InfrastructureError::Llm(LlmError::Transport(err))
    }
}
