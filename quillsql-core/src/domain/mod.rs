pub mod error;
pub mod inspection;
pub mod normalize;
pub mod prompt;
pub mod query;
pub mod result;
pub mod settings;
pub mod templates;

// Convenient re-exports
pub use error::DomainError;
pub use normalize::normalize_sql;
pub use prompt::{ChatMessage, Role};
pub use query::{GeneratedQuery, OutputSchema, SchemaSource, SqlQuery, StructuredRecord};
pub use result::{QueryOutput, Value};
pub use settings::{AppConfig, DatabaseSettings, LlmSettings, ModelId, ModelSettings, Provider};
