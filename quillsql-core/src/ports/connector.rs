// quillsql-core/src/ports/connector.rs

// What the use cases need from a SQL engine, without knowing which engine it is.

use crate::domain::result::QueryOutput;
use crate::error::QuillError;
use async_trait::async_trait;

#[async_trait]
pub trait Connector: Send + Sync {
    /// Run one or more statements, discarding any rows (schema provisioning).
    async fn execute_batch(&self, sql: &str) -> Result<(), QuillError>;

    /// Run a single statement and collect its rows.
    async fn query(&self, sql: &str) -> Result<QueryOutput, QuillError>;

    /// User tables visible on this connection, sorted by name.
    async fn list_tables(&self) -> Result<Vec<String>, QuillError>;

    fn engine_name(&self) -> &str;
}
