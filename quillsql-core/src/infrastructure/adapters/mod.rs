// quillsql-core/src/infrastructure/adapters/mod.rs

pub mod anthropic;
pub mod duckdb;
pub mod sqlite;

use crate::infrastructure::config::connection::DatabaseUrl;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::connector::Connector;

pub use self::anthropic::AnthropicChatModel;
pub use self::duckdb::DuckDBConnector;
pub use self::sqlite::SqliteConnector;

/// Pick the connector matching the URL scheme.
pub fn open_connector(url: &DatabaseUrl) -> Result<Box<dyn Connector>, InfrastructureError> {
    match url {
        DatabaseUrl::Sqlite(target) => Ok(Box::new(SqliteConnector::new(target)?)),
        DatabaseUrl::DuckDB(target) => Ok(Box::new(DuckDBConnector::new(target)?)),
    }
}
