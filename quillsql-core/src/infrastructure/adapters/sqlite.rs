// quillsql-core/src/infrastructure/adapters/sqlite.rs

use async_trait::async_trait;
use rusqlite::Connection;
use rusqlite::types::ValueRef;
use std::sync::{Mutex, MutexGuard};

use crate::domain::result::{QueryOutput, Value};
use crate::error::QuillError;
use crate::infrastructure::config::connection::DatabaseTarget;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::connector::Connector;

/// SQLite connection owned by a single invocation. The mutex only satisfies
/// the `Sync` bound of `Connector`; the connection is never used from two
/// threads.
pub struct SqliteConnector {
    conn: Mutex<Connection>,
}

impl SqliteConnector {
    pub fn new(target: &DatabaseTarget) -> Result<Self, InfrastructureError> {
        let conn = match target {
            DatabaseTarget::Memory => Connection::open_in_memory()?,
            DatabaseTarget::File(path) => Connection::open(path)?,
        };
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn in_memory() -> Result<Self, InfrastructureError> {
        Self::new(&DatabaseTarget::Memory)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, QuillError> {
        self.conn
            .lock()
            .map_err(|_| db_error(DatabaseError::LockPoisoned))
    }

    fn run_query(&self, sql: &str) -> Result<QueryOutput, QuillError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql).map_err(sqlite_error)?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let mut rows = stmt.query([]).map_err(sqlite_error)?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(sqlite_error)? {
            let mut values = Vec::with_capacity(width);
            for i in 0..width {
                values.push(to_value(row.get_ref(i).map_err(sqlite_error)?));
            }
            out.push(values);
        }

        Ok(QueryOutput { columns, rows: out })
    }

    fn run_batch(&self, sql: &str) -> Result<(), QuillError> {
        self.lock()?.execute_batch(sql).map_err(sqlite_error)
    }

    fn table_names(&self) -> Result<Vec<String>, QuillError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT name FROM sqlite_master \
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
            )
            .map_err(sqlite_error)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(sqlite_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(sqlite_error)?;
        Ok(names)
    }
}

fn to_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}

fn db_error(err: DatabaseError) -> QuillError {
    QuillError::Infrastructure(InfrastructureError::Database(err))
}

fn sqlite_error(err: rusqlite::Error) -> QuillError {
    db_error(DatabaseError::Sqlite(err))
}

#[async_trait]
impl Connector for SqliteConnector {
    async fn execute_batch(&self, sql: &str) -> Result<(), QuillError> {
        self.run_batch(sql)
    }

    async fn query(&self, sql: &str) -> Result<QueryOutput, QuillError> {
        self.run_query(sql)
    }

    async fn list_tables(&self) -> Result<Vec<String>, QuillError> {
        self.table_names()
    }

    fn engine_name(&self) -> &str {
        "sqlite"
    }
}
