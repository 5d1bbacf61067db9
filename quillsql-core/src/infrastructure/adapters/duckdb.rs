// quillsql-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, NaiveTime};
use duckdb::types::{TimeUnit, ValueRef};
use duckdb::{Config, Connection};
use std::sync::{Mutex, MutexGuard};

use crate::domain::result::{QueryOutput, Value};
use crate::error::QuillError;
use crate::infrastructure::config::connection::DatabaseTarget;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::connector::Connector;

pub struct DuckDBConnector {
    conn: Mutex<Connection>,
}

impl DuckDBConnector {
    pub fn new(target: &DatabaseTarget) -> Result<Self, InfrastructureError> {
        let config = Config::default();

        // Read/write is the default access mode
        let conn = match target {
            DatabaseTarget::Memory => Connection::open_in_memory_with_flags(config)?,
            DatabaseTarget::File(path) => Connection::open_with_flags(path, config)?,
        };

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, QuillError> {
        self.conn.lock().map_err(|_| {
            QuillError::Infrastructure(InfrastructureError::Database(DatabaseError::LockPoisoned))
        })
    }

    fn run_query(&self, sql: &str) -> Result<QueryOutput, QuillError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql).map_err(duckdb_error)?;
        let mut rows = stmt.query([]).map_err(duckdb_error)?;

        // Column metadata is only available once the statement has run
        let columns: Vec<String> = rows
            .as_ref()
            .map(|s| s.column_names())
            .unwrap_or_default();
        let width = columns.len();

        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(duckdb_error)? {
            let mut values = Vec::with_capacity(width);
            for i in 0..width {
                values.push(to_value(row.get_ref(i).map_err(duckdb_error)?));
            }
            out.push(values);
        }

        Ok(QueryOutput { columns, rows: out })
    }

    fn run_batch(&self, sql: &str) -> Result<(), QuillError> {
        self.lock()?.execute_batch(sql).map_err(duckdb_error)
    }

    fn table_names(&self) -> Result<Vec<String>, QuillError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT table_name FROM information_schema.tables \
                 WHERE table_schema = 'main' ORDER BY table_name",
            )
            .map_err(duckdb_error)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(duckdb_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(duckdb_error)?;
        Ok(names)
    }
}

fn to_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Boolean(b) => Value::Boolean(b),
        ValueRef::TinyInt(i) => Value::Integer(i.into()),
        ValueRef::SmallInt(i) => Value::Integer(i.into()),
        ValueRef::Int(i) => Value::Integer(i.into()),
        ValueRef::BigInt(i) => Value::Integer(i),
        ValueRef::UTinyInt(i) => Value::Integer(i.into()),
        ValueRef::USmallInt(i) => Value::Integer(i.into()),
        ValueRef::UInt(i) => Value::Integer(i.into()),
        ValueRef::UBigInt(i) => match i64::try_from(i) {
            Ok(v) => Value::Integer(v),
            Err(_) => Value::Text(i.to_string()),
        },
        ValueRef::HugeInt(i) => match i64::try_from(i) {
            Ok(v) => Value::Integer(v),
            Err(_) => Value::Text(i.to_string()),
        },
        ValueRef::Float(f) => Value::Real(f.into()),
        ValueRef::Double(f) => Value::Real(f),
        ValueRef::Decimal(d) => match d.to_string().parse::<f64>() {
            Ok(f) => Value::Real(f),
            Err(_) => Value::Text(d.to_string()),
        },
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        // Temporal values become ISO text, as SQLite stores them
        ValueRef::Date32(days) => iso_date(days).map_or_else(|| debug_text(value), Value::Text),
        ValueRef::Timestamp(unit, v) => {
            iso_timestamp(unit, v).map_or_else(|| debug_text(value), Value::Text)
        }
        ValueRef::Time64(unit, v) => iso_time(unit, v).map_or_else(|| debug_text(value), Value::Text),
        // Intervals, nested types: no tuple rendering, fall back to the Debug form
        other => debug_text(other),
    }
}

fn debug_text(value: ValueRef<'_>) -> Value {
    Value::Text(format!("{:?}", value.to_owned()))
}

fn to_micros(unit: TimeUnit, value: i64) -> Option<i64> {
    match unit {
        TimeUnit::Second => value.checked_mul(1_000_000),
        TimeUnit::Millisecond => value.checked_mul(1_000),
        TimeUnit::Microsecond => Some(value),
        TimeUnit::Nanosecond => Some(value.div_euclid(1_000)),
    }
}

/// Days since 1970-01-01 as `YYYY-MM-DD`.
fn iso_date(days: i32) -> Option<String> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    let offset = Days::new(u64::from(days.unsigned_abs()));
    let date = if days >= 0 {
        epoch.checked_add_days(offset)
    } else {
        epoch.checked_sub_days(offset)
    }?;
    Some(date.to_string())
}

/// Epoch offset as `YYYY-MM-DD HH:MM:SS[.fff]`.
fn iso_timestamp(unit: TimeUnit, value: i64) -> Option<String> {
    let micros = to_micros(unit, value)?;
    DateTime::from_timestamp_micros(micros).map(|dt| dt.naive_utc().to_string())
}

/// Offset since midnight as `HH:MM:SS[.fff]`.
fn iso_time(unit: TimeUnit, value: i64) -> Option<String> {
    let micros = to_micros(unit, value)?;
    let secs = u32::try_from(micros.div_euclid(1_000_000)).ok()?;
    let nanos = u32::try_from(micros.rem_euclid(1_000_000) * 1_000).ok()?;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos).map(|t| t.to_string())
}

fn duckdb_error(err: duckdb::Error) -> QuillError {
    QuillError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(err)))
}

#[async_trait]
impl Connector for DuckDBConnector {
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
        "duckdb"
    }
}
