// quillsql-core/src/infrastructure/config/connection.rs

use std::path::PathBuf;
use std::str::FromStr;

use crate::infrastructure::error::DatabaseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    Memory,
    File(PathBuf),
}

/// Parsed connection string.
///
/// Follows the `scheme:///relative` / `scheme:////absolute` convention:
/// `sqlite://` and `sqlite:///:memory:` open an in-memory database, a bare
/// path opens a SQLite file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    Sqlite(DatabaseTarget),
    DuckDB(DatabaseTarget),
}

impl FromStr for DatabaseUrl {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = s.trim();
        if url.is_empty() {
            return Err(DatabaseError::UnsupportedUrl(s.to_string()));
        }

        let Some((scheme, rest)) = url.split_once("://") else {
            // No scheme: a plain SQLite file path
            return Ok(DatabaseUrl::Sqlite(DatabaseTarget::File(PathBuf::from(url))));
        };

        let target = parse_target(rest).ok_or_else(|| DatabaseError::UnsupportedUrl(s.to_string()))?;
        match scheme {
            "sqlite" => Ok(DatabaseUrl::Sqlite(target)),
            "duckdb" => Ok(DatabaseUrl::DuckDB(target)),
            _ => Err(DatabaseError::UnsupportedUrl(s.to_string())),
        }
    }
}

fn parse_target(rest: &str) -> Option<DatabaseTarget> {
    if rest.is_empty() {
        return Some(DatabaseTarget::Memory);
    }
    // No host part: whatever follows "scheme://" must start with '/'
    let path = rest.strip_prefix('/')?;
    match path {
        "" | ":memory:" => Some(DatabaseTarget::Memory),
        p => Some(DatabaseTarget::File(PathBuf::from(p))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_sqlite_relative_file() -> Result<()> {
        let url: DatabaseUrl = "sqlite:///fake.db".parse()?;
        assert_eq!(url, DatabaseUrl::Sqlite(DatabaseTarget::File("fake.db".into())));
        Ok(())
    }

    #[test]
    fn test_sqlite_absolute_file() -> Result<()> {
        let url: DatabaseUrl = "sqlite:////var/data/inspections.db".parse()?;
        assert_eq!(
            url,
            DatabaseUrl::Sqlite(DatabaseTarget::File("/var/data/inspections.db".into()))
        );
        Ok(())
    }

    #[test]
    fn test_in_memory_forms() -> Result<()> {
        let memory = DatabaseUrl::Sqlite(DatabaseTarget::Memory);
        assert_eq!("sqlite://".parse::<DatabaseUrl>()?, memory);
        assert_eq!("sqlite:///:memory:".parse::<DatabaseUrl>()?, memory);
        assert_eq!(
            "duckdb://".parse::<DatabaseUrl>()?,
            DatabaseUrl::DuckDB(DatabaseTarget::Memory)
        );
        Ok(())
    }

    #[test]
    fn test_duckdb_file() -> Result<()> {
        let url: DatabaseUrl = "duckdb:///warehouse.duckdb".parse()?;
        assert_eq!(url, DatabaseUrl::DuckDB(DatabaseTarget::File("warehouse.duckdb".into())));
        Ok(())
    }

    #[test]
    fn test_bare_path_is_sqlite() -> Result<()> {
        let url: DatabaseUrl = "data/fake.db".parse()?;
        assert_eq!(url, DatabaseUrl::Sqlite(DatabaseTarget::File("data/fake.db".into())));
        Ok(())
    }

    #[test]
    fn test_unsupported_urls() {
        assert!("postgres://localhost/db".parse::<DatabaseUrl>().is_err());
        assert!("sqlite://host/db".parse::<DatabaseUrl>().is_err());
        assert!("".parse::<DatabaseUrl>().is_err());
    }
}
