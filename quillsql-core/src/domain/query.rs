// quillsql-core/src/domain/query.rs

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;
use std::fmt;
use std::path::PathBuf;

use crate::domain::error::DomainError;
use crate::domain::normalize::normalize_sql;

/// Where the schema definition comes from. Resolved to a single string
/// before any provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    Inline(String),
    File(PathBuf),
}

/// A single SQL statement ready to hand to a connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuery(String);

impl GeneratedQuery {
    /// Build from a free-text completion, stripping fences and whitespace.
    pub fn from_completion(raw: &str) -> Self {
        Self(normalize_sql(raw))
    }

    /// Structured replies are taken as-is.
    pub fn from_record(record: &SqlQuery) -> Self {
        Self(record.sql.clone())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declared shape of a structured completion.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSchema {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// A record a model can be asked to fill in.
pub trait StructuredRecord: DeserializeOwned {
    fn output_schema() -> OutputSchema;

    fn from_value(value: serde_json::Value) -> Result<Self, DomainError> {
        serde_json::from_value(value).map_err(|e| DomainError::StructuredOutput {
            schema: Self::output_schema().name,
            reason: e.to_string(),
        })
    }
}

pub const EXPLANATION_SENTINEL: &str = "None";

/// Structured reply of the SQL generation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlQuery {
    pub sql: String,
    #[serde(default = "default_explanation", deserialize_with = "null_as_sentinel")]
    pub explanation: String,
}

fn default_explanation() -> String {
    EXPLANATION_SENTINEL.to_string()
}

fn null_as_sentinel<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_explanation))
}

impl StructuredRecord for SqlQuery {
    fn output_schema() -> OutputSchema {
        OutputSchema {
            name: "SqlQuery".to_string(),
            description: "SQL query and a short explanation of it".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "sql": {
                        "type": "string",
                        "description": "SQL query based on user request and table information"
                    },
                    "explanation": {
                        "type": "string",
                        "description": "Explanation of query",
                        "default": EXPLANATION_SENTINEL
                    }
                },
                "required": ["sql"]
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_sql_query_full_record() -> Result<()> {
        let record = SqlQuery::from_value(json!({
            "sql": "SELECT COUNT(*) FROM inspections;",
            "explanation": "count"
        }))?;
        assert_eq!(record.sql, "SELECT COUNT(*) FROM inspections;");
        assert_eq!(record.explanation, "count");
        Ok(())
    }

    #[test]
    fn test_sql_query_explanation_defaults() -> Result<()> {
        let missing = SqlQuery::from_value(json!({ "sql": "SELECT 1" }))?;
        assert_eq!(missing.explanation, "None");

        let null = SqlQuery::from_value(json!({ "sql": "SELECT 1", "explanation": null }))?;
        assert_eq!(null.explanation, "None");
        Ok(())
    }

    #[test]
    fn test_sql_query_missing_sql_is_validation_error() {
        let err = SqlQuery::from_value(json!({ "explanation": "no query" }));
        match err {
            Err(DomainError::StructuredOutput { schema, reason }) => {
                assert_eq!(schema, "SqlQuery");
                assert!(reason.contains("sql"));
            }
            other => panic!("Expected StructuredOutput error, got {:?}", other),
        }
    }

    #[test]
    fn test_sql_query_wrong_type_is_validation_error() {
        let err = SqlQuery::from_value(json!({ "sql": 42 }));
        assert!(matches!(err, Err(DomainError::StructuredOutput { .. })));
    }

    #[test]
    fn test_generated_query_from_completion_strips_fences() {
        let q = GeneratedQuery::from_completion("```sql\nSELECT name FROM users;\n```");
        assert_eq!(q.as_str(), "SELECT name FROM users;");
        assert_eq!(q.to_string(), "SELECT name FROM users;");
    }

    #[test]
    fn test_output_schema_requires_sql_only() {
        let schema = SqlQuery::output_schema();
        assert_eq!(schema.parameters["required"], json!(["sql"]));
        assert_eq!(schema.parameters["properties"]["explanation"]["default"], "None");
    }
}
