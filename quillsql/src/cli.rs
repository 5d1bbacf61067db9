// quillsql/src/cli.rs
//
// Clap definition of the `text-to-sql` binary.

use clap::{Args, Parser};
use std::path::PathBuf;

use quillsql_core::domain::SchemaSource;

#[derive(Parser, Debug)]
#[command(name = "text-to-sql")]
#[command(about = "Generate a SQL query from a schema and a natural-language question", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Natural language question to convert to SQL
    #[arg(short = 'q', long)]
    pub question: String,

    /// Output file for the SQL query (default: stdout)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Print progress to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Model identifier, e.g. "anthropic:claude-sonnet-4-20250514"
    #[arg(long, env = "QUILLSQL_MODEL")]
    pub model: Option<String>,

    /// Sampling temperature (0.0 - 1.0)
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Provider base URL
    #[arg(long, env = "ANTHROPIC_BASE_URL")]
    pub api_base: Option<String>,

    /// Configuration file (default: quillsql.yaml in the working directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Exactly one schema source is required.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SchemaArgs {
    /// DDL schema as a string
    #[arg(short = 'd', long)]
    pub ddl: Option<String>,

    /// Path to a file containing the DDL schema
    #[arg(long)]
    pub ddl_file: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn source(&self) -> Option<SchemaSource> {
        match (&self.ddl, &self.ddl_file) {
            (Some(ddl), None) => Some(SchemaSource::Inline(ddl.clone())),
            (None, Some(path)) => Some(SchemaSource::File(path.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_parse_inline_ddl() -> Result<()> {
        let cli = Cli::try_parse_from([
            "text-to-sql",
            "-d",
            "CREATE TABLE users (id INT);",
            "-q",
            "Get all users",
        ])?;
        match cli.schema.source() {
            Some(SchemaSource::Inline(ddl)) => assert_eq!(ddl, "CREATE TABLE users (id INT);"),
            other => bail!("Expected inline schema, got {:?}", other),
        }
        assert_eq!(cli.question, "Get all users");
        assert_eq!(cli.output, None);
        assert!(!cli.verbose);
        Ok(())
    }

    #[test]
    fn test_cli_parse_ddl_file_and_output() -> Result<()> {
        let cli = Cli::try_parse_from([
            "text-to-sql",
            "--ddl-file",
            "schema.sql",
            "--question",
            "q",
            "-o",
            "out.sql",
            "--verbose",
            "--temperature",
            "0.2",
        ])?;
        match cli.schema.source() {
            Some(SchemaSource::File(path)) => assert_eq!(path, PathBuf::from("schema.sql")),
            other => bail!("Expected file schema, got {:?}", other),
        }
        assert_eq!(cli.output, Some(PathBuf::from("out.sql")));
        assert!(cli.verbose);
        assert_eq!(cli.temperature, Some(0.2));
        Ok(())
    }

    #[test]
    fn test_cli_rejects_both_schema_sources() -> Result<()> {
        let err = Cli::try_parse_from([
            "text-to-sql",
            "-d",
            "CREATE TABLE t (id INT);",
            "--ddl-file",
            "schema.sql",
            "-q",
            "q",
        ])
        .err()
        .ok_or_else(|| anyhow::anyhow!("expected a parse error"))?;
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        Ok(())
    }

    #[test]
    fn test_cli_requires_a_schema_source() -> Result<()> {
        let err = Cli::try_parse_from(["text-to-sql", "-q", "q"])
            .err()
            .ok_or_else(|| anyhow::anyhow!("expected a parse error"))?;
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        Ok(())
    }

    #[test]
    fn test_cli_requires_a_question() {
        assert!(Cli::try_parse_from(["text-to-sql", "-d", "CREATE TABLE t (id INT);"]).is_err());
    }
}
