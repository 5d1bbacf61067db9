// quillsql/src/commands/generate.rs
//
// USE CASE: Generate one SQL query from a schema and a question.

use std::path::Path;
use std::time::Duration;

use quillsql_core::QuillError;
use quillsql_core::application::generate_sql;
use quillsql_core::domain::{AppConfig, ModelSettings};
use quillsql_core::infrastructure::adapters::AnthropicChatModel;
use quillsql_core::infrastructure::config::load_config;
use quillsql_core::infrastructure::error::InfrastructureError;
use quillsql_core::infrastructure::fs::{atomic_write, resolve_schema};
use quillsql_core::infrastructure::prompt::JinjaRenderer;
use tracing::info;

use crate::cli::Cli;

pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let source = cli
        .schema
        .source()
        .ok_or_else(|| anyhow::anyhow!("Exactly one of --ddl or --ddl-file is required"))?;

    let mut config = load_config(cli.config.as_deref(), Path::new("."))?;
    apply_cli_overrides(&mut config, &cli);
    config.check()?;

    // Schema errors (missing file, unreadable file) surface unwrapped
    let ddl = resolve_schema(&source)?;

    if cli.verbose {
        eprintln!("Schema loaded successfully");
        eprintln!("Question: {}", cli.question);
        eprintln!("Generating SQL query...");
    }

    let settings = ModelSettings::from_llm(&config.llm)?;
    let model = AnthropicChatModel::from_env(
        &config.llm.api_base,
        Duration::from_secs(config.llm.timeout_secs),
    )
    .map_err(|e| QuillError::generation(InfrastructureError::from(e).into()))?;
    let renderer = JinjaRenderer::new();
    info!(model = %settings.model, "generating query");

    let query = generate_sql(&model, &renderer, &settings, &ddl, &cli.question).await?;

    match &cli.output {
        Some(path) => {
            atomic_write(path, query.as_str())?;
            if cli.verbose {
                eprintln!("SQL query written to: {}", path.display());
            }
        }
        None => println!("{}", query),
    }
    Ok(())
}

/// Flags win over the config file and its environment overrides.
fn apply_cli_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }
    if let Some(api_base) = &cli.api_base {
        config.llm.api_base = api_base.clone();
    }
    if cli.temperature.is_some() {
        config.llm.temperature = cli.temperature;
    }
}
