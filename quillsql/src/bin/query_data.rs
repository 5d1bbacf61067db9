// quillsql/src/bin/query_data.rs
//
// Answer a question about the inspection database:
// question -> structured SQL -> execution -> natural-language answer.

use miette::{IntoDiagnostic, Result};
use std::path::Path;
use std::time::Duration;

use quillsql_core::application::QueryDataPipeline;
use quillsql_core::domain::ModelSettings;
use quillsql_core::infrastructure::adapters::{AnthropicChatModel, SqliteConnector, open_connector};
use quillsql_core::infrastructure::config::{DatabaseUrl, load_config};
use quillsql_core::infrastructure::logging::init_logging;
use quillsql_core::infrastructure::prompt::JinjaRenderer;

const USAGE: &str = "Usage: query-data \"<your question>\"";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [question] = args.as_slice() else {
        println!("{}", USAGE);
        std::process::exit(1);
    };

    init_logging(false);

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .into_diagnostic()?
        .block_on(run(question))
}

async fn run(question: &str) -> Result<()> {
    let config = load_config(None, Path::new("."))?;
    let settings = ModelSettings::from_llm(&config.llm)?;
    let model = AnthropicChatModel::from_env(
        &config.llm.api_base,
        Duration::from_secs(config.llm.timeout_secs),
    )?;
    let renderer = JinjaRenderer::new();

    // Generation context: throwaway in-memory database holding the inspection schema
    let context = SqliteConnector::in_memory()?;
    // Execution target: whatever the configuration points at
    let target_url: DatabaseUrl = config.database.url.parse()?;
    let target = open_connector(&target_url)?;

    let pipeline = QueryDataPipeline::new(&model, &renderer, settings, config.database.top_k);
    let outcome = pipeline
        .run(question, &context, target.as_ref(), |sql| {
            println!("   sql: {}", sql);
        })
        .await?;

    println!("{}", outcome.answer);
    Ok(())
}
