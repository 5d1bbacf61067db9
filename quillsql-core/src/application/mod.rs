// quillsql-core/src/application/mod.rs

pub mod answer;
pub mod engine;
pub mod generate;
pub mod ports;
pub mod prompt_builder;
pub mod query_data;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do `use quillsql_core::application::{generate_sql, QueryDataPipeline};`

pub use answer::synthesize_answer;
pub use engine::execute_query;
pub use generate::generate_sql;
pub use prompt_builder::PromptBuilder;
pub use query_data::{QueryDataOutcome, QueryDataPipeline};

#[cfg(test)]
pub(crate) mod testing;
