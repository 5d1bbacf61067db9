// quillsql-core/src/application/query_data.rs

//! USE CASE: answer a question about the inspection database.
//!
//! Steps: provision the inspection schema into the context database, ask for a
//! structured `SqlQuery`, execute it against the target database, then ask
//! for a natural-language answer built from question, SQL and result.

use tracing::{debug, info, instrument, warn};

use crate::application::answer::synthesize_answer;
use crate::application::engine::execute_query;
use crate::application::ports::TemplateEngine;
use crate::application::prompt_builder::PromptBuilder;
use crate::domain::inspection::{INSPECTION_SCHEMA, INSPECTION_TABLES};
use crate::domain::query::{GeneratedQuery, SqlQuery};
use crate::domain::settings::ModelSettings;
use crate::error::QuillError;
use crate::ports::chat::{ChatModel, CompletionRequest, complete_as};
use crate::ports::connector::Connector;

#[derive(Debug, Clone, PartialEq)]
pub struct QueryDataOutcome {
    pub sql: GeneratedQuery,
    pub explanation: String,
    /// Execution result as shown to the answer prompt.
    pub result: String,
    pub answer: String,
}

pub struct QueryDataPipeline<'a> {
    model: &'a dyn ChatModel,
    templates: &'a dyn TemplateEngine,
    settings: ModelSettings,
    top_k: u32,
}

impl<'a> QueryDataPipeline<'a> {
    pub fn new(
        model: &'a dyn ChatModel,
        templates: &'a dyn TemplateEngine,
        settings: ModelSettings,
        top_k: u32,
    ) -> Self {
        Self {
            model,
            templates,
            settings,
            top_k,
        }
    }

    /// Create the inspection tables in `context` and return the schema text
    /// handed to the model.
    pub async fn provision_context(&self, context: &dyn Connector) -> Result<String, QuillError> {
        context.execute_batch(INSPECTION_SCHEMA).await?;
        let tables = context.list_tables().await?;
        debug!(engine = context.engine_name(), ?tables, "context database provisioned");
        Ok(INSPECTION_SCHEMA.trim().to_string())
    }

    /// Structured generation, always at temperature 0.
    #[instrument(skip_all, fields(model = %self.settings.model, top_k = self.top_k))]
    pub async fn write_query(&self, table_info: &str, question: &str) -> Result<SqlQuery, QuillError> {
        let messages = PromptBuilder::new(self.templates)
            .sqlite_query(table_info, self.top_k, question)
            .map_err(QuillError::generation)?;
        let request = CompletionRequest::new(self.settings.with_temperature(Some(0.0)), messages);

        let record = complete_as::<SqlQuery>(self.model, &request)
            .await
            .map_err(QuillError::generation)?;
        debug!(explanation = %record.explanation, "structured query received");
        Ok(record)
    }

    /// Warn about every inspection table the target database does not have.
    /// The query still runs; the engine reports the failure if it matters.
    pub async fn check_target_schema(&self, target: &dyn Connector) -> Result<Vec<String>, QuillError> {
        let present = target.list_tables().await?;
        let missing: Vec<String> = INSPECTION_TABLES
            .iter()
            .filter(|t| !present.iter().any(|p| p.eq_ignore_ascii_case(t)))
            .map(|t| t.to_string())
            .collect();
        if !missing.is_empty() {
            warn!(
                engine = target.engine_name(),
                ?missing,
                "Target database does not contain the inspection schema the query was written for"
            );
        }
        Ok(missing)
    }

    pub async fn execute(&self, target: &dyn Connector, sql: &GeneratedQuery) -> Result<String, QuillError> {
        let output = execute_query(target, sql).await?;
        Ok(output.to_string())
    }

    pub async fn answer(&self, question: &str, sql: &GeneratedQuery, result: &str) -> Result<String, QuillError> {
        synthesize_answer(
            self.model,
            self.templates,
            &self.settings,
            question,
            sql.as_str(),
            result,
        )
        .await
    }

    /// Full pipeline. `on_sql` sees the statement before it is executed.
    #[instrument(skip_all)]
    pub async fn run<F>(
        &self,
        question: &str,
        context: &dyn Connector,
        target: &dyn Connector,
        on_sql: F,
    ) -> Result<QueryDataOutcome, QuillError>
    where
        F: FnOnce(&GeneratedQuery),
    {
        let table_info = self.provision_context(context).await?;
        let record = self.write_query(&table_info, question).await?;
        let sql = GeneratedQuery::from_record(&record);
        on_sql(&sql);

        self.check_target_schema(target).await?;
        let result = self.execute(target, &sql).await?;
        info!(result.len = result.len(), "query executed");

        let answer = self.answer(question, &sql, &result).await?;
        Ok(QueryDataOutcome {
            sql,
            explanation: record.explanation,
            result,
            answer,
        })
    }
}
