// quillsql-core/src/application/answer.rs

use tracing::{debug, instrument};

use crate::application::ports::TemplateEngine;
use crate::application::prompt_builder::PromptBuilder;
use crate::domain::settings::ModelSettings;
use crate::error::QuillError;
use crate::ports::chat::{ChatModel, CompletionRequest};

/// Second model call of `query-data`: question, SQL and rendered result go in
/// verbatim, a trimmed natural-language answer comes out.
#[instrument(skip_all, fields(model = %settings.model, result.len = sql_result.len()))]
pub async fn synthesize_answer(
    model: &dyn ChatModel,
    templates: &dyn TemplateEngine,
    settings: &ModelSettings,
    question: &str,
    sql_query: &str,
    sql_result: &str,
) -> Result<String, QuillError> {
    let messages = PromptBuilder::new(templates)
        .answer(question, sql_query, sql_result)
        .map_err(QuillError::answer)?;

    let request = CompletionRequest::new(settings.clone(), messages);
    let answer = model.complete(&request).await.map_err(QuillError::answer)?;
    debug!(answer.len = answer.len(), "answer received");

    Ok(answer.trim().to_string())
}
