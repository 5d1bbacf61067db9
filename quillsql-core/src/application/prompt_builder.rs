// quillsql-core/src/application/prompt_builder.rs

use serde_json::json;

use crate::application::ports::TemplateEngine;
use crate::domain::prompt::ChatMessage;
use crate::domain::templates;
use crate::error::QuillError;

/// Turns schema, question and results into chat messages. All values are
/// embedded verbatim.
pub struct PromptBuilder<'a> {
    engine: &'a dyn TemplateEngine,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(engine: &'a dyn TemplateEngine) -> Self {
        Self { engine }
    }

    /// System turn with the schema, human turn with the question.
    pub fn text_to_sql(&self, ddl: &str, question: &str) -> Result<Vec<ChatMessage>, QuillError> {
        let system = self
            .engine
            .render(templates::TEXT_TO_SQL_SYSTEM, &json!({ "ddl": ddl }))?;
        let human = self
            .engine
            .render(templates::TEXT_TO_SQL_HUMAN, &json!({ "question": question }))?;
        Ok(vec![ChatMessage::system(system), ChatMessage::human(human)])
    }

    /// Single human turn for structured SQLite query generation.
    pub fn sqlite_query(
        &self,
        table_info: &str,
        top_k: u32,
        question: &str,
    ) -> Result<Vec<ChatMessage>, QuillError> {
        let prompt = self.engine.render(
            templates::SQLITE_QUERY,
            &json!({ "table_info": table_info, "top_k": top_k, "input": question }),
        )?;
        Ok(vec![ChatMessage::human(prompt)])
    }

    /// Single human turn carrying question, SQL and result.
    pub fn answer(
        &self,
        question: &str,
        sql_query: &str,
        sql_result: &str,
    ) -> Result<Vec<ChatMessage>, QuillError> {
        let prompt = self.engine.render(
            templates::ANSWER,
            &json!({ "question": question, "sql_query": sql_query, "sql_result": sql_result }),
        )?;
        Ok(vec![ChatMessage::human(prompt)])
    }
}
