// Test doubles for the ports.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::query::OutputSchema;
use crate::domain::result::QueryOutput;
use crate::error::QuillError;
use crate::infrastructure::error::{InfrastructureError, LlmError};
use crate::ports::chat::{ChatModel, CompletionRequest};
use crate::ports::connector::Connector;

pub enum Reply {
    Text(String),
    Structured(serde_json::Value),
    Fail(u16, String),
}

/// Replays canned replies in order and records every request.
#[derive(Default)]
pub struct ScriptedChatModel {
    replies: Mutex<VecDeque<Reply>>,
    pub requests: Mutex<Vec<(CompletionRequest, Option<OutputSchema>)>>,
}

impl ScriptedChatModel {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<(CompletionRequest, Option<OutputSchema>)> {
        self.requests.lock().unwrap().clone()
    }

    fn next(&self, request: &CompletionRequest, schema: Option<&OutputSchema>) -> Reply {
        self.requests
            .lock()
            .unwrap()
            .push((request.clone(), schema.cloned()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left")
    }
}

fn provider_failure(status: u16, body: String) -> QuillError {
    QuillError::Infrastructure(InfrastructureError::Llm(LlmError::Status { status, body }))
}

#[async_trait]
impl ChatModel for ScriptedChatModel {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, QuillError> {
        match self.next(request, None) {
            Reply::Text(t) => Ok(t),
            Reply::Fail(status, body) => Err(provider_failure(status, body)),
            Reply::Structured(_) => panic!("structured reply scripted for a text call"),
        }
    }

    async fn complete_structured(
        &self,
        request: &CompletionRequest,
        schema: &OutputSchema,
    ) -> Result<serde_json::Value, QuillError> {
        match self.next(request, Some(schema)) {
            Reply::Structured(v) => Ok(v),
            Reply::Fail(status, body) => Err(provider_failure(status, body)),
            Reply::Text(_) => panic!("text reply scripted for a structured call"),
        }
    }
}

/// Connector returning a fixed result and recording executed SQL.
pub struct FixedConnector {
    pub output: QueryOutput,
    pub tables: Vec<String>,
    pub executed: Mutex<Vec<String>>,
}

impl FixedConnector {
    pub fn new(output: QueryOutput, tables: &[&str]) -> Self {
        Self {
            output,
            tables: tables.iter().map(|t| t.to_string()).collect(),
            executed: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Connector for FixedConnector {
    async fn execute_batch(&self, sql: &str) -> Result<(), QuillError> {
        self.executed.lock().unwrap().push(sql.to_string());
        Ok(())
    }

    async fn query(&self, sql: &str) -> Result<QueryOutput, QuillError> {
        self.executed.lock().unwrap().push(sql.to_string());
        Ok(self.output.clone())
    }

    async fn list_tables(&self) -> Result<Vec<String>, QuillError> {
        Ok(self.tables.clone())
    }

    fn engine_name(&self) -> &str {
        "fixed"
    }
}
