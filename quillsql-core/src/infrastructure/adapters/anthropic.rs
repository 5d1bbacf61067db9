// quillsql-core/src/infrastructure/adapters/anthropic.rs

//! Anthropic Messages API adapter for the `ChatModel` port.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

use crate::domain::prompt::Role;
use crate::domain::query::OutputSchema;
use crate::error::QuillError;
use crate::infrastructure::error::{InfrastructureError, LlmError};
use crate::ports::chat::{ChatModel, CompletionRequest};

pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicChatModel {
    api_key: String,
    api_base: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        name: String,
        input: serde_json::Value,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl AnthropicChatModel {
    pub fn new(api_key: String, api_base: &str, timeout: Duration) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Read the API key from `ANTHROPIC_API_KEY`. Fails before any request
    /// is made when the variable is unset or empty.
    pub fn from_env(api_base: &str, timeout: Duration) -> Result<Self, LlmError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LlmError::MissingApiKey(API_KEY_VAR.to_string()))?;
        Self::new(api_key, api_base, timeout)
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.api_base)
    }

    async fn send(&self, body: &serde_json::Value) -> Result<String, LlmError> {
        let start = Instant::now();
        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), elapsed = ?start.elapsed(), "provider responded");

        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: error_message(&text),
            });
        }
        Ok(text)
    }
}

/// Build the Messages API payload. System turns are joined into the
/// top-level `system` field; human turns become `user` messages. With a
/// schema, a single tool is declared and forced.
pub(crate) fn build_request_body(
    request: &CompletionRequest,
    schema: Option<&OutputSchema>,
) -> serde_json::Value {
    let system: Vec<&str> = request
        .messages
        .iter()
        .filter(|m| m.role == Role::System)
        .map(|m| m.content.as_str())
        .collect();
    let messages: Vec<serde_json::Value> = request
        .messages
        .iter()
        .filter(|m| m.role == Role::Human)
        .map(|m| json!({ "role": "user", "content": m.content }))
        .collect();

    let mut body = json!({
        "model": request.settings.model.name,
        "max_tokens": request.settings.max_tokens,
        "messages": messages,
    });

    if !system.is_empty() {
        body["system"] = json!(system.join("\n\n"));
    }
    if let Some(t) = request.settings.temperature {
        body["temperature"] = json!(t);
    }
    if let Some(schema) = schema {
        body["tools"] = json!([{
            "name": schema.name,
            "description": schema.description,
            "input_schema": schema.parameters,
        }]);
        body["tool_choice"] = json!({ "type": "tool", "name": schema.name });
    }
    body
}

fn parse_response(body: &str) -> Result<MessagesResponse, LlmError> {
    serde_json::from_str(body)
        .map_err(|e| LlmError::MalformedResponse(format!("{} (body: {})", e, body)))
}

pub(crate) fn extract_text(body: &str) -> Result<String, LlmError> {
    let parsed = parse_response(body)?;
    let texts: Vec<String> = parsed
        .content
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            _ => None,
        })
        .collect();
    if texts.is_empty() {
        return Err(LlmError::MalformedResponse(
            "no text content in response".to_string(),
        ));
    }
    Ok(texts.concat())
}

pub(crate) fn extract_tool_input(body: &str, tool: &str) -> Result<serde_json::Value, LlmError> {
    parse_response(body)?
        .content
        .into_iter()
        .find_map(|block| match block {
            ContentBlock::ToolUse { name, input } if name == tool => Some(input),
            _ => None,
        })
        .ok_or_else(|| LlmError::MalformedResponse(format!("no '{}' tool call in response", tool)))
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

fn llm_error(err: LlmError) -> QuillError {
    QuillError::Infrastructure(InfrastructureError::Llm(err))
}

#[async_trait]
impl ChatModel for AnthropicChatModel {
    #[instrument(skip_all, fields(model = %request.settings.model, messages = request.messages.len()))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String, QuillError> {
        let body = build_request_body(request, None);
        let raw = self.send(&body).await.map_err(llm_error)?;
        extract_text(&raw).map_err(llm_error)
    }

    #[instrument(skip_all, fields(model = %request.settings.model, schema = %schema.name))]
    async fn complete_structured(
        &self,
        request: &CompletionRequest,
        schema: &OutputSchema,
    ) -> Result<serde_json::Value, QuillError> {
        let body = build_request_body(request, Some(schema));
        let raw = self.send(&body).await.map_err(llm_error)?;
        extract_tool_input(&raw, &schema.name).map_err(llm_error)
    }
}
