// quillsql-core/src/ports/chat.rs

use async_trait::async_trait;

use crate::domain::prompt::ChatMessage;
use crate::domain::query::{OutputSchema, StructuredRecord};
use crate::domain::settings::ModelSettings;
use crate::error::QuillError;

/// Everything a chat-completion call needs. Model parameters travel with the
/// request so adapters hold no per-call state.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub settings: ModelSettings,
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    pub fn new(settings: ModelSettings, messages: Vec<ChatMessage>) -> Self {
        Self { settings, messages }
    }
}

/// An interface for sending chat prompts to a hosted model.
///
/// Implementors encapsulate transport, serialization and vendor-specific
/// details. One call is one outbound request; no retries.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Free-text completion.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, QuillError>;

    /// Completion constrained to `schema`; returns the raw structured value.
    async fn complete_structured(
        &self,
        request: &CompletionRequest,
        schema: &OutputSchema,
    ) -> Result<serde_json::Value, QuillError>;
}

/// Structured completion decoded into a record type. A reply that does not
/// fit the record is a `DomainError::StructuredOutput`.
pub async fn complete_as<T: StructuredRecord>(
    model: &dyn ChatModel,
    request: &CompletionRequest,
) -> Result<T, QuillError> {
    let value = model
        .complete_structured(request, &T::output_schema())
        .await?;
    Ok(T::from_value(value)?)
}
