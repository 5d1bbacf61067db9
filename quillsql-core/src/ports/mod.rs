// quillsql-core/src/ports/mod.rs

pub mod chat;
pub mod connector;

pub use chat::{ChatModel, CompletionRequest};
pub use connector::Connector;
