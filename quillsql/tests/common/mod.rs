// Shared fixtures for the CLI integration tests.
#![allow(dead_code)]

use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::Command;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Stand-in for the provider: answers each incoming request with the next
/// canned JSON body and hands the received request bodies back.
pub struct MockProvider {
    pub base_url: String,
    requests: Receiver<serde_json::Value>,
}

impl MockProvider {
    pub fn start(replies: Vec<serde_json::Value>) -> Result<Self> {
        Self::start_with_status(replies.into_iter().map(|r| (200, r)).collect())
    }

    /// Like `start`, with an explicit HTTP status per reply.
    pub fn start_with_status(replies: Vec<(u16, serde_json::Value)>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for (status, reply) in replies {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let Ok(body) = read_request_body(&mut stream) else {
                    return;
                };
                let _ = tx.send(body);

                let payload = reply.to_string();
                let response = format!(
                    "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    payload.len(),
                    payload
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Ok(Self {
            base_url,
            requests: rx,
        })
    }

    /// Request bodies received so far, in arrival order.
    pub fn received(&self) -> Vec<serde_json::Value> {
        self.requests.try_iter().collect()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        529 => "Overloaded",
        _ => "Status",
    }
}

fn read_request_body(stream: &mut std::net::TcpStream) -> Result<serde_json::Value> {
    let mut reader = BufReader::new(stream);
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse()?;
            }
        }
    }
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body)?;
    serde_json::from_slice(&body).context("request body is not JSON")
}

pub fn text_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn"
    })
}

/// Anthropic error envelope.
pub fn error_reply(kind: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "error",
        "error": { "type": kind, "message": message }
    })
}

pub fn tool_reply(name: &str, input: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "content": [{ "type": "tool_use", "id": "toolu_test", "name": name, "input": input }],
        "stop_reason": "tool_use"
    })
}

/// Binary command isolated from the caller's environment and config files.
pub fn command(bin: &Path, dir: &Path) -> Command {
    let mut cmd = Command::new(bin);
    cmd.current_dir(dir)
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("ANTHROPIC_BASE_URL")
        .env_remove("QUILLSQL_MODEL")
        .env_remove("QUILLSQL_API_BASE")
        .env_remove("QUILLSQL_DATABASE_URL")
        .env_remove("QUILLSQL_TOP_K")
        .env_remove("RUST_LOG")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy");
    cmd
}

