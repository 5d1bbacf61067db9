// quillsql-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts for the outside world: chat model, SQL connector.
pub mod ports;

// 2. Domain
// Prompts, normalization, query records, result rendering, settings.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// Anthropic HTTP client, SQLite / DuckDB connectors, config files, Jinja.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration: generate a query, execute it, synthesize an answer.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::QuillError;
