//! Tokenizer Service module - HTTP surface over the tokenization strategies
//!
//! This module provides a standalone tokenizer service that:
//! 1. Loads every tokenizer once at startup
//! 2. Validates client requests against the request schema
//! 3. Dispatches to the requested strategy
//! 4. Returns tokens, their count and (when available) token ids
//!
//! # Architecture
//!
//! ```text
//! Client → handlers → TokenizeService → TokenizerRegistry → Tokenizer
//! ```
//!
//! # Endpoints
//!
//! | Method      | Path          | Body                                          |
//! |-------------|---------------|-----------------------------------------------|
//! | GET, HEAD   | `/health`     | `{"status": "ok", "message": ...}`            |
//! | GET         | `/tokenizers` | `{"tokenizers": [...]}`                       |
//! | POST        | `/tokenize`   | `{"tokenizer", "tokens", "count", "tokenIds"?}` |
//!
//! A `/tokenize` body that is not JSON, lacks a JSON `Content-Type` or fails
//! validation is answered with `422` and an error body.
//!
//! # Testing
//!
//! Unit tests live next to each module; the HTTP API is exercised in
//! `tests/http_api.rs` with in-process test tokenizers:
//! ```bash
//! cargo test -p tokenize-gateway
//! ```
//!
//! ## Manual Testing
//!
//! 1. Start the service:
//!    ```bash
//!    cargo run --bin tokenizer -- --http-port 8000
//!    ```
//! 2. Send a request:
//!    ```bash
//!    curl -X POST http://localhost:8000/tokenize \
//!      -H "Content-Type: application/json" \
//!      -d '{"text": "Hello, world!", "tokenizer": "cl100k_base"}'
//!    ```

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod service;

pub use config::TokenizerServiceConfig;
pub use protocol::{TokenizeRequest, TokenizeResponse};
pub use server::TokenizerServer;
pub use service::TokenizeService;
