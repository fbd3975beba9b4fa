//! Tokenize Gateway: HTTP service for interchangeable tokenization strategies
//!
//! Text is split into tokens by one of a closed set of strategies (a regex
//! splitter, a WordPiece vocabulary, a byte-pair encoding) and returned in a
//! uniform shape. See [`tokenizer`] for the strategies and
//! [`tokenizer_service`] for the HTTP server.
//!
//! # Example
//!
//! ```ignore
//! use tokenize_gateway::tokenizer_service::{TokenizerServer, TokenizerServiceConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = TokenizerServiceConfig::default().with_http_port(8000);
//!     let server = TokenizerServer::new(config).await.unwrap();
//!     server.serve().await.unwrap();
//! }
//! ```

pub mod tokenizer;
pub mod tokenizer_service;

pub use tokenizer::{
    TokenizeResult, Tokenizer, TokenizerError, TokenizerRegistry, TokenizerStrategy,
};
pub use tokenizer_service::{
    TokenizeRequest, TokenizeResponse, TokenizeService, TokenizerServer, TokenizerServiceConfig,
};
