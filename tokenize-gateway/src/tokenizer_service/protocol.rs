//! JSON request/response bodies of the HTTP API

use serde::{Deserialize, Serialize};

use crate::tokenizer::TokenizerStrategy;

// ---------------------------------------------------------------------------
// Tokenize
// ---------------------------------------------------------------------------

/// `POST /tokenize` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeRequest {
    pub text: String,
    #[serde(default)]
    pub tokenizer: TokenizerStrategy,
}

impl TokenizeRequest {
    pub fn new(text: impl Into<String>, tokenizer: TokenizerStrategy) -> Self {
        Self {
            text: text.into(),
            tokenizer,
        }
    }
}

/// `POST /tokenize` response body.
///
/// `tokenIds` is left out of the JSON entirely for strategies without a
/// vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeResponse {
    pub tokenizer: TokenizerStrategy,
    pub tokens: Vec<String>,
    pub count: usize,
    #[serde(
        rename = "tokenIds",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub token_ids: Option<Vec<u32>>,
}

// ---------------------------------------------------------------------------
// Discovery and health
// ---------------------------------------------------------------------------

/// `GET /tokenizers` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerListResponse {
    pub tokenizers: Vec<String>,
}

/// `GET /health` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Tokenizer service is running".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error_type: &str, code: Option<&str>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
                error_type: error_type.to_string(),
                code: code.map(str::to_string),
            },
        }
    }
}
