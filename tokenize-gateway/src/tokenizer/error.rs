//! Error types for tokenization

use thiserror::Error;

use super::TokenizerStrategy;

/// Result type alias using [`TokenizerError`]
pub type Result<T> = std::result::Result<T, TokenizerError>;

/// Errors raised while loading or running a tokenization strategy
#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Failed to load {strategy} tokenizer: {message}")]
    Load {
        strategy: TokenizerStrategy,
        message: String,
    },

    #[error("Unknown tokenizer strategy: {0}")]
    UnknownStrategy(String),

    #[error("Tokenizer {strategy} is unavailable: {reason}")]
    Unavailable {
        strategy: TokenizerStrategy,
        reason: String,
    },

    #[error("Encoding with {strategy} failed: {message}")]
    Encode {
        strategy: TokenizerStrategy,
        message: String,
    },

    #[error("Tokenizer {strategy} returned {ids} token ids for {tokens} tokens")]
    LengthMismatch {
        strategy: TokenizerStrategy,
        tokens: usize,
        ids: usize,
    },
}

impl TokenizerError {
    pub fn load(strategy: TokenizerStrategy, message: impl ToString) -> Self {
        Self::Load {
            strategy,
            message: message.to_string(),
        }
    }

    pub fn encode(strategy: TokenizerStrategy, message: impl ToString) -> Self {
        Self::Encode {
            strategy,
            message: message.to_string(),
        }
    }

    /// Short machine-readable code for HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            TokenizerError::Load { .. } => "tokenizer_load_failed",
            TokenizerError::UnknownStrategy(_) => "unknown_tokenizer",
            TokenizerError::Unavailable { .. } => "tokenizer_unavailable",
            TokenizerError::Encode { .. } | TokenizerError::LengthMismatch { .. } => {
                "tokenization_error"
            }
        }
    }
}
