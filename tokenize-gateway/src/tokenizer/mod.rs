//! Tokenization strategies
//!
//! Defines the [`Tokenizer`] trait shared by every strategy, the closed set of
//! [`TokenizerStrategy`] names, and the [`TokenizerRegistry`] used to dispatch
//! requests.
//!
//! # Strategies
//!
//! | Name                | Implementation         | Token ids |
//! |---------------------|------------------------|-----------|
//! | `simple`            | [`SimpleTokenizer`]    | no        |
//! | `bert-base-uncased` | [`WordPieceTokenizer`] | yes       |
//! | `cl100k_base`       | [`TiktokenTokenizer`]  | yes       |

pub mod error;
pub mod factory;
pub mod registry;
pub mod simple;
pub mod strategy;
pub mod tiktoken;
pub mod wordpiece;

pub use error::{Result, TokenizerError};
pub use registry::TokenizerRegistry;
pub use simple::SimpleTokenizer;
pub use strategy::TokenizerStrategy;
pub use tiktoken::TiktokenTokenizer;
pub use wordpiece::WordPieceTokenizer;

/// Output of a single strategy invocation.
///
/// When `token_ids` is present it has the same length as `tokens` and
/// `token_ids[i]` is the id of `tokens[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenizeResult {
    pub tokens: Vec<String>,
    pub token_ids: Option<Vec<u32>>,
}

impl TokenizeResult {
    /// Result of a strategy that produces no ids.
    pub fn tokens_only(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            token_ids: None,
        }
    }

    /// Result of a vocabulary-backed strategy.
    pub fn with_ids(tokens: Vec<String>, token_ids: Vec<u32>) -> Self {
        Self {
            tokens,
            token_ids: Some(token_ids),
        }
    }
}

/// A tokenization strategy.
///
/// Implementations are constructed once at startup and shared read-only
/// between request handlers, so `tokenize` must not mutate any state.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into tokens, attaching ids when the strategy has a vocabulary.
    ///
    /// # Errors
    /// Returns an error if the underlying algorithm fails on this input.
    fn tokenize(&self, text: &str) -> Result<TokenizeResult>;

    /// Strategy this implementation serves.
    fn strategy(&self) -> TokenizerStrategy;
}
