//! WordPiece subword tokenizer backed by the `tokenizers` crate

use std::path::Path;

use hf_hub::api::sync::Api;
use tracing::{debug, info};

use super::{Result, TokenizeResult, Tokenizer, TokenizerError, TokenizerStrategy};

const STRATEGY: TokenizerStrategy = TokenizerStrategy::BertBaseUncased;

/// Wrapper around a pre-trained, case-insensitive WordPiece model.
///
/// Segmentation and id lookup are delegated entirely to the wrapped model.
/// Special tokens (`[CLS]`, `[SEP]`) are not added, so the output holds only
/// pieces of the input text. Pieces outside the vocabulary map to the
/// model's unknown token.
pub struct WordPieceTokenizer {
    inner: tokenizers::Tokenizer,
}

impl WordPieceTokenizer {
    pub fn new(inner: tokenizers::Tokenizer) -> Self {
        Self { inner }
    }

    /// Load from a local `tokenizer.json` file.
    ///
    /// # Errors
    /// Returns an error if the file is missing or is not a valid tokenizer.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TokenizerError::load(
                STRATEGY,
                format!("No tokenizer.json found at {}", path.display()),
            ));
        }

        let inner = tokenizers::Tokenizer::from_file(path).map_err(|e| {
            TokenizerError::load(STRATEGY, format!("Failed to read {}: {}", path.display(), e))
        })?;

        let tokenizer = Self::new(inner);
        debug!(
            path = %path.display(),
            vocab_size = tokenizer.vocab_size(),
            "Loaded WordPiece model"
        );
        Ok(tokenizer)
    }

    /// Fetch `tokenizer.json` for `model_id` from the Hugging Face Hub (or its
    /// local cache) and load it.
    ///
    /// Blocks on network I/O, so call it before the server starts.
    ///
    /// # Errors
    /// Returns an error if the artifact cannot be fetched or parsed.
    pub fn from_pretrained(model_id: &str) -> Result<Self> {
        info!(model_id = %model_id, "Fetching WordPiece model from Hugging Face Hub");

        let api = Api::new().map_err(|e| TokenizerError::load(STRATEGY, e))?;
        let path = api
            .model(model_id.to_string())
            .get("tokenizer.json")
            .map_err(|e| {
                TokenizerError::load(STRATEGY, format!("Failed to fetch {}: {}", model_id, e))
            })?;

        Self::from_file(path)
    }

    /// Vocabulary size including added tokens.
    pub fn vocab_size(&self) -> usize {
        self.inner.get_vocab_size(true)
    }
}

impl Tokenizer for WordPieceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenizeResult> {
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(|e| TokenizerError::encode(STRATEGY, e))?;

        Ok(TokenizeResult::with_ids(
            encoding.get_tokens().to_vec(),
            encoding.get_ids().to_vec(),
        ))
    }

    fn strategy(&self) -> TokenizerStrategy {
        STRATEGY
    }
}
