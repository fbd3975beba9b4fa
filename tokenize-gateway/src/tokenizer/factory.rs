//! Startup construction of tokenizers and the registry

use std::{path::PathBuf, sync::Arc, time::Instant};

use tracing::{error, info};

use super::{
    Result, SimpleTokenizer, TiktokenTokenizer, Tokenizer, TokenizerRegistry, TokenizerStrategy,
    WordPieceTokenizer,
};

/// Where the vocabulary-backed strategies load their artifacts from.
#[derive(Debug, Clone)]
pub struct TokenizerSources {
    /// Hugging Face Hub model id for the WordPiece strategy
    pub wordpiece_model: String,
    /// Local `tokenizer.json` used instead of the Hub when set
    pub wordpiece_path: Option<PathBuf>,
}

impl Default for TokenizerSources {
    fn default() -> Self {
        Self {
            wordpiece_model: TokenizerStrategy::BertBaseUncased.as_str().to_string(),
            wordpiece_path: None,
        }
    }
}

/// Build the tokenizer for a single strategy.
///
/// # Errors
/// Returns [`TokenizerError::Load`](super::TokenizerError::Load) if the
/// strategy's artifact cannot be fetched or parsed.
pub fn create_tokenizer(
    strategy: TokenizerStrategy,
    sources: &TokenizerSources,
) -> Result<Arc<dyn Tokenizer>> {
    let tokenizer: Arc<dyn Tokenizer> = match strategy {
        TokenizerStrategy::Simple => Arc::new(SimpleTokenizer::new()?),
        TokenizerStrategy::BertBaseUncased => match &sources.wordpiece_path {
            Some(path) => Arc::new(WordPieceTokenizer::from_file(path)?),
            None => Arc::new(WordPieceTokenizer::from_pretrained(&sources.wordpiece_model)?),
        },
        TokenizerStrategy::Cl100kBase => Arc::new(TiktokenTokenizer::cl100k_base()?),
    };
    Ok(tokenizer)
}

/// Load every strategy, one after another, into a new registry.
///
/// With `strict` set the first load failure is returned and the service
/// must not start. Otherwise the failed strategy is registered as
/// unavailable and the remaining ones are still loaded.
///
/// # Errors
/// Returns the first load failure when `strict` is set.
pub fn create_registry(sources: &TokenizerSources, strict: bool) -> Result<TokenizerRegistry> {
    let mut registry = TokenizerRegistry::new();

    for strategy in TokenizerStrategy::ALL {
        let start = Instant::now();
        match create_tokenizer(strategy, sources) {
            Ok(tokenizer) => {
                info!(
                    tokenizer = %strategy,
                    description = %strategy.description(),
                    produces_ids = strategy.produces_ids(),
                    elapsed_ms = %start.elapsed().as_millis(),
                    "Loaded tokenizer"
                );
                registry.register(tokenizer);
            }
            Err(e) if strict => {
                error!(tokenizer = %strategy, error = %e, "Failed to load tokenizer");
                return Err(e);
            }
            Err(e) => {
                registry.mark_unavailable(strategy, e.to_string());
            }
        }
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::TokenizerError;

    fn offline_sources() -> TokenizerSources {
        TokenizerSources {
            wordpiece_path: Some(PathBuf::from("/nonexistent/tokenizer.json")),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_sources() {
        let sources = TokenizerSources::default();
        assert_eq!(sources.wordpiece_model, "bert-base-uncased");
        assert!(sources.wordpiece_path.is_none());
    }

    #[test]
    fn test_create_bundled_tokenizers() {
        let sources = offline_sources();
        for strategy in [TokenizerStrategy::Simple, TokenizerStrategy::Cl100kBase] {
            let tokenizer = create_tokenizer(strategy, &sources).unwrap();
            assert_eq!(tokenizer.strategy(), strategy);
        }
    }

    #[test]
    fn test_strict_registry_fails_on_missing_artifact() {
        let err = create_registry(&offline_sources(), true).err().unwrap();
        assert!(matches!(
            err,
            TokenizerError::Load {
                strategy: TokenizerStrategy::BertBaseUncased,
                ..
            }
        ));
    }

    #[test]
    fn test_lenient_registry_marks_failed_strategy_unavailable() {
        let registry = create_registry(&offline_sources(), false).unwrap();

        assert_eq!(
            registry.list_strategies(),
            vec!["simple", "bert-base-uncased", "cl100k_base"]
        );
        assert!(registry.is_available(TokenizerStrategy::Simple));
        assert!(!registry.is_available(TokenizerStrategy::BertBaseUncased));
        assert!(registry.is_available(TokenizerStrategy::Cl100kBase));
    }
}
