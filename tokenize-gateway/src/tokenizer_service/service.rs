//! Request-level tokenization: strategy dispatch and response shaping

use std::sync::Arc;

use tracing::debug;

use super::protocol::{TokenizeRequest, TokenizeResponse};
use crate::tokenizer::{Result, TokenizerError, TokenizerRegistry};

/// Turns a [`TokenizeRequest`] into a [`TokenizeResponse`].
///
/// This is the only place the strategies' differing result shapes are
/// normalized; callers never see a [`TokenizeResult`](crate::tokenizer::TokenizeResult).
#[derive(Clone)]
pub struct TokenizeService {
    registry: Arc<TokenizerRegistry>,
}

impl TokenizeService {
    pub fn new(registry: Arc<TokenizerRegistry>) -> Self {
        Self { registry }
    }

    /// Tokenize `request.text` with the requested strategy.
    ///
    /// Either returns a complete response or an error; never a partial one.
    ///
    /// # Errors
    /// Propagates registry lookup failures and strategy errors unchanged.
    pub fn handle(&self, request: &TokenizeRequest) -> Result<TokenizeResponse> {
        let strategy = request.tokenizer;
        let tokenizer = self.registry.resolve(strategy)?;
        let result = tokenizer.tokenize(&request.text)?;

        if let Some(ids) = &result.token_ids {
            if ids.len() != result.tokens.len() {
                return Err(TokenizerError::LengthMismatch {
                    strategy,
                    tokens: result.tokens.len(),
                    ids: ids.len(),
                });
            }
        }

        debug!(
            tokenizer = %strategy,
            text_len = request.text.len(),
            count = result.tokens.len(),
            "Tokenized text"
        );

        Ok(TokenizeResponse {
            tokenizer: strategy,
            count: result.tokens.len(),
            tokens: result.tokens,
            token_ids: result.token_ids,
        })
    }

    /// Strategy names available for discovery, in declaration order.
    pub fn list_strategies(&self) -> Vec<&'static str> {
        self.registry.list_strategies()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{SimpleTokenizer, TokenizeResult, Tokenizer, TokenizerStrategy};

    /// Test double: one token per whitespace-separated word, id = word length.
    struct WordLengthTokenizer(TokenizerStrategy);

    impl Tokenizer for WordLengthTokenizer {
        fn tokenize(&self, text: &str) -> Result<TokenizeResult> {
            let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
            let ids = tokens.iter().map(|t| t.len() as u32).collect();
            Ok(TokenizeResult::with_ids(tokens, ids))
        }

        fn strategy(&self) -> TokenizerStrategy {
            self.0
        }
    }

    struct BrokenTokenizer;

    impl Tokenizer for BrokenTokenizer {
        fn tokenize(&self, text: &str) -> Result<TokenizeResult> {
            Ok(TokenizeResult::with_ids(vec![text.to_string()], vec![1, 2]))
        }

        fn strategy(&self) -> TokenizerStrategy {
            TokenizerStrategy::Cl100kBase
        }
    }

    struct FailingTokenizer;

    impl Tokenizer for FailingTokenizer {
        fn tokenize(&self, _text: &str) -> Result<TokenizeResult> {
            Err(TokenizerError::encode(TokenizerStrategy::Cl100kBase, "boom"))
        }

        fn strategy(&self) -> TokenizerStrategy {
            TokenizerStrategy::Cl100kBase
        }
    }

    fn service() -> TokenizeService {
        let registry = TokenizerRegistry::new()
            .with_tokenizer(Arc::new(SimpleTokenizer::new().unwrap()))
            .with_tokenizer(Arc::new(WordLengthTokenizer(
                TokenizerStrategy::BertBaseUncased,
            )))
            .with_tokenizer(Arc::new(WordLengthTokenizer(TokenizerStrategy::Cl100kBase)));
        TokenizeService::new(Arc::new(registry))
    }

    fn handle(text: &str, tokenizer: TokenizerStrategy) -> TokenizeResponse {
        service()
            .handle(&TokenizeRequest::new(text, tokenizer))
            .unwrap()
    }

    #[test]
    fn test_list_strategies() {
        assert_eq!(
            service().list_strategies(),
            vec!["simple", "bert-base-uncased", "cl100k_base"]
        );
    }

    #[test]
    fn test_empty_simple_request() {
        assert_eq!(
            handle("", TokenizerStrategy::Simple),
            TokenizeResponse {
                tokenizer: TokenizerStrategy::Simple,
                tokens: vec![],
                count: 0,
                token_ids: None,
            }
        );
    }

    #[test]
    fn test_simple_contraction() {
        let response = handle("don't stop", TokenizerStrategy::Simple);
        assert_eq!(response.tokens, vec!["do", "n't", "stop"]);
        assert_eq!(response.count, 3);
    }

    #[test]
    fn test_simple_punctuation() {
        let response = handle("Hello, world!", TokenizerStrategy::Simple);
        assert_eq!(response.tokens, vec!["Hello", ",", "world", "!"]);
        assert_eq!(response.count, 4);
        assert!(response.token_ids.is_none());
    }

    #[test]
    fn test_id_strategies_include_aligned_ids() {
        for strategy in [TokenizerStrategy::BertBaseUncased, TokenizerStrategy::Cl100kBase] {
            let response = handle("one three five", strategy);
            assert_eq!(response.tokenizer, strategy);
            assert_eq!(response.count, 3);
            assert_eq!(response.token_ids, Some(vec![3, 5, 4]));
        }
    }

    #[test]
    fn test_real_wordpiece_through_service() {
        let registry = TokenizerRegistry::new().with_tokenizer(Arc::new(
            crate::tokenizer::wordpiece::tests::tiny_wordpiece(),
        ));
        let service = TokenizeService::new(Arc::new(registry));

        let response = service
            .handle(&TokenizeRequest::new("Hello tokenizer", TokenizerStrategy::BertBaseUncased))
            .unwrap();
        assert_eq!(response.tokens, vec!["hello", "token", "##izer"]);
        assert_eq!(response.token_ids, Some(vec![1, 3, 4]));
        assert_eq!(response.count, 3);
    }

    #[test]
    fn test_is_deterministic() {
        let service = service();
        let request = TokenizeRequest::new("Same input, same output!", TokenizerStrategy::Simple);
        let first = serde_json::to_vec(&service.handle(&request).unwrap()).unwrap();
        let second = serde_json::to_vec(&service.handle(&request).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unregistered_strategy_is_an_error_not_a_fallback() {
        let registry =
            TokenizerRegistry::new().with_tokenizer(Arc::new(SimpleTokenizer::new().unwrap()));
        let service = TokenizeService::new(Arc::new(registry));

        let err = service
            .handle(&TokenizeRequest::new("text", TokenizerStrategy::Cl100kBase))
            .unwrap_err();
        assert!(matches!(err, TokenizerError::UnknownStrategy(_)));
    }

    #[test]
    fn test_strategy_error_propagates() {
        let registry = TokenizerRegistry::new().with_tokenizer(Arc::new(FailingTokenizer));
        let service = TokenizeService::new(Arc::new(registry));

        let err = service
            .handle(&TokenizeRequest::new("text", TokenizerStrategy::Cl100kBase))
            .unwrap_err();
        assert!(matches!(err, TokenizerError::Encode { .. }));
    }

    #[test]
    fn test_misaligned_ids_are_rejected() {
        let registry = TokenizerRegistry::new().with_tokenizer(Arc::new(BrokenTokenizer));
        let service = TokenizeService::new(Arc::new(registry));

        let err = service
            .handle(&TokenizeRequest::new("text", TokenizerStrategy::Cl100kBase))
            .unwrap_err();
        assert!(matches!(
            err,
            TokenizerError::LengthMismatch { tokens: 1, ids: 2, .. }
        ));
    }
}
