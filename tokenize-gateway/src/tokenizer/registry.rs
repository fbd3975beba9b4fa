//! Registry mapping strategy names to loaded tokenizers

use std::{collections::HashMap, fmt, sync::Arc};

use tracing::{debug, warn};

use super::{Result, Tokenizer, TokenizerError, TokenizerStrategy};

enum Slot {
    Ready(Arc<dyn Tokenizer>),
    Unavailable(String),
}

/// Maps each [`TokenizerStrategy`] to its implementation.
///
/// Populated once at startup and then shared read-only behind an `Arc`;
/// nothing mutates it while requests are being served.
#[derive(Default)]
pub struct TokenizerRegistry {
    slots: HashMap<TokenizerStrategy, Slot>,
}

impl TokenizerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `tokenizer` under the strategy it reports, replacing any
    /// previous entry.
    pub fn register(&mut self, tokenizer: Arc<dyn Tokenizer>) -> &mut Self {
        let strategy = tokenizer.strategy();
        debug!(tokenizer = %strategy, "Registering tokenizer");
        self.slots.insert(strategy, Slot::Ready(tokenizer));
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.register(tokenizer);
        self
    }

    /// Record that `strategy` could not be loaded. Requests selecting it fail
    /// with [`TokenizerError::Unavailable`] instead of falling back to another
    /// strategy.
    pub fn mark_unavailable(
        &mut self,
        strategy: TokenizerStrategy,
        reason: impl Into<String>,
    ) -> &mut Self {
        let reason = reason.into();
        warn!(tokenizer = %strategy, reason = %reason, "Tokenizer marked unavailable");
        self.slots.insert(strategy, Slot::Unavailable(reason));
        self
    }

    /// Look up the tokenizer serving `strategy`.
    ///
    /// # Errors
    /// `UnknownStrategy` if nothing is registered for it, `Unavailable` if it
    /// failed to load.
    pub fn resolve(&self, strategy: TokenizerStrategy) -> Result<Arc<dyn Tokenizer>> {
        match self.slots.get(&strategy) {
            Some(Slot::Ready(tokenizer)) => Ok(Arc::clone(tokenizer)),
            Some(Slot::Unavailable(reason)) => Err(TokenizerError::Unavailable {
                strategy,
                reason: reason.clone(),
            }),
            None => Err(TokenizerError::UnknownStrategy(strategy.to_string())),
        }
    }

    /// Names of the registered strategies in declaration order.
    pub fn list_strategies(&self) -> Vec<&'static str> {
        TokenizerStrategy::ALL
            .into_iter()
            .filter(|strategy| self.slots.contains_key(strategy))
            .map(|strategy| strategy.as_str())
            .collect()
    }

    pub fn is_available(&self, strategy: TokenizerStrategy) -> bool {
        matches!(self.slots.get(&strategy), Some(Slot::Ready(_)))
    }

    /// Number of registered strategies, loaded or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for TokenizerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for strategy in TokenizerStrategy::ALL {
            match self.slots.get(&strategy) {
                Some(Slot::Ready(_)) => map.entry(&strategy.as_str(), &"ready"),
                Some(Slot::Unavailable(reason)) => map.entry(&strategy.as_str(), reason),
                None => continue,
            };
        }
        map.finish()
    }
}
