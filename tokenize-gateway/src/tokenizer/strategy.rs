//! Strategy names accepted by the service

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::TokenizerError;

/// Closed set of tokenization strategies.
///
/// The serialized names double as the public API values and the registry
/// keys. Variant order is the order in which strategies are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TokenizerStrategy {
    #[default]
    #[serde(rename = "simple")]
    Simple,
    #[serde(rename = "bert-base-uncased")]
    BertBaseUncased,
    #[serde(rename = "cl100k_base")]
    Cl100kBase,
}

impl TokenizerStrategy {
    /// All strategies in declaration order.
    pub const ALL: [TokenizerStrategy; 3] = [
        TokenizerStrategy::Simple,
        TokenizerStrategy::BertBaseUncased,
        TokenizerStrategy::Cl100kBase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizerStrategy::Simple => "simple",
            TokenizerStrategy::BertBaseUncased => "bert-base-uncased",
            TokenizerStrategy::Cl100kBase => "cl100k_base",
        }
    }

    /// Human-readable label naming the backing library.
    pub fn description(&self) -> &'static str {
        match self {
            TokenizerStrategy::Simple => "Simple Regex Tokenizer",
            TokenizerStrategy::BertBaseUncased => "Hugging Face • bert-base-uncased",
            TokenizerStrategy::Cl100kBase => "OpenAI • cl100k_base",
        }
    }

    /// Whether the strategy reports token ids alongside tokens.
    pub fn produces_ids(&self) -> bool {
        !matches!(self, TokenizerStrategy::Simple)
    }
}

impl fmt::Display for TokenizerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenizerStrategy {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| TokenizerError::UnknownStrategy(s.to_string()))
    }
}
