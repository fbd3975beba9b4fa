//! Regex word/punctuation splitter with no vocabulary

use regex::Regex;

use super::{Result, TokenizeResult, Tokenizer, TokenizerError, TokenizerStrategy};

/// Alternatives tried at each position, first match wins. Whitespace matches
/// no alternative and is skipped.
const TOKEN_PATTERN: &str = r"\w+|'s|n't|[^\w\s]";

const NEGATION: &str = "n't";

/// Splits text into word runs, contraction suffixes and single punctuation
/// characters.
///
/// A word run directly followed by `'t` whose last character is `n` gives
/// that `n` to the suffix, so `"don't"` becomes `do` and `n't`. Matching
/// runs in linear time, so arbitrarily long words are accepted.
pub struct SimpleTokenizer {
    pattern: Regex,
}

impl SimpleTokenizer {
    /// # Errors
    /// Returns an error if the token pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(TOKEN_PATTERN)
            .map_err(|e| TokenizerError::load(TokenizerStrategy::Simple, e))?;
        Ok(Self { pattern })
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenizeResult> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while let Some(m) = self.pattern.find_at(text, pos) {
            let token = m.as_str();
            pos = m.end();

            // Only a word run can end in `n`.
            if let Some(stem) = token.strip_suffix('n') {
                if text[pos..].starts_with("'t") {
                    if !stem.is_empty() {
                        tokens.push(stem.to_string());
                    }
                    tokens.push(NEGATION.to_string());
                    pos += "'t".len();
                    continue;
                }
            }

            tokens.push(token.to_string());
        }

        Ok(TokenizeResult::tokens_only(tokens))
    }

    fn strategy(&self) -> TokenizerStrategy {
        TokenizerStrategy::Simple
    }
}
