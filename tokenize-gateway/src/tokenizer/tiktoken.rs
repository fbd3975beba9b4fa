//! Byte-pair-encoding tokenizer backed by `tiktoken-rs`

use tiktoken_rs::CoreBPE;

use super::{Result, TokenizeResult, Tokenizer, TokenizerError, TokenizerStrategy};

const STRATEGY: TokenizerStrategy = TokenizerStrategy::Cl100kBase;

/// Special tokens of `cl100k_base`. Ordinary text containing any of them is
/// rejected rather than silently encoded.
const CL100K_SPECIAL_TOKENS: [&str; 5] = [
    "<|endoftext|>",
    "<|fim_prefix|>",
    "<|fim_middle|>",
    "<|fim_suffix|>",
    "<|endofprompt|>",
];

/// Wrapper around the bundled `cl100k_base` encoding.
///
/// Token strings are produced by decoding **each id on its own**, never by
/// decoding the full sequence and splitting it afterwards. A character whose
/// UTF-8 bytes span several ids therefore shows up as fragments holding
/// U+FFFD replacement characters, exactly as a single-id decode renders
/// them. Concatenating the fragments only reproduces the input when no
/// character crosses a token boundary (always the case for ASCII).
pub struct TiktokenTokenizer {
    bpe: CoreBPE,
}

impl TiktokenTokenizer {
    /// Build the `cl100k_base` encoding from the tables bundled with
    /// `tiktoken-rs`.
    ///
    /// # Errors
    /// Returns an error if the bundled tables cannot be parsed.
    pub fn cl100k_base() -> Result<Self> {
        let bpe = tiktoken_rs::cl100k_base().map_err(|e| TokenizerError::load(STRATEGY, e))?;
        Ok(Self { bpe })
    }

    fn reject_special_tokens(text: &str) -> Result<()> {
        match CL100K_SPECIAL_TOKENS.iter().find(|special| text.contains(**special)) {
            Some(special) => Err(TokenizerError::encode(
                STRATEGY,
                format!("text contains the special token {special}, which is not allowed"),
            )),
            None => Ok(()),
        }
    }

    /// Decode a single id into its text fragment, replacing invalid UTF-8.
    fn decode_rank(&self, rank: usize) -> String {
        self.bpe
            ._decode_native_and_split(vec![rank])
            .next()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    }
}

impl Tokenizer for TiktokenTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenizeResult> {
        Self::reject_special_tokens(text)?;

        let ranks = self.bpe.encode_ordinary(text);

        let mut tokens = Vec::with_capacity(ranks.len());
        let mut token_ids = Vec::with_capacity(ranks.len());
        for rank in ranks {
            let id = u32::try_from(rank).map_err(|e| TokenizerError::encode(STRATEGY, e))?;
            tokens.push(self.decode_rank(rank));
            token_ids.push(id);
        }

        Ok(TokenizeResult::with_ids(tokens, token_ids))
    }

    fn strategy(&self) -> TokenizerStrategy {
        STRATEGY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cl100k() -> TiktokenTokenizer {
        TiktokenTokenizer::cl100k_base().unwrap()
    }

    #[test]
    fn test_hello() {
        let result = cl100k().tokenize("hello").unwrap();
        assert_eq!(result.tokens, vec!["hello"]);
        assert_eq!(result.token_ids, Some(vec![15339]));
    }

    #[test]
    fn test_known_ids() {
        let result = cl100k().tokenize("Hello, world!").unwrap();
        assert_eq!(result.tokens, vec!["Hello", ",", " world", "!"]);
        assert_eq!(result.token_ids, Some(vec![9906, 11, 1917, 0]));
    }

    #[test]
    fn test_empty_input() {
        let result = cl100k().tokenize("").unwrap();
        assert!(result.tokens.is_empty());
        assert_eq!(result.token_ids, Some(vec![]));
    }

    #[test]
    fn test_ascii_fragments_concatenate_to_input() {
        let text = "The quick brown fox jumps over the lazy dog.\n  Indented, with 1234 digits!";
        let result = cl100k().tokenize(text).unwrap();
        assert_eq!(result.token_ids.as_ref().unwrap().len(), result.tokens.len());
        assert_eq!(result.tokens.concat(), text);
    }

    #[test]
    fn test_each_token_is_a_single_id_decode() {
        let tokenizer = cl100k();
        let text = "naïve 🦀 日本語のテキスト";
        let result = tokenizer.tokenize(text).unwrap();
        let ids = result.token_ids.unwrap();
        assert_eq!(ids.len(), result.tokens.len());

        let mut bytes = Vec::new();
        for (token, id) in result.tokens.iter().zip(&ids) {
            let piece: Vec<u8> = tokenizer
                .bpe
                ._decode_native_and_split(vec![*id as usize])
                .next()
                .unwrap();
            assert_eq!(*token, String::from_utf8_lossy(&piece));
            bytes.extend(piece);
        }
        // The joined bytes still reproduce the input, even where the
        // per-token strings do not.
        assert_eq!(String::from_utf8(bytes).unwrap(), text);
    }

    #[test]
    fn test_split_multibyte_character_yields_replacement_fragments() {
        let tokenizer = cl100k();
        let text = "🦀";
        let result = tokenizer.tokenize(text).unwrap();
        if result.tokens.len() > 1 {
            assert!(result.tokens.iter().any(|t| t.contains('\u{FFFD}')));
            assert_ne!(result.tokens.concat(), text);
        } else {
            assert_eq!(result.tokens, vec![text]);
        }
    }

    #[test]
    fn test_rejects_special_tokens() {
        let err = cl100k()
            .tokenize("before <|endoftext|> after")
            .err()
            .unwrap();
        assert!(matches!(err, TokenizerError::Encode { strategy, .. } if strategy == STRATEGY));
    }
}
