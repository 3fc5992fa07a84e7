// ============================================================
// Layer 6 — Word Tokenizer
// ============================================================
// Splits argument text into word tokens with the HuggingFace
// `tokenizers` Whitespace pre-tokenizer.
//
// The Whitespace pre-tokenizer matches \w+|[^\w\s]+ so
// punctuation becomes its own token:
//
//   "Guns don't kill!"  →  ["Guns", "don", "'", "t", "kill", "!"]
//
// Only the pre-tokenizer is used: the pipeline indexes whole
// words against its own vocabulary, it never applies a
// subword model.
//
// Reference: tokenizers crate documentation (PreTokenizer)

use tokenizers::pre_tokenizers::whitespace::Whitespace;
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

use crate::domain::{error::PrepError, traits::WordTokenizer};

#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer {
    /// Lowercase text before splitting
    lowercase: bool,
}

impl WhitespaceTokenizer {
    pub fn new(lowercase: bool) -> Self {
        Self { lowercase }
    }
}

impl WordTokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, PrepError> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let mut pretokenized = PreTokenizedString::from(text);
        Whitespace::default()
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| PrepError::Tokenizer(e.to_string()))?;

        Ok(pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .map(|(token, _, _)| token.to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_words_and_punctuation() {
        let tok = WhitespaceTokenizer::new(false);
        assert_eq!(
            tok.tokenize("Guns don't kill!").unwrap(),
            vec!["Guns", "don", "'", "t", "kill", "!"]
        );
    }

    #[test]
    fn test_lowercase_option() {
        let tok = WhitespaceTokenizer::new(true);
        assert_eq!(tok.tokenize("Good Point").unwrap(), vec!["good", "point"]);
    }

    #[test]
    fn test_blank_text_has_no_tokens() {
        let tok = WhitespaceTokenizer::default();
        assert!(tok.tokenize("").unwrap().is_empty());
        assert!(tok.tokenize("   ").unwrap().is_empty());
    }
}
