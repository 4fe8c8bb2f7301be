//! Sentence segmentation over word-level token streams.
//!
//! The segmenter is a pull-based state machine: it walks the tokens once,
//! keeps a small lookahead buffer, and at every candidate terminal marker
//! applies an ordered list of rules (abbreviations, enumerations, initials,
//! numbers, months, brackets, sentence starters) to decide whether the
//! sentence ends there.
//!
//! ```
//! use sentseg::segmenter::{split, SegmenterConfig};
//! use sentseg::tokenizer::Tokenizer;
//!
//! let tokenizer = Tokenizer::new().unwrap();
//! let tokens = tokenizer.tokenize("This is Mr. Motto here. And here is Mrs. Smithers.");
//! let sentences = split(tokens, &SegmenterConfig::default());
//! assert_eq!(sentences.len(), 2);
//! ```

mod brackets;
mod buffer;
pub mod lexicon;
mod machine;
mod terminal;

pub use brackets::MAX_BRACKET_LOOKAHEAD;
pub use lexicon::{Lexicon, LexiconOverrides};
pub use machine::Sentences;

use crate::token::{Sentence, Token};
use serde::{Deserialize, Serialize};

/// Default number of characters below which a bracketed aside is always kept inline.
pub const DEFAULT_MAX_ASIDE_LENGTH: usize = 70;

/// Tunables of one segmentation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Bracketed asides with fewer characters than this are skipped inline,
    /// even when they contain sentence-like text.
    pub max_aside_length: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_aside_length: DEFAULT_MAX_ASIDE_LENGTH,
        }
    }
}

impl SegmenterConfig {
    pub fn with_max_aside_length(max_aside_length: usize) -> Self {
        Self { max_aside_length }
    }
}

/// Lazily segment a token stream into sentences using the built-in lexicon.
pub fn segment<T>(tokens: T, config: &SegmenterConfig) -> Sentences<'static, T::IntoIter>
where
    T: IntoIterator<Item = Token>,
{
    segment_with_lexicon(tokens, config, Lexicon::builtin())
}

/// Lazily segment a token stream into sentences with a custom lexicon.
pub fn segment_with_lexicon<'l, T>(tokens: T, config: &SegmenterConfig, lexicon: &'l Lexicon) -> Sentences<'l, T::IntoIter>
where
    T: IntoIterator<Item = Token>,
{
    Sentences::new(tokens.into_iter(), lexicon, config.max_aside_length)
}

/// Segment a token stream and collect all sentences.
pub fn split<T>(tokens: T, config: &SegmenterConfig) -> Vec<Sentence>
where
    T: IntoIterator<Item = Token>,
{
    segment(tokens, config).collect()
}

/// Segment a token stream with a custom lexicon and collect all sentences.
pub fn split_with_lexicon<T>(tokens: T, config: &SegmenterConfig, lexicon: &Lexicon) -> Vec<Sentence>
where
    T: IntoIterator<Item = Token>,
{
    segment_with_lexicon(tokens, config, lexicon).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(SegmenterConfig::default().max_aside_length, 70);
        assert_eq!(SegmenterConfig::with_max_aside_length(5).max_aside_length, 5);
    }

    #[test]
    fn test_config_from_toml() {
        let config: SegmenterConfig = toml::from_str("max_aside_length = 12").unwrap();
        assert_eq!(config.max_aside_length, 12);

        let config: SegmenterConfig = toml::from_str("").unwrap();
        assert_eq!(config, SegmenterConfig::default());
    }

    #[test]
    fn test_custom_lexicon() {
        let tokens = || {
            ["See", "Foo", ".", "Bar", "here", "."]
                .iter()
                .enumerate()
                .map(|(i, w)| Token::new(if i == 0 { "" } else { " " }, *w, i))
                .collect::<Vec<_>>()
        };
        let config = SegmenterConfig::default();

        assert_eq!(split(tokens(), &config).len(), 2);

        let lexicon = Lexicon::with_overrides(&LexiconOverrides {
            abbreviations: vec!["Foo".to_string()],
            ..Default::default()
        });
        assert_eq!(split_with_lexicon(tokens(), &config, &lexicon).len(), 1);
    }
}
