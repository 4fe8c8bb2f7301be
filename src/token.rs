// Token value object shared by the tokenizer, the segmenter and the CLI output

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A word-level token with the spacing that preceded it and its source offset.
///
/// `spacing` is whatever was consumed between the previous token and this one
/// (usually a single space, but possibly several whitespace characters or a
/// swallowed hyphen). `offset` is the byte position of `text` in the source.
///
/// Two tokens are equal if they share the same `text`, no matter their
/// spacing and offsets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Token {
    pub spacing: String,
    pub text: String,
    pub offset: usize,
}

impl Token {
    pub fn new(spacing: impl Into<String>, text: impl Into<String>, offset: usize) -> Self {
        Self {
            spacing: spacing.into(),
            text: text.into(),
            offset,
        }
    }

    /// The token's surface string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The spacing that prefixed the token in the source.
    pub fn spacing(&self) -> &str {
        &self.spacing
    }

    /// Byte offset of `text` in the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte offset just past `text`.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// True for the trailing-whitespace sentinel the tokenizer emits at end of input.
    pub fn is_sentinel(&self) -> bool {
        self.text.is_empty()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.spacing, self.text)
    }
}

/// An ordered, non-empty run of tokens forming one sentence.
pub type Sentence = Vec<Token>;

/// Reconstruct the text the tokens were produced from.
pub fn to_text<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    let mut text = String::new();
    for token in tokens {
        text.push_str(&token.spacing);
        text.push_str(&token.text);
    }
    text
}
