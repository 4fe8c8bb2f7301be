// Document-level entry points: paragraphs, then sentences, then tokens

use anyhow::Result;
use regex_automata::meta::Regex;

use crate::segmenter::{segment_with_lexicon, Lexicon, SegmenterConfig, Sentences};
use crate::tokenizer::{Tokenizer, Tokens};

/// Blank lines (possibly holding other whitespace) between paragraphs.
const PARAGRAPH_SEPARATOR: &str = r"\r?\n(?:\s*\r?\n)+";

/// Lazy sentences of one paragraph.
pub type Paragraph<'a> = Sentences<'a, Tokens<'a>>;

/// Splits documents into paragraphs and segments each paragraph into sentences.
pub struct Pipeline {
    paragraph_separator: Regex,
    lossless: Tokenizer,
    normalizing: Tokenizer,
    config: SegmenterConfig,
    lexicon: Lexicon,
}

impl Pipeline {
    pub fn new(config: SegmenterConfig) -> Result<Self> {
        Self::with_lexicon(config, Lexicon::builtin().clone())
    }

    pub fn with_lexicon(config: SegmenterConfig, lexicon: Lexicon) -> Result<Self> {
        Ok(Self {
            paragraph_separator: Regex::new(PARAGRAPH_SEPARATOR)?,
            lossless: Tokenizer::with_options(false, false)?,
            normalizing: Tokenizer::new()?,
            config,
            lexicon,
        })
    }

    /// Segment `document` while keeping it reproducible from the tokens.
    ///
    /// Hyphenated words at line breaks stay two tokens, `n't` is kept as is,
    /// and token offsets point into `document`.
    pub fn analyze<'a>(&'a self, document: &'a str) -> impl Iterator<Item = Paragraph<'a>> + 'a {
        self.preprocess_with_offsets(document)
            .into_iter()
            .map(move |(offset, paragraph)| {
                segment_with_lexicon(self.lossless.tokenize_at(paragraph, offset), &self.config, &self.lexicon)
            })
    }

    /// Segment `document` after joining hyphenated line breaks and replacing `n't` with `not`.
    ///
    /// Token offsets are relative to the start of each (joined) paragraph.
    pub fn process<'a>(&'a self, document: &str) -> impl Iterator<Item = Paragraph<'a>> + 'a {
        self.preprocess(document).into_iter().map(move |paragraph| {
            segment_with_lexicon(self.normalizing.tokenize_at(paragraph, 0), &self.config, &self.lexicon)
        })
    }

    /// Join hyphenated line breaks and split `text` into paragraphs.
    pub fn preprocess(&self, text: &str) -> Vec<String> {
        let joined = self.normalizing.join_hyphenated_words(text);
        self.preprocess_with_offsets(&joined)
            .into_iter()
            .map(|(_, paragraph)| paragraph.to_string())
            .collect()
    }

    /// Split `text` into `(byte offset, paragraph)` pairs, leaving the text untouched.
    ///
    /// The last pair holds whatever follows the final separator, possibly nothing.
    pub fn preprocess_with_offsets<'t>(&self, text: &'t str) -> Vec<(usize, &'t str)> {
        let mut paragraphs = Vec::new();
        let mut offset = 0;

        for separator in self.paragraph_separator.find_iter(text) {
            paragraphs.push((offset, &text[offset..separator.start()]));
            offset = separator.end();
        }

        paragraphs.push((offset, &text[offset..]));
        paragraphs
    }
}
