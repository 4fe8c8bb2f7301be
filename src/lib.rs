pub mod config;
pub mod discovery;
pub mod normalization;
pub mod output;
pub mod paragraphs;
pub mod reader;
pub mod segmenter;
pub mod token;
pub mod tokenizer;

// Re-export main types for convenient access
pub use token::{to_text, Sentence, Token};

pub use segmenter::{segment, split, Lexicon, SegmenterConfig, Sentences};

pub use paragraphs::{Paragraph, Pipeline};
pub use tokenizer::{Tokenizer, Tokens};

pub use config::Config;
