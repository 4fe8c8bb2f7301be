// Rendering of segmented documents for the command line

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

use crate::normalization::{sentence_line_into, token_line};
use crate::paragraphs::{Paragraph, Pipeline};
use crate::token::{to_text, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One sentence per line, paragraphs separated by a blank line
    #[default]
    Text,
    /// One JSON object per sentence
    Json,
    /// Token texts separated by spaces, one sentence per line
    Tokens,
}

/// A sentence as written by `--format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceRecord<'a> {
    pub source: &'a str,
    pub paragraph: usize,
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl<'a> SentenceRecord<'a> {
    pub fn new(source: &'a str, paragraph: usize, index: usize, sentence: &[Token]) -> Self {
        let mut words = sentence.iter().filter(|t| !t.is_sentinel());
        let first = words.next();
        let start = first.map_or(0, Token::offset);
        let end = words.last().or(first).map_or(start, Token::end);

        let mut text = String::new();
        sentence_line_into(sentence, &mut text);

        Self {
            source,
            paragraph,
            index,
            start,
            end,
            text,
        }
    }
}

/// Writes the sentences of whole documents in one format.
pub struct DocumentWriter<'p> {
    pipeline: &'p Pipeline,
    format: OutputFormat,
    preserve: bool,
    line: String,
}

impl<'p> DocumentWriter<'p> {
    /// With `preserve`, documents are segmented losslessly and text output
    /// keeps each sentence's own whitespace.
    pub fn new(pipeline: &'p Pipeline, format: OutputFormat, preserve: bool) -> Self {
        Self {
            pipeline,
            format,
            preserve,
            line: String::new(),
        }
    }

    /// Segment `document` and write it out, returning the number of sentences.
    pub fn write_document<W: Write>(&mut self, out: &mut W, source: &str, document: &str) -> Result<usize> {
        let pipeline = self.pipeline;
        let mut count = 0;

        if self.preserve {
            for (index, paragraph) in pipeline.analyze(document).enumerate() {
                count += self.write_paragraph(out, source, index, paragraph)?;
            }
        } else {
            for (index, paragraph) in pipeline.process(document).enumerate() {
                count += self.write_paragraph(out, source, index, paragraph)?;
            }
        }

        Ok(count)
    }

    fn write_paragraph<W: Write>(
        &mut self,
        out: &mut W,
        source: &str,
        paragraph_index: usize,
        paragraph: Paragraph<'_>,
    ) -> Result<usize> {
        let mut count = 0;

        for (index, sentence) in paragraph.enumerate() {
            match self.format {
                OutputFormat::Text if self.preserve => writeln!(out, "{}", to_text(&sentence).trim())?,
                OutputFormat::Text => {
                    sentence_line_into(&sentence, &mut self.line);
                    writeln!(out, "{}", self.line)?;
                }
                OutputFormat::Tokens => writeln!(out, "{}", token_line(&sentence))?,
                OutputFormat::Json => {
                    let record = SentenceRecord::new(source, paragraph_index, index, &sentence);
                    serde_json::to_writer(&mut *out, &record)?;
                    writeln!(out)?;
                }
            }
            count += 1;
        }

        if count > 0 && self.format != OutputFormat::Json {
            writeln!(out)?;
        }
        Ok(count)
    }
}
