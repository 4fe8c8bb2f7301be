// Splits text into word-level tokens that keep their spacing and byte offsets

use anyhow::Result;
use regex_automata::{meta::Regex, Input};
use std::borrow::Cow;
use std::collections::VecDeque;
use tracing::debug;

use crate::token::Token;

/// Hyphen characters recognized inside words and at line breaks.
pub const HYPHENS: &str = "\u{00AD}\u{058A}\u{05BE}\u{0F0C}\u{1400}\u{1806}\u{2010}\u{2011}\u{2012}\u{2E17}\u{30A0}-";

/// Apostrophe characters that split off a word's tail (`'s`, `'re`, `n't`).
pub const APOSTROPHES: &str = "'\u{00B4}\u{02B9}\u{02BC}\u{2019}\u{2032}";

/// Runs of anything but whitespace and the zero width space, which `\s` does not cover.
const WORD_CHUNK_PATTERN: &str = r"[^\s\x{200B}]+";

const OPEN_CLOSE_PATTERN: &str = r"^[\p{Ps}\p{Pe}]$";

fn hyphen_linebreak_pattern() -> String {
    let mut class = String::new();
    for c in HYPHENS.chars() {
        if c == '-' {
            class.push_str(r"\-");
        } else {
            class.push(c);
        }
    }
    format!(r"[{class}][ \t\x{{A0}}\r]*\n[ \t\x{{A0}}]*")
}

fn is_hyphen(c: char) -> bool {
    HYPHENS.contains(c)
}

fn is_apostrophe(c: char) -> bool {
    APOSTROPHES.contains(c)
}

fn is_inner_separator(c: char) -> bool {
    matches!(c, ',' | ';' | '_') || is_hyphen(c)
}

/// Word tokenizer.
///
/// Text is first cut at whitespace; each chunk is then stripped of leading
/// and trailing symbols (one token per symbol) and the remaining word is
/// split at camel-case transitions, apostrophes, brackets, inner ellipses
/// and in-word commas, semicolons, hyphens or underscores.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    chunks: Regex,
    open_close: Regex,
    hyphen_linebreak: Regex,
    emit_hyphen_or_underscore: bool,
    replace_not_contraction: bool,
}

impl Tokenizer {
    /// Tokenizer that swallows in-word hyphens and underscores and rewrites `n't` to `not`.
    pub fn new() -> Result<Self> {
        Self::with_options(false, true)
    }

    /// Configure hyphen/underscore emission and `n't` replacement.
    ///
    /// Hyphens and underscores that are not emitted end up as the spacing of
    /// the token that follows them, so they are never lost.
    pub fn with_options(emit_hyphen_or_underscore: bool, replace_not_contraction: bool) -> Result<Self> {
        debug!(
            "Compiling tokenizer (emit_hyphen_or_underscore={}, replace_not_contraction={})",
            emit_hyphen_or_underscore, replace_not_contraction
        );

        Ok(Self {
            chunks: Regex::new(WORD_CHUNK_PATTERN)?,
            open_close: Regex::new(OPEN_CLOSE_PATTERN)?,
            hyphen_linebreak: Regex::new(&hyphen_linebreak_pattern())?,
            emit_hyphen_or_underscore,
            replace_not_contraction,
        })
    }

    /// Collect all tokens of `text`.
    pub fn split(&self, text: &str) -> Vec<Token> {
        self.tokenize(text).collect()
    }

    /// Lazily tokenize `text`, with offsets relative to its start.
    pub fn tokenize<'t>(&'t self, text: &'t str) -> Tokens<'t> {
        self.tokenize_at(text, 0)
    }

    /// Lazily tokenize `text` found at byte `base_offset` of a larger document.
    pub fn tokenize_at<'t>(&'t self, text: impl Into<Cow<'t, str>>, base_offset: usize) -> Tokens<'t> {
        Tokens {
            tokenizer: self,
            text: text.into(),
            base_offset,
            position: 0,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Join words hyphenated across a line break (`"hyphen-\n ated"` becomes `"hyphenated"`).
    pub fn join_hyphenated_words(&self, text: &str) -> String {
        let mut joined = String::with_capacity(text.len());
        let mut last = 0;

        for m in self.hyphen_linebreak.find_iter(text) {
            let letter_before = text[..m.start()].chars().next_back().is_some_and(char::is_alphabetic);
            let letter_after = text[m.end()..].chars().next().is_some_and(char::is_alphabetic);

            if letter_before && letter_after {
                joined.push_str(&text[last..m.start()]);
                last = m.end();
            }
        }

        joined.push_str(&text[last..]);
        joined
    }

    fn is_open_close(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.open_close.is_match(c.encode_utf8(&mut buf) as &str)
    }

    fn can_emit(&self, separator: &str) -> bool {
        let mut chars = separator.chars();
        let hyphen_or_underscore = matches!((chars.next(), chars.next()), (Some(c), None) if is_hyphen(c) || c == '_');
        self.emit_hyphen_or_underscore || !hyphen_or_underscore
    }

    /// Tokens of the whitespace-free chunk `text[start..end]`, `spacing` being what preceded it.
    fn split_chunk(&self, text: &str, spacing: &str, start: usize, end: usize, base: usize, out: &mut VecDeque<Token>) {
        let chunk = &text[start..end];
        let word_start = chunk
            .char_indices()
            .find(|(_, c)| c.is_alphanumeric())
            .map_or(chunk.len(), |(i, _)| i);

        if word_start == chunk.len() {
            out.push_back(Token::new(spacing, chunk, base + start));
            return;
        }

        let word_end = chunk
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_alphanumeric())
            .map_or(word_start, |(i, c)| i + c.len_utf8());

        let mut prefix = spacing.to_string();
        for (i, c) in chunk[..word_start].char_indices() {
            out.push_back(Token::new(std::mem::take(&mut prefix), c.to_string(), base + start + i));
        }

        self.split_word(prefix, &chunk[word_start..word_end], base + start + word_start, out);

        let mut tail_offset = base + start + word_end;
        let mut tail = &chunk[word_end..];
        if let Some(rest) = tail.strip_prefix("...") {
            out.push_back(Token::new("", "...", tail_offset));
            tail_offset += 3;
            tail = rest;
        }
        for (i, c) in tail.char_indices() {
            out.push_back(Token::new("", c.to_string(), tail_offset + i));
        }
    }

    /// Byte ranges of the separators inside `word`.
    fn separations(&self, word: &str) -> Vec<(usize, usize)> {
        let chars: Vec<(usize, char)> = word.char_indices().collect();
        let end_of = |j: usize| chars.get(j).map_or(word.len(), |&(pos, _)| pos);
        let mut found = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];
            let prev = i.checked_sub(1).map(|j| chars[j].1);
            let next = chars.get(i + 1).map(|&(_, n)| n);

            if prev.is_some_and(char::is_lowercase) {
                if matches!(c, '.' | '!' | '?') && next.is_some_and(char::is_uppercase) {
                    found.push((pos, end_of(i + 1)));
                    i += 1;
                    continue;
                }
                if c.is_uppercase() {
                    found.push((pos, pos));
                    i += 1;
                    continue;
                }
            }

            if is_apostrophe(c) && next.is_some_and(char::is_alphabetic) {
                let mut j = i + 1;
                while chars.get(j).is_some_and(|&(_, l)| l.is_alphabetic()) {
                    j += 1;
                }
                found.push((pos, end_of(j)));
                i = j;
                continue;
            }

            if self.is_open_close(c) {
                found.push((pos, end_of(i + 1)));
                i += 1;
                continue;
            }

            if word[pos..].starts_with("...") {
                found.push((pos, pos + 3));
                i += 3;
                continue;
            }

            if is_inner_separator(c) {
                let letter = |o: Option<char>| o.is_some_and(char::is_alphabetic);
                let letter_or_digit = |o: Option<char>| o.is_some_and(|x| x.is_alphabetic() || x.is_numeric());

                if (letter(prev) && letter_or_digit(next)) || (letter_or_digit(prev) && letter(next)) {
                    found.push((pos, end_of(i + 1)));
                    i += 1;
                    continue;
                }
            }

            i += 1;
        }

        found
    }

    fn split_word(&self, mut prefix: String, word: &str, offset: usize, out: &mut VecDeque<Token>) {
        let mut remainder = 0;

        for (start, end) in self.separations(word) {
            let separator = &word[start..end];

            if start > remainder {
                if is_not_contraction(word, start, separator) {
                    let n = start - 1;
                    if remainder < n {
                        out.push_back(Token::new(std::mem::take(&mut prefix), &word[remainder..n], offset + remainder));
                    }
                    let not = if self.replace_not_contraction {
                        "not".to_string()
                    } else {
                        format!("n{separator}")
                    };
                    out.push_back(Token::new(std::mem::take(&mut prefix), not, offset + n));
                    remainder = end;
                    continue;
                }

                out.push_back(Token::new(std::mem::take(&mut prefix), &word[remainder..start], offset + remainder));
            }

            if !separator.is_empty() && self.can_emit(separator) {
                out.push_back(Token::new(std::mem::take(&mut prefix), separator, offset + start));
            } else {
                prefix.push_str(separator);
            }
            remainder = end;
        }

        if remainder == 0 {
            out.push_back(Token::new(prefix, word, offset));
        } else if remainder < word.len() {
            out.push_back(Token::new(prefix, &word[remainder..], offset + remainder));
        }
    }
}

/// An apostrophe-t separator right after an `n`.
fn is_not_contraction(word: &str, start: usize, separator: &str) -> bool {
    let mut chars = separator.chars();
    let apostrophe_t = matches!((chars.next(), chars.next(), chars.next()), (Some(a), Some('t'), None) if is_apostrophe(a));
    apostrophe_t && word[..start].ends_with('n')
}

/// Lazy token iterator returned by [`Tokenizer::tokenize`].
///
/// Ends with a sentinel token of empty text carrying any trailing whitespace.
pub struct Tokens<'t> {
    tokenizer: &'t Tokenizer,
    text: Cow<'t, str>,
    base_offset: usize,
    position: usize,
    pending: VecDeque<Token>,
    finished: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }

            let text = self.text.as_ref();
            let input = Input::new(text).range(self.position..text.len());

            match self.tokenizer.chunks.find(input) {
                Some(m) => {
                    let spacing = &text[self.position..m.start()];
                    self.tokenizer
                        .split_chunk(text, spacing, m.start(), m.end(), self.base_offset, &mut self.pending);
                    self.position = m.end();
                }
                None => {
                    self.finished = true;
                    if self.position < text.len() {
                        self.pending.push_back(Token::new(
                            &text[self.position..],
                            "",
                            self.base_offset + text.len(),
                        ));
                    }
                }
            }
        }
    }
}
