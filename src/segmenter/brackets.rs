// Bounded scanning of bracketed asides

use super::buffer::Cursor;
use super::lexicon::Lexicon;
use crate::token::Token;

/// Maximum number of tokens examined past an opening bracket.
pub const MAX_BRACKET_LOOKAHEAD: usize = 50;

/// A bracketed span found in the lookahead buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Aside {
    /// Tokens from the opening bracket through its matching close.
    pub len: usize,
    /// Characters of source text (spacing included) strictly between the brackets.
    pub content_chars: usize,
    /// The content starts with a title-cased word that a terminal follows.
    pub sentence_like: bool,
    /// When the content closes on a terminal run, the word right before that run.
    pub closing_word: Option<String>,
}

impl Aside {
    /// Short asides and asides without an inner sentence stay inline.
    pub fn is_skippable(&self, max_aside_length: usize) -> bool {
        self.content_chars < max_aside_length || !self.sentence_like
    }
}

/// Title case: an uppercase first character and no other uppercase character.
pub(crate) fn is_title_case(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => !chars.any(char::is_uppercase),
        _ => false,
    }
}

fn is_word(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_alphanumeric)
}

/// Scan the aside opening at queue position `start`.
///
/// Nesting depth counts any opening bracket up and any closing bracket down,
/// so mismatched bracket kinds still balance. Returns `None` when `start` is
/// not an opening bracket or no close is found within the lookahead bound.
pub(crate) fn scan_aside<I>(cursor: &mut Cursor<I>, lexicon: &Lexicon, start: usize) -> Option<Aside>
where
    I: Iterator<Item = Token>,
{
    if !cursor.peek(start).is_some_and(|t| lexicon.is_opening_bracket(t.text())) {
        return None;
    }

    let mut depth = 1usize;
    let mut content_chars = 0;
    let mut title_cased: Option<bool> = None;
    let mut sentence_like = false;

    for idx in start + 1..=start + MAX_BRACKET_LOOKAHEAD {
        let token = cursor.peek(idx)?;
        let text = token.text();

        if lexicon.is_closing_bracket(text) {
            depth -= 1;
            if depth == 0 {
                let closing_word = closing_word(cursor, lexicon, start, idx);
                return Some(Aside {
                    len: idx - start + 1,
                    content_chars,
                    sentence_like,
                    closing_word,
                });
            }
        } else if lexicon.is_opening_bracket(text) {
            depth += 1;
        } else if title_cased.is_none() && is_word(text) {
            title_cased = Some(is_title_case(text));
        } else if title_cased == Some(true) && lexicon.is_terminal(text) {
            sentence_like = true;
        }

        content_chars += token.spacing().chars().count() + text.chars().count();
    }

    None
}

/// The word preceding the terminal run that ends the aside content, if any.
fn closing_word<I>(cursor: &mut Cursor<I>, lexicon: &Lexicon, start: usize, close: usize) -> Option<String>
where
    I: Iterator<Item = Token>,
{
    let mut idx = close;
    let text_at = |cursor: &mut Cursor<I>, idx: usize| cursor.peek(idx).map(|t| t.text().to_string());

    while idx > start + 1 {
        let text = text_at(cursor, idx - 1)?;
        if lexicon.is_closing_bracket(&text) || lexicon.is_closing_quote(&text) {
            idx -= 1;
        } else {
            break;
        }
    }

    let mut saw_terminal = false;
    while idx > start + 1 {
        let text = text_at(cursor, idx - 1)?;
        if lexicon.is_terminal(&text) {
            saw_terminal = true;
            idx -= 1;
        } else {
            break;
        }
    }

    if saw_terminal && idx > start + 1 {
        text_at(cursor, idx - 1)
    } else {
        None
    }
}

/// First word inside the aside opening at `start`, past any opening quotes.
pub(crate) fn first_inner_word<I>(cursor: &mut Cursor<I>, lexicon: &Lexicon, start: usize) -> Option<String>
where
    I: Iterator<Item = Token>,
{
    let mut idx = start + 1;
    loop {
        let text = cursor.peek(idx)?.text();
        if lexicon.is_opening_quote(text) {
            idx += 1;
        } else {
            return Some(text.to_string());
        }
    }
}
