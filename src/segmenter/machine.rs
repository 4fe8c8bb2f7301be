use super::brackets::{is_title_case, scan_aside};
use super::buffer::Cursor;
use super::lexicon::Lexicon;
use super::terminal::{resolve, resolve_aside_close, Trigger, Verdict};
use crate::token::{Sentence, Token};
use std::iter::FusedIterator;

#[cfg(feature = "debug-states")]
use tracing::trace;

/// A skipped aside of at least this many tokens at the start of a sentence is
/// a sentence of its own, unless lowercase text follows it.
const ASIDE_SENTENCE_MIN_TOKENS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Begin,
    FirstToken,
    InnerToken,
    Terminal,
    End,
}

/// Lazy, single-pass sequence of sentences over a token source.
///
/// Created by [`segment`](super::segment). The token source is pulled only
/// as far as needed to decide the next boundary.
pub struct Sentences<'l, I>
where
    I: Iterator<Item = Token>,
{
    cursor: Cursor<I>,
    lexicon: &'l Lexicon,
    max_aside_length: usize,
    state: State,
}

impl<'l, I> Sentences<'l, I>
where
    I: Iterator<Item = Token>,
{
    pub(crate) fn new(tokens: I, lexicon: &'l Lexicon, max_aside_length: usize) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            lexicon,
            max_aside_length,
            state: State::Begin,
        }
    }

    fn at_sentence(&self) -> bool {
        matches!(self.state, State::Terminal | State::End) && self.cursor.has_history()
    }

    fn step(&mut self) -> State {
        match self.state {
            State::Begin | State::Terminal => {
                if self.cursor.is_empty() {
                    State::End
                } else {
                    State::FirstToken
                }
            }
            State::FirstToken => self.first_token(),
            State::InnerToken => self.inner_token(),
            State::End => State::End,
        }
    }

    fn first_token(&mut self) -> State {
        if self.cursor.is_empty() {
            return State::End;
        }

        if self.head_is(Lexicon::is_opening_bracket) {
            if let Some(aside) = scan_aside(&mut self.cursor, self.lexicon, 0) {
                if aside.is_skippable(self.max_aside_length) {
                    self.cursor.advance_by(aside.len);

                    if self.cursor.is_empty() {
                        return State::End;
                    }
                    if aside.len >= ASIDE_SENTENCE_MIN_TOKENS
                        && !self.cursor.head_is_lowercase()
                        && !self.head_is(Lexicon::is_inner_punctuation)
                        && !self.cursor.at_trailing_sentinel()
                    {
                        return State::Terminal;
                    }
                }
            }
        }

        if !self.cursor.advance() {
            return State::End;
        }

        if self.head_is(Lexicon::is_terminal) {
            let verdict = resolve(&mut self.cursor, self.lexicon, Trigger::Marker, true);
            self.after(verdict)
        } else {
            State::InnerToken
        }
    }

    fn inner_token(&mut self) -> State {
        if self.cursor.is_empty() {
            return State::End;
        }

        if self.head_is(Lexicon::is_terminal) {
            let verdict = resolve(&mut self.cursor, self.lexicon, Trigger::Marker, false);
            return self.after(verdict);
        }

        if self.head_is(Lexicon::is_opening_bracket) {
            return match scan_aside(&mut self.cursor, self.lexicon, 0) {
                Some(aside) if aside.is_skippable(self.max_aside_length) => {
                    self.cursor.advance_by(aside.len);
                    match aside.closing_word {
                        Some(word) if !self.cursor.is_empty() && !self.head_is(Lexicon::is_terminal) => {
                            let verdict = resolve_aside_close(&mut self.cursor, self.lexicon, &word);
                            self.after(verdict)
                        }
                        _ => State::InnerToken,
                    }
                }
                Some(_) => {
                    let verdict = resolve(&mut self.cursor, self.lexicon, Trigger::Bracket, false);
                    self.after(verdict)
                }
                None => self.commit(),
            };
        }

        if self.head_is(|_, text| text == ";") && self.semicolon_ends_sentence() {
            self.cursor.advance();
            return State::Terminal;
        }

        self.commit()
    }

    /// A semicolon followed by a spaced, capitalized word closes the sentence.
    fn semicolon_ends_sentence(&mut self) -> bool {
        self.cursor.peek(1).is_some_and(|token| {
            !token.spacing().is_empty()
                && is_title_case(token.text())
                && token.text().chars().all(char::is_alphabetic)
        })
    }

    fn commit(&mut self) -> State {
        if self.cursor.advance() {
            State::InnerToken
        } else {
            State::End
        }
    }

    fn after(&self, verdict: Verdict) -> State {
        match verdict {
            Verdict::Split => State::Terminal,
            Verdict::Continue if self.cursor.is_empty() => State::End,
            Verdict::Continue => State::InnerToken,
        }
    }

    fn head_is(&self, predicate: impl Fn(&Lexicon, &str) -> bool) -> bool {
        self.cursor.head_matches(|token| predicate(self.lexicon, token.text()))
    }
}

/// The tokenizer's trailing-whitespace sentinel on its own is not a sentence.
fn is_spurious(sentence: &[Token]) -> bool {
    matches!(sentence, [only] if only.is_sentinel())
}

impl<'l, I> Iterator for Sentences<'l, I>
where
    I: Iterator<Item = Token>,
{
    type Item = Sentence;

    fn next(&mut self) -> Option<Sentence> {
        loop {
            if self.state == State::End && !self.cursor.has_history() {
                return None;
            }

            let sentence = self.at_sentence().then(|| self.cursor.take_history());

            if self.state != State::End {
                let next = self.step();
                #[cfg(feature = "debug-states")]
                trace!("{:?} -> {:?}", self.state, next);
                self.state = next;
            }

            match sentence {
                Some(sentence) if !is_spurious(&sentence) => return Some(sentence),
                _ => continue,
            }
        }
    }
}

impl<'l, I> FusedIterator for Sentences<'l, I> where I: Iterator<Item = Token> {}
