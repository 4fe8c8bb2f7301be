// Decides whether a candidate terminal marker really ends the sentence

use super::brackets::{first_inner_word, is_title_case, scan_aside};
use super::buffer::{starts_lowercase, starts_uppercase, Cursor};
use super::lexicon::Lexicon;
use crate::token::Token;

/// What put the engine to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Trigger {
    /// A terminal marker at the head of the queue.
    Marker,
    /// An opening bracket whose aside is too long to skip inline.
    Bracket,
}

/// Outcome of a disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// The sentence goes on.
    Continue,
    /// The sentence ends with the committed tokens.
    Split,
}

/// Resolve the candidate at the head of the queue.
///
/// For a marker, the marker and the punctuation run that follows it are
/// committed before judging. An opening bracket is never consumed on a
/// split; when the sentence goes on it is committed as a plain token.
pub(crate) fn resolve<I>(cursor: &mut Cursor<I>, lexicon: &Lexicon, trigger: Trigger, first_word: bool) -> Verdict
where
    I: Iterator<Item = Token>,
{
    let token_before = cursor.last().to_string();
    let token_after = match trigger {
        Trigger::Marker => {
            cursor.advance();
            let after = cursor.head().map(|t| t.text().to_string()).unwrap_or_default();
            absorb_terminal_run(cursor, lexicon);
            after
        }
        Trigger::Bracket => cursor.head().map(|t| t.text().to_string()).unwrap_or_default(),
    };

    let verdict = judge(cursor, lexicon, &token_before, &token_after, first_word);

    if trigger == Trigger::Bracket && verdict == Verdict::Continue {
        cursor.advance();
    }

    verdict
}

/// Resolve an inline aside whose content ended on a terminal run.
///
/// `closing_word` is the word right before that run; the closing bracket
/// takes the place of the marker.
pub(crate) fn resolve_aside_close<I>(cursor: &mut Cursor<I>, lexicon: &Lexicon, closing_word: &str) -> Verdict
where
    I: Iterator<Item = Token>,
{
    let token_after = cursor.head().map(|t| t.text().to_string()).unwrap_or_default();
    absorb_terminal_run(cursor, lexicon);
    judge(cursor, lexicon, closing_word, &token_after, false)
}

/// Commit closing punctuation that still belongs to the sentence.
fn absorb_terminal_run<I>(cursor: &mut Cursor<I>, lexicon: &Lexicon)
where
    I: Iterator<Item = Token>,
{
    let post_terminal = |t: &Token| lexicon.is_terminal(t.text()) || lexicon.is_closing_bracket(t.text());

    while cursor.head_matches(post_terminal) {
        if !cursor.advance() {
            return;
        }
    }

    if cursor.head_matches(|t| lexicon.is_closing_quote(t.text())) && cursor.head_has_no_spacing() && !cursor.advance() {
        return;
    }

    while cursor.head_matches(post_terminal) {
        if !cursor.advance() {
            return;
        }
    }
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_numeric)
}

fn is_alphanumeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphanumeric)
}

fn is_alphabetic(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

fn is_single_char(text: &str) -> bool {
    text.chars().count() == 1
}

/// Has letters and none of them are lowercase.
fn is_all_uppercase(text: &str) -> bool {
    text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase)
}

fn judge<I>(cursor: &mut Cursor<I>, lexicon: &Lexicon, before: &str, after: &str, first_word: bool) -> Verdict
where
    I: Iterator<Item = Token>,
{
    if cursor.at_trailing_sentinel() {
        return Verdict::Continue;
    }
    let next = match cursor.head() {
        Some(token) => token.clone(),
        None => return Verdict::Split,
    };
    let text = next.text();
    let no_spacing = next.spacing().is_empty();

    if starts_lowercase(text) || lexicon.is_inner_punctuation(text) {
        return Verdict::Continue;
    }

    if lexicon.is_sentence_starter(text) && !(first_word && lexicon.is_enumerator(before)) {
        return Verdict::Split;
    }

    if lexicon.is_abbreviation(before) && !(lexicon.is_closing_bracket(after) || lexicon.is_closing_quote(after)) {
        return Verdict::Continue;
    }

    if matches!(before, "no" | "No" | "NO") && is_alphanumeric(text) && text.chars().any(|c| c.is_ascii_digit()) {
        return Verdict::Continue;
    }

    if no_spacing && is_numeric(text) {
        return Verdict::Continue;
    }

    if no_spacing && (!(is_title_case(text) && is_alphabetic(text)) || is_single_char(text)) {
        return Verdict::Continue;
    }

    if is_numeric(text) && text.chars().count() > 2 {
        return Verdict::Continue;
    }

    if (is_numeric(before) && lexicon.is_month_abbreviation(text))
        || (lexicon.is_month_abbreviation(before) && is_numeric(text))
    {
        return Verdict::Continue;
    }

    if before.contains('.') && before.chars().any(char::is_alphabetic) && after != "." {
        return Verdict::Continue;
    }

    if (first_word || is_all_uppercase(before)) && lexicon.is_enumerator(before) {
        return Verdict::Continue;
    }

    if lexicon.is_single_consonant(before) {
        return Verdict::Continue;
    }

    if lexicon.is_opening_bracket(after) {
        return judge_following_aside(cursor, lexicon);
    }

    Verdict::Split
}

/// A bracket follows the marker: look past the aside.
fn judge_following_aside<I>(cursor: &mut Cursor<I>, lexicon: &Lexicon) -> Verdict
where
    I: Iterator<Item = Token>,
{
    let Some(aside) = scan_aside(cursor, lexicon, 0) else {
        return Verdict::Split;
    };

    let after_close = cursor.peek(aside.len).map(|t| t.text().to_string()).unwrap_or_default();

    if lexicon.is_inner_punctuation(&after_close) {
        Verdict::Continue
    } else if first_inner_word(cursor, lexicon, 0).is_some_and(|word| starts_uppercase(&word)) {
        Verdict::Split
    } else if starts_lowercase(&after_close) {
        Verdict::Continue
    } else {
        Verdict::Split
    }
}
