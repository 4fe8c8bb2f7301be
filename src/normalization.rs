// Single-line rendering of sentences for display and JSON output

use crate::token::Token;

/// Render a sentence on one line: interior line breaks and whitespace runs
/// become a single space, leading and trailing whitespace is dropped.
pub fn sentence_line(sentence: &[Token]) -> String {
    let mut line = String::new();
    sentence_line_into(sentence, &mut line);
    line
}

/// Same as [`sentence_line`], writing into a reusable buffer.
pub fn sentence_line_into(sentence: &[Token], buffer: &mut String) {
    buffer.clear();

    let mut pending_space = false;
    for token in sentence {
        for ch in token.spacing().chars().chain(token.text().chars()) {
            if ch.is_whitespace() {
                pending_space = !buffer.is_empty();
            } else {
                if pending_space {
                    buffer.push(' ');
                    pending_space = false;
                }
                buffer.push(ch);
            }
        }
    }
}

/// Token texts of a sentence separated by single spaces.
pub fn token_line(sentence: &[Token]) -> String {
    let mut line = String::new();
    for token in sentence.iter().filter(|t| !t.is_sentinel()) {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(token.text());
    }
    line
}
