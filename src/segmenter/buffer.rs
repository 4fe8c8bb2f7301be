use crate::token::Token;
use std::collections::VecDeque;

/// Lookahead buffer over a lazy token source.
///
/// `queue` holds tokens pulled from the source but not yet assigned to a
/// sentence; `history` holds the tokens of the sentence being built. The
/// queue is kept non-empty for as long as the source has tokens left.
pub(crate) struct Cursor<I> {
    source: I,
    queue: VecDeque<Token>,
    history: Vec<Token>,
}

impl<I> Cursor<I>
where
    I: Iterator<Item = Token>,
{
    pub fn new(source: I) -> Self {
        let mut cursor = Self {
            source,
            queue: VecDeque::new(),
            history: Vec::new(),
        };
        cursor.fetch_next();
        cursor
    }

    /// Pull one token from the source into the queue.
    pub fn fetch_next(&mut self) -> bool {
        match self.source.next() {
            Some(token) => {
                self.queue.push_back(token);
                true
            }
            None => false,
        }
    }

    /// Move the head of the queue into the history, refilling the queue if it ran dry.
    ///
    /// Returns false once no token is left to look at.
    pub fn advance(&mut self) -> bool {
        if let Some(token) = self.queue.pop_front() {
            self.history.push(token);
        }
        if self.queue.is_empty() {
            self.fetch_next()
        } else {
            true
        }
    }

    /// Commit `n` tokens in a row.
    pub fn advance_by(&mut self, n: usize) -> bool {
        let mut more = !self.queue.is_empty();
        for _ in 0..n {
            more = self.advance();
            if !more {
                break;
            }
        }
        more
    }

    /// The next uncommitted token.
    pub fn head(&self) -> Option<&Token> {
        self.queue.front()
    }

    /// The uncommitted token `n` positions past the head, pulling from the source on demand.
    pub fn peek(&mut self, n: usize) -> Option<&Token> {
        while self.queue.len() <= n {
            if !self.fetch_next() {
                return None;
            }
        }
        self.queue.get(n)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Text of the most recently committed token, or "" for a fresh sentence.
    pub fn last(&self) -> &str {
        self.history.last().map_or("", |token| token.text())
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    /// Hand over the accumulated sentence and start a new one.
    pub fn take_history(&mut self) -> Vec<Token> {
        std::mem::take(&mut self.history)
    }

    pub fn head_matches(&self, predicate: impl FnOnce(&Token) -> bool) -> bool {
        self.head().is_some_and(predicate)
    }

    /// The head is the tokenizer's trailing-whitespace sentinel and nothing follows it.
    pub fn at_trailing_sentinel(&mut self) -> bool {
        self.head_matches(Token::is_sentinel) && self.peek(1).is_none()
    }

    pub fn head_has_no_spacing(&self) -> bool {
        self.head_matches(|token| token.spacing().is_empty())
    }

    pub fn head_is_lowercase(&self) -> bool {
        self.head_matches(|token| starts_lowercase(token.text()))
    }
}

pub(crate) fn starts_lowercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_lowercase)
}

pub(crate) fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(" ", *w, i))
            .collect()
    }

    #[test]
    fn test_advance_moves_head_into_history() {
        let mut cursor = Cursor::new(tokens(&["a", "b"]).into_iter());

        assert_eq!(cursor.head().map(Token::text), Some("a"));
        assert!(cursor.advance());
        assert_eq!(cursor.last(), "a");
        assert_eq!(cursor.head().map(Token::text), Some("b"));
        assert!(!cursor.advance());
        assert!(cursor.is_empty());
        assert_eq!(cursor.take_history().len(), 2);
        assert!(!cursor.has_history());
        assert_eq!(cursor.last(), "");
    }

    #[test]
    fn test_peek_fetches_on_demand() {
        let mut cursor = Cursor::new(tokens(&["a", "b", "c"]).into_iter());

        assert_eq!(cursor.peek(2).map(Token::text), Some("c"));
        assert!(cursor.peek(3).is_none());
        assert!(cursor.advance_by(2));
        assert_eq!(cursor.head().map(Token::text), Some("c"));
    }

    #[test]
    fn test_predicates_on_empty_queue() {
        let mut cursor = Cursor::new(std::iter::empty());

        assert!(cursor.is_empty());
        assert!(!cursor.head_is_lowercase());
        assert!(!cursor.head_has_no_spacing());
        assert!(!cursor.advance());
        assert!(!cursor.has_history());
    }
}
