use crate::constant::{BRACKET_CLOSE, BRACKET_OPEN};

/// A forward-only scanner over definition text.
#[derive(Debug)]
pub(super) struct Scanner<'t> {
    text: &'t str,
    position: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub(super) struct UnclosedBracket;

impl<'t> Scanner<'t> {
    pub(super) fn new(text: &'t str) -> Self {
        Self { text, position: 0 }
    }

    pub(super) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(super) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consume `c` if it is next.
    pub(super) fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.position += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume the longest run of characters matching `predicate`.
    pub(super) fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'t str {
        let start = self.position;

        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }

            self.position += c.len_utf8();
        }

        &self.text[start..self.position]
    }

    /// Consume `[..]` if it is next, returning its body.
    pub(super) fn bracket(&mut self) -> Result<Option<&'t str>, UnclosedBracket> {
        if self.peek() != Some(BRACKET_OPEN) {
            return Ok(None);
        }

        let start = self.position + BRACKET_OPEN.len_utf8();

        match self.text[start..].find(BRACKET_CLOSE) {
            Some(length) => {
                self.position = start + length + BRACKET_CLOSE.len_utf8();
                Ok(Some(&self.text[start..start + length]))
            }
            None => Err(UnclosedBracket),
        }
    }

    pub(super) fn position(&self) -> usize {
        self.position
    }

    pub(super) fn rest(&self) -> &'t str {
        &self.text[self.position..]
    }

    pub(super) fn is_done(&self) -> bool {
        self.position == self.text.len()
    }
}

/// Name characters: alphanumeric or `_`.
pub(super) fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
