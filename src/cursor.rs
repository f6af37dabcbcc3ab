use crate::error::ParseError;
use crate::outcome::Outcome;
use std::fmt;

/// Read position over a borrowed token slice
///
/// A cursor is a `Copy` value. Advancing produces a new cursor and leaves every
/// other copy where it was, so a parser that fails simply drops its copy and the
/// caller continues from its own. No undo log is needed for backtracking.
pub struct TokenCursor<'code, T> {
    tokens: &'code [T],
    position: usize,
}

impl<'code, T> TokenCursor<'code, T> {
    /// Create a cursor positioned at the first token
    pub fn new(tokens: &'code [T]) -> Self {
        TokenCursor {
            tokens,
            position: 0,
        }
    }

    /// Get the token at the current position without advancing
    pub fn peek(&self) -> Option<&'code T> {
        self.tokens.get(self.position)
    }

    /// Get the current position in the token sequence
    ///
    /// At end of input this equals the number of tokens
    pub fn position(&self) -> usize {
        self.position
    }

    /// True once every token has been consumed
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Get the whole token sequence this cursor reads from
    pub fn source(&self) -> &'code [T] {
        self.tokens
    }

    /// Tokens from the current position to the end
    pub fn remaining(&self) -> &'code [T] {
        self.tokens.get(self.position..).unwrap_or(&[])
    }

    /// Consume the cursor and return its source and position
    pub fn inner(self) -> (&'code [T], usize) {
        (self.tokens, self.position)
    }
}

impl<'code, T: Clone> TokenCursor<'code, T> {
    /// Read the current token and return it with a cursor advanced past it
    ///
    /// Reading past the last token is an ordinary parse failure.
    pub fn consume(self) -> Outcome<(T, Self), T> {
        match self.peek() {
            Some(token) => Ok((
                token.clone(),
                TokenCursor {
                    tokens: self.tokens,
                    position: self.position + 1,
                },
            )),
            None => Err(ParseError::UnexpectedEndOfInput {
                position: self.position,
            }),
        }
    }
}

impl<T> Clone for TokenCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TokenCursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for TokenCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCursor")
            .field("position", &self.position)
            .field("next", &self.peek())
            .finish()
    }
}
