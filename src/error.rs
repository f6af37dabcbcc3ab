use thiserror::Error;

/// Failure produced by a parser.
///
/// The error type does not mention the value a parser would have produced, so a
/// failure raised while parsing a `V` is already a valid failure for any other
/// value type. Sequencing combinators rely on this to forward failures verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError<T> {
    /// A literal token was required but a different one was found
    #[error("expected {expected:?}, found {actual:?} at position {position}")]
    UnexpectedToken {
        expected: T,
        actual: T,
        position: usize,
    },
    /// A token was requested after the last one
    #[error("unexpected end of input at position {position}")]
    UnexpectedEndOfInput { position: usize },
    /// A predicate rejected an otherwise successful parse
    #[error("assertion failed")]
    AssertionFailed,
    /// A negative lookahead found a match
    #[error("unexpected match at position {position}")]
    UnexpectedMatch { position: usize },
    /// A complete parse stopped before the last token
    #[error("unconsumed token {actual:?} at position {position}")]
    TrailingInput { actual: T, position: usize },
}

impl<T> ParseError<T> {
    /// Returns the token position the failure refers to, if it has one
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedToken { position, .. } => Some(*position),
            ParseError::UnexpectedEndOfInput { position } => Some(*position),
            ParseError::AssertionFailed => None,
            ParseError::UnexpectedMatch { position } => Some(*position),
            ParseError::TrailingInput { position, .. } => Some(*position),
        }
    }

    /// True when the parser ran out of tokens
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, ParseError::UnexpectedEndOfInput { .. })
    }
}
