use crate::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;

/// A lazy parser that defers the construction of the actual parser until parse time.
///
/// The factory is called again on every parse. This is what lets a grammar rule
/// refer to itself: building the rule only builds a `Lazy`, and the recursive
/// parser is produced when input actually reaches that point.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, T, F, P> Parser<'code, T> for Lazy<F>
where
    T: Token,
    F: Fn() -> P,
    P: Parser<'code, T>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, T, F, P>(factory: F) -> Lazy<F>
where
    T: Token,
    F: Fn() -> P,
    P: Parser<'code, T>,
{
    Lazy::new(factory)
}
