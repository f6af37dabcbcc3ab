use crate::cursor::TokenCursor;
use crate::outcome::OutcomeExt;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value becomes [`ParseError::AssertionFailed`](crate::ParseError::AssertionFailed);
/// whatever the inner parser consumed is discarded with it.
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<'code, T, P, F> Parser<'code, T> for Filter<P, F>
where
    T: Token,
    P: Parser<'code, T>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        self.parser
            .parse(cursor)
            .filter(|(value, _)| (self.predicate)(value))
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code, T: Token>: Parser<'code, T> + Sized {
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate)
    }
}

impl<'code, T: Token, P: Parser<'code, T>> FilterExt<'code, T> for P {}

/// Convenience function to create a filtered parser
pub fn filter<'code, T, P, F>(parser: P, predicate: F) -> Filter<P, F>
where
    T: Token,
    P: Parser<'code, T>,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(parser, predicate)
}
