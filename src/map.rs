use crate::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;

/// Applies a function to a parser's value, leaving its cursor alone
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, T, P, F, U> Parser<'code, T> for Map<P, F>
where
    T: Token,
    P: Parser<'code, T>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        self.parser
            .parse(cursor)
            .map(|(value, rest)| ((self.mapper)(value), rest))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, T, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    T: Token,
    P: Parser<'code, T>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code, T: Token>: Parser<'code, T> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, T: Token, P> MapExt<'code, T> for P where P: Parser<'code, T> {}
