use crate::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;

/// Parser that always succeeds with a fixed value without consuming input
#[derive(Debug, Clone)]
pub struct Lift<V> {
    value: V,
}

impl<V> Lift<V> {
    pub fn new(value: V) -> Self {
        Lift { value }
    }
}

impl<'code, T, V> Parser<'code, T> for Lift<V>
where
    T: Token,
    V: Clone,
{
    type Output = V;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Lift parser
pub fn lift<V: Clone>(value: V) -> Lift<V> {
    Lift::new(value)
}
