use crate::cursor::TokenCursor;
use crate::error::ParseError;
use crate::filter::Filter;
use crate::parser::{ParseResult, Parser};
use std::fmt;

/// Trait for elements that can be used as parser input
///
/// Any cloneable, comparable and debuggable type qualifies; failures carry
/// copies of the offending tokens so callers can render diagnostics.
pub trait Token: Clone + PartialEq + fmt::Debug {}

impl<T> Token for T where T: Clone + PartialEq + fmt::Debug {}

/// Parser that consumes and returns a single token
#[derive(Debug, Clone, Copy, Default)]
pub struct Next;

impl Next {
    pub fn new() -> Self {
        Next
    }
}

impl<'code, T: Token> Parser<'code, T> for Next {
    type Output = T;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        cursor.consume()
    }
}

/// Convenience function to create a Next parser
pub fn next() -> Next {
    Next::new()
}

/// Parser that matches one specific token
#[derive(Debug, Clone)]
pub struct Symbol<T> {
    expected: T,
}

impl<T> Symbol<T> {
    pub fn new(expected: T) -> Self {
        Symbol { expected }
    }
}

impl<'code, T: Token> Parser<'code, T> for Symbol<T> {
    type Output = T;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let position = cursor.position();
        match cursor.consume()? {
            (token, rest) if token == self.expected => Ok((token, rest)),
            (actual, _) => Err(ParseError::UnexpectedToken {
                expected: self.expected.clone(),
                actual,
                position,
            }),
        }
    }
}

/// Convenience function to create a Symbol parser
pub fn symbol<T: Token>(expected: T) -> Symbol<T> {
    Symbol::new(expected)
}

/// Parser that consumes one token accepted by `predicate`
///
/// A rejected token fails with [`ParseError::AssertionFailed`].
pub fn satisfy<T, F>(predicate: F) -> Filter<Next, F>
where
    T: Token,
    F: Fn(&T) -> bool,
{
    Filter::new(Next, predicate)
}
