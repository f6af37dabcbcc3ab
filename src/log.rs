//! Instrumentation combinators.
//!
//! Both run strictly after a successful parse and return the result untouched.

use crate::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;
use std::borrow::Cow;

/// Emits a `tracing` event after the inner parser succeeds
pub struct Log<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Log<P> {
    pub fn new(parser: P, message: Cow<'static, str>) -> Self {
        Log { parser, message }
    }
}

impl<'code, T, P> Parser<'code, T> for Log<P>
where
    T: Token,
    P: Parser<'code, T>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let (value, rest) = self.parser.parse(cursor)?;
        tracing::info!(
            target: "tokcomb::log",
            start = cursor.position(),
            end = rest.position(),
            "{}",
            self.message
        );
        Ok((value, rest))
    }
}

/// Runs a side effect after the inner parser succeeds
pub struct Tap<P, F> {
    parser: P,
    action: F,
}

impl<P, F> Tap<P, F> {
    pub fn new(parser: P, action: F) -> Self {
        Tap { parser, action }
    }
}

impl<'code, T, P, F> Parser<'code, T> for Tap<P, F>
where
    T: Token,
    P: Parser<'code, T>,
    F: Fn(),
{
    type Output = P::Output;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let parsed = self.parser.parse(cursor)?;
        (self.action)();
        Ok(parsed)
    }
}

pub fn log<'code, T, P>(parser: P, message: impl Into<Cow<'static, str>>) -> Log<P>
where
    T: Token,
    P: Parser<'code, T>,
{
    Log::new(parser, message.into())
}

pub fn tap<'code, T, P, F>(parser: P, action: F) -> Tap<P, F>
where
    T: Token,
    P: Parser<'code, T>,
    F: Fn(),
{
    Tap::new(parser, action)
}

/// Extension trait to add .log() and .tap() to all parsers
pub trait LogExt<'code, T: Token>: Parser<'code, T> + Sized {
    fn log(self, message: impl Into<Cow<'static, str>>) -> Log<Self> {
        Log::new(self, message.into())
    }

    fn tap<F: Fn()>(self, action: F) -> Tap<Self, F> {
        Tap::new(self, action)
    }
}

impl<'code, T: Token, P> LogExt<'code, T> for P where P: Parser<'code, T> {}
