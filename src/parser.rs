use crate::cursor::TokenCursor;
use crate::error::ParseError;
use crate::outcome::Outcome;
use crate::token::Token;

/// Value produced by a successful parse together with the cursor after it
pub type ParseResult<'code, T, O> = Outcome<(O, TokenCursor<'code, T>), T>;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to either a value and an advanced
/// cursor, or a failure. Because the cursor is passed by value, a failed parse
/// never moves the caller's position.
pub trait Parser<'code, T: Token> {
    type Output;

    /// Attempt to parse from the given cursor position
    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output>;

    /// Run the parser from the start of `tokens`, discarding the trailing cursor
    fn run(&self, tokens: &'code [T]) -> Outcome<Self::Output, T> {
        self.parse(TokenCursor::new(tokens)).map(|(value, _)| value)
    }

    /// Like [`Parser::run`], but fails unless every token was consumed
    fn run_complete(&self, tokens: &'code [T]) -> Outcome<Self::Output, T> {
        let (value, rest) = self.parse(TokenCursor::new(tokens))?;
        match rest.peek() {
            None => Ok(value),
            Some(actual) => Err(ParseError::TrailingInput {
                actual: actual.clone(),
                position: rest.position(),
            }),
        }
    }
}

impl<'code, T: Token, P> Parser<'code, T> for &P
where
    P: Parser<'code, T> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Parser built from a plain function over cursors
pub struct FromFn<F> {
    function: F,
}

impl<'code, T, F, O> Parser<'code, T> for FromFn<F>
where
    T: Token + 'code,
    F: Fn(TokenCursor<'code, T>) -> ParseResult<'code, T, O>,
{
    type Output = O;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        (self.function)(cursor)
    }
}

/// Wrap a closure as a parser
pub fn from_fn<'code, T, F, O>(function: F) -> FromFn<F>
where
    T: Token + 'code,
    F: Fn(TokenCursor<'code, T>) -> ParseResult<'code, T, O>,
{
    FromFn { function }
}
