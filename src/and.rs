use crate::cursor::TokenCursor;
use crate::outcome::OutcomeExt;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`.
///
/// Example:
/// ```
/// use tokcomb::and::AndExt;
/// use tokcomb::token::symbol;
/// use tokcomb::Parser;
///
/// let tokens = ["let", "x", "="];
/// let ((kw, name), eq) = symbol("let")
///     .and(symbol("x"))
///     .and(symbol("="))
///     .run(&tokens)
///     .unwrap();
/// assert_eq!((kw, name, eq), ("let", "x", "="));
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, T, P1, P2> Parser<'code, T> for And<P1, P2>
where
    T: Token,
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        self.parser1.parse(cursor).bind(
            |(_, rest)| self.parser2.parse(*rest),
            |(first, _), (second, rest)| ((first, second), rest),
        )
    }
}

/// Convenience function to create an And parser
pub fn and<'code, T, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    T: Token,
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code, T: Token>: Parser<'code, T> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, T>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, T: Token, P> AndExt<'code, T> for P where P: Parser<'code, T> {}
