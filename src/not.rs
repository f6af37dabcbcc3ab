use crate::cursor::TokenCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::token::{Next, Token};

/// Negative lookahead
///
/// Yields `()` when the inner parser fails here and [`ParseError::UnexpectedMatch`]
/// when it succeeds. The returned cursor is always the input cursor.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, T, P> Parser<'code, T> for Not<P>
where
    T: Token,
    P: Parser<'code, T>,
{
    type Output = ();

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(_) => Err(ParseError::UnexpectedMatch {
                position: cursor.position(),
            }),
            Err(_) => Ok(((), cursor)),
        }
    }
}

pub fn not<'code, T, P>(parser: P) -> Not<P>
where
    T: Token,
    P: Parser<'code, T>,
{
    Not::new(parser)
}

/// Parser that succeeds only when no tokens are left
pub fn eof() -> Not<Next> {
    Not::new(Next)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'code, T: Token>: Parser<'code, T> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, T: Token, P> NotExt<'code, T> for P where P: Parser<'code, T> {}
