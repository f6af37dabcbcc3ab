use crate::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};
use crate::token::{Symbol, Token};

/// Parser that matches content between opening and closing delimiters
///
/// This is a generic combinator that parses: `open + content + close`
/// and returns just the `content` value with the delimiters discarded.
///
/// # Examples
/// - `["(", "x", ")"]` → `"x"`
/// - `["[", 1, "]"]` → `1`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, T, P1, P2, P3> Parser<'code, T> for Between<P1, P2, P3>
where
    T: Token,
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
    P3: Parser<'code, T>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (content_val, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;

        Ok((content_val, cursor))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'code, T, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    T: Token,
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
    P3: Parser<'code, T>,
{
    Between::new(open, content, close)
}

/// Creates a parser for `inner` bracketed by two literal tokens
pub fn wrap<'code, T, P>(before: T, inner: P, after: T) -> Between<Symbol<T>, P, Symbol<T>>
where
    T: Token,
    P: Parser<'code, T>,
{
    Between::new(Symbol::new(before), inner, Symbol::new(after))
}
