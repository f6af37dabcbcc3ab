use crate::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser starts from the same cursor the first one was given, so
/// whatever the first parser consumed before failing is forgotten.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, T, P1, P2, O> Parser<'code, T> for Or<P1, P2>
where
    T: Token,
    P1: Parser<'code, T, Output = O>,
    P2: Parser<'code, T, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code, T: Token>: Parser<'code, T> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, T, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, T: Token, P> OrExt<'code, T> for P where P: Parser<'code, T> {}

/// Convenience function to create an Or parser
pub fn or<'code, T, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    T: Token,
    P1: Parser<'code, T, Output = O>,
    P2: Parser<'code, T, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::error::ParseError;
    use crate::map::MapExt;
    use crate::token::symbol;

    #[test]
    fn test_or_first_succeeds() {
        let data = ["add", "x"];
        let cursor = TokenCursor::new(&data);
        let parser = or(symbol("add"), symbol("sub"));

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, "add");
        assert_eq!(cursor.peek(), Some(&"x"));
    }

    #[test]
    fn test_or_second_succeeds() {
        let data = ["sub"];
        let cursor = TokenCursor::new(&data);
        let parser = or(symbol("add"), symbol("sub"));

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, "sub");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_or_both_fail() {
        let data = ["mul"];
        let cursor = TokenCursor::new(&data);
        let parser = or(symbol("add"), symbol("sub"));

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(
            error,
            ParseError::UnexpectedToken {
                expected: "sub",
                actual: "mul",
                position: 0,
            }
        );
    }

    #[test]
    fn test_or_backtracks_partial_consumption() {
        // The left branch consumes "x" before failing on "-"
        let data = ["x", "-", "y"];
        let cursor = TokenCursor::new(&data);
        let plus = symbol("x").and(symbol("+")).map(|(x, _)| x);
        let minus = symbol("x").and(symbol("-")).map(|(x, _)| x);
        let parser = plus.or(minus);

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, "x");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_or_method_chain() {
        let data = ['d'];
        let parser = symbol('a').or(symbol('b')).or(symbol('c')).or(symbol('d'));

        assert_eq!(parser.run(&data), Ok('d'));
    }
}
