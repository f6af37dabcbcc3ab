use crate::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;

/// Parser combinator that makes a parser optional
///
/// On failure it succeeds with `None` and hands back the cursor it was given,
/// so a failed attempt never advances the position.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<'code, T, P> Parser<'code, T> for Maybe<P>
where
    T: Token,
    P: Parser<'code, T>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, rest)) => Ok((Some(value), rest)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<'code, T, P>(parser: P) -> Maybe<P>
where
    T: Token,
    P: Parser<'code, T>,
{
    Maybe::new(parser)
}

/// Extension trait to add .maybe() method support for parsers
pub trait MaybeExt<'code, T: Token>: Parser<'code, T> + Sized {
    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }
}

impl<'code, T: Token, P> MaybeExt<'code, T> for P where P: Parser<'code, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::token::symbol;

    #[test]
    fn test_maybe_present() {
        let data = ["ok", "next"];
        let cursor = TokenCursor::new(&data);

        let (value, cursor) = maybe(symbol("ok")).parse(cursor).unwrap();
        assert_eq!(value, Some("ok"));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_maybe_absent() {
        let data = ["fail"];
        let cursor = TokenCursor::new(&data);

        let (value, cursor) = maybe(symbol("ok")).parse(cursor).unwrap();
        assert_eq!(value, None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_maybe_discards_partial_progress() {
        let data = ["-", "x"];
        let cursor = TokenCursor::new(&data);
        let parser = symbol("-").and(symbol("1")).maybe();

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, None);
        assert_eq!(cursor.peek(), Some(&"-"));
    }

    #[test]
    fn test_maybe_end_of_input() {
        let data: [char; 0] = [];
        let cursor = TokenCursor::new(&data);

        let (value, cursor) = symbol('a').maybe().parse(cursor).unwrap();
        assert_eq!(value, None);
        assert!(cursor.is_at_end());
    }
}
