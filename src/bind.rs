use crate::cursor::TokenCursor;
use crate::outcome::OutcomeExt;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;

/// Parser combinator for monadic sequencing
///
/// Runs `parser`, builds the next parser from its value with `then`, runs that
/// from where the first one stopped and merges both values with `combine`.
/// Every multi-step rule is some chain of these.
pub struct Bind<P, F, C> {
    parser: P,
    then: F,
    combine: C,
}

impl<P, F, C> Bind<P, F, C> {
    pub fn new(parser: P, then: F, combine: C) -> Self {
        Bind {
            parser,
            then,
            combine,
        }
    }
}

impl<'code, T, P, F, C, Q, R> Parser<'code, T> for Bind<P, F, C>
where
    T: Token,
    P: Parser<'code, T>,
    F: Fn(&P::Output) -> Q,
    Q: Parser<'code, T>,
    C: Fn(P::Output, Q::Output) -> R,
{
    type Output = R;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        self.parser.parse(cursor).bind(
            |(value, rest)| (self.then)(value).parse(*rest),
            |(first, _), (second, rest)| ((self.combine)(first, second), rest),
        )
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, T, P, F, C, Q, R>(parser: P, then: F, combine: C) -> Bind<P, F, C>
where
    T: Token,
    P: Parser<'code, T>,
    F: Fn(&P::Output) -> Q,
    Q: Parser<'code, T>,
    C: Fn(P::Output, Q::Output) -> R,
{
    Bind::new(parser, then, combine)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code, T: Token>: Parser<'code, T> + Sized {
    fn bind<F, C, Q, R>(self, then: F, combine: C) -> Bind<Self, F, C>
    where
        F: Fn(&Self::Output) -> Q,
        Q: Parser<'code, T>,
        C: Fn(Self::Output, Q::Output) -> R,
    {
        Bind::new(self, then, combine)
    }
}

impl<'code, T: Token, P> BindExt<'code, T> for P where P: Parser<'code, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::lift::lift;
    use crate::token::{next, symbol};
    use std::cell::Cell;

    #[test]
    fn test_bind_sequences_two_parsers() {
        let data = ["let", "x"];
        let cursor = TokenCursor::new(&data);
        let parser = symbol("let").bind(|_| symbol("x"), |kw, name| (kw, name));

        let ((kw, name), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(kw, "let");
        assert_eq!(name, "x");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_bind_chooses_next_parser_from_value() {
        // The first token says which token must follow
        let data = ["open", "(", "close", ")"];
        let opener = |token: &&str| if *token == "open" { "(" } else { ")" };
        let parser = bind(next(), move |token| symbol(opener(token)), |_, b| b);

        assert_eq!(parser.run(&data), Ok("("));
        assert_eq!(parser.run(&data[2..]), Ok(")"));
        assert!(parser.run(&data[1..]).is_err());
    }

    #[test]
    fn test_bind_short_circuits_on_first_failure() {
        let data = ["y"];
        let built = Cell::new(0);
        let parser = symbol("x").bind(
            |_| {
                built.set(built.get() + 1);
                symbol("y")
            },
            |a, b| (a, b),
        );

        let result = parser.run(&data);
        assert!(matches!(result, Err(ParseError::UnexpectedToken { .. })));
        assert_eq!(built.get(), 0);
    }

    #[test]
    fn test_bind_propagates_second_failure() {
        let data = ["x", "z"];
        let parser = symbol("x").bind(|_| symbol("y"), |a, b| (a, b));

        assert_eq!(
            parser.run(&data),
            Err(ParseError::UnexpectedToken {
                expected: "y",
                actual: "z",
                position: 1,
            })
        );
    }

    #[test]
    fn test_bind_with_lift_consumes_once() {
        let data = [1u32, 2];
        let cursor = TokenCursor::new(&data);
        let parser = bind(next(), |n: &u32| lift(*n * 100), |a, b| a + b);

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, 101);
        assert_eq!(cursor.position(), 1);
    }
}
