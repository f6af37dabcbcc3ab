use crate::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;

/// One or more items with a separator between each pair
///
/// `["a", ",", "b", ",", "c"]` with separator `","` yields `vec!["a", "b", "c"]`.
/// The separator values are dropped. A separator with no item after it fails
/// the whole list.
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, T, P, PS> Parser<'code, T> for SeparatedList<P, PS>
where
    T: Token,
    P: Parser<'code, T>,
    PS: Parser<'code, T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];

        loop {
            let after_separator = match self.separator.parse(cursor) {
                Ok((_, rest)) => rest,
                Err(_) => break,
            };

            // An item is required once a separator was consumed
            let (value, rest) = self.parser.parse(after_separator)?;
            results.push(value);
            cursor = rest;
        }

        Ok((results, cursor))
    }
}

pub fn separated_list<'code, T, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    T: Token,
    P: Parser<'code, T>,
    PS: Parser<'code, T>,
{
    SeparatedList::new(parser, separator)
}
