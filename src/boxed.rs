use crate::cursor::TokenCursor;
use crate::or::Or;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;
use std::ops::BitOr;
use std::sync::Arc;

type ParserRef<'code, T, O> = Arc<dyn Parser<'code, T, Output = O> + Send + Sync + 'code>;

/// Type-erased, cheaply cloneable parser
///
/// Gives grammar rules a nameable type, which recursive rules built with
/// [`lazy`](crate::lazy::lazy) need as a function return type. The wrapped
/// parser must be `Send + Sync`, so one grammar can serve many threads.
pub struct BoxedParser<'code, T: Token, O> {
    parser: ParserRef<'code, T, O>,
}

impl<T: Token, O> Clone for BoxedParser<'_, T, O> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<'code, T: Token, O> BoxedParser<'code, T, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, T, Output = O> + Send + Sync + 'code,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }
}

impl<'code, T: Token, O> Parser<'code, T> for BoxedParser<'code, T, O> {
    type Output = O;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        self.parser.parse(cursor)
    }
}

/// `|` for choice: A | B -> A or B
impl<'code, T, O> BitOr for BoxedParser<'code, T, O>
where
    T: Token + 'code,
    O: 'code,
{
    type Output = BoxedParser<'code, T, O>;

    fn bitor(self, rhs: Self) -> Self::Output {
        BoxedParser::new(Or::new(self, rhs))
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code, T: Token>: Parser<'code, T> + Send + Sync + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, T, Self::Output> {
        BoxedParser::new(self)
    }
}

impl<'code, T: Token, P> BoxedExt<'code, T> for P where P: Parser<'code, T> + Send + Sync + 'code {}
