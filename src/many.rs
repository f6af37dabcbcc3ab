//! Greedy repetition.
//!
//! Every repetition combinator here is one [`Many`] parser driven by a
//! [`RepeatConfig`]. The loop runs the inner parser until it fails, keeps the
//! cursor from the last success and then checks the collected count.

use crate::cursor::TokenCursor;
use crate::error::ParseError;
use crate::outcome::OutcomeExt;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;

/// How an upper bound on the number of matches is enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LimitMode {
    /// Match greedily, then fail with `AssertionFailed` if more than the limit matched
    #[default]
    PostHoc,
    /// Stop asking for matches once the limit is reached
    Capped,
}

/// Bounds for a repetition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepeatConfig {
    pub min: usize,
    pub max: Option<usize>,
    pub limit: LimitMode,
}

impl RepeatConfig {
    pub fn at_least(min: usize) -> Self {
        RepeatConfig {
            min,
            ..Self::default()
        }
    }

    pub fn at_most(max: usize) -> Self {
        RepeatConfig {
            max: Some(max),
            ..Self::default()
        }
    }

    pub fn with_limit(self, limit: LimitMode) -> Self {
        RepeatConfig { limit, ..self }
    }

    fn is_full(&self, collected: usize) -> bool {
        match (self.limit, self.max) {
            (LimitMode::Capped, Some(max)) => collected >= max,
            _ => false,
        }
    }

    fn within_max(&self, collected: usize) -> bool {
        self.max.is_none_or(|max| collected <= max)
    }
}

/// Parser combinator that matches the given parser repeatedly
pub struct Many<P> {
    parser: P,
    config: RepeatConfig,
}

impl<P> Many<P> {
    pub fn new(parser: P, config: RepeatConfig) -> Self {
        Many { parser, config }
    }
}

impl<'code, T, P> Parser<'code, T> for Many<P>
where
    T: Token,
    P: Parser<'code, T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TokenCursor<'code, T>) -> ParseResult<'code, T, Self::Output> {
        let mut results = Vec::new();
        let mut cursor = cursor;

        let stopped_by = loop {
            if self.config.is_full(results.len()) {
                break None;
            }
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(error) => {
                    tracing::trace!(
                        target: "tokcomb::many",
                        %error,
                        position = cursor.position(),
                        items_collected = results.len(),
                        "repetition stopped"
                    );
                    break Some(error);
                }
            }
        };

        if results.len() < self.config.min {
            return Err(stopped_by.unwrap_or(ParseError::AssertionFailed));
        }

        let collected: ParseResult<'code, T, Self::Output> = Ok((results, cursor));
        collected.filter(|(items, _)| self.config.within_max(items.len()))
    }
}

/// Match `parser` with explicit repetition bounds
pub fn repeat<'code, T, P>(parser: P, config: RepeatConfig) -> Many<P>
where
    T: Token,
    P: Parser<'code, T>,
{
    Many::new(parser, config)
}

/// Match `parser` `min` or more times
///
/// With fewer matches the failure that ended the loop is returned.
pub fn at_least<'code, T, P>(min: usize, parser: P) -> Many<P>
where
    T: Token,
    P: Parser<'code, T>,
{
    Many::new(parser, RepeatConfig::at_least(min))
}

/// Match `parser` greedily, then reject the result if it matched more than `max` times
///
/// The loop is not cut short at `max`: input is consumed as far as the parser
/// goes and the count is compared afterwards. Use [`at_most_capped`] to stop at
/// `max` instead.
pub fn at_most<'code, T, P>(max: usize, parser: P) -> Many<P>
where
    T: Token,
    P: Parser<'code, T>,
{
    Many::new(parser, RepeatConfig::at_most(max))
}

/// Match `parser` up to `max` times and leave any further matches unconsumed
pub fn at_most_capped<'code, T, P>(max: usize, parser: P) -> Many<P>
where
    T: Token,
    P: Parser<'code, T>,
{
    Many::new(
        parser,
        RepeatConfig::at_most(max).with_limit(LimitMode::Capped),
    )
}

/// Match zero or more occurrences; never fails
pub fn any<'code, T, P>(parser: P) -> Many<P>
where
    T: Token,
    P: Parser<'code, T>,
{
    at_least(0, parser)
}

/// Match one or more occurrences
pub fn some<'code, T, P>(parser: P) -> Many<P>
where
    T: Token,
    P: Parser<'code, T>,
{
    at_least(1, parser)
}
