//! # tokcomb - Token Parser Combinator Library
//!
//! tokcomb builds recursive-descent parsers over any token slice by composing
//! small parsers with sequencing, alternation, repetition and optionality.
//!
//! - **Zero panics**: Running out of input is an ordinary [`ParseError`]
//! - **Free backtracking**: [`TokenCursor`] is a `Copy` value, so a failed branch
//!   just drops its copy and the caller's position is untouched
//! - **Composability**: Every combinator is itself a [`Parser`]; recursive rules
//!   are tied together with [`lazy`](lazy::lazy)
//!
//! ```
//! use tokcomb::prelude::*;
//!
//! let tokens = ["(", "add", "add", ")"];
//! let parser = wrap("(", some(symbol("add")), ")");
//! assert_eq!(parser.run(&tokens), Ok(vec!["add", "add"]));
//! ```

pub mod and;
pub mod between;
pub mod bind;
pub mod boxed;
pub mod cursor;
pub mod error;
pub mod filter;
pub mod lazy;
pub mod lift;
pub mod log;
pub mod many;
pub mod map;
pub mod maybe;
pub mod not;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod separated_list;
pub mod token;

pub use boxed::BoxedParser;
pub use cursor::TokenCursor;
pub use error::ParseError;
pub use many::{LimitMode, RepeatConfig};
pub use outcome::{Outcome, OutcomeExt};
pub use parser::{ParseResult, Parser, from_fn};
pub use token::Token;

/// Everything needed to write a grammar
pub mod prelude {
    pub use crate::and::{AndExt, and};
    pub use crate::between::{between, wrap};
    pub use crate::bind::{BindExt, bind};
    pub use crate::boxed::{BoxedExt, BoxedParser};
    pub use crate::cursor::TokenCursor;
    pub use crate::error::ParseError;
    pub use crate::filter::{FilterExt, filter};
    pub use crate::lazy::lazy;
    pub use crate::lift::lift;
    pub use crate::log::{LogExt, log, tap};
    pub use crate::many::{
        LimitMode, RepeatConfig, any, at_least, at_most, at_most_capped, repeat, some,
    };
    pub use crate::map::{MapExt, map};
    pub use crate::maybe::{MaybeExt, maybe};
    pub use crate::not::{NotExt, eof, not};
    pub use crate::or::{OrExt, or};
    pub use crate::outcome::{Outcome, OutcomeExt};
    pub use crate::parser::{ParseResult, Parser, from_fn};
    pub use crate::separated_list::separated_list;
    pub use crate::token::{Token, next, satisfy, symbol};
}
