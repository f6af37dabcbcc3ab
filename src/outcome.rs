//! Monadic helpers over parse outcomes.
//!
//! An outcome is a plain `Result` whose failure side is a [`ParseError`]. `map`
//! is the standard `Result::map`; this module adds the sequencing (`bind`) and
//! predicate (`filter`) operations every combinator is built from.

use crate::error::ParseError;

/// Either a produced value or a parse failure over tokens of type `T`
pub type Outcome<V, T> = Result<V, ParseError<T>>;

/// Sequencing and filtering for [`Outcome`]
pub trait OutcomeExt<V, T>: Sized {
    /// Runs `then` on a successful value and merges both values with `combine`.
    ///
    /// `then` is never evaluated when `self` is a failure. A failure from either
    /// step is returned unchanged.
    fn bind<U, R, F, C>(self, then: F, combine: C) -> Outcome<R, T>
    where
        F: FnOnce(&V) -> Outcome<U, T>,
        C: FnOnce(V, U) -> R;

    /// Keeps a successful value only if `predicate` accepts it.
    ///
    /// A rejected value is dropped and replaced by [`ParseError::AssertionFailed`].
    fn filter<F>(self, predicate: F) -> Outcome<V, T>
    where
        F: FnOnce(&V) -> bool;
}

impl<V, T> OutcomeExt<V, T> for Outcome<V, T> {
    fn bind<U, R, F, C>(self, then: F, combine: C) -> Outcome<R, T>
    where
        F: FnOnce(&V) -> Outcome<U, T>,
        C: FnOnce(V, U) -> R,
    {
        let first = self?;
        let second = then(&first)?;
        Ok(combine(first, second))
    }

    fn filter<F>(self, predicate: F) -> Outcome<V, T>
    where
        F: FnOnce(&V) -> bool,
    {
        match self {
            Ok(value) if predicate(&value) => Ok(value),
            Ok(_) => Err(ParseError::AssertionFailed),
            Err(error) => Err(error),
        }
    }
}
