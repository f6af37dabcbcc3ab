//! Algebraic properties of the combinators, checked over random token streams.

use proptest::prelude::*;
use tokcomb::many::any;
use tokcomb::prelude::*;

/// Outcome with the trailing cursor reduced to its position, so results compare
fn observe<'code, P>(parser: &P, tokens: &'code [u8]) -> Outcome<(P::Output, usize), u8>
where
    P: Parser<'code, u8>,
{
    parser
        .parse(TokenCursor::new(tokens))
        .map(|(value, rest)| (value, rest.position()))
}

fn tokens() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..3, 0..12)
}

proptest! {
    #[test]
    fn map_identity_is_neutral(input in tokens(), expected in 0u8..3) {
        let plain = symbol(expected);
        let mapped = map(symbol(expected), |token| token);

        prop_assert_eq!(observe(&plain, &input), observe(&mapped, &input));
    }

    #[test]
    fn bind_is_associative(input in tokens()) {
        // next token, then a repeat of it, then any run of its successor
        let left = bind(
            bind(next(), |a: &u8| symbol(*a), |a, b| (a, b)),
            |(_, b): &(u8, u8)| any(symbol((*b + 1) % 3)),
            |(a, b), cs| (a, b, cs),
        );
        let right = bind(
            next(),
            |a: &u8| bind(symbol(*a), |b: &u8| any(symbol((*b + 1) % 3)), |b, cs| (b, cs)),
            |a, (b, cs)| (a, b, cs),
        );

        prop_assert_eq!(observe(&left, &input), observe(&right, &input));
    }

    #[test]
    fn any_never_fails(input in tokens(), expected in 0u8..3) {
        let (items, position) = observe(&any(symbol(expected)), &input).unwrap();

        let run = input.iter().take_while(|token| **token == expected).count();
        prop_assert_eq!(items.len(), run);
        prop_assert_eq!(position, run);
    }

    #[test]
    fn or_retries_from_original_position(input in tokens(), a in 0u8..3, b in 0u8..3) {
        let pair = symbol(a).and(symbol(b)).map(|(first, _): (u8, u8)| first);
        let parser = pair.or(next());

        let starts_with_pair = input.len() >= 2 && input[0] == a && input[1] == b;
        let result = observe(&parser, &input);
        if starts_with_pair {
            prop_assert_eq!(result, Ok((a, 2)));
        } else {
            prop_assert_eq!(result, observe(&next(), &input));
        }
    }

    #[test]
    fn symbol_consumes_exactly_one(input in tokens(), expected in 0u8..3) {
        let result = observe(&symbol(expected), &input);
        match input.first() {
            Some(first) if *first == expected => {
                prop_assert_eq!(result, Ok((expected, 1)));
            }
            Some(first) => {
                prop_assert_eq!(
                    result,
                    Err(ParseError::UnexpectedToken { expected, actual: *first, position: 0 })
                );
            }
            None => {
                prop_assert_eq!(result, Err(ParseError::UnexpectedEndOfInput { position: 0 }));
            }
        }
    }

    #[test]
    fn maybe_never_fails(input in tokens(), expected in 0u8..3) {
        let (value, position) = observe(&maybe(symbol(expected)), &input).unwrap();
        match value {
            Some(token) => {
                prop_assert_eq!(token, expected);
                prop_assert_eq!(position, 1);
            }
            None => {
                prop_assert_eq!(position, 0);
            }
        }
    }

    #[test]
    fn capped_limit_is_prefix_of_greedy(input in tokens(), expected in 0u8..3, max in 0usize..5) {
        let (greedy, _) = observe(&any(symbol(expected)), &input).unwrap();
        let (capped, position) = observe(&at_most_capped(max, symbol(expected)), &input).unwrap();

        prop_assert_eq!(capped.len(), greedy.len().min(max));
        prop_assert_eq!(position, capped.len());

        let post_hoc = observe(&at_most(max, symbol(expected)), &input);
        if greedy.len() > max {
            prop_assert_eq!(post_hoc, Err(ParseError::AssertionFailed));
        } else {
            prop_assert_eq!(post_hoc, Ok((greedy.clone(), greedy.len())));
        }
    }
}
