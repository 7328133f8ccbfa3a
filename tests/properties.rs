//! Property-based tests for the combinator algebra.

use proptest::prelude::*;
use strcomb::{
    AndThenExt, MapExt, OneOrMoreExt, OrElseExt, ParseError, Parser, ZeroOrOneExt, one_of,
};

/// Small alphabet so that generated sets and inputs overlap often
fn char_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['a', 'b', 'c', 'x', 'y', '0', '1', '.', 'é'])
}

fn set_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(char_strategy(), 1..4).prop_map(|chars| chars.into_iter().collect())
}

fn input_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(char_strategy(), 0..12).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn test_matcher_accepts_members(set in set_strategy(), input in input_strategy()) {
        let parser = one_of(set.clone());
        let result = parser.parse(&input);

        match input.chars().next() {
            Some(first) if set.contains(first) => {
                let (value, rest) = result.unwrap();
                prop_assert_eq!(value, first.to_string());
                prop_assert_eq!(rest, &input[first.len_utf8()..]);
            }
            Some(first) => {
                prop_assert_eq!(
                    result,
                    Err(ParseError::UnexpectedCharacter { expected: set.into(), found: first })
                );
            }
            None => {
                prop_assert_eq!(result, Err(ParseError::EndOfInput { expected: set.into() }));
            }
        }
    }

    #[test]
    fn test_alternative_last_error_wins(
        first in set_strategy(),
        second in set_strategy(),
        input in input_strategy(),
    ) {
        let p1 = one_of(first);
        let p2 = one_of(second);
        let parser = p1.clone().or_else(p2.clone());

        match (p1.parse(&input), p2.parse(&input)) {
            (Ok(expected), _) => prop_assert_eq!(parser.parse(&input), Ok(expected)),
            (Err(_), second_result) => prop_assert_eq!(parser.parse(&input), second_result),
        }
    }

    #[test]
    fn test_optional_never_fails(set in set_strategy(), input in input_strategy()) {
        let parser = one_of(set.clone())
            .and_then(one_of(set), "pair")
            .zero_or_one();

        let (value, rest) = parser.parse(&input).unwrap();
        if value.is_empty() {
            prop_assert_eq!(rest, input.as_str());
        } else {
            prop_assert_eq!(format!("{value}{rest}"), input.clone());
        }
    }

    #[test]
    fn test_repetition_is_greedy(set in set_strategy(), input in input_strategy()) {
        let inner = one_of(set.clone());
        let parser = inner.clone().one_or_more("run");

        match inner.parse(&input) {
            Err(error) => {
                prop_assert_eq!(
                    parser.parse(&input),
                    Err(ParseError::NoneMatched { label: "run".into(), source: Box::new(error) })
                );
            }
            Ok(_) => {
                let run: String = input.chars().take_while(|c| set.contains(*c)).collect();
                let (value, rest) = parser.parse(&input).unwrap();
                prop_assert_eq!(rest, &input[run.len()..]);
                prop_assert_eq!(value, run);
            }
        }
    }

    #[test]
    fn test_map_preserves_residual_and_failure(set in set_strategy(), input in input_strategy()) {
        let inner = one_of(set);
        let parser = inner.clone().map(|value| value.to_uppercase());

        match inner.parse(&input) {
            Ok((value, rest)) => prop_assert_eq!(parser.parse(&input), Ok((value.to_uppercase(), rest))),
            Err(error) => prop_assert_eq!(parser.parse(&input), Err(error)),
        }
    }

    #[test]
    fn test_sequence_is_associative(
        a in set_strategy(),
        b in set_strategy(),
        c in set_strategy(),
        input in input_strategy(),
    ) {
        let left = one_of(a.clone())
            .and_then(one_of(b.clone()), "ab")
            .and_then(one_of(c.clone()), "abc");
        let right = one_of(a).and_then(one_of(b).and_then(one_of(c), "bc"), "abc");

        prop_assert_eq!(left.parse(&input).ok(), right.parse(&input).ok());
    }

    #[test]
    fn test_parsing_is_repeatable(input in input_strategy()) {
        let parser = one_of("ab").one_or_more("ab+").or_else(one_of("x").zero_or_one());

        prop_assert_eq!(parser.parse(&input), parser.parse(&input));
    }
}
