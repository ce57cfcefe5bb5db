//! Property tests for the invariants every parser must uphold

use proptest::prelude::*;
use strcomb::{
    ParseError, Parser, is_char, is_string, many, none_of, one_of, strict_take_till,
    strict_take_until, strict_take_while, take, take_till, take_until, take_while,
};

/// Text drawn from a small alphabet so that matches actually happen
fn small_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just('a'),
            Just('b'),
            Just('1'),
            Just(' '),
            Just('é'),
            Just('🦀'),
        ],
        0..32,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Value followed by remainder must reconstruct the input exactly
fn assert_conserves<'code>(
    input: &'code str,
    result: Result<(&'code str, &'code str), ParseError>,
) -> Result<(), TestCaseError> {
    if let Ok((value, rest)) = result {
        prop_assert_eq!(value.len() + rest.len(), input.len());
        prop_assert!(input.starts_with(value));
        prop_assert!(input.ends_with(rest));
    }
    Ok(())
}

proptest! {
    #[test]
    fn primitives_conserve_length(input in small_text(), n in 0usize..8) {
        assert_conserves(&input, is_char('a').parse_str(&input))?;
        assert_conserves(&input, is_string("ab").parse_str(&input))?;
        assert_conserves(&input, take(n).parse_str(&input))?;
        assert_conserves(&input, one_of("ab1").parse_str(&input))?;
        assert_conserves(&input, none_of("ab1").parse_str(&input))?;
        assert_conserves(&input, take_until("b1").parse_str(&input))?;
        assert_conserves(&input, strict_take_until("b1").parse_str(&input))?;
    }

    #[test]
    fn predicate_consumers_conserve_length(input in small_text()) {
        let alpha = |c: char| c.is_alphabetic();
        assert_conserves(&input, take_while(alpha).parse_str(&input))?;
        assert_conserves(&input, strict_take_while(alpha).parse_str(&input))?;
        assert_conserves(&input, take_till(alpha).parse_str(&input))?;
        assert_conserves(&input, strict_take_till(alpha).parse_str(&input))?;
    }

    #[test]
    fn take_while_and_take_till_split_at_same_point(input in small_text()) {
        let digit = |c: char| c.is_ascii_digit();
        let (matched, rest) = take_while(digit).parse_str(&input).unwrap();
        let (inverse, inverse_rest) = take_till(|c| !digit(c)).parse_str(&input).unwrap();
        prop_assert_eq!(matched, inverse);
        prop_assert_eq!(rest, inverse_rest);
    }

    #[test]
    fn repeated_match_is_idempotent(target in "[a-z]{1,6}", tail in small_text()) {
        let input = format!("{target}{target}{tail}");
        let parser = is_string(target.clone());

        let (first, rest) = parser.parse_str(&input).unwrap();
        let (second, rest) = parser.parse_str(rest).unwrap();
        prop_assert_eq!(first, target.as_str());
        prop_assert_eq!(second, target.as_str());
        prop_assert_eq!(rest, tail.as_str());
    }

    #[test]
    fn take_until_then_match_round_trips(
        before in "[a-z ]{0,12}",
        after in "[a-z ]{0,12}",
    ) {
        let target = "<#>";
        let input = format!("{before}{target}{after}");

        let (head, rest) = take_until(target).parse_str(&input).unwrap();
        let (matched, tail) = is_string(target).parse_str(rest).unwrap();
        prop_assert_eq!(format!("{head}{matched}{tail}"), input);
    }

    #[test]
    fn many_terminates_and_conserves(input in small_text()) {
        // take_while can succeed without consuming; many must still stop
        let (chunks, rest) = many(take_while(|c: char| c.is_alphabetic()))
            .parse_str(&input)
            .unwrap();
        prop_assert!(chunks.iter().all(|chunk| !chunk.is_empty()));
        prop_assert_eq!(chunks.concat().len() + rest.len(), input.len());
    }
}
