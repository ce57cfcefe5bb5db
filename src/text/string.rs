use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string at the start of the input
#[derive(Debug, Clone)]
pub struct IsString {
    expected: Cow<'static, str>,
}

impl IsString {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for IsString {
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let rest = cursor.rest();
        let expected = self.expected.as_ref();

        if rest.starts_with(expected) {
            return Ok(cursor.split(expected.len()));
        }

        // Input that cannot hold the target is reported as too short, even on
        // an early mismatch.
        let wanted = expected.chars().count();
        if rest.chars().take(wanted).count() < wanted {
            Err(ParseError::TooShort)
        } else {
            Err(ParseError::NoMatch)
        }
    }
}

/// Convenience function to create an IsString parser
pub fn is_string(expected: impl Into<Cow<'static, str>>) -> IsString {
    IsString::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let cursor = StrCursor::new("hello");
        let parser = is_string("hello");

        let (result, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(result, "hello");
        assert!(cursor.eos());
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let cursor = StrCursor::new("Hello world");
        let parser = is_string("Hello");

        let (result, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(result, "Hello");
        assert_eq!(cursor.rest(), " world");
    }

    #[test]
    fn test_unicode_string() {
        let cursor = StrCursor::new("こんにちは世界");
        let parser = is_string("こんにちは");

        let (result, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(result, "こんにちは");
        assert_eq!(cursor.rest(), "世界");
    }

    #[test]
    fn test_empty_string() {
        let cursor = StrCursor::new("hello");
        let parser = is_string("");

        let (result, cursor_after) = parser.parse(cursor).unwrap();
        assert_eq!(result, "");
        // Cursor should not advance for empty string
        assert_eq!(cursor.position(), cursor_after.position());
    }

    #[test]
    fn test_mismatch_first_char() {
        let cursor = StrCursor::new("world");
        let result = is_string("hello").parse(cursor);

        assert!(matches!(result, Err(ParseError::NoMatch)));
    }

    #[test]
    fn test_input_shorter_than_target() {
        let cursor = StrCursor::new("hel");
        let result = is_string("hello").parse(cursor);

        assert!(matches!(result, Err(ParseError::TooShort)));
    }

    #[test]
    fn test_short_input_with_early_mismatch() {
        let cursor = StrCursor::new("ab");
        let result = is_string("xyz").parse(cursor);

        assert!(matches!(result, Err(ParseError::TooShort)));
    }

    #[test]
    fn test_short_measured_in_chars() {
        // Two bytes but a single unit
        let cursor = StrCursor::new("é");
        let result = is_string("ab").parse(cursor);

        assert!(matches!(result, Err(ParseError::TooShort)));
    }

    #[test]
    fn test_owned_target() {
        let target = String::from("dyn");
        let parser = is_string(target);

        let (result, rest) = parser.parse_str("dynamic").unwrap();
        assert_eq!(result, "dyn");
        assert_eq!(rest, "amic");
    }
}
