use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches one character belonging to a set
#[derive(Debug, Clone)]
pub struct OneOf {
    set: Cow<'static, str>,
}

impl<'code> Parser<'code> for OneOf {
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.peek() {
            None => Err(ParseError::TooShort),
            Some(ch) if self.set.contains(ch) => Ok(cursor.split(ch.len_utf8())),
            Some(_) => Err(ParseError::NoMatch),
        }
    }
}

/// Parser that matches one character absent from a set
#[derive(Debug, Clone)]
pub struct NoneOf {
    set: Cow<'static, str>,
}

impl<'code> Parser<'code> for NoneOf {
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.peek() {
            None => Err(ParseError::TooShort),
            Some(ch) if self.set.contains(ch) => Err(ParseError::Forbidden),
            Some(ch) => Ok(cursor.split(ch.len_utf8())),
        }
    }
}

/// Creates a parser accepting any single character listed in `set`
pub fn one_of(set: impl Into<Cow<'static, str>>) -> OneOf {
    OneOf { set: set.into() }
}

/// Creates a parser accepting any single character not listed in `set`
pub fn none_of(set: impl Into<Cow<'static, str>>) -> NoneOf {
    NoneOf { set: set.into() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_of_member() {
        let cursor = StrCursor::new("b42");

        let (result, cursor) = one_of("abc").parse(cursor).unwrap();
        assert_eq!(result, "b");
        assert_eq!(cursor.rest(), "42");
    }

    #[test]
    fn test_one_of_non_member() {
        let cursor = StrCursor::new("xyz");
        let result = one_of("abc").parse(cursor);

        assert!(matches!(result, Err(ParseError::NoMatch)));
    }

    #[test]
    fn test_one_of_empty_input() {
        let result = one_of("abc").parse(StrCursor::new(""));

        assert!(matches!(result, Err(ParseError::TooShort)));
    }

    #[test]
    fn test_one_of_unicode_set() {
        let (result, rest) = one_of("αβγ").parse_str("γδ").unwrap();
        assert_eq!(result, "γ");
        assert_eq!(rest, "δ");
    }

    #[test]
    fn test_none_of_non_member() {
        let cursor = StrCursor::new("hello");

        let (result, cursor) = none_of("xyz").parse(cursor).unwrap();
        assert_eq!(result, "h");
        assert_eq!(cursor.rest(), "ello");
    }

    #[test]
    fn test_none_of_member_is_forbidden() {
        let cursor = StrCursor::new("yes");
        let result = none_of("xyz").parse(cursor);

        assert!(matches!(result, Err(ParseError::Forbidden)));
    }

    #[test]
    fn test_none_of_empty_input() {
        let result = none_of("xyz").parse(StrCursor::new(""));

        assert!(matches!(result, Err(ParseError::TooShort)));
    }

    #[test]
    fn test_empty_set() {
        assert!(one_of("").parse_str("a").is_err());
        assert!(none_of("").parse_str("a").is_ok());
    }
}
