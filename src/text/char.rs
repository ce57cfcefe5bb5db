use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that matches a specific character
#[derive(Debug, Clone, Copy)]
pub struct IsChar(char);

impl<'code> Parser<'code> for IsChar {
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.peek() {
            None => Err(ParseError::TooShort),
            Some(ch) if ch == self.0 => Ok(cursor.split(ch.len_utf8())),
            Some(_) => Err(ParseError::NoMatch),
        }
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn is_char(expected: char) -> IsChar {
    IsChar(expected)
}
