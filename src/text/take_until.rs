use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::mode::Mode;
use crate::parser::{ParseResult, Parser};
use memchr::memmem;
use std::borrow::Cow;
use tracing::trace;

/// Parser that consumes everything before the first occurrence of a target string
///
/// The target itself is left at the start of the remainder so a following
/// parser can match it explicitly. When the target does not occur, a
/// [`Mode::Flex`] parser succeeds with an empty value and the untouched input,
/// while a [`Mode::Strict`] parser fails with [`ParseError::NotFound`].
#[derive(Debug, Clone)]
pub struct TakeUntil {
    target: Cow<'static, str>,
    mode: Mode,
}

impl TakeUntil {
    pub fn new(target: impl Into<Cow<'static, str>>, mode: Mode) -> Self {
        Self {
            target: target.into(),
            mode,
        }
    }
}

impl<'code> Parser<'code> for TakeUntil {
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        // A match of valid UTF-8 inside valid UTF-8 always starts on a char boundary
        match memmem::find(cursor.rest().as_bytes(), self.target.as_bytes()) {
            Some(offset) => Ok(cursor.split(offset)),
            None if self.mode.accepts_empty() => {
                trace!(needle = %self.target, "take_until target absent, consuming nothing");
                Ok(("", cursor))
            }
            None => Err(ParseError::NotFound),
        }
    }
}

/// Consume up to `target`, succeeding with nothing consumed if it never occurs
pub fn take_until(target: impl Into<Cow<'static, str>>) -> TakeUntil {
    TakeUntil::new(target, Mode::Flex)
}

/// Consume up to `target`, failing if it never occurs
pub fn strict_take_until(target: impl Into<Cow<'static, str>>) -> TakeUntil {
    TakeUntil::new(target, Mode::Strict)
}
