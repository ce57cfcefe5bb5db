use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that takes a fixed number of characters verbatim
#[derive(Debug, Clone, Copy)]
pub struct Take {
    count: usize,
}

impl Take {
    pub fn new(count: usize) -> Self {
        Take { count }
    }
}

impl<'code> Parser<'code> for Take {
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut taken = 0;
        let mut len = 0;

        for ch in cursor.rest().chars().take(self.count) {
            taken += 1;
            len += ch.len_utf8();
        }

        if taken < self.count {
            return Err(ParseError::TooShort);
        }

        Ok(cursor.split(len))
    }
}

/// Convenience function to create a Take parser
pub fn take(count: usize) -> Take {
    Take::new(count)
}
