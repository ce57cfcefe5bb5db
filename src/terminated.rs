use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that returns its content and discards the suffix that must follow it
#[derive(Debug, Clone)]
pub struct Terminated<P1, P2> {
    content: P1,
    suffix: P2,
}

impl<P1, P2> Terminated<P1, P2> {
    pub fn new(content: P1, suffix: P2) -> Self {
        Terminated { content, suffix }
    }
}

impl<'code, P1, P2> Parser<'code> for Terminated<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (content, cursor) = self
            .content
            .parse(cursor)
            .map_err(|e| ParseError::ContentFailed(Box::new(e)))?;
        let (_, cursor) = self
            .suffix
            .parse(cursor)
            .map_err(|e| ParseError::TerminatorFailed(Box::new(e)))?;
        Ok((content, cursor))
    }
}

/// Convenience function to create a Terminated parser
pub fn terminated<'code, P1, P2>(content: P1, suffix: P2) -> Terminated<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Terminated::new(content, suffix)
}
