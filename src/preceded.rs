use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that discards a prefix and returns what follows it
#[derive(Debug, Clone)]
pub struct Preceded<P1, P2> {
    prefix: P1,
    content: P2,
}

impl<P1, P2> Preceded<P1, P2> {
    pub fn new(prefix: P1, content: P2) -> Self {
        Preceded { prefix, content }
    }
}

impl<'code, P1, P2> Parser<'code> for Preceded<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self
            .prefix
            .parse(cursor)
            .map_err(|e| ParseError::PrefixFailed(Box::new(e)))?;
        self.content
            .parse(cursor)
            .map_err(|e| ParseError::ContentFailed(Box::new(e)))
    }
}

/// Convenience function to create a Preceded parser
pub fn preceded<'code, P1, P2>(prefix: P1, content: P2) -> Preceded<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Preceded::new(prefix, content)
}
