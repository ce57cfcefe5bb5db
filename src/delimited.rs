use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// This parses `opener + content + closer` and returns just the `content`
/// value with the delimiters discarded. Whitespace is not skipped.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
/// - `"<html/>"` → `"html"`
#[derive(Debug, Clone)]
pub struct Delimited<P1, P2, P3> {
    opener: P1,
    content: P2,
    closer: P3,
}

impl<P1, P2, P3> Delimited<P1, P2, P3> {
    pub fn new(opener: P1, content: P2, closer: P3) -> Self {
        Delimited {
            opener,
            content,
            closer,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Delimited<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self
            .opener
            .parse(cursor)
            .map_err(|e| ParseError::OpenerFailed(Box::new(e)))?;
        let (content, cursor) = self
            .content
            .parse(cursor)
            .map_err(|e| ParseError::ContentFailed(Box::new(e)))?;
        let (_, cursor) = self
            .closer
            .parse(cursor)
            .map_err(|e| ParseError::CloserFailed(Box::new(e)))?;

        Ok((content, cursor))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn delimited<'code, P1, P2, P3>(opener: P1, content: P2, closer: P3) -> Delimited<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Delimited::new(opener, content, closer)
}
