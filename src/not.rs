use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
#[derive(Debug, Clone)]
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(_) => Err(ParseError::UnexpectedMatch),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}
