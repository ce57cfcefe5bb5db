use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::mode::Mode;
use crate::parser::{ParseResult, Parser};
use tracing::trace;

/// Parser combinator that collects repeated matches of the given parser
///
/// The loop stops when the parser fails, when the input is exhausted, or when
/// the parser succeeds without consuming anything. A zero-width value is not
/// collected, since repeating it could never make progress. Under
/// [`Mode::Strict`] at least one value must be collected.
#[derive(Debug, Clone)]
pub struct Many<P> {
    parser: P,
    mode: Mode,
}

impl<P> Many<P> {
    pub fn new(parser: P, mode: Mode) -> Self {
        Many { parser, mode }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        while !cursor.eos() {
            match self.parser.parse(cursor) {
                Ok((_, next_cursor)) if next_cursor.position() == cursor.position() => {
                    trace!(position = cursor.position(), "many stopped on zero-width match");
                    break;
                }
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(error) => {
                    // Many matches zero or more, so error is not propagated
                    trace!(count = results.len(), %error, "many stopped");
                    break;
                }
            }
        }

        if results.is_empty() && !self.mode.accepts_empty() {
            return Err(ParseError::AtLeastOneRequired);
        }

        Ok((results, cursor))
    }
}

/// Match zero or more occurrences of `parser`
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser, Mode::Flex)
}

/// Match one or more occurrences of `parser`
pub fn strict_many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser, Mode::Strict)
}
