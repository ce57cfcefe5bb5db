use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use tracing::trace;

/// Parser combinator that applies a parser exactly `times` times in sequence
///
/// All-or-nothing: if any application fails, the whole parse fails with
/// [`ParseError::RepetitionFailed`] and the values collected so far are dropped.
#[derive(Debug, Clone)]
pub struct Count<P> {
    parser: P,
    times: usize,
}

impl<P> Count<P> {
    pub fn new(parser: P, times: usize) -> Self {
        Count { parser, times }
    }
}

impl<'code, P> Parser<'code> for Count<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        for iteration in 0..self.times {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(error) => {
                    trace!(iteration, times = self.times, %error, "count failed");
                    return Err(ParseError::RepetitionFailed {
                        times: self.times,
                        source: Box::new(error),
                    });
                }
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Count parser
pub fn count<'code, P>(parser: P, times: usize) -> Count<P>
where
    P: Parser<'code>,
{
    Count::new(parser, times)
}
