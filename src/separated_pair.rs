use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that matches two values separated by a parser
///
/// This combinator parses `left + separator + right` and returns a tuple
/// `(left_value, right_value)` with the separator discarded.
///
/// # Examples
/// - `"1.0,2.0"` with separator `,` → `("1.0", "2.0")`
/// - `"hello->world"` with separator `->` → `("hello", "world")`
#[derive(Debug, Clone)]
pub struct SeparatedPair<P1, PS, P2> {
    left: P1,
    separator: PS,
    right: P2,
}

impl<P1, PS, P2> SeparatedPair<P1, PS, P2> {
    pub fn new(left: P1, separator: PS, right: P2) -> Self {
        SeparatedPair {
            left,
            separator,
            right,
        }
    }
}

impl<'code, P1, PS, P2> Parser<'code> for SeparatedPair<P1, PS, P2>
where
    P1: Parser<'code>,
    PS: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (left_val, cursor) = self
            .left
            .parse(cursor)
            .map_err(|e| ParseError::FirstFailed(Box::new(e)))?;
        let (_, cursor) = self
            .separator
            .parse(cursor)
            .map_err(|e| ParseError::SeparatorFailed(Box::new(e)))?;
        let (right_val, cursor) = self
            .right
            .parse(cursor)
            .map_err(|e| ParseError::SecondFailed(Box::new(e)))?;

        Ok(((left_val, right_val), cursor))
    }
}

/// Creates a parser that matches two values separated by the given parser
pub fn separated_pair<'code, P1, PS, P2>(
    left: P1,
    separator: PS,
    right: P2,
) -> SeparatedPair<P1, PS, P2>
where
    P1: Parser<'code>,
    PS: Parser<'code>,
    P2: Parser<'code>,
{
    SeparatedPair::new(left, separator, right)
}
