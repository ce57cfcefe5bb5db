use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// The two values produced by [`pair`], in parse order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairResult<T, K> {
    pub first: T,
    pub second: K,
}

impl<T, K> PairResult<T, K> {
    pub fn new(first: T, second: K) -> Self {
        PairResult { first, second }
    }

    pub fn into_tuple(self) -> (T, K) {
        (self.first, self.second)
    }
}

impl<T, K> From<PairResult<T, K>> for (T, K) {
    fn from(result: PairResult<T, K>) -> Self {
        result.into_tuple()
    }
}

/// Parser combinator that sequences two parsers and returns both results
///
/// Note: When chaining multiple `.and()` calls, this produces nested results like
/// `PairResult { first: PairResult { .. }, second: c }`. The nesting is explicit
/// about the parsing order.
///
/// Example:
/// ```
/// use strcomb::pair::PairExt;
/// use strcomb::text::is_string;
/// use strcomb::Parser;
///
/// let (result, rest) = is_string("foo")
///     .and(is_string("bar"))
///     .parse_str("foobarbaz")
///     .unwrap();
/// assert_eq!(result.first, "foo");
/// assert_eq!(result.second, "bar");
/// assert_eq!(rest, "baz");
/// ```
#[derive(Debug, Clone)]
pub struct Pair<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Pair<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Pair { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Pair<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = PairResult<P1::Output, P2::Output>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, cursor) = self
            .first
            .parse(cursor)
            .map_err(|e| ParseError::FirstFailed(Box::new(e)))?;
        let (second, cursor) = self
            .second
            .parse(cursor)
            .map_err(|e| ParseError::SecondFailed(Box::new(e)))?;
        Ok((PairResult { first, second }, cursor))
    }
}

/// Convenience function to create a Pair parser
pub fn pair<'code, P1, P2>(first: P1, second: P2) -> Pair<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Pair::new(first, second)
}

/// Extension trait to add .and() method support for parsers
pub trait PairExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> Pair<Self, P>
    where
        P: Parser<'code>,
    {
        Pair::new(self, other)
    }
}

/// Implement PairExt for all parsers
impl<'code, P> PairExt<'code> for P where P: Parser<'code> {}
