use crate::cursor::StrCursor;
use crate::error::{BoxError, ParseError};
use crate::parser::{ParseResult, Parser};
use std::fmt;
use tracing::trace;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Map<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Parser combinator that post-processes a parsed value with a fallible mapper
///
/// A failure of the inner parser is returned unchanged. A failure of the
/// mapper becomes [`ParseError::MapFailed`], with the mapper's error as its
/// source; the remainder is dropped along with the value.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for TryMap<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryMap")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'code, P, F, U, E> Parser<'code> for TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<BoxError>,
{
    type Output = U;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        match (self.mapper)(value) {
            Ok(mapped) => Ok((mapped, cursor)),
            Err(error) => {
                let error = error.into();
                trace!(position = cursor.position(), %error, "mapper rejected value");
                Err(ParseError::MapFailed(error))
            }
        }
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Convenience function to create a TryMap parser
pub fn try_map<'code, P, F, U, E>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<BoxError>,
{
    TryMap::new(parser, mapper)
}

/// Extension trait to add .map() and .try_map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn try_map<F, U, E>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E>,
        E: Into<BoxError>,
    {
        TryMap::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
