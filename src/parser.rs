use crate::cursor::StrCursor;
use crate::error::ParseError;

/// Outcome of a single parser invocation: the value and the remaining input, or why it failed
pub type ParseResult<'code, O> = Result<(O, StrCursor<'code>), ParseError>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and the cursor past the consumed prefix on
    /// success, or Err if the parse fails. The input cursor is never modified.
    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Parse a whole string, returning the value and the unconsumed suffix
    fn parse_str(&self, input: &'code str) -> Result<(Self::Output, &'code str), ParseError> {
        let (value, cursor) = self.parse(StrCursor::new(input))?;
        Ok((value, cursor.rest()))
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser, for mixing parser types in one collection or recursing
pub type BoxedParser<'code, O> = Box<dyn Parser<'code, Output = O> + 'code>;

/// Erase the concrete type of a parser
pub fn boxed<'code, P>(parser: P) -> BoxedParser<'code, P::Output>
where
    P: Parser<'code> + 'code,
{
    Box::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::string::is_string;

    #[test]
    fn test_parse_str_returns_rest() {
        let parser = is_string("foo");
        let (value, rest) = parser.parse_str("foobar").unwrap();
        assert_eq!(value, "foo");
        assert_eq!(rest, "bar");
    }

    #[test]
    fn test_reference_is_parser() {
        let parser = is_string("foo");
        let by_ref = &parser;

        let (value, cursor) = by_ref.parse(StrCursor::new("foo")).unwrap();
        assert_eq!(value, "foo");
        assert!(cursor.eos());
    }

    #[test]
    fn test_boxed_parser() {
        let parser: BoxedParser<'_, &str> = boxed(is_string("foo"));

        let (value, rest) = parser.parse_str("food").unwrap();
        assert_eq!(value, "foo");
        assert_eq!(rest, "d");
        assert!(parser.parse_str("bar").is_err());
    }

    #[test]
    fn test_reusable_across_inputs() {
        let parser = is_string("ab");

        assert!(parser.parse_str("abc").is_ok());
        assert!(parser.parse_str("xyz").is_err());
        assert!(parser.parse_str("ab").is_ok());
    }
}
