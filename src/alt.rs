use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use tracing::trace;

/// An ordered set of candidate parsers sharing one output type
///
/// Implemented for tuples of up to eight parsers, arrays and vectors. Use
/// [`BoxedParser`](crate::parser::BoxedParser) to put different parser types
/// in an array or vector.
pub trait Choice<'code> {
    type Output;

    /// Try each candidate in order on the same cursor, returning the first success
    fn choose(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output>;
}

fn choose_from<'code, P>(parsers: &[P], cursor: StrCursor<'code>) -> ParseResult<'code, P::Output>
where
    P: Parser<'code>,
{
    for (branch, parser) in parsers.iter().enumerate() {
        match parser.parse(cursor) {
            Ok(parsed) => return Ok(parsed),
            Err(error) => trace!(branch, %error, "alternative failed"),
        }
    }
    Err(ParseError::NoBranchMatched)
}

impl<'code, P, const N: usize> Choice<'code> for [P; N]
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn choose(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        choose_from(self, cursor)
    }
}

impl<'code, P> Choice<'code> for Vec<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn choose(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        choose_from(self, cursor)
    }
}

macro_rules! impl_choice_for_tuple {
    ($($parser:ident $index:tt),+) => {
        impl<'code, Out, $($parser),+> Choice<'code> for ($($parser,)+)
        where
            $($parser: Parser<'code, Output = Out>),+
        {
            type Output = Out;

            fn choose(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Out> {
                $(
                    match self.$index.parse(cursor) {
                        Ok(parsed) => return Ok(parsed),
                        Err(error) => trace!(branch = $index, %error, "alternative failed"),
                    }
                )+
                Err(ParseError::NoBranchMatched)
            }
        }
    };
}

impl_choice_for_tuple!(A 0);
impl_choice_for_tuple!(A 0, B 1);
impl_choice_for_tuple!(A 0, B 1, C 2);
impl_choice_for_tuple!(A 0, B 1, C 2, D 3);
impl_choice_for_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_choice_for_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_choice_for_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_choice_for_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

/// Parser combinator that tries candidates in order and keeps the first success
///
/// This is ordered choice: a later candidate is only tried when every earlier
/// one failed, and earlier failures leave no trace on the input.
#[derive(Debug, Clone)]
pub struct Alt<C> {
    choices: C,
}

impl<C> Alt<C> {
    pub fn new(choices: C) -> Self {
        Alt { choices }
    }
}

impl<'code, C> Parser<'code> for Alt<C>
where
    C: Choice<'code>,
{
    type Output = C::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.choices.choose(cursor)
    }
}

/// Convenience function to create an Alt parser
///
/// ```
/// use strcomb::alt::alt;
/// use strcomb::text::is_string;
/// use strcomb::Parser;
///
/// let parser = alt((is_string("none"), is_string("foo")));
/// let (value, rest) = parser.parse_str("foo bar baz").unwrap();
/// assert_eq!(value, "foo");
/// assert_eq!(rest, " bar baz");
/// ```
pub fn alt<'code, C>(choices: C) -> Alt<C>
where
    C: Choice<'code>,
{
    Alt::new(choices)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Alt<(Self, P)>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Alt::new((self, other))
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
