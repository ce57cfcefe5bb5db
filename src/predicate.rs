use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::mode::Mode;
use crate::parser::{ParseResult, Parser};

/// Which predicate outcome halts accumulation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum BreakCondition {
    /// Stop at the first character the predicate accepts ("till")
    PredicateTrue,
    /// Stop at the first character the predicate rejects ("while")
    PredicateFalse,
}

impl BreakCondition {
    fn is_met(self, holds: bool) -> bool {
        match self {
            BreakCondition::PredicateTrue => holds,
            BreakCondition::PredicateFalse => !holds,
        }
    }
}

fn eval_predicate<'code, F>(
    cursor: StrCursor<'code>,
    predicate: &F,
    mode: Mode,
    break_on: BreakCondition,
) -> ParseResult<'code, &'code str>
where
    F: Fn(char) -> bool,
{
    let rest = cursor.rest();
    let end = rest
        .char_indices()
        .find(|&(_, ch)| break_on.is_met(predicate(ch)))
        .map_or(rest.len(), |(index, _)| index);

    if end == 0 && !mode.accepts_empty() {
        return Err(ParseError::PredicateNeverMatched);
    }

    Ok(cursor.split(end))
}

/// Parser that accumulates consecutive characters governed by a predicate
///
/// Built through [`take_while`], [`strict_take_while`], [`take_till`] and
/// [`strict_take_till`].
#[derive(Clone)]
pub struct TakeWhile<F> {
    predicate: F,
    mode: Mode,
    break_on: BreakCondition,
}

impl<F> TakeWhile<F> {
    fn new(predicate: F, mode: Mode, break_on: BreakCondition) -> Self {
        Self {
            predicate,
            mode,
            break_on,
        }
    }
}

impl<F> std::fmt::Debug for TakeWhile<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakeWhile")
            .field("predicate", &"<function>")
            .field("mode", &self.mode)
            .field("break_on", &self.break_on)
            .finish()
    }
}

impl<'code, F> Parser<'code> for TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        eval_predicate(cursor, &self.predicate, self.mode, self.break_on)
    }
}

/// Consume characters while `predicate` holds; never fails
pub fn take_while<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile::new(predicate, Mode::Flex, BreakCondition::PredicateFalse)
}

/// Consume characters while `predicate` holds; at least one is required
pub fn strict_take_while<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile::new(predicate, Mode::Strict, BreakCondition::PredicateFalse)
}

/// Consume characters until `predicate` holds; never fails
pub fn take_till<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile::new(predicate, Mode::Flex, BreakCondition::PredicateTrue)
}

/// Consume characters until `predicate` holds; at least one is required
pub fn strict_take_till<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile::new(predicate, Mode::Strict, BreakCondition::PredicateTrue)
}
