use thiserror::Error;

/// Boxed error produced by a fallible mapper passed to `try_map`
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a parser failed
///
/// Terminal parsers produce the leaf variants. Combinators wrap the failure of
/// the stage that broke, and keep it reachable through
/// [`std::error::Error::source`], so the full chain can be walked when needed.
/// A failure never carries a remainder or a partial value.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input is too short")]
    TooShort,

    #[error("input does not match")]
    NoMatch,

    #[error("found a forbidden character")]
    Forbidden,

    #[error("target not found in input")]
    NotFound,

    #[error("predicate never matched")]
    PredicateNeverMatched,

    #[error("first parser failed: {0}")]
    FirstFailed(#[source] Box<ParseError>),

    #[error("second parser failed: {0}")]
    SecondFailed(#[source] Box<ParseError>),

    #[error("separator failed: {0}")]
    SeparatorFailed(#[source] Box<ParseError>),

    #[error("opener failed: {0}")]
    OpenerFailed(#[source] Box<ParseError>),

    #[error("content failed: {0}")]
    ContentFailed(#[source] Box<ParseError>),

    #[error("closer failed: {0}")]
    CloserFailed(#[source] Box<ParseError>),

    #[error("prefix failed: {0}")]
    PrefixFailed(#[source] Box<ParseError>),

    #[error("terminator failed: {0}")]
    TerminatorFailed(#[source] Box<ParseError>),

    #[error("parser should match at least one time")]
    AtLeastOneRequired,

    #[error("cannot execute parser {times} times: {source}")]
    RepetitionFailed {
        times: usize,
        #[source]
        source: Box<ParseError>,
    },

    #[error("no branch matched")]
    NoBranchMatched,

    #[error("mapping failed: {0}")]
    MapFailed(#[source] BoxError),

    #[error("negative lookahead failed: unexpected match")]
    UnexpectedMatch,
}

impl ParseError {
    /// Innermost failure in the chain of wrapped parser errors
    ///
    /// Stops at a mapper error, which is not a `ParseError`.
    pub fn root(&self) -> &ParseError {
        match self {
            ParseError::FirstFailed(inner)
            | ParseError::SecondFailed(inner)
            | ParseError::SeparatorFailed(inner)
            | ParseError::OpenerFailed(inner)
            | ParseError::ContentFailed(inner)
            | ParseError::CloserFailed(inner)
            | ParseError::PrefixFailed(inner)
            | ParseError::TerminatorFailed(inner)
            | ParseError::RepetitionFailed { source: inner, .. } => inner.root(),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_leaf_display() {
        assert_eq!(ParseError::TooShort.to_string(), "input is too short");
        assert_eq!(ParseError::NoBranchMatched.to_string(), "no branch matched");
    }

    #[test]
    fn test_wrapped_display_includes_inner() {
        let error = ParseError::OpenerFailed(Box::new(ParseError::NoMatch));
        assert_eq!(error.to_string(), "opener failed: input does not match");
    }

    #[test]
    fn test_source_chain() {
        let error = ParseError::RepetitionFailed {
            times: 3,
            source: Box::new(ParseError::FirstFailed(Box::new(ParseError::TooShort))),
        };

        let first = error.source().unwrap();
        assert_eq!(first.to_string(), "first parser failed: input is too short");
        let leaf = first.source().unwrap();
        assert_eq!(leaf.to_string(), "input is too short");
        assert!(leaf.source().is_none());
    }

    #[test]
    fn test_root() {
        let error = ParseError::ContentFailed(Box::new(ParseError::SecondFailed(Box::new(
            ParseError::Forbidden,
        ))));
        assert!(matches!(error.root(), ParseError::Forbidden));
        assert!(matches!(ParseError::NotFound.root(), ParseError::NotFound));
    }

    #[test]
    fn test_map_failed_keeps_mapper_error() {
        let mapper_error = "12x".parse::<u32>().unwrap_err();
        let error = ParseError::MapFailed(Box::new(mapper_error));

        assert!(error.to_string().starts_with("mapping failed:"));
        assert!(error.source().unwrap().is::<std::num::ParseIntError>());
        assert!(matches!(error.root(), ParseError::MapFailed(_)));
    }
}
