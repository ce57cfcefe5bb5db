//! # strcomb - Parser Combinators over Text
//!
//! strcomb provides composable, type-safe parsers over borrowed `&str` input.
//! Small parsers combine into larger ones using combinators; every parser
//! takes a [`StrCursor`] and returns either the parsed value with the cursor
//! past what it consumed, or a [`ParseError`].
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Zero copies**: Parsed text values are slices of the input
//! - **Composability**: Sequencing, alternation, repetition and mapping
//! - **Reusable parsers**: A parser holds only its configuration, so one value
//!   can be run against any number of inputs
//!
//! ```
//! use strcomb::{Parser, count, delimited, is_char, is_string, take, take_while};
//!
//! let tag = delimited(is_char('<'), take_while(char::is_alphabetic), is_string("/>"));
//! assert_eq!(tag.parse_str("<html/> foobar").unwrap(), ("html", " foobar"));
//!
//! let pairs = count(take(2), 3);
//! assert_eq!(pairs.parse_str("123456end").unwrap(), (vec!["12", "34", "56"], "end"));
//! ```

pub mod alt;
pub mod count;
pub mod cursor;
pub mod delimited;
pub mod error;
pub mod lazy;
pub mod many;
pub mod map;
pub mod mode;
pub mod not;
pub mod pair;
pub mod parser;
pub mod preceded;
pub mod predicate;
pub mod separated_pair;
pub mod terminated;
pub mod text;

pub use alt::{Alt, Choice, OrExt, alt};
pub use count::{Count, count};
pub use cursor::StrCursor;
pub use delimited::{Delimited, delimited};
pub use error::{BoxError, ParseError};
pub use lazy::{Lazy, lazy};
pub use many::{Many, many, strict_many};
pub use map::{Map, MapExt, TryMap, map, try_map};
pub use mode::Mode;
pub use not::{Not, not};
pub use pair::{Pair, PairExt, PairResult, pair};
pub use parser::{BoxedParser, ParseResult, Parser, boxed};
pub use preceded::{Preceded, preceded};
pub use predicate::{TakeWhile, strict_take_till, strict_take_while, take_till, take_while};
pub use separated_pair::{SeparatedPair, separated_pair};
pub use terminated::{Terminated, terminated};
pub use text::{is_char, is_string, none_of, one_of, strict_take_until, take, take_until};
