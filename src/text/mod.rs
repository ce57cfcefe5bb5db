//! Terminal parsers that match text directly

pub mod char;
pub mod set;
pub mod string;
pub mod take;
pub mod take_until;

pub use char::is_char;
pub use set::{none_of, one_of};
pub use string::is_string;
pub use take::take;
pub use take_until::{strict_take_until, take_until};
