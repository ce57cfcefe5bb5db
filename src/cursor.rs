/// Immutable view over the text that is still to be parsed
///
/// A cursor is a copy of the full input together with a byte offset. Advancing
/// returns a new cursor, so any saved copy keeps pointing at its own position.
/// Offsets always sit on `char` boundaries; parsers advance by whole units.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StrCursor<'code> {
    source: &'code str,
    position: usize,
}

impl<'code> StrCursor<'code> {
    pub fn new(source: &'code str) -> Self {
        StrCursor {
            source,
            position: 0,
        }
    }

    /// The unconsumed suffix of the input
    pub fn rest(&self) -> &'code str {
        &self.source[self.position..]
    }

    /// The first unconsumed unit, if any
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Byte offset of this cursor within its source
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the source data without consuming the cursor
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the first `len` bytes of `rest()` together with the cursor past them
    ///
    /// `None` when `len` runs past the end of the input or lands inside a `char`.
    pub fn try_split(self, len: usize) -> Option<(&'code str, Self)> {
        let taken = self.rest().get(..len)?;
        let next = StrCursor {
            source: self.source,
            position: self.position + len,
        };
        Some((taken, next))
    }

    /// Returns the consumed prefix of `rest()` together with the cursor past it
    ///
    /// `len` is a byte length and must land on a `char` boundary of `rest()`.
    /// Parsers in this crate only call it with lengths measured from `rest()`.
    pub(crate) fn split(self, len: usize) -> (&'code str, Self) {
        debug_assert!(self.rest().is_char_boundary(len), "split inside a UTF-8 sequence");
        let end = self.position + len;
        let taken = &self.source[self.position..end];
        (
            taken,
            StrCursor {
                source: self.source,
                position: end,
            },
        )
    }
}

impl<'code> From<&'code str> for StrCursor<'code> {
    fn from(source: &'code str) -> Self {
        StrCursor::new(source)
    }
}
