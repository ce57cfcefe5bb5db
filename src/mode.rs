/// Policy for parsers that may legitimately match nothing
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Zero units (or zero repetitions) is a valid success
    #[default]
    Flex,
    /// At least one unit (or repetition) must match
    Strict,
}

impl Mode {
    /// Whether an empty match is acceptable under this mode
    pub fn accepts_empty(self) -> bool {
        matches!(self, Mode::Flex)
    }
}
