/// Represents a location inside a text store.
///
/// All three coordinates are zero-based and count characters, not bytes, so
/// they line up with the offsets accepted by [`TextStore`](crate::TextStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed), reset after every line delimiter
    pub column: usize,
    /// Character offset from the start of the store
    pub offset: usize,
}

impl Position {
    /// Creates a new position at the start of the store.
    pub fn new() -> Self {
        Self {
            line: 0,
            column: 0,
            offset: 0,
        }
    }

    /// Creates a position with the given values.
    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}
