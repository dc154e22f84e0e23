use crate::Position;

/// A saved cursor state for backtracking.
///
/// Scanners hand these out from `checkpoint()` and accept them back in
/// `restore()`. The index is the scanner's logical read index, which may sit
/// past the end of the scanned range after EOF sentinel reads; the position
/// is always clamped to real text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    index: usize,
    position: Position,
}

impl Checkpoint {
    /// Creates a new checkpoint with the given index and position.
    pub fn new(index: usize, position: Position) -> Self {
        Self { index, position }
    }

    /// Returns the logical read index stored in this checkpoint.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the position stored in this checkpoint.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the character offset, clamped to real text.
    pub fn offset(&self) -> usize {
        self.position.offset
    }
}
