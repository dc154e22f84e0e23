use thiserror::Error;

/// Errors reported by [`TextStore`](crate::TextStore) implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The requested range does not lie inside the store.
    #[error("range of {length} chars at offset {offset} is outside the store (length {len})")]
    OutOfBounds {
        offset: usize,
        length: usize,
        len: usize,
    },
}

/// Convenience type alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Checks that `offset..offset + length` fits inside a store of `len` chars.
pub(crate) fn check_range(offset: usize, length: usize, len: usize) -> Result<()> {
    match offset.checked_add(length) {
        Some(end) if end <= len => Ok(()),
        _ => Err(StoreError::OutOfBounds {
            offset,
            length,
            len,
        }),
    }
}
