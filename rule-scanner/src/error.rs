use text_model::StoreError;
use thiserror::Error;

/// Errors raised while building rules, configuring scanners or moving a
/// cursor against its contract.
///
/// A rule that does not match is not an error; it returns
/// [`Token::Undefined`](crate::Token::Undefined).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A pattern rule needs at least one start character.
    #[error("pattern start sequence must not be empty")]
    EmptyStartSequence,

    /// A pattern rule needs an end sequence, line-break termination, or both.
    #[error("pattern needs an end sequence or must break on end of line")]
    NoTermination,

    /// `unread` was called with no read left to undo.
    #[error("unread at offset {offset} has no matching read")]
    UnbalancedUnread { offset: usize },

    /// The scanner configuration lists no line delimiters.
    #[error("at least one line delimiter is required")]
    NoLineDelimiters,

    /// A configured line delimiter is the empty string.
    #[error("line delimiter #{index} is empty")]
    EmptyLineDelimiter { index: usize },

    /// The underlying text store rejected a range.
    #[error("text store error: {0}")]
    Store(#[from] StoreError),
}

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;
