use crate::error::Result;
use crate::token::Token;
use std::sync::Arc;
use text_model::{Checkpoint, Position};

/// A sequential character source that rules evaluate against.
///
/// Rules only see the document through this trait, so they can run over any
/// store, a sub-range of one, or a test double.
pub trait CharacterScanner {
    /// Reads the next character, or `None` at the end of the range.
    ///
    /// A read at the end still counts as a read: it must be balanced by an
    /// `unread` (or a `restore`) like any other.
    fn read(&mut self) -> Option<char>;

    /// Undoes the most recent read.
    ///
    /// Fails with [`Error::UnbalancedUnread`](crate::Error::UnbalancedUnread)
    /// when there is no read left to undo.
    fn unread(&mut self) -> Result<()>;

    /// Returns the zero-based column of the character about to be read.
    fn column(&self) -> usize;

    /// Returns the line delimiters this scanner recognizes, in the order
    /// rules should try them.
    fn legal_line_delimiters(&self) -> Arc<[Vec<char>]>;

    /// Returns the offset of the character about to be read.
    fn offset(&self) -> usize;

    /// Returns the line, column and offset of the character about to be read.
    fn position(&self) -> Position;

    /// Creates a checkpoint of the current state.
    fn checkpoint(&self) -> Checkpoint;

    /// Restores the scanner to a checkpoint.
    fn restore(&mut self, checkpoint: Checkpoint);

    /// Peeks at the next character without advancing.
    fn peek(&mut self) -> Option<char> {
        let checkpoint = self.checkpoint();
        let ch = self.read();
        self.restore(checkpoint);
        ch
    }
}

/// A matcher evaluated by a scanner at the current position.
///
/// On success the scanner sits just past the match. When the result is
/// [`Token::Undefined`] the scanner must be exactly where it was before the
/// call, so the next rule can try the same position.
pub trait Rule<S, T>
where
    S: CharacterScanner + ?Sized,
{
    /// Evaluates the rule at the scanner's current position.
    fn evaluate(&self, scanner: &mut S) -> Token<T>;

    /// Returns the priority of this rule. Higher priority rules are tried first.
    /// Default priority is 0; equal priorities keep their insertion order.
    fn priority(&self) -> i32 {
        0
    }

    /// Quick check: returns whether this rule might match based on the first character.
    ///
    /// - `Some(true)`  - This rule might match
    /// - `Some(false)` - This rule definitely won't match
    /// - `None`        - Unknown, need to evaluate
    #[inline]
    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        let _ = first_char;
        None
    }
}
