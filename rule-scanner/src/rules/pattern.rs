use crate::error::{Error, Result};
use crate::token::Token;
use crate::traits::{CharacterScanner, Rule};
use tracing::trace;

/// A rule for patterns that begin with a start sequence and end with an end
/// sequence, the end of the line, or the end of the input.
///
/// Any character following the escape character is skipped, so an escaped
/// end sequence or line delimiter never terminates the pattern. When a column
/// constraint is set, the pattern only matches if it starts in that column.
///
/// A line delimiter that terminates the pattern is part of the match. A
/// pattern that is still open at the end of the input matches up to the end,
/// and the scanner is left exactly at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRule<T> {
    start: Vec<char>,
    end: Vec<char>,
    data: T,
    escape: Option<char>,
    breaks_on_eol: bool,
    column: Option<usize>,
}

impl<T> PatternRule<T> {
    /// Creates a rule for the given start and end sequences.
    ///
    /// `end` may be `None` only when `breaks_on_eol` is set, otherwise the
    /// pattern could never terminate.
    pub fn new(
        start: &str,
        end: Option<&str>,
        data: T,
        escape: Option<char>,
        breaks_on_eol: bool,
    ) -> Result<Self> {
        if start.is_empty() {
            return Err(Error::EmptyStartSequence);
        }
        if end.is_none() && !breaks_on_eol {
            return Err(Error::NoTermination);
        }
        Ok(Self {
            start: start.chars().collect(),
            end: end.map(|end| end.chars().collect()).unwrap_or_default(),
            data,
            escape,
            breaks_on_eol,
            column: None,
        })
    }

    /// A pattern that is also ended by the end of the line, like a string
    /// literal.
    pub fn single_line(start: &str, end: &str, data: T, escape: Option<char>) -> Result<Self> {
        Self::new(start, Some(end), data, escape, true)
    }

    /// A pattern that may span lines, like a block comment.
    pub fn multi_line(start: &str, end: &str, data: T, escape: Option<char>) -> Result<Self> {
        Self::new(start, Some(end), data, escape, false)
    }

    /// A pattern that runs to the end of the line, like a line comment.
    pub fn end_of_line(start: &str, data: T, escape: Option<char>) -> Result<Self> {
        Self::new(start, None, data, escape, true)
    }

    /// Sets or clears (`None`) the column the pattern must start in.
    pub fn set_column_constraint(&mut self, column: Option<usize>) {
        self.column = column;
    }

    /// Builder form of [`set_column_constraint`](Self::set_column_constraint).
    pub fn with_column_constraint(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Returns the column the pattern must start in, if any.
    pub fn column_constraint(&self) -> Option<usize> {
        self.column
    }

    /// Returns the data of the token this rule produces.
    pub fn data(&self) -> &T {
        &self.data
    }

    fn first_start_char(&self) -> char {
        self.start[0]
    }

    /// Evaluates the rule without the column constraint.
    fn evaluate_unconstrained<S>(&self, scanner: &mut S) -> bool
    where
        S: CharacterScanner + ?Sized,
    {
        let mark = scanner.checkpoint();
        if scanner.read() == Some(self.first_start_char())
            && detect_sequence(scanner, &self.start[1..], false)
        {
            self.consume_body(scanner);
            return true;
        }
        scanner.restore(mark);
        false
    }

    /// Reads up to and including whatever terminates the pattern.
    fn consume_body<S>(&self, scanner: &mut S)
    where
        S: CharacterScanner + ?Sized,
    {
        let delimiters = scanner.legal_line_delimiters();
        loop {
            let before = scanner.checkpoint();
            let Some(ch) = scanner.read() else {
                // Hand back the EOF sentinel read.
                scanner.restore(before);
                return;
            };

            if self.escape == Some(ch) {
                let escaped = scanner.checkpoint();
                if scanner.read().is_none() {
                    scanner.restore(escaped);
                }
            } else if self.end.first() == Some(&ch) {
                if detect_sequence(scanner, &self.end[1..], true) {
                    return;
                }
            } else if self.breaks_on_eol {
                let at_delimiter = delimiters.iter().any(|delimiter| {
                    delimiter[0] == ch && detect_sequence(scanner, &delimiter[1..], false)
                });
                if at_delimiter {
                    return;
                }
            }
        }
    }
}

impl<S, T> Rule<S, T> for PatternRule<T>
where
    S: CharacterScanner + ?Sized,
    T: Clone,
{
    fn evaluate(&self, scanner: &mut S) -> Token<T> {
        if let Some(column) = self.column {
            if scanner.peek() != Some(self.first_start_char()) || scanner.column() != column {
                return Token::Undefined;
            }
        }

        let offset = scanner.offset();
        if self.evaluate_unconstrained(scanner) {
            trace!(offset, end = scanner.offset(), "pattern matched");
            Token::Other(self.data.clone())
        } else {
            Token::Undefined
        }
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        Some(first_char == Some(self.first_start_char()))
    }
}

/// Matches `rest`, the remainder of a sequence whose first character has
/// already been read.
///
/// Reaching the end of the input counts as a match when `eof_allowed` is
/// set; the scanner then stays at the end. On a mismatch every character read
/// here is given back.
fn detect_sequence<S>(scanner: &mut S, rest: &[char], eof_allowed: bool) -> bool
where
    S: CharacterScanner + ?Sized,
{
    let mark = scanner.checkpoint();
    for &expected in rest {
        let before = scanner.checkpoint();
        match scanner.read() {
            None if eof_allowed => {
                scanner.restore(before);
                return true;
            }
            Some(ch) if ch == expected => {}
            _ => {
                scanner.restore(mark);
                return false;
            }
        }
    }
    true
}
