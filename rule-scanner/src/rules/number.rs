use crate::token::Token;
use crate::traits::{CharacterScanner, Rule};

/// A rule that matches a run of ASCII digits.
#[derive(Debug, Clone)]
pub struct NumberRule<T> {
    data: T,
    column: Option<usize>,
}

impl<T> NumberRule<T> {
    /// Creates a rule producing `data` for each run of digits.
    pub fn new(data: T) -> Self {
        Self { data, column: None }
    }

    /// Sets or clears (`None`) the column numbers must start in.
    pub fn set_column_constraint(&mut self, column: Option<usize>) {
        self.column = column;
    }
}

impl<S, T> Rule<S, T> for NumberRule<T>
where
    S: CharacterScanner + ?Sized,
    T: Clone,
{
    fn evaluate(&self, scanner: &mut S) -> Token<T> {
        let mark = scanner.checkpoint();
        let in_column = self.column.map_or(true, |column| column == scanner.column());

        match scanner.read() {
            Some(ch) if in_column && ch.is_ascii_digit() => {}
            _ => {
                scanner.restore(mark);
                return Token::Undefined;
            }
        }

        loop {
            let before = scanner.checkpoint();
            match scanner.read() {
                Some(ch) if ch.is_ascii_digit() => {}
                _ => {
                    scanner.restore(before);
                    return Token::Other(self.data.clone());
                }
            }
        }
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        Some(first_char.is_some_and(|ch| ch.is_ascii_digit()))
    }
}
