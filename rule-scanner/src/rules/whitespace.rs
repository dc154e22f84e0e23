use crate::token::Token;
use crate::traits::{CharacterScanner, Rule};

/// Decides which characters count as whitespace.
pub trait WhitespaceDetector {
    fn is_whitespace(&self, ch: char) -> bool;
}

/// Uses [`char::is_whitespace`], so line delimiters are whitespace too.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultWhitespaceDetector;

impl WhitespaceDetector for DefaultWhitespaceDetector {
    fn is_whitespace(&self, ch: char) -> bool {
        ch.is_whitespace()
    }
}

/// A rule that matches a run of whitespace.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceRule<D = DefaultWhitespaceDetector> {
    detector: D,
}

impl<D> WhitespaceRule<D>
where
    D: WhitespaceDetector,
{
    /// Creates a rule using `detector` to classify characters.
    pub fn new(detector: D) -> Self {
        Self { detector }
    }
}

impl<S, D, T> Rule<S, T> for WhitespaceRule<D>
where
    S: CharacterScanner + ?Sized,
    D: WhitespaceDetector,
{
    fn evaluate(&self, scanner: &mut S) -> Token<T> {
        let mut matched = false;
        loop {
            let before = scanner.checkpoint();
            match scanner.read() {
                Some(ch) if self.detector.is_whitespace(ch) => matched = true,
                _ => {
                    scanner.restore(before);
                    break;
                }
            }
        }

        if matched {
            Token::Whitespace
        } else {
            Token::Undefined
        }
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        Some(first_char.is_some_and(|ch| self.detector.is_whitespace(ch)))
    }
}
