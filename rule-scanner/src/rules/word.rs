use crate::token::Token;
use crate::traits::{CharacterScanner, Rule};
use std::collections::HashMap;

/// Decides which characters make up a word.
pub trait WordDetector {
    fn is_word_start(&self, ch: char) -> bool;
    fn is_word_part(&self, ch: char) -> bool;
}

/// Identifier-shaped words: a letter or `_`, then letters, digits or `_`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierDetector;

impl WordDetector for IdentifierDetector {
    fn is_word_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    fn is_word_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_'
    }
}

/// A rule that reads a whole word and looks it up in a table.
///
/// Known words yield their own token. Other words yield the default token;
/// when that default is `Undefined` the word is given back, so a later rule
/// can claim it.
#[derive(Debug, Clone)]
pub struct WordRule<D, T> {
    detector: D,
    default_token: Token<T>,
    words: HashMap<String, T>,
    column: Option<usize>,
}

impl<D, T> WordRule<D, T>
where
    D: WordDetector,
{
    /// Creates a rule that only recognizes words added with [`add_word`](Self::add_word).
    pub fn new(detector: D) -> Self {
        Self::with_default(detector, Token::Undefined)
    }

    /// Creates a rule returning `default_token` for words not in the table.
    pub fn with_default(detector: D, default_token: Token<T>) -> Self {
        Self {
            detector,
            default_token,
            words: HashMap::new(),
            column: None,
        }
    }

    /// Maps `word` to a token carrying `data`.
    pub fn add_word(&mut self, word: impl Into<String>, data: T) {
        self.words.insert(word.into(), data);
    }

    /// Builder form of [`add_word`](Self::add_word) for a group of words
    /// sharing one payload.
    pub fn with_words<I, W>(mut self, words: I, data: T) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
        T: Clone,
    {
        for word in words {
            self.add_word(word, data.clone());
        }
        self
    }

    /// Sets or clears (`None`) the column words must start in.
    pub fn set_column_constraint(&mut self, column: Option<usize>) {
        self.column = column;
    }
}

impl<S, D, T> Rule<S, T> for WordRule<D, T>
where
    S: CharacterScanner + ?Sized,
    D: WordDetector,
    T: Clone,
{
    fn evaluate(&self, scanner: &mut S) -> Token<T> {
        let mark = scanner.checkpoint();
        let in_column = self.column.map_or(true, |column| column == scanner.column());

        let first = match scanner.read() {
            Some(ch) if in_column && self.detector.is_word_start(ch) => ch,
            _ => {
                scanner.restore(mark);
                return Token::Undefined;
            }
        };

        let mut word = String::from(first);
        loop {
            let before = scanner.checkpoint();
            match scanner.read() {
                Some(ch) if self.detector.is_word_part(ch) => word.push(ch),
                _ => {
                    scanner.restore(before);
                    break;
                }
            }
        }

        if let Some(data) = self.words.get(&word) {
            return Token::Other(data.clone());
        }
        if self.default_token.is_undefined() {
            scanner.restore(mark);
        }
        self.default_token.clone()
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        Some(first_char.is_some_and(|ch| self.detector.is_word_start(ch)))
    }
}
