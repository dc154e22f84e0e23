use crate::error::{check_range, Result};

/// Storage for the characters of a document.
///
/// Offsets and lengths count characters. `replace(len(), 0, text)` is a
/// valid call and appends `text`.
pub trait TextStore {
    /// Returns the character at `offset`.
    fn char_at(&self, offset: usize) -> Result<char>;

    /// Returns the text of the range `offset..offset + length`.
    fn get(&self, offset: usize, length: usize) -> Result<String>;

    /// Returns the number of characters in the store.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no characters.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces `length` characters at `offset` with `text`.
    fn replace(&mut self, offset: usize, length: usize, text: &str) -> Result<()>;

    /// Replaces the whole content of the store. Unlike `replace`, this
    /// cannot fail.
    fn set(&mut self, text: &str);
}

/// A text store backed by one contiguous character vector.
///
/// Edits shift the tail of the vector, which is fine for small documents and
/// for stores that are mostly read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharStore {
    chars: Vec<char>,
}

impl CharStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<&str> for CharStore {
    fn from(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

impl From<String> for CharStore {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl TextStore for CharStore {
    fn char_at(&self, offset: usize) -> Result<char> {
        check_range(offset, 1, self.chars.len())?;
        Ok(self.chars[offset])
    }

    fn get(&self, offset: usize, length: usize) -> Result<String> {
        check_range(offset, length, self.chars.len())?;
        Ok(self.chars[offset..offset + length].iter().collect())
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn replace(&mut self, offset: usize, length: usize, text: &str) -> Result<()> {
        check_range(offset, length, self.chars.len())?;
        self.chars.splice(offset..offset + length, text.chars());
        Ok(())
    }

    fn set(&mut self, text: &str) {
        self.chars.clear();
        self.chars.extend(text.chars());
    }
}
