/// The result of evaluating a rule.
///
/// `Undefined` means "no match" and is shared by every rule, so drivers can
/// test for it with [`Token::is_undefined`] without looking at any payload.
/// Every other variant is a defined token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token<T> {
    /// No rule matched.
    Undefined,
    /// A run of whitespace.
    Whitespace,
    /// The end of the scanned range.
    Eof,
    /// A match carrying the data supplied by the rule's owner.
    Other(T),
}

impl<T> Default for Token<T> {
    fn default() -> Self {
        Token::Undefined
    }
}

impl<T> Token<T> {
    /// Returns true for the no-match token.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Token::Undefined)
    }

    /// Returns true for any token other than `Undefined`.
    pub fn is_defined(&self) -> bool {
        !self.is_undefined()
    }

    /// Returns true for a whitespace token.
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }

    /// Returns true for a token carrying data.
    pub fn is_other(&self) -> bool {
        matches!(self, Token::Other(_))
    }

    /// Returns the payload of an `Other` token.
    pub fn data(&self) -> Option<&T> {
        match self {
            Token::Other(data) => Some(data),
            _ => None,
        }
    }

    /// Maps the payload, keeping every other variant as is.
    pub fn map<U, F>(self, f: F) -> Token<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Token::Undefined => Token::Undefined,
            Token::Whitespace => Token::Whitespace,
            Token::Eof => Token::Eof,
            Token::Other(data) => Token::Other(f(data)),
        }
    }
}
