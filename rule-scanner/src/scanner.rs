use crate::config::ScannerConfig;
use crate::cursor::StoreCursor;
use crate::error::Result;
use crate::token::Token;
use crate::traits::{CharacterScanner, Rule};
use std::cmp::Reverse;
use text_model::TextStore;
use tracing::{debug, warn};

/// Rules for a [`RuleBasedScanner`] reading from a store of type `St`.
pub type RuleSet<'a, St, T> = Vec<Box<dyn Rule<StoreCursor<'a, St>, T> + 'a>>;

/// A token together with the range of text it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedToken<T> {
    pub token: Token<T>,
    pub offset: usize,
    pub length: usize,
}

/// Splits a store range into tokens by asking rules in turn.
///
/// The first rule returning a defined token wins. When no rule matches, one
/// character is consumed and the default token is returned, so the scanner
/// always makes progress.
pub struct RuleBasedScanner<'a, St, T>
where
    St: TextStore + ?Sized,
{
    cursor: StoreCursor<'a, St>,
    rules: RuleSet<'a, St, T>,
    default_token: Token<T>,
    token_offset: usize,
}

impl<'a, St, T> RuleBasedScanner<'a, St, T>
where
    St: TextStore + ?Sized,
    T: Clone,
{
    /// Creates a new scanner with the given cursor and rules.
    pub fn new(cursor: StoreCursor<'a, St>, rules: RuleSet<'a, St, T>) -> Self {
        // Stable sort, so rules of equal priority keep their order.
        let mut sorted_rules = rules;
        sorted_rules.sort_by_key(|rule| Reverse(rule.priority()));

        let token_offset = cursor.offset();
        Self {
            cursor,
            rules: sorted_rules,
            default_token: Token::Undefined,
            token_offset,
        }
    }

    /// Creates a scanner over the whole store with the default configuration.
    pub fn from_store(store: &'a St, rules: RuleSet<'a, St, T>) -> Result<Self> {
        Ok(Self::new(StoreCursor::new(store, &ScannerConfig::default())?, rules))
    }

    /// Sets the token returned for characters no rule claims.
    pub fn with_default_token(mut self, token: Token<T>) -> Self {
        self.default_token = token;
        self
    }

    /// Returns a reference to the cursor.
    pub fn cursor(&self) -> &StoreCursor<'a, St> {
        &self.cursor
    }

    /// Returns a mutable reference to the cursor, e.g. to rewind it with
    /// [`StoreCursor::reset`].
    pub fn cursor_mut(&mut self) -> &mut StoreCursor<'a, St> {
        &mut self.cursor
    }

    /// Returns the offset of the last token read.
    pub fn token_offset(&self) -> usize {
        self.token_offset
    }

    /// Returns the length of the last token read.
    pub fn token_length(&self) -> usize {
        self.cursor.offset().saturating_sub(self.token_offset)
    }

    /// Returns the text of the last token read.
    pub fn token_text(&self) -> Result<String> {
        Ok(self
            .cursor
            .store()
            .get(self.token_offset, self.token_length())?)
    }

    /// Reads the next token.
    pub fn next_token(&mut self) -> Token<T> {
        self.token_offset = self.cursor.offset();
        let first_char = self.cursor.peek();
        if first_char.is_none() {
            return Token::Eof;
        }

        for rule in &self.rules {
            // Quick check optimization: skip rules that definitely won't match
            if let Some(false) = rule.quick_check(first_char) {
                continue;
            }

            let checkpoint = self.cursor.checkpoint();
            let token = rule.evaluate(&mut self.cursor);
            if token.is_defined() && self.cursor.offset() < self.token_offset {
                warn!(
                    offset = self.token_offset,
                    moved_to = self.cursor.offset(),
                    "rule moved the cursor backwards, ignoring its token"
                );
            } else if token.is_defined() {
                debug!(
                    offset = self.token_offset,
                    length = self.token_length(),
                    "rule matched"
                );
                return token;
            }
            // A well-behaved rule already rewound; make sure of it.
            self.cursor.restore(checkpoint);
        }

        self.cursor.read();
        self.default_token.clone()
    }

    /// Collects every token up to the end of the range.
    pub fn tokenize(&mut self) -> Vec<ScannedToken<T>> {
        self.by_ref().collect()
    }
}

/// Make the scanner an iterator over tokens with their ranges. Iteration
/// stops at the end of the range; the final `Eof` token is not yielded.
impl<St, T> Iterator for RuleBasedScanner<'_, St, T>
where
    St: TextStore + ?Sized,
    T: Clone,
{
    type Item = ScannedToken<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            return None;
        }

        let length = self.token_length();
        if length == 0 {
            // A rule returned a defined token without consuming anything.
            warn!(offset = self.token_offset, "no progress made, stopping");
            return None;
        }

        Some(ScannedToken {
            token,
            offset: self.token_offset,
            length,
        })
    }
}
