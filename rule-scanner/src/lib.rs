//! Rule-based scanning over text stores.
//!
//! A [`StoreCursor`] walks a [`TextStore`](text_model::TextStore) one
//! character at a time; [`Rule`]s evaluate against any [`CharacterScanner`]
//! and either claim the text at the cursor or leave the cursor untouched; a
//! [`RuleBasedScanner`] drives an ordered rule set across a range.

pub mod config;
pub mod cursor;
pub mod error;
pub mod rules;
pub mod scanner;
pub mod token;
pub mod traits;

pub use config::ScannerConfig;
pub use cursor::StoreCursor;
pub use error::{Error, Result};
pub use rules::{
    DefaultWhitespaceDetector, IdentifierDetector, NumberRule, PatternRule, WhitespaceDetector,
    WhitespaceRule, WordDetector, WordRule,
};
pub use scanner::{RuleBasedScanner, RuleSet, ScannedToken};
pub use text_model::{Checkpoint, Position};
pub use token::Token;
pub use traits::{CharacterScanner, Rule};
