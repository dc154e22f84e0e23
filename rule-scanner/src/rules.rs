//! Rules evaluated by the scanner.

mod number;
mod pattern;
mod whitespace;
mod word;

pub use number::NumberRule;
pub use pattern::PatternRule;
pub use whitespace::{DefaultWhitespaceDetector, WhitespaceDetector, WhitespaceRule};
pub use word::{IdentifierDetector, WordDetector, WordRule};
