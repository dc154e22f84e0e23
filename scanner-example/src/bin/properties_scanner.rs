//! Scans a `.properties` file and prints its tokens.
//!
//! Comments only count when `#` or `!` is the first character of a line, so
//! both comment rules carry a column constraint of 0.

use clap::Parser;
use rule_scanner::{
    CharacterScanner, DefaultWhitespaceDetector, PatternRule, Rule, RuleBasedScanner, RuleSet,
    StoreCursor, Token, WhitespaceRule,
};
use scanner_example::{init_tracing, load_config, load_input, print_tokens, Args};
use text_model::{CharStore, TextStore};

const SAMPLE: &str = "# Application settings\n\
! legacy comment style\n\
app.name = Demo # not a comment\n\
app.path=C:\\\\tools\\\\demo\n\
greeting : hello \\\n    world\n\
empty=\n";

#[derive(Debug, Clone, PartialEq, Eq)]
enum PropertyToken {
    Comment,
    Key,
    Value,
}

/// Reads a key up to the first unescaped `=`, `:` or whitespace.
struct KeyRule;

impl<S> Rule<S, PropertyToken> for KeyRule
where
    S: CharacterScanner + ?Sized,
{
    fn evaluate(&self, scanner: &mut S) -> Token<PropertyToken> {
        let mark = scanner.checkpoint();
        let mut length = 0;
        loop {
            let before = scanner.checkpoint();
            match scanner.read() {
                Some('\\') => {
                    let escaped = scanner.checkpoint();
                    if scanner.read().is_none() {
                        scanner.restore(escaped);
                    }
                    length += 1;
                }
                Some(ch) if ch != '=' && ch != ':' && !ch.is_whitespace() => length += 1,
                _ => {
                    scanner.restore(before);
                    break;
                }
            }
        }

        if length == 0 {
            scanner.restore(mark);
            return Token::Undefined;
        }
        Token::Other(PropertyToken::Key)
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        Some(first_char.is_some_and(|ch| {
            ch != '=' && ch != ':' && ch != '#' && ch != '!' && !ch.is_whitespace()
        }))
    }
}

fn property_rules<'a, St>() -> anyhow::Result<RuleSet<'a, St, PropertyToken>>
where
    St: TextStore + ?Sized + 'a,
{
    let rules: RuleSet<'a, St, PropertyToken> = vec![
        Box::new(
            PatternRule::end_of_line("#", PropertyToken::Comment, None)?.with_column_constraint(0),
        ),
        Box::new(
            PatternRule::end_of_line("!", PropertyToken::Comment, None)?.with_column_constraint(0),
        ),
        // Escaped line ends continue the value on the next line.
        Box::new(PatternRule::end_of_line("=", PropertyToken::Value, Some('\\'))?),
        Box::new(PatternRule::end_of_line(":", PropertyToken::Value, Some('\\'))?),
        Box::new(KeyRule),
        Box::new(WhitespaceRule::new(DefaultWhitespaceDetector)),
    ];
    Ok(rules)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let input = load_input(args.path.as_deref(), SAMPLE)?;
    let store = CharStore::from(input);

    let cursor = StoreCursor::new(&store, &config)?;
    let mut scanner = RuleBasedScanner::new(cursor, property_rules()?);

    let tokens = scanner.tokenize();
    tracing::debug!(count = tokens.len(), "scan finished");
    print_tokens(&store, &tokens, args.whitespace)
}
