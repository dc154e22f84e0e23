//! Scans Java-like source and prints its tokens.

use clap::Parser;
use rule_scanner::{
    DefaultWhitespaceDetector, IdentifierDetector, NumberRule, PatternRule, RuleBasedScanner,
    RuleSet, StoreCursor, Token, WhitespaceRule, WordRule,
};
use scanner_example::{init_tracing, load_config, load_input, print_tokens, Args};
use text_model::{GapTextStore, TextStore};

const SAMPLE: &str = r#"/**
 * Greets the caller.
 */
public class Hello {
    // entry point
    public static void main(String[] args) {
        char quote = '\'';
        String text = "say \"hi\"";
        int count = 3;
        if (count > 0) {
            System.out.println(text); /* unterminated
    }
}
"#;

const KEYWORDS: &[&str] = &[
    "class", "public", "private", "static", "void", "if", "else", "for", "while", "return", "new",
];
const TYPES: &[&str] = &["int", "char", "boolean", "long", "double", "String"];

/// Token kinds reported by this scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
enum JavaToken {
    DocComment,
    Comment,
    Str,
    Char,
    Keyword,
    Type,
    Ident,
    Number,
    Punct,
}

fn java_rules<'a, St>() -> anyhow::Result<RuleSet<'a, St, JavaToken>>
where
    St: TextStore + ?Sized + 'a,
{
    let rules: RuleSet<'a, St, JavaToken> = vec![
        Box::new(PatternRule::multi_line("/**", "*/", JavaToken::DocComment, None)?),
        Box::new(PatternRule::multi_line("/*", "*/", JavaToken::Comment, None)?),
        Box::new(PatternRule::end_of_line("//", JavaToken::Comment, None)?),
        Box::new(PatternRule::single_line("\"", "\"", JavaToken::Str, Some('\\'))?),
        Box::new(PatternRule::single_line("'", "'", JavaToken::Char, Some('\\'))?),
        Box::new(
            WordRule::with_default(IdentifierDetector, Token::Other(JavaToken::Ident))
                .with_words(KEYWORDS.iter().copied(), JavaToken::Keyword)
                .with_words(TYPES.iter().copied(), JavaToken::Type),
        ),
        Box::new(NumberRule::new(JavaToken::Number)),
        Box::new(WhitespaceRule::new(DefaultWhitespaceDetector)),
    ];
    Ok(rules)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let input = load_input(args.path.as_deref(), SAMPLE)?;
    let store = GapTextStore::from(input.as_str());

    let cursor = StoreCursor::new(&store, &config)?;
    let mut scanner = RuleBasedScanner::new(cursor, java_rules()?)
        .with_default_token(Token::Other(JavaToken::Punct));

    let tokens = scanner.tokenize();
    tracing::debug!(count = tokens.len(), "scan finished");
    print_tokens(&store, &tokens, args.whitespace)
}
