use rule_scanner::{
    CharacterScanner, DefaultWhitespaceDetector, IdentifierDetector, NumberRule, PatternRule, Rule,
    RuleBasedScanner, RuleSet, ScannedToken, ScannerConfig, StoreCursor, Token, WhitespaceRule,
    WordRule,
};
use text_model::{CharStore, GapTextStore, TextStore};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Comment,
    Str,
    Keyword,
    Ident,
    Number,
    Punct,
}

fn java_rules<'a, St>() -> RuleSet<'a, St, Kind>
where
    St: TextStore + ?Sized + 'a,
{
    vec![
        Box::new(PatternRule::end_of_line("//", Kind::Comment, None).unwrap()),
        Box::new(PatternRule::multi_line("/*", "*/", Kind::Comment, None).unwrap()),
        Box::new(PatternRule::single_line("\"", "\"", Kind::Str, Some('\\')).unwrap()),
        Box::new(
            WordRule::with_default(IdentifierDetector, Token::Other(Kind::Ident))
                .with_words(["int", "return"], Kind::Keyword),
        ),
        Box::new(NumberRule::new(Kind::Number)),
        Box::new(WhitespaceRule::new(DefaultWhitespaceDetector)),
    ]
}

fn kinds(tokens: &[ScannedToken<Kind>]) -> Vec<Token<Kind>> {
    tokens.iter().map(|scanned| scanned.token.clone()).collect()
}

#[test]
fn test_scanner_tokenizes_source() {
    let store = CharStore::from("int x = 42; // note\n\"s\\\"q\"");
    let mut scanner = RuleBasedScanner::from_store(&store, java_rules())
        .unwrap()
        .with_default_token(Token::Other(Kind::Punct));

    let tokens = scanner.tokenize();
    assert_eq!(
        kinds(&tokens),
        vec![
            Token::Other(Kind::Keyword),
            Token::Whitespace,
            Token::Other(Kind::Ident),
            Token::Whitespace,
            Token::Other(Kind::Punct),
            Token::Whitespace,
            Token::Other(Kind::Number),
            Token::Other(Kind::Punct),
            Token::Whitespace,
            Token::Other(Kind::Comment),
            Token::Other(Kind::Str),
        ]
    );

    let comment = &tokens[9];
    assert_eq!(comment.offset, 12);
    assert_eq!(comment.length, 8);
    let string = &tokens[10];
    assert_eq!(store.get(string.offset, string.length).unwrap(), "\"s\\\"q\"");
}

#[test]
fn test_scanner_tokens_cover_input() {
    let text = "/* a */ int y=\"unterminated\nreturn 7 // end";
    let store = CharStore::from(text);
    let scanner = RuleBasedScanner::from_store(&store, java_rules()).unwrap();

    let mut rebuilt = String::new();
    let mut expected_offset = 0;
    for scanned in scanner {
        assert_eq!(scanned.offset, expected_offset);
        rebuilt.push_str(&store.get(scanned.offset, scanned.length).unwrap());
        expected_offset += scanned.length;
    }
    assert_eq!(rebuilt, text);
}

#[test]
fn test_scanner_default_token_is_undefined() {
    let store = CharStore::from("=");
    let mut scanner = RuleBasedScanner::from_store(&store, java_rules()).unwrap();
    assert_eq!(scanner.next_token(), Token::Undefined);
    assert_eq!(scanner.token_length(), 1);
    assert_eq!(scanner.next_token(), Token::Eof);
    assert_eq!(scanner.next_token(), Token::Eof);
}

#[test]
fn test_scanner_token_text() {
    let store = CharStore::from("return 10");
    let mut scanner = RuleBasedScanner::from_store(&store, java_rules()).unwrap();

    assert_eq!(scanner.next_token(), Token::Other(Kind::Keyword));
    assert_eq!(scanner.token_offset(), 0);
    assert_eq!(scanner.token_text().unwrap(), "return");

    scanner.next_token();
    assert_eq!(scanner.next_token(), Token::Other(Kind::Number));
    assert_eq!(scanner.token_offset(), 7);
    assert_eq!(scanner.token_text().unwrap(), "10");
}

#[test]
fn test_scanner_over_range() {
    let store = CharStore::from("skip /* inner */ skip");
    let cursor = StoreCursor::with_range(&store, &ScannerConfig::default(), 5, 11).unwrap();
    let mut scanner = RuleBasedScanner::new(cursor, java_rules());

    assert_eq!(scanner.next_token(), Token::Other(Kind::Comment));
    assert_eq!(scanner.token_offset(), 5);
    assert_eq!(scanner.token_length(), 11);
    assert_eq!(scanner.next_token(), Token::Eof);
}

#[test]
fn test_scanner_over_gap_store() {
    let mut store = GapTextStore::from("int a;");
    store.replace(4, 1, "total").unwrap();

    let scanner = RuleBasedScanner::from_store(&store, java_rules())
        .unwrap()
        .with_default_token(Token::Other(Kind::Punct));
    let tokens: Vec<_> = scanner.collect();
    assert_eq!(
        kinds(&tokens),
        vec![
            Token::Other(Kind::Keyword),
            Token::Whitespace,
            Token::Other(Kind::Ident),
            Token::Other(Kind::Punct),
        ]
    );
    assert_eq!(tokens[2].length, 5);
}

#[test]
fn test_scanner_over_dyn_store() {
    let store: Box<dyn TextStore> = Box::new(CharStore::from("// only"));
    let mut scanner = RuleBasedScanner::from_store(store.as_ref(), java_rules()).unwrap();
    assert_eq!(scanner.next_token(), Token::Other(Kind::Comment));
    assert_eq!(scanner.token_length(), 7);
}

struct Fixed {
    kind: Kind,
    priority: i32,
}

impl<S> Rule<S, Kind> for Fixed
where
    S: CharacterScanner + ?Sized,
{
    fn evaluate(&self, scanner: &mut S) -> Token<Kind> {
        match scanner.read() {
            Some(_) => Token::Other(self.kind.clone()),
            None => {
                let _ = scanner.unread();
                Token::Undefined
            }
        }
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

#[test]
fn test_scanner_orders_rules_by_priority() {
    let store = CharStore::from("x");
    let rules: RuleSet<'_, CharStore, Kind> = vec![
        Box::new(Fixed { kind: Kind::Ident, priority: 0 }),
        Box::new(Fixed { kind: Kind::Keyword, priority: 5 }),
    ];
    let mut scanner = RuleBasedScanner::from_store(&store, rules).unwrap();
    assert_eq!(scanner.next_token(), Token::Other(Kind::Keyword));
}

#[test]
fn test_scanner_keeps_insertion_order_for_equal_priority() {
    let store = CharStore::from("x");
    let rules: RuleSet<'_, CharStore, Kind> = vec![
        Box::new(Fixed { kind: Kind::Str, priority: 1 }),
        Box::new(Fixed { kind: Kind::Number, priority: 1 }),
    ];
    let mut scanner = RuleBasedScanner::from_store(&store, rules).unwrap();
    assert_eq!(scanner.next_token(), Token::Other(Kind::Str));
}

struct Stuck;

impl<S> Rule<S, Kind> for Stuck
where
    S: CharacterScanner + ?Sized,
{
    fn evaluate(&self, _scanner: &mut S) -> Token<Kind> {
        Token::Other(Kind::Punct)
    }
}

#[test]
fn test_scanner_stops_when_no_progress() {
    let store = CharStore::from("abc");
    let rules: RuleSet<'_, CharStore, Kind> = vec![Box::new(Stuck)];
    let scanner = RuleBasedScanner::from_store(&store, rules).unwrap();
    assert_eq!(scanner.count(), 0);
}

struct Sloppy;

impl<S> Rule<S, Kind> for Sloppy
where
    S: CharacterScanner + ?Sized,
{
    fn evaluate(&self, scanner: &mut S) -> Token<Kind> {
        // Consumes input but forgets to rewind.
        scanner.read();
        scanner.read();
        Token::Undefined
    }
}

#[test]
fn test_scanner_rewinds_after_sloppy_rule() {
    let store = CharStore::from("42");
    let rules: RuleSet<'_, CharStore, Kind> =
        vec![Box::new(Sloppy), Box::new(NumberRule::new(Kind::Number))];
    let mut scanner = RuleBasedScanner::from_store(&store, rules).unwrap();
    assert_eq!(scanner.next_token(), Token::Other(Kind::Number));
    assert_eq!(scanner.token_length(), 2);
}

struct Backwards;

impl<S> Rule<S, Kind> for Backwards
where
    S: CharacterScanner + ?Sized,
{
    fn evaluate(&self, scanner: &mut S) -> Token<Kind> {
        // Claims a token after stepping before its start.
        let _ = scanner.unread();
        Token::Other(Kind::Ident)
    }
}

#[test]
fn test_scanner_ignores_rule_moving_backwards() {
    let store = CharStore::from("abc");
    let rules: RuleSet<'_, CharStore, Kind> = vec![Box::new(Backwards)];
    let mut scanner = RuleBasedScanner::from_store(&store, rules)
        .unwrap()
        .with_default_token(Token::Other(Kind::Punct));
    assert_eq!(scanner.cursor_mut().read(), Some('a'));

    assert_eq!(scanner.next_token(), Token::Other(Kind::Punct));
    assert_eq!(scanner.token_offset(), 1);
    assert_eq!(scanner.token_length(), 1);

    let rest: Vec<_> = scanner.by_ref().take(3).collect();
    assert_eq!(
        rest,
        vec![ScannedToken {
            token: Token::Other(Kind::Punct),
            offset: 2,
            length: 1,
        }]
    );
    assert_eq!(scanner.next_token(), Token::Eof);
}

#[test]
fn test_scanner_rescans_after_cursor_reset() {
    let store = CharStore::from("let x");
    let mut scanner = RuleBasedScanner::from_store(&store, java_rules()).unwrap();
    let first = scanner.tokenize();
    assert!(scanner.cursor().is_eof());

    scanner.cursor_mut().reset();
    assert_eq!(scanner.cursor().offset(), scanner.cursor().range_start());
    assert_eq!(scanner.tokenize(), first);
}
