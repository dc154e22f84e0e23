use proptest::prelude::*;
use rule_scanner::{
    CharacterScanner, DefaultWhitespaceDetector, IdentifierDetector, NumberRule, PatternRule, Rule,
    RuleBasedScanner, RuleSet, ScannerConfig, StoreCursor, Token, WhitespaceRule, WordRule,
};
use text_model::{CharStore, TextStore};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Comment,
    Str,
    Heading,
    Word,
    Number,
}

fn rules<'a>() -> RuleSet<'a, CharStore, Kind> {
    vec![
        Box::new(PatternRule::multi_line("/*", "*/", Kind::Comment, Some('\\')).unwrap()),
        Box::new(PatternRule::end_of_line("//", Kind::Comment, None).unwrap()),
        Box::new(PatternRule::single_line("\"", "\"", Kind::Str, Some('\\')).unwrap()),
        Box::new(PatternRule::multi_line("abc", "cba", Kind::Str, None).unwrap()),
        Box::new(
            PatternRule::end_of_line("#", Kind::Heading, None)
                .unwrap()
                .with_column_constraint(0),
        ),
        Box::new(
            PatternRule::single_line("<<", ">>", Kind::Str, None)
                .unwrap()
                .with_column_constraint(2),
        ),
        Box::new(WordRule::new(IdentifierDetector).with_words(["ab", "cab"], Kind::Word)),
        Box::new(NumberRule::new(Kind::Number)),
        Box::new(WhitespaceRule::new(DefaultWhitespaceDetector)),
    ]
}

fn input_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('/'),
            Just('*'),
            Just('\\'),
            Just('"'),
            Just('#'),
            Just('<'),
            Just('>'),
            Just('a'),
            Just('b'),
            Just('c'),
            Just('1'),
            Just(' '),
            Just('\n'),
            Just('\r'),
        ],
        0..48,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn test_failed_evaluation_leaves_cursor_untouched(
        input in input_strategy(),
        start in 0.0..=1.0f64,
    ) {
        let store = CharStore::from(input.as_str());
        let offset = (start * store.len() as f64) as usize;

        for rule in rules() {
            let mut cursor = StoreCursor::new(&store, &ScannerConfig::default()).unwrap();
            for _ in 0..offset {
                cursor.read();
            }
            let before = cursor.position();

            let token = rule.evaluate(&mut cursor);
            if token.is_undefined() {
                prop_assert_eq!(cursor.position(), before);
                prop_assert_eq!(cursor.checkpoint().index(), offset);
            } else {
                prop_assert!(cursor.offset() > before.offset);
                prop_assert!(cursor.offset() <= store.len());
            }
        }
    }

    #[test]
    fn test_tokens_partition_the_input(input in input_strategy()) {
        let store = CharStore::from(input.as_str());
        let scanner = RuleBasedScanner::from_store(&store, rules()).unwrap();

        let mut rebuilt = String::new();
        for scanned in scanner {
            prop_assert!(scanned.length > 0);
            rebuilt.push_str(&store.get(scanned.offset, scanned.length).unwrap());
        }
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_matches_never_leave_pending_eof_reads(input in input_strategy()) {
        let store = CharStore::from(input.as_str());
        let mut scanner = RuleBasedScanner::from_store(&store, rules()).unwrap();

        loop {
            let token = scanner.next_token();
            let index = scanner.cursor().checkpoint().index();
            prop_assert!(index <= store.len());
            if token == Token::Eof {
                break;
            }
        }
    }
}
