//! Integration tests for the public tokenizer API.
//!
//! The multi-line fixtures mirror the reference behavior of the tokenizer,
//! including its whitespace and separator handling.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use wordtok::{
    english, ConfigError, LanguageTable, Lexicon, SeparatorTable, Settings, SimpleTokenizer,
    TableKind, Tokenizer, DEFAULT_SEPARATORS,
};

/// Default separators plus the period
const SEPARATORS_WITH_PERIOD: &str = "\t\n\r ,.:?\"!;()";

const CORPUS: &[&str] = &[
    "",
    "   ",
    "church",
    "I can't believe they've done this",
    "The hr. is now,",
    "Jan. and Feb. are cold; Mar. isn't!",
    "...",
    "a..b,,c  d",
    "(quoted \"text\") and: more? yes!",
    "\tTabs\tand\nnewlines\r\nmixed ",
    "e.g. i.e. etc. u.s.a.",
    "Ünïcode wörds, café.",
];

fn words(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_stop_word_suppressed() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.set_stop_word_removal(true);
    assert!(tokenizer.tokenize("above").is_empty());
}

#[test]
fn test_plain_word() {
    assert_eq!(Tokenizer::new().tokenize("church"), words(&["church"]));
}

#[test]
fn test_contractions_expanded() {
    let tokens = Tokenizer::new().tokenize("I can't believe they've done this");
    assert_eq!(
        tokens,
        words(&["i", "cannot", "believe", "they", "have", "done", "this"])
    );
}

#[test]
fn test_abbreviation_expanded() {
    let tokens = Tokenizer::new().tokenize("The hr. is now,");
    assert_eq!(tokens, words(&["the", "hour", "is", "now"]));
}

#[test]
fn test_empty_input() {
    assert!(Tokenizer::new().tokenize("").is_empty());
}

#[test]
fn test_missing_abbreviations_rejected() {
    let language = LanguageTable::from_parts(Some(HashSet::new()), Some(HashMap::new()), None);
    let result = Tokenizer::custom(DEFAULT_SEPARATORS, false, false, Arc::new(language));
    assert_eq!(
        result.unwrap_err(),
        ConfigError::MissingTable(TableKind::Abbreviations)
    );
}

#[test]
fn test_missing_each_table_rejected() {
    let cases = [
        (
            LanguageTable::from_parts(None, Some(HashMap::new()), Some(HashMap::new())),
            TableKind::StopWords,
        ),
        (
            LanguageTable::from_parts(Some(HashSet::new()), None, Some(HashMap::new())),
            TableKind::Contractions,
        ),
        (
            LanguageTable::from_parts(Some(HashSet::new()), Some(HashMap::new()), None),
            TableKind::Abbreviations,
        ),
    ];

    for (language, missing) in cases {
        let err = Tokenizer::custom(" ", false, false, Arc::new(language)).unwrap_err();
        assert_eq!(err, ConfigError::MissingTable(missing));
        assert!(err.to_string().contains(missing.as_str()));
    }

    let complete = LanguageTable::new(HashSet::new(), HashMap::new(), HashMap::new());
    assert!(Tokenizer::custom(" ", false, false, Arc::new(complete)).is_ok());
}

// =============================================================================
// Multi-line fixtures
// =============================================================================

#[test]
fn test_fixture_plain() {
    let input = "
\t\t\tThe world is a wonderful place...
\t\t\tThere are many places in this world!!!\t

\t\t\t
\t\t\tThis place is wonderful.
\t\t\t\t";
    let expected = words(&[
        "the", "world", "is", "a", "wonderful", "place", "there", "are", "many", "places", "in",
        "this", "world", "this", "place", "is", "wonderful",
    ]);
    assert_eq!(Tokenizer::new().tokenize(input), expected);
}

#[test]
fn test_fixture_abbreviations() {
    let input = "
\t\t\tThe world is a wonderful place...
\t\t\tThere are many places in this world!!!\t

\t\t\tThe month is feb.

\t\t\tThe hr. is now,
\t\t\t
\t\t\tThis place is wonderful.
\t\t\t\t";
    let expected = words(&[
        "the", "world", "is", "a", "wonderful", "place", "there", "are", "many", "places", "in",
        "this", "world", "the", "month", "is", "february", "the", "hour", "is", "now", "this",
        "place", "is", "wonderful",
    ]);
    assert_eq!(Tokenizer::new().tokenize(input), expected);
}

#[test]
fn test_fixture_contractions() {
    let input = "
\t\t\tThe world is a wonderful place...
\t\t\tThere are many places in this world!!!\t

\t\t\tI can't believe they've done this

\t\t\tI'd love to haven't
\t\t\t
\t\t\tThis place is wonderful.
\t\t\t\t";
    let expected = words(&[
        "the", "world", "is", "a", "wonderful", "place", "there", "are", "many", "places", "in",
        "this", "world", "i", "cannot", "believe", "they", "have", "done", "this", "i", "would",
        "love", "to", "have", "not", "this", "place", "is", "wonderful",
    ]);
    assert_eq!(Tokenizer::new().tokenize(input), expected);
}

#[test]
fn test_fixture_keep_separators() {
    let tokenizer = Tokenizer::custom(SEPARATORS_WITH_PERIOD, true, true, english()).unwrap();
    let input = "
The world is a wonderful place...
There are many places in this world!!!\t

This place is wonderful.
\t\t\t\t";
    let expected = words(&[
        "\n", " ", "world", " ", " ", " ", "wonderful", " ", "place", ".", ".", ".", "\n", " ",
        " ", " ", "places", " ", " ", " ", "world", "!", "!", "!", "\t", "\n", "\n", " ",
        "place", " ", " ", "wonderful", ".", "\n", "\t", "\t", "\t", "\t",
    ]);
    assert_eq!(tokenizer.tokenize(input), expected);
}

#[test]
fn test_default_example_sentences() {
    let mut tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize(
        "This is my long string! I can replace contractions like can't or they've! \
         I can replace abbreviations such as: demonstr. or jan.",
    );
    assert_eq!(
        tokens,
        words(&[
            "this", "is", "my", "long", "string", "i", "can", "replace", "contractions", "like",
            "cannot", "or", "they", "have", "i", "can", "replace", "abbreviations", "such", "as",
            "demonstration", "or", "jan.",
        ])
    );

    tokenizer.set_stop_word_removal(true);
    let tokens = tokenizer.tokenize(
        "This is another string to demonstrate stop words removal, words like: \
         and or but the are are all stop word examples",
    );
    assert_eq!(
        tokens,
        words(&[
            "string", "demonstrate", "stop", "words", "removal", "words", "stop", "word",
            "examples",
        ])
    );
}

#[test]
fn test_custom_example_sentence() {
    let tokenizer = Settings::new()
        .separators("\t\n\r ,:?\"!;()")
        .remove_stop_words(true)
        .language(english())
        .build()
        .unwrap();
    let tokens = tokenizer.tokenize(
        "This is my long string! I can replace contractions like can't or they've! \
         I can replace abbreviations such as: demonstr. or jan. This is another string to \
         demonstrate stop words removal, words like: and or but the are are all stop word examples",
    );
    assert_eq!(
        tokens,
        words(&[
            "long", "string", "replace", "contractions", "replace", "abbreviations",
            "demonstration", "january", "string", "demonstrate", "stop", "words", "removal",
            "words", "stop", "word", "examples",
        ])
    );
}

#[test]
fn test_period_separator_disables_abbreviations() {
    let tokenizer = Tokenizer::custom(SEPARATORS_WITH_PERIOD, false, false, english()).unwrap();
    assert_eq!(
        tokenizer.tokenize("The hr. is now"),
        words(&["the", "hr", "is", "now"])
    );
}

#[test]
fn test_simple_tokenizer_ignores_language() {
    assert_eq!(
        SimpleTokenizer::tokenize("I can't wait, hr. later"),
        words(&["i", "can't", "wait", "hr", "later"])
    );
}

// =============================================================================
// Invariants over a fixed corpus
// =============================================================================

fn tokenizer_profiles() -> Vec<Tokenizer> {
    let mut profiles = Vec::new();
    for keep in [false, true] {
        for remove in [false, true] {
            for seps in [DEFAULT_SEPARATORS, SEPARATORS_WITH_PERIOD] {
                profiles.push(Tokenizer::custom(seps, keep, remove, english()).unwrap());
            }
        }
    }
    profiles
}

#[test]
fn test_no_empty_tokens() {
    for tokenizer in tokenizer_profiles() {
        for text in CORPUS {
            let tokens = tokenizer.tokenize(text);
            assert!(
                tokens.iter().all(|t| !t.is_empty()),
                "empty token for {:?}: {:?}",
                text,
                tokens
            );
        }
    }
}

#[test]
fn test_separator_count_matches() {
    for tokenizer in tokenizer_profiles()
        .into_iter()
        .filter(|t| t.keeps_separators())
    {
        let separators = tokenizer.separators().clone();
        for text in CORPUS {
            let tokens = tokenizer.tokenize(text);
            let emitted = tokens
                .iter()
                .filter(|t| t.len() == 1 && separators.is_separator(t.as_bytes()[0]))
                .count();
            assert_eq!(emitted, separators.count_in(text), "input {:?}", text);
        }
    }
}

#[test]
fn test_stop_words_never_emitted() {
    let language = english();
    let stop_words = language.stop_words().unwrap();
    let mut tokenizer = Tokenizer::new();
    tokenizer.set_stop_word_removal(true);

    let text: String = stop_words.iter().cloned().collect::<Vec<_>>().join(" ");
    let tokens = tokenizer.tokenize(&text);
    assert!(tokens.is_empty(), "leaked stop words: {:?}", tokens);

    for word in stop_words {
        let tokens = tokenizer.tokenize(&format!("church {} church", word));
        assert_eq!(tokens, words(&["church", "church"]), "word {:?}", word);
    }
}

#[test]
fn test_normalization_idempotent() {
    let tokenizer = Tokenizer::new();
    let language = english();
    for raw in ["Church", "  WORLD\t", "Wonderful\n", "Places"] {
        let first = tokenizer.tokenize(raw);
        assert_eq!(first.len(), 1);
        let word = &first[0];
        assert!(!language.is_stop_word(word));
        assert!(language.contraction(word).is_none());
        assert_eq!(&tokenizer.tokenize(word), &first);
    }
}

#[test]
fn test_concurrent_scans() {
    let tokenizer = Arc::new(Tokenizer::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tokenizer = Arc::clone(&tokenizer);
            std::thread::spawn(move || tokenizer.tokenize("I can't believe the hr. is over"))
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            words(&["i", "cannot", "believe", "the", "hour", "is", "over"])
        );
    }
}

#[test]
fn test_separator_table_default() {
    let table = SeparatorTable::default();
    assert_eq!(table.len(), DEFAULT_SEPARATORS.len());
    assert!(!table.is_separator(b'.'));
}
