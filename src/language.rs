//! Language resource tables.
//!
//! A language is three lookup tables: stop words, contractions and
//! abbreviations. Keys are expected in normalized form (trimmed, lowercased);
//! replacements hold one or more space-separated words.
//!
//! A table may be built with one of its parts absent. That is not checked here:
//! the tokenizer rejects an incomplete language when it is constructed.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{ConfigError, Result, TableKind};

/// Lookup hooks consulted by the scanner for every candidate word.
///
/// Absence is never an error: `None`/`false` simply means the word gets no
/// special handling.
pub trait Lexicon {
    /// Expansion for a period-bearing word followed by a separator
    fn abbreviation(&self, word: &str) -> Option<&str>;
    /// Expansion for a contracted word
    fn contraction(&self, word: &str) -> Option<&str>;
    /// Whether the word is suppressed when stop-word removal is on
    fn is_stop_word(&self, word: &str) -> bool;
}

/// A lexicon with no expansions and no stop words, for plain splitting
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainSplit;

impl Lexicon for PlainSplit {
    fn abbreviation(&self, _word: &str) -> Option<&str> {
        None
    }

    fn contraction(&self, _word: &str) -> Option<&str> {
        None
    }

    fn is_stop_word(&self, _word: &str) -> bool {
        false
    }
}

/// Stop words, contractions and abbreviations for one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTable {
    #[serde(default)]
    stop_words: Option<HashSet<String>>,
    #[serde(default)]
    contractions: Option<HashMap<String, String>>,
    #[serde(default)]
    abbreviations: Option<HashMap<String, String>>,
}

impl LanguageTable {
    /// Bundle three tables as given, without transforming them
    pub fn new(
        stop_words: HashSet<String>,
        contractions: HashMap<String, String>,
        abbreviations: HashMap<String, String>,
    ) -> Self {
        LanguageTable {
            stop_words: Some(stop_words),
            contractions: Some(contractions),
            abbreviations: Some(abbreviations),
        }
    }

    /// Bundle tables any of which may be absent
    pub fn from_parts(
        stop_words: Option<HashSet<String>>,
        contractions: Option<HashMap<String, String>>,
        abbreviations: Option<HashMap<String, String>>,
    ) -> Self {
        LanguageTable {
            stop_words,
            contractions,
            abbreviations,
        }
    }

    /// Parse a JSON object with `stop_words`, `contractions` and `abbreviations` keys.
    /// Missing keys leave the corresponding table absent.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a table from the plain-text formats read by [`parse_word_list`]
    /// and [`parse_mapping`]
    pub fn from_text(stop_words: &str, contractions: &str, abbreviations: &str) -> Self {
        LanguageTable::new(
            parse_word_list(stop_words),
            parse_mapping(contractions),
            parse_mapping(abbreviations),
        )
    }

    /// Check that all three tables are present.
    ///
    /// Abbreviations are checked first, then contractions, then stop words.
    pub fn validate(&self) -> Result<()> {
        if self.abbreviations.is_none() {
            return Err(ConfigError::MissingTable(TableKind::Abbreviations));
        }
        if self.contractions.is_none() {
            return Err(ConfigError::MissingTable(TableKind::Contractions));
        }
        if self.stop_words.is_none() {
            return Err(ConfigError::MissingTable(TableKind::StopWords));
        }
        Ok(())
    }

    pub fn stop_words(&self) -> Option<&HashSet<String>> {
        self.stop_words.as_ref()
    }

    pub fn contractions(&self) -> Option<&HashMap<String, String>> {
        self.contractions.as_ref()
    }

    pub fn abbreviations(&self) -> Option<&HashMap<String, String>> {
        self.abbreviations.as_ref()
    }
}

impl Lexicon for LanguageTable {
    fn abbreviation(&self, word: &str) -> Option<&str> {
        self.abbreviations.as_ref()?.get(word).map(String::as_str)
    }

    fn contraction(&self, word: &str) -> Option<&str> {
        self.contractions.as_ref()?.get(word).map(String::as_str)
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words
            .as_ref()
            .map_or(false, |words| words.contains(word))
    }
}

/// Normalize a table key the same way the scanner normalizes candidates
fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Parse a word list: one word per line, `#` comments and blank lines skipped
pub fn parse_word_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(normalize_key)
        .collect()
}

/// Parse a tab-separated mapping: `key<TAB>replacement` per line.
///
/// Lines without a tab or with an empty side are skipped.
pub fn parse_mapping(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, replacement)) = line.split_once('\t') else {
            continue;
        };
        let key = normalize_key(key);
        let replacement = replacement.trim();
        if key.is_empty() || replacement.is_empty() {
            continue;
        }

        map.insert(key, replacement.to_string());
    }

    map
}
