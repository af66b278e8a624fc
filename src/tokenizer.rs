//! The tokenizer engine.
//!
//! A [`Tokenizer`] pairs a separator table with a shared language table and a
//! couple of flags, and runs the [`Scanner`] over input strings.

use std::sync::Arc;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::english::english;
use crate::error::Result;
use crate::language::{LanguageTable, PlainSplit};
use crate::scanner::Scanner;
use crate::separator::SeparatorTable;

/// The main tokenizer.
///
/// Scanning only needs `&self`, so one tokenizer can serve many threads.
/// Toggling stop-word removal takes `&mut self` and therefore cannot race
/// with a scan in flight.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    separators: SeparatorTable,
    language: Arc<LanguageTable>,
    keep_separators: bool,
    remove_stop_words: bool,
    normalize_unicode: bool,
}

impl Tokenizer {
    /// Default separators, built-in English table, separators dropped, stop
    /// words kept
    pub fn new() -> Self {
        Tokenizer {
            separators: SeparatorTable::default(),
            language: english(),
            keep_separators: false,
            remove_stop_words: false,
            normalize_unicode: false,
        }
    }

    /// Create a tokenizer from a separator string, flags and a language table.
    ///
    /// Fails if the language lacks any of its three tables.
    pub fn custom(
        separators: &str,
        keep_separators: bool,
        remove_stop_words: bool,
        language: Arc<LanguageTable>,
    ) -> Result<Self> {
        Self::from_table(
            SeparatorTable::from_chars(separators),
            keep_separators,
            remove_stop_words,
            language,
        )
    }

    pub(crate) fn from_table(
        separators: SeparatorTable,
        keep_separators: bool,
        remove_stop_words: bool,
        language: Arc<LanguageTable>,
    ) -> Result<Self> {
        language.validate()?;

        debug!(
            separators = separators.len(),
            keep_separators,
            remove_stop_words,
            "built custom tokenizer"
        );

        Ok(Tokenizer {
            separators,
            language,
            keep_separators,
            remove_stop_words,
            normalize_unicode: false,
        })
    }

    /// Turn stop-word removal on or off
    pub fn set_stop_word_removal(&mut self, on: bool) -> &mut Self {
        self.remove_stop_words = on;
        self
    }

    /// NFC-normalize input before scanning
    pub fn set_unicode_normalization(&mut self, on: bool) -> &mut Self {
        self.normalize_unicode = on;
        self
    }

    pub fn separators(&self) -> &SeparatorTable {
        &self.separators
    }

    /// Get the shared language table
    pub fn language(&self) -> Arc<LanguageTable> {
        Arc::clone(&self.language)
    }

    pub fn keeps_separators(&self) -> bool {
        self.keep_separators
    }

    pub fn removes_stop_words(&self) -> bool {
        self.remove_stop_words
    }

    pub fn normalizes_unicode(&self) -> bool {
        self.normalize_unicode
    }

    /// Split a string into normalized word tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let scanner = Scanner::new(&self.separators, self.language.as_ref())
            .keep_separators(self.keep_separators)
            .remove_stop_words(self.remove_stop_words);

        if self.normalize_unicode {
            let normalized: String = text.nfc().collect();
            scanner.scan(&normalized)
        } else {
            scanner.scan(text)
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new()
    }
}

/// A tokenizer with no language rules: default separators, trimming,
/// lowercasing and period cleanup only
pub struct SimpleTokenizer;

impl SimpleTokenizer {
    /// Tokenize text without expansions or stop words
    pub fn tokenize(text: &str) -> Vec<String> {
        let separators = SeparatorTable::default();
        Scanner::new(&separators, &PlainSplit).scan(text)
    }
}
