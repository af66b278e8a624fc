//! The single-pass scan that turns text into word tokens.
//!
//! The scanner walks the input byte by byte. Every separator byte closes the
//! current candidate word, which is then normalized and run through the
//! lexicon: abbreviation expansion first, period cleanup, stop-word
//! suppression, then contraction expansion. Text after the last separator is
//! handled the same way except that it is never checked for abbreviations and
//! keeps its periods.

use crate::language::Lexicon;
use crate::separator::{SeparatorTable, PERIOD};

/// Scan configuration borrowed for the duration of one or more scans
pub struct Scanner<'a, L: Lexicon + ?Sized> {
    separators: &'a SeparatorTable,
    lexicon: &'a L,
    keep_separators: bool,
    remove_stop_words: bool,
}

impl<'a, L: Lexicon + ?Sized> Scanner<'a, L> {
    /// Create a scanner that drops separators and keeps stop words
    pub fn new(separators: &'a SeparatorTable, lexicon: &'a L) -> Self {
        Scanner {
            separators,
            lexicon,
            keep_separators: false,
            remove_stop_words: false,
        }
    }

    /// Emit every separator byte as a single-character token
    pub fn keep_separators(mut self, on: bool) -> Self {
        self.keep_separators = on;
        self
    }

    /// Suppress candidates found in the lexicon's stop words
    pub fn remove_stop_words(mut self, on: bool) -> Self {
        self.remove_stop_words = on;
        self
    }

    /// Tokenize `text`. Never fails; empty input yields no tokens.
    pub fn scan(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut last_word = 0;

        for (i, &b) in text.as_bytes().iter().enumerate() {
            if !self.separators.is_separator(b) {
                continue;
            }

            // Separator bytes are ASCII, so `i` and `i + 1` are char boundaries.
            let word = normalize(&text[last_word..i]);
            last_word = i + 1;

            if word.contains(PERIOD) {
                match self.lexicon.abbreviation(&word) {
                    Some(expansion) => push_expansion(&mut tokens, expansion),
                    None => self.push_word(&mut tokens, &word.replace(PERIOD, "")),
                }
            } else {
                self.push_word(&mut tokens, &word);
            }

            if self.keep_separators {
                tokens.push(char::from(b).to_string());
            }
        }

        let tail = normalize(&text[last_word..]);
        self.push_word(&mut tokens, &tail);

        tokens
    }

    /// Apply stop-word suppression and contraction expansion to one candidate
    fn push_word(&self, tokens: &mut Vec<String>, word: &str) {
        if word.is_empty() {
            return;
        }
        if self.remove_stop_words && self.lexicon.is_stop_word(word) {
            return;
        }

        match self.lexicon.contraction(word) {
            Some(expansion) => push_expansion(tokens, expansion),
            None => tokens.push(word.to_string()),
        }
    }
}

/// Trim surrounding whitespace and lowercase
fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn push_expansion(tokens: &mut Vec<String>, expansion: &str) {
    tokens.extend(
        expansion
            .split(' ')
            .filter(|part| !part.is_empty())
            .map(str::to_string),
    );
}
