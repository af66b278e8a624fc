//! Built-in English language table.
//!
//! The data lives in `src/data/english/` and is embedded at compile time. The
//! table is parsed once, on first use, and shared read-only afterwards.

use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::debug;

use crate::language::LanguageTable;

static STOP_WORDS: &str = include_str!("data/english/stop_words.txt");
static CONTRACTIONS: &str = include_str!("data/english/contractions.tsv");
static ABBREVIATIONS: &str = include_str!("data/english/abbreviations.tsv");

static ENGLISH: Lazy<Arc<LanguageTable>> = Lazy::new(|| {
    let table = LanguageTable::from_text(STOP_WORDS, CONTRACTIONS, ABBREVIATIONS);
    debug!(
        stop_words = table.stop_words().map_or(0, |s| s.len()),
        contractions = table.contractions().map_or(0, |c| c.len()),
        abbreviations = table.abbreviations().map_or(0, |a| a.len()),
        "loaded built-in English table"
    );
    Arc::new(table)
});

/// Shared handle to the built-in English table
pub fn english() -> Arc<LanguageTable> {
    Arc::clone(&ENGLISH)
}
