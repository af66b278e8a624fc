//! Configuration errors.
//!
//! Scanning never fails, so every error here is raised while a tokenizer or a
//! language table is being put together.

use thiserror::Error;

/// The three lookup tables a language must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    StopWords,
    Contractions,
    Abbreviations,
}

impl TableKind {
    /// Name used in error messages and settings files
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::StopWords => "stop_words",
            TableKind::Contractions => "contractions",
            TableKind::Abbreviations => "abbreviations",
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while building a tokenizer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The language table lacks one of its lookup tables
    #[error("invalid language, missing {0}")]
    MissingTable(TableKind),
    /// A JSON language table or settings document could not be parsed
    #[error("invalid language data: {0}")]
    InvalidLanguageData(String),
    /// A settings document names a built-in language that does not exist
    #[error("unknown built-in language: {0}")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::InvalidLanguageData(err.to_string())
    }
}
