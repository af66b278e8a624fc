//! Tokenizer settings.
//!
//! [`Settings`] is a builder for custom tokenizers. [`SettingsFile`] is the
//! same configuration in serializable form, so a tokenizer profile can be
//! kept in a JSON file.

use serde::Deserialize;
use std::sync::Arc;

use crate::english::english;
use crate::error::{ConfigError, Result};
use crate::language::LanguageTable;
use crate::separator::{SeparatorTable, DEFAULT_SEPARATORS};
use crate::tokenizer::Tokenizer;

/// Builder for a custom [`Tokenizer`]
#[derive(Debug, Clone)]
pub struct Settings {
    separators: String,
    keep_separators: bool,
    remove_stop_words: bool,
    normalize_unicode: bool,
    language: Arc<LanguageTable>,
}

impl Settings {
    /// Start from the default tokenizer's configuration
    pub fn new() -> Self {
        Settings {
            separators: DEFAULT_SEPARATORS.to_string(),
            keep_separators: false,
            remove_stop_words: false,
            normalize_unicode: false,
            language: english(),
        }
    }

    /// Characters that end a word. Including the period disables
    /// abbreviation expansion, since no candidate can then contain one.
    pub fn separators(mut self, chars: impl Into<String>) -> Self {
        self.separators = chars.into();
        self
    }

    pub fn keep_separators(mut self, on: bool) -> Self {
        self.keep_separators = on;
        self
    }

    pub fn remove_stop_words(mut self, on: bool) -> Self {
        self.remove_stop_words = on;
        self
    }

    pub fn normalize_unicode(mut self, on: bool) -> Self {
        self.normalize_unicode = on;
        self
    }

    pub fn language(mut self, language: Arc<LanguageTable>) -> Self {
        self.language = language;
        self
    }

    /// Validate the language table and build the tokenizer
    pub fn build(self) -> Result<Tokenizer> {
        let mut tokenizer = Tokenizer::from_table(
            SeparatorTable::from_chars(&self.separators),
            self.keep_separators,
            self.remove_stop_words,
            self.language,
        )?;
        tokenizer.set_unicode_normalization(self.normalize_unicode);
        Ok(tokenizer)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new()
    }
}

/// Language reference in a settings file
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LanguageSource {
    /// Name of a built-in table, e.g. `"english"`
    Builtin(String),
    /// A table given inline
    Inline(LanguageTable),
}

impl LanguageSource {
    /// Resolve to a shared table
    pub fn resolve(self) -> Result<Arc<LanguageTable>> {
        match self {
            LanguageSource::Builtin(name) => match name.to_lowercase().as_str() {
                "english" | "en" => Ok(english()),
                _ => Err(ConfigError::UnknownLanguage(name)),
            },
            LanguageSource::Inline(table) => Ok(Arc::new(table)),
        }
    }
}

impl Default for LanguageSource {
    fn default() -> Self {
        LanguageSource::Builtin("english".to_string())
    }
}

/// Serializable tokenizer configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    /// Separator characters; the default set when absent
    pub separators: Option<String>,
    pub keep_separators: bool,
    pub remove_stop_words: bool,
    pub normalize_unicode: bool,
    pub language: LanguageSource,
}

impl SettingsFile {
    /// Parse a JSON settings document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into a builder
    pub fn into_settings(self) -> Result<Settings> {
        let mut settings = Settings::new()
            .keep_separators(self.keep_separators)
            .remove_stop_words(self.remove_stop_words)
            .normalize_unicode(self.normalize_unicode)
            .language(self.language.resolve()?);
        if let Some(separators) = self.separators {
            settings = settings.separators(separators);
        }
        Ok(settings)
    }

    /// Build the configured tokenizer
    pub fn build(self) -> Result<Tokenizer> {
        self.into_settings()?.build()
    }
}
