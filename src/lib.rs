//! # wordtok
//!
//! A fast single-pass word tokenizer.
//!
//! Text is split on a configurable set of separator bytes. Each word is trimmed
//! and lowercased, abbreviations such as `jan.` and contractions such as
//! `can't` are expanded into their full forms, and stop words can optionally be
//! dropped. All of it happens in one left-to-right scan.
//!
//! ## Quick Start
//!
//! ```rust
//! use wordtok::Tokenizer;
//!
//! let tokenizer = Tokenizer::new();
//! let tokens = tokenizer.tokenize("I can't believe they've done this");
//!
//! assert_eq!(tokens, vec!["i", "cannot", "believe", "they", "have", "done", "this"]);
//! ```
//!
//! ## Custom Tokenizers
//!
//! ```rust
//! use wordtok::{english, Settings};
//!
//! let tokenizer = Settings::new()
//!     .separators("\t\n\r ,:?\"!;()")
//!     .remove_stop_words(true)
//!     .language(english())
//!     .build()
//!     .expect("english table is complete");
//!
//! let tokens = tokenizer.tokenize("The month is feb. and the hr. is late");
//! assert_eq!(tokens, vec!["month", "february", "hour", "late"]);
//! ```

pub mod english;
pub mod error;
pub mod language;
pub mod reader;
pub mod scanner;
pub mod separator;
pub mod settings;
pub mod tokenizer;

// Re-export main types for convenience
pub use english::english;
pub use error::{ConfigError, Result, TableKind};
pub use language::{parse_mapping, parse_word_list, LanguageTable, Lexicon, PlainSplit};
pub use reader::TokenReader;
pub use scanner::Scanner;
pub use separator::{SeparatorTable, DEFAULT_SEPARATORS};
pub use settings::{LanguageSource, Settings, SettingsFile};
pub use tokenizer::{SimpleTokenizer, Tokenizer};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
