//! Byte classification for word boundaries.
//!
//! Every byte value maps to "separator" or "not a separator". The table is
//! built once from a string of separator characters and never changes.

use tracing::warn;

/// Separators used by the default tokenizer.
///
/// The period is deliberately absent: it never ends a word, it only marks
/// abbreviations and is otherwise stripped from candidates.
pub const DEFAULT_SEPARATORS: &str = "\t\n\r ,:?\"!;()";

/// The period byte, which drives abbreviation detection
pub const PERIOD: char = '.';

/// A 256-entry lookup table of separator bytes
#[derive(Clone, PartialEq, Eq)]
pub struct SeparatorTable {
    table: [bool; 256],
}

impl SeparatorTable {
    /// Build a table from the bytes of `chars`.
    ///
    /// Only ASCII bytes are honored. A non-ASCII byte always belongs to a
    /// multi-byte UTF-8 sequence and splitting there would cut a character.
    pub fn from_chars(chars: &str) -> Self {
        let mut table = [false; 256];
        for b in chars.bytes() {
            if b.is_ascii() {
                table[b as usize] = true;
            } else {
                warn!(byte = b, "ignoring non-ASCII separator byte");
            }
        }
        SeparatorTable { table }
    }

    /// Check whether a byte ends a word
    #[inline]
    pub fn is_separator(&self, b: u8) -> bool {
        self.table[b as usize]
    }

    /// Number of distinct separator bytes
    pub fn len(&self) -> usize {
        self.table.iter().filter(|&&s| s).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the separator bytes in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..=255).filter(move |&b| self.table[b as usize])
    }

    /// Count the separator bytes in `text`
    pub fn count_in(&self, text: &str) -> usize {
        text.bytes().filter(|&b| self.is_separator(b)).count()
    }
}

impl Default for SeparatorTable {
    fn default() -> Self {
        SeparatorTable::from_chars(DEFAULT_SEPARATORS)
    }
}

impl std::fmt::Display for SeparatorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for b in self.iter() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for SeparatorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeparatorTable")
            .field("separators", &self.to_string())
            .finish()
    }
}
