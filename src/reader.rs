//! Line-by-line tokenization of a reader.
//!
//! Each line is fed through the tokenizer on its own, so input of any size can
//! be processed without holding it all in memory. Line terminators are
//! stripped before scanning and therefore never show up as separator tokens.

use std::io::{self, BufRead, Lines};
use tracing::debug;

use crate::tokenizer::Tokenizer;

/// Streams tokens from a buffered reader, one line at a time
pub struct TokenReader<'t, R> {
    lines: Lines<R>,
    tokenizer: &'t Tokenizer,
    line_no: usize,
}

impl<'t, R: BufRead> TokenReader<'t, R> {
    pub fn new(reader: R, tokenizer: &'t Tokenizer) -> Self {
        TokenReader {
            lines: reader.lines(),
            tokenizer,
            line_no: 0,
        }
    }

    /// Number of lines read so far
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Tokenize the remaining input into one flat sequence
    pub fn words(self) -> io::Result<Vec<String>> {
        let mut words = Vec::new();
        for line in self {
            words.extend(line?);
        }
        Ok(words)
    }
}

impl<'t, R: BufRead> Iterator for TokenReader<'t, R> {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        self.line_no += 1;

        let tokens = self.tokenizer.tokenize(&line);
        debug!(line = self.line_no, tokens = tokens.len(), "tokenized line");
        Some(Ok(tokens))
    }
}
