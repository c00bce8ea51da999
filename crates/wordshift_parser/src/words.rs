//! Word-list parsing.
//!
//! One word per line. Blank lines become empty words so that output line
//! `i` always corresponds to input line `i`.

use wordshift_foundation::Corpus;

/// Parses a word list, trimming surrounding whitespace from each line.
#[must_use]
pub fn parse_words(source: &str) -> Corpus {
    source.lines().map(str::trim).collect()
}
