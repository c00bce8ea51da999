//! Line classification.
//!
//! Ruleset files are line oriented: every line is blank, a comment, a
//! section header, or a colon-separated record.

/// Marks a comment line.
pub const COMMENT: char = '#';

/// Introduces a section header.
pub const HEADER: char = '$';

/// Separates the fields of a record.
pub const FIELD_SEPARATOR: char = ':';

/// A classified ruleset line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// Starts with `#` after trimming.
    Comment(&'a str),
    /// `$NAME`, holding the name.
    Header(&'a str),
    /// Any other line, split on `:`.
    Record(Vec<&'a str>),
}

/// Classifies ruleset lines.
pub struct RulesetLexer;

impl RulesetLexer {
    /// Classifies a single line.
    ///
    /// Surrounding whitespace is trimmed from the whole line before
    /// classification. Fields of a record are not trimmed individually.
    #[must_use]
    pub fn classify(line: &str) -> Line<'_> {
        let line = line.trim();
        if line.is_empty() {
            Line::Blank
        } else if let Some(text) = line.strip_prefix(COMMENT) {
            Line::Comment(text)
        } else if let Some(name) = line.strip_prefix(HEADER) {
            Line::Header(name)
        } else {
            Line::Record(line.split(FIELD_SEPARATOR).collect())
        }
    }

    /// Classifies every line of `source`, pairing each with its 1-based number.
    pub fn lines(source: &str) -> impl Iterator<Item = (usize, Line<'_>)> {
        source
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, Self::classify(line)))
    }
}
