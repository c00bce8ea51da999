//! Rule application.
//!
//! Each `(find, replace)` pair is a literal, leftmost-first, non-overlapping,
//! all-occurrences replacement. Pairs run in order, and pair `i + 1` sees the
//! output of pair `i`. A rule whose find side contains an empty string is
//! rejected before any word is touched.

use wordshift_foundation::Corpus;

use crate::context::BoundPairs;
use crate::diagnostic::DiagnosticKind;

/// Applies substitution pairs to words.
pub struct RuleApplier;

impl RuleApplier {
    /// Applies every pair of `pairs` across the corpus.
    ///
    /// Returns the number of words that changed.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticKind::LengthMismatch`] without touching the corpus
    /// if the two sides differ in length, or [`DiagnosticKind::EmptyFind`] if
    /// any find string is empty.
    pub fn apply(pairs: &BoundPairs, corpus: &mut Corpus) -> Result<usize, DiagnosticKind> {
        Self::check(pairs)?;

        let mut changed = vec![false; corpus.len()];
        for (find, replace) in pairs.iter() {
            for (word, flag) in corpus.iter_mut().zip(changed.iter_mut()) {
                *flag |= Self::replace_in(word, find, replace);
            }
        }
        Ok(changed.into_iter().filter(|&c| c).count())
    }

    /// Applies a single literal pair across the corpus.
    ///
    /// Returns the number of words that changed.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticKind::EmptyFind`] if `find` is empty.
    pub fn apply_pair(
        find: &str,
        replace: &str,
        corpus: &mut Corpus,
    ) -> Result<usize, DiagnosticKind> {
        if find.is_empty() {
            return Err(DiagnosticKind::EmptyFind { pair: 0 });
        }
        Ok(corpus
            .iter_mut()
            .map(|word| Self::replace_in(word, find, replace))
            .filter(|&c| c)
            .count())
    }

    /// Applies every pair to a single word.
    ///
    /// # Errors
    ///
    /// Same as [`RuleApplier::apply`].
    pub fn apply_to_word(pairs: &BoundPairs, word: &mut String) -> Result<bool, DiagnosticKind> {
        Self::check(pairs)?;
        let mut changed = false;
        for (find, replace) in pairs.iter() {
            changed |= Self::replace_in(word, find, replace);
        }
        Ok(changed)
    }

    fn check(pairs: &BoundPairs) -> Result<(), DiagnosticKind> {
        if !pairs.is_balanced() {
            return Err(DiagnosticKind::LengthMismatch {
                find_count: pairs.find.len(),
                replace_count: pairs.replace.len(),
            });
        }
        match pairs.find.iter().position(String::is_empty) {
            Some(pair) => Err(DiagnosticKind::EmptyFind { pair }),
            None => Ok(()),
        }
    }

    fn replace_in(word: &mut String, find: &str, replace: &str) -> bool {
        if find == replace || !word.contains(find) {
            return false;
        }
        *word = word.replace(find, replace);
        true
    }
}
