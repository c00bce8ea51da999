//! Non-fatal rule diagnostics.
//!
//! A malformed rule never aborts a run. The engine records what went wrong,
//! logs it, and moves on to the next rule, so one run reports every broken
//! rule in the ruleset.

use std::fmt;

use log::warn;
use thiserror::Error;
use wordshift_foundation::RuleOrigin;

/// What went wrong with a rule.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The find and replace expansions have different lengths.
    #[error("expanded patterns have different lengths: {find_count} vs {replace_count}")]
    LengthMismatch {
        /// Number of find strings.
        find_count: usize,
        /// Number of replace strings.
        replace_count: usize,
    },

    /// A concrete find string is empty, so it would match between every
    /// pair of characters.
    #[error("find string of pair {pair} is empty (use a context to insert)")]
    EmptyFind {
        /// Zero-based index of the first empty find string.
        pair: usize,
    },

    /// A context variant has no `_` marking where the pattern goes.
    #[error("context variant {variant:?} has no '_' boundary marker")]
    MissingBoundary {
        /// The offending concrete context string.
        variant: String,
    },

    /// A context variant has more than one `_`.
    #[error("context variant {variant:?} has {count} '_' boundary markers, expected one")]
    MultipleBoundaries {
        /// The offending concrete context string.
        variant: String,
        /// How many markers it contains.
        count: usize,
    },

    /// The context uses the word-boundary anchor, which is reserved.
    #[error("context {context:?} uses the reserved word-boundary anchor '%'")]
    ReservedAnchor {
        /// The context template.
        context: String,
    },

    /// The rule has an exceptions field; it is applied without exceptions.
    #[error("exceptions {exceptions:?} are not supported and were ignored")]
    ExceptionsIgnored {
        /// The exceptions field as written.
        exceptions: String,
    },
}

impl DiagnosticKind {
    /// Returns true if the rule was skipped rather than applied.
    #[must_use]
    pub const fn skips_rule(&self) -> bool {
        !matches!(self, Self::ExceptionsIgnored { .. })
    }
}

/// A diagnostic tied to the rule that caused it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where the rule was defined.
    pub origin: RuleOrigin,
    /// The rule as written (`find:replace[:context[:exceptions]]`).
    pub rule: String,
    /// What went wrong.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Creates a diagnostic.
    #[must_use]
    pub fn new(origin: RuleOrigin, rule: impl Into<String>, kind: DiagnosticKind) -> Self {
        Self {
            origin,
            rule: rule.into(),
            kind,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = if self.kind.skips_rule() {
            "skipped"
        } else {
            "note"
        };
        write!(
            f,
            "{} in rule {:?} ({action}): {}",
            self.origin, self.rule, self.kind
        )
    }
}

/// Diagnostics collected during a run, in emission order.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and logs it as a warning.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    /// Number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Number of rules skipped.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.entries.iter().filter(|d| d.kind.skips_rule()).count()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
