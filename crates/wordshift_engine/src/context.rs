//! Context binding.
//!
//! A context such as `V_V` restricts a change to an environment. The context
//! is expanded like any template; each concrete environment is split at its
//! `_` into `left` and `right`, and every find string `s1` becomes
//! `left + s1 + right` (likewise for replace strings). Environments are the
//! outer loop and the pattern expansion the inner one, on both sides, so the
//! find and replace lists stay paired by index.
//!
//! `%` (word boundary) is reserved context syntax. It is rejected rather
//! than matched literally.

use wordshift_foundation::GroupTable;

use crate::diagnostic::DiagnosticKind;
use crate::expand::Expander;

/// Marks where the pattern sits inside a context.
pub const BOUNDARY: char = '_';

/// Reserved word-boundary anchor.
pub const WORD_ANCHOR: char = '%';

/// Parallel find and replace lists for one rule.
///
/// Index `i` of `find` pairs with index `i` of `replace`. The lists may differ
/// in length until checked by the applier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundPairs {
    /// Strings to search for.
    pub find: Vec<String>,
    /// Replacement strings.
    pub replace: Vec<String>,
}

impl BoundPairs {
    /// Creates a pair list from its two sides.
    #[must_use]
    pub fn new(find: Vec<String>, replace: Vec<String>) -> Self {
        Self { find, replace }
    }

    /// Returns true if both sides have the same length.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.find.len() == self.replace.len()
    }

    /// Iterates over `(find, replace)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.find
            .iter()
            .map(String::as_str)
            .zip(self.replace.iter().map(String::as_str))
    }

    /// Number of find strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.find.len()
    }

    /// Returns true if there is nothing to find.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.find.is_empty()
    }
}

/// Binds pattern expansions into their environments.
pub struct ContextBinder<'g> {
    expander: Expander<'g>,
}

impl<'g> ContextBinder<'g> {
    /// Creates a binder expanding contexts over `groups`.
    #[must_use]
    pub fn new(groups: &'g GroupTable) -> Self {
        Self {
            expander: Expander::new(groups),
        }
    }

    /// Creates a binder that shares an existing expander's settings.
    #[must_use]
    pub fn with_expander(expander: Expander<'g>) -> Self {
        Self { expander }
    }

    /// Wraps every pattern expansion in every environment of `context`.
    ///
    /// # Errors
    ///
    /// Fails for the whole rule if the context uses the reserved anchor or
    /// if any environment lacks exactly one boundary marker.
    pub fn bind(&self, context: &str, pairs: &BoundPairs) -> Result<BoundPairs, DiagnosticKind> {
        if context.contains(WORD_ANCHOR) {
            return Err(DiagnosticKind::ReservedAnchor {
                context: context.to_string(),
            });
        }

        let environments = self.expander.expand(context);
        let mut bound = BoundPairs::new(
            Vec::with_capacity(environments.len() * pairs.find.len()),
            Vec::with_capacity(environments.len() * pairs.replace.len()),
        );

        for environment in &environments {
            let (left, right) = split_environment(environment)?;
            bound
                .find
                .extend(pairs.find.iter().map(|s| format!("{left}{s}{right}")));
            bound
                .replace
                .extend(pairs.replace.iter().map(|s| format!("{left}{s}{right}")));
        }

        Ok(bound)
    }
}

fn split_environment(environment: &str) -> Result<(&str, &str), DiagnosticKind> {
    let count = environment.matches(BOUNDARY).count();
    match count {
        1 => Ok(environment
            .split_once(BOUNDARY)
            .unwrap_or((environment, ""))),
        0 => Err(DiagnosticKind::MissingBoundary {
            variant: environment.to_string(),
        }),
        _ => Err(DiagnosticKind::MultipleBoundaries {
            variant: environment.to_string(),
            count,
        }),
    }
}
