//! Template expansion.
//!
//! A template mixes literal characters with group references. Expanding it
//! yields every concrete string it denotes, in a fixed order: for a template
//! `G + rest`, each member of `G` (outer loop, member order) is joined with
//! each expansion of `rest` (inner loop).
//!
//! Two templates that reference the same groups at corresponding positions
//! therefore walk the member lists in lockstep, and the `i`-th expansion of
//! one pairs with the `i`-th expansion of the other. `P:B` with
//! `P = p,t,k` and `B = b,d,g` expands to `[p, t, k]` and `[b, d, g]`, giving
//! the three substitutions `p→b`, `t→d`, `k→g`.
//!
//! Expansion size is the product of the referenced groups' member counts and
//! is not bounded.

use log::trace;
use wordshift_foundation::GroupTable;

/// Expands `template` against `groups`.
///
/// `expand("", groups)` is `[""]`. A character that is not a defined group
/// name, including an uppercase letter with no definition, is a literal.
#[must_use]
pub fn expand(template: &str, groups: &GroupTable) -> Vec<String> {
    Expander::new(groups).expand(template)
}

/// Template expander bound to a group table.
#[derive(Clone, Copy)]
pub struct Expander<'g> {
    groups: &'g GroupTable,
    trace: bool,
}

impl<'g> Expander<'g> {
    /// Creates an expander over `groups`.
    #[must_use]
    pub fn new(groups: &'g GroupTable) -> Self {
        Self {
            groups,
            trace: false,
        }
    }

    /// Logs every expansion step at `trace` level.
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Expands `template` into its ordered list of concrete strings.
    #[must_use]
    pub fn expand(&self, template: &str) -> Vec<String> {
        let chars: Vec<char> = template.chars().collect();
        self.expand_from(&chars, 0)
    }

    fn expand_from(&self, chars: &[char], index: usize) -> Vec<String> {
        let Some(&first) = chars.get(index) else {
            return vec![String::new()];
        };
        let rest = self.expand_from(chars, index + 1);

        let result: Vec<String> = match self.groups.members(first) {
            Some(members) => members
                .iter()
                .flat_map(|member| rest.iter().map(move |tail| format!("{member}{tail}")))
                .collect(),
            None => rest
                .into_iter()
                .map(|tail| {
                    let mut s = String::with_capacity(first.len_utf8() + tail.len());
                    s.push(first);
                    s.push_str(&tail);
                    s
                })
                .collect(),
        };

        if self.trace {
            trace!("expand {first:?} at {index}: {result:?}");
        }
        result
    }
}
