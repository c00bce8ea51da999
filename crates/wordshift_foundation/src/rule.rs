//! Rules and rulesets.
//!
//! A ruleset is parsed once and never changes afterward. Rule order within
//! each phase is file order, and later rules see the output of earlier ones.

use std::fmt;

use crate::group::GroupTable;

// =============================================================================
// Section
// =============================================================================

/// Ruleset section a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Group definitions (`NAME:members`).
    Group,
    /// Literal find/replace rules run before sound changes.
    Subst,
    /// Templated sound changes.
    Post,
}

impl Section {
    /// Resolves a section header name (the text after `$`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "GROUP" => Some(Self::Group),
            "SUBST" => Some(Self::Subst),
            "POST" => Some(Self::Post),
            _ => None,
        }
    }

    /// The header name as written in ruleset files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Group => "GROUP",
            Self::Subst => "SUBST",
            Self::Post => "POST",
        }
    }

    /// Minimum and maximum field counts for a record in this section.
    #[must_use]
    pub const fn field_bounds(self) -> (usize, usize) {
        match self {
            Self::Group | Self::Subst => (2, 2),
            Self::Post => (2, 4),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Where a rule was defined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuleOrigin {
    /// 1-based line in the ruleset source (0 if built in code).
    pub line: usize,
}

impl RuleOrigin {
    /// Creates an origin at the given line.
    #[must_use]
    pub const fn at_line(line: usize) -> Self {
        Self { line }
    }
}

impl fmt::Display for RuleOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            f.write_str("<inline>")
        } else {
            write!(f, "line {}", self.line)
        }
    }
}

/// A literal find/replace applied during the SUBST phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    /// Text to find.
    pub find: String,
    /// Replacement text.
    pub replace: String,
    /// Source location.
    pub origin: RuleOrigin,
}

impl Substitution {
    /// Creates a substitution with no source location.
    #[must_use]
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
            origin: RuleOrigin::default(),
        }
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_origin(mut self, origin: RuleOrigin) -> Self {
        self.origin = origin;
        self
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.find, self.replace)
    }
}

/// A templated sound change applied during the POST phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoundChange {
    /// Template for the text to find.
    pub pattern1: String,
    /// Template for the replacement.
    pub pattern2: String,
    /// Environment template with one `_` marking where `pattern1` sits.
    pub context: Option<String>,
    /// Exceptions field, carried verbatim and not interpreted.
    pub exceptions: Option<String>,
    /// Source location.
    pub origin: RuleOrigin,
}

impl SoundChange {
    /// Creates a context-free sound change.
    #[must_use]
    pub fn new(pattern1: impl Into<String>, pattern2: impl Into<String>) -> Self {
        Self {
            pattern1: pattern1.into(),
            pattern2: pattern2.into(),
            context: None,
            exceptions: None,
            origin: RuleOrigin::default(),
        }
    }

    /// Restricts the change to an environment such as `V_V`.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Attaches an exceptions field.
    #[must_use]
    pub fn with_exceptions(mut self, exceptions: impl Into<String>) -> Self {
        self.exceptions = Some(exceptions.into());
        self
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_origin(mut self, origin: RuleOrigin) -> Self {
        self.origin = origin;
        self
    }
}

impl fmt::Display for SoundChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.pattern1, self.pattern2)?;
        match (&self.context, &self.exceptions) {
            (Some(ctx), Some(exc)) => write!(f, ":{ctx}:{exc}"),
            (Some(ctx), None) => write!(f, ":{ctx}"),
            (None, Some(exc)) => write!(f, "::{exc}"),
            (None, None) => Ok(()),
        }
    }
}

/// A rule tagged by the phase it runs in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    /// SUBST phase rule.
    Substitution(Substitution),
    /// POST phase rule.
    SoundChange(SoundChange),
}

impl Rule {
    /// The section this rule was declared in.
    #[must_use]
    pub const fn section(&self) -> Section {
        match self {
            Self::Substitution(_) => Section::Subst,
            Self::SoundChange(_) => Section::Post,
        }
    }

    /// Source location.
    #[must_use]
    pub const fn origin(&self) -> RuleOrigin {
        match self {
            Self::Substitution(s) => s.origin,
            Self::SoundChange(s) => s.origin,
        }
    }
}

impl From<Substitution> for Rule {
    fn from(rule: Substitution) -> Self {
        Self::Substitution(rule)
    }
}

impl From<SoundChange> for Rule {
    fn from(rule: SoundChange) -> Self {
        Self::SoundChange(rule)
    }
}

// =============================================================================
// Ruleset
// =============================================================================

/// A parsed ruleset: groups plus the rules of each phase in file order.
#[derive(Clone, Debug, Default)]
pub struct Ruleset {
    /// Group definitions.
    pub groups: GroupTable,
    /// SUBST phase rules.
    pub substitutions: Vec<Substitution>,
    /// POST phase rules.
    pub sound_changes: Vec<SoundChange>,
}

impl Ruleset {
    /// Creates an empty ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the group table.
    #[must_use]
    pub fn with_groups(mut self, groups: GroupTable) -> Self {
        self.groups = groups;
        self
    }

    /// Appends a rule to its phase.
    pub fn push(&mut self, rule: impl Into<Rule>) {
        match rule.into() {
            Rule::Substitution(s) => self.substitutions.push(s),
            Rule::SoundChange(s) => self.sound_changes.push(s),
        }
    }

    /// Builder form of [`Ruleset::push`].
    #[must_use]
    pub fn with_rule(mut self, rule: impl Into<Rule>) -> Self {
        self.push(rule);
        self
    }

    /// Total number of rules across both phases.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.substitutions.len() + self.sound_changes.len()
    }

    /// Iterates over every rule in execution order (SUBST, then POST).
    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.substitutions
            .iter()
            .cloned()
            .map(Rule::from)
            .chain(self.sound_changes.iter().cloned().map(Rule::from))
    }
}
