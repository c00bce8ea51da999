//! Ruleset parsing.
//!
//! ```text
//! # comment
//! $GROUP
//! P:p,t,k
//! B:b,d,g
//! $SUBST
//! qu:kw
//! $POST
//! P:B:V_V
//! ```
//!
//! Malformed lines are rejected: parsing stops at the first bad line and the
//! error carries its line number and text. Sections that never appear are
//! empty.

use log::debug;
use wordshift_foundation::{
    Error, ErrorContext, ErrorKind, Group, Result, RuleOrigin, Ruleset, Section, SoundChange,
    Substitution,
};

use crate::lexer::{Line, RulesetLexer};

/// Separates the members of a group definition.
pub const MEMBER_SEPARATOR: char = ',';

/// Parses ruleset source text.
///
/// # Errors
///
/// Returns an error for a record outside a known section, a record with the
/// wrong number of fields, an invalid or duplicate group name, or an empty
/// section header.
pub fn parse_ruleset(source: &str) -> Result<Ruleset> {
    RulesetParser::new().parse(source)
}

/// Streaming ruleset parser.
#[derive(Default)]
pub struct RulesetParser {
    section: Option<Section>,
    ruleset: Ruleset,
}

impl RulesetParser {
    /// Creates a parser positioned before any section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `source` and returns the finished ruleset.
    ///
    /// # Errors
    ///
    /// See [`parse_ruleset`].
    pub fn parse(mut self, source: &str) -> Result<Ruleset> {
        for ((number, line), raw) in RulesetLexer::lines(source).zip(source.lines()) {
            self.line(number, line).map_err(|e| {
                e.with_context(ErrorContext::new().with_line(number).with_text(raw.trim()))
            })?;
        }
        Ok(self.ruleset)
    }

    fn line(&mut self, number: usize, line: Line<'_>) -> Result<()> {
        match line {
            Line::Blank | Line::Comment(_) => Ok(()),
            Line::Header(name) => self.header(number, name),
            Line::Record(fields) => self.record(number, &fields),
        }
    }

    fn header(&mut self, number: usize, name: &str) -> Result<()> {
        if name.is_empty() {
            #[allow(clippy::cast_possible_truncation)]
            return Err(Error::parse("empty section header", number as u32, 1, "$"));
        }
        let section = Section::from_name(name)
            .ok_or_else(|| Error::new(ErrorKind::UnknownSection(name.to_string())))?;
        self.section = Some(section);
        Ok(())
    }

    fn record(&mut self, number: usize, fields: &[&str]) -> Result<()> {
        let section = self.section.ok_or_else(|| {
            Error::new(ErrorKind::UnknownSection(
                "(record before any section header)".to_string(),
            ))
        })?;
        check_field_count(section, fields.len())?;

        let origin = RuleOrigin::at_line(number);
        match section {
            Section::Group => {
                let group = parse_group(fields[0], fields[1])?;
                debug!("defined group {group}");
                self.ruleset.groups.define(group)?;
            }
            Section::Subst => {
                self.ruleset
                    .push(Substitution::new(fields[0], fields[1]).with_origin(origin));
            }
            Section::Post => {
                let mut rule = SoundChange::new(fields[0], fields[1]).with_origin(origin);
                if let Some(context) = optional_field(fields, 2) {
                    rule = rule.with_context(context);
                }
                if let Some(exceptions) = optional_field(fields, 3) {
                    rule = rule.with_exceptions(exceptions);
                }
                self.ruleset.push(rule);
            }
        }
        Ok(())
    }
}

fn check_field_count(section: Section, actual: usize) -> Result<()> {
    let (min, max) = section.field_bounds();
    if actual < min {
        return Err(Error::new(ErrorKind::MissingFields {
            section: section.name().to_string(),
            expected: min,
            actual,
        }));
    }
    if actual > max {
        return Err(Error::new(ErrorKind::TooManyFields {
            section: section.name().to_string(),
            expected: max,
            actual,
        }));
    }
    Ok(())
}

/// Trailing POST fields count as absent when empty.
fn optional_field<'a>(fields: &[&'a str], index: usize) -> Option<&'a str> {
    fields.get(index).copied().filter(|f| !f.is_empty())
}

fn parse_group(name: &str, members: &str) -> Result<Group> {
    let mut chars = name.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Err(Error::invalid_group_name(name));
    };
    if !Group::is_valid_name(letter) {
        return Err(Error::invalid_group_name(name));
    }
    Ok(Group::new(letter, members.split(MEMBER_SEPARATOR)))
}
