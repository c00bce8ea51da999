//! Named grapheme groups.
//!
//! A group abbreviates an ordered list of graphemes under a single uppercase
//! letter, so `P` can stand for `p,t,k`. Member order is significant: rules
//! that mention groups on both sides pair members by index.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// A named, ordered set of interchangeable graphemes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Single uppercase letter naming the group.
    pub name: char,
    /// Members in definition order.
    pub members: Vec<String>,
}

impl Group {
    /// Creates a group from a name and its members.
    #[must_use]
    pub fn new<I, S>(name: char, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `name` is a legal group name.
    #[must_use]
    pub fn is_valid_name(name: char) -> bool {
        name.is_ascii_uppercase()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = [{}]", self.name, self.members.join(", "))
    }
}

/// Lookup table from group name to group, kept in definition order.
#[derive(Clone, Debug, Default)]
pub struct GroupTable {
    groups: Vec<Group>,
    index: HashMap<char, usize>,
}

impl GroupTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group to the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a single uppercase letter or a
    /// group with the same name already exists.
    pub fn define(&mut self, group: Group) -> Result<()> {
        if !Group::is_valid_name(group.name) {
            return Err(Error::invalid_group_name(group.name.to_string()));
        }
        if self.index.contains_key(&group.name) {
            return Err(Error::duplicate_group(group.name));
        }
        self.index.insert(group.name, self.groups.len());
        self.groups.push(group);
        Ok(())
    }

    /// Builder form of [`GroupTable::define`].
    ///
    /// # Errors
    ///
    /// Same as [`GroupTable::define`].
    pub fn with_group(mut self, group: Group) -> Result<Self> {
        self.define(group)?;
        Ok(self)
    }

    /// Looks up a group by name.
    #[must_use]
    pub fn get(&self, name: char) -> Option<&Group> {
        self.index.get(&name).map(|&i| &self.groups[i])
    }

    /// Returns the members of a group, if it exists.
    #[must_use]
    pub fn members(&self, name: char) -> Option<&[String]> {
        self.get(name).map(|g| g.members.as_slice())
    }

    /// Returns true if `name` refers to a defined group.
    ///
    /// Any character not in the table is a literal when it appears in a
    /// template, including uppercase letters nobody defined.
    #[must_use]
    pub fn contains(&self, name: char) -> bool {
        self.index.contains_key(&name)
    }

    /// Number of defined groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no groups are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over groups in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Number of concrete strings `template` expands to.
    ///
    /// This is the product of the member counts of every group reference,
    /// counting repeated references separately. Saturates instead of
    /// overflowing.
    #[must_use]
    pub fn cardinality(&self, template: &str) -> usize {
        template
            .chars()
            .filter_map(|c| self.get(c))
            .fold(1usize, |acc, g| acc.saturating_mul(g.len()))
    }
}
