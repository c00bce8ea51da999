//! Core types, groups, rules, and errors for Wordshift.
//!
//! This crate provides:
//! - [`Group`] and [`GroupTable`] - Named grapheme groups
//! - [`Rule`], [`Substitution`], [`SoundChange`] - Rule records
//! - [`Ruleset`] - Groups plus rules in file order
//! - [`Corpus`] - The ordered word list being transformed
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod corpus;
pub mod error;
pub mod group;
pub mod rule;

pub use corpus::Corpus;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use group::{Group, GroupTable};
pub use rule::{Rule, RuleOrigin, Ruleset, Section, SoundChange, Substitution};
