//! Ruleset and word-list parsing for Wordshift.
//!
//! This crate turns the two text inputs of a run into typed values:
//!
//! ```text
//! ruleset text ──► RulesetLexer ──► RulesetParser ──► Ruleset
//! word list    ──► parse_words  ──────────────────► Corpus
//! ```
//!
//! # Modules
//!
//! - [`lexer`] - Classify ruleset lines (blank, comment, header, record)
//! - [`ruleset`] - Build a [`Ruleset`](wordshift_foundation::Ruleset) from records
//! - [`words`] - Read a word list into a [`Corpus`](wordshift_foundation::Corpus)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod ruleset;
pub mod words;

pub use lexer::{Line, RulesetLexer};
pub use ruleset::{RulesetParser, parse_ruleset};
pub use words::parse_words;
