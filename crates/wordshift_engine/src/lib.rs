//! Template expansion, context binding, and rule application for Wordshift.
//!
//! This crate provides:
//! - [`expand`] / [`Expander`] - Expand a template into concrete strings
//! - [`ContextBinder`] - Wrap expansions in their phonetic environment
//! - [`RuleApplier`] - Apply find/replace pairs to a corpus
//! - [`Engine`] - Run the SUBST and POST phases over a corpus
//! - [`Diagnostic`] - Non-fatal reports for malformed rules

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod apply;
pub mod config;
pub mod context;
pub mod diagnostic;
pub mod engine;
pub mod expand;

pub use apply::RuleApplier;
pub use config::EngineConfig;
pub use context::{BOUNDARY, BoundPairs, ContextBinder, WORD_ANCHOR};
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
pub use engine::{Engine, RunStats};
pub use expand::{Expander, expand};
