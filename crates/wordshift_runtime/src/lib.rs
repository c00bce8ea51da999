//! CLI, file loading, and REPL for Wordshift.
//!
//! This crate provides:
//! - [`RunConfig`] - Explicit configuration for a run
//! - [`Session`] - Load a ruleset and word list and run the engine
//! - [`Repl`] - Interactive word transformation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod repl;
pub mod session;

pub use config::RunConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Outcome, Repl};
pub use session::Session;
