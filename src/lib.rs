//! Wordshift - Sound-change engine
//!
//! This crate re-exports all layers of the Wordshift system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: wordshift_runtime    — CLI, file loading, REPL
//! Layer 2: wordshift_engine     — Expansion, context binding, rule application
//! Layer 1: wordshift_parser     — Ruleset and word-list formats
//! Layer 0: wordshift_foundation — Core types (Group, Rule, Corpus, Error)
//! ```

pub use wordshift_engine as engine;
pub use wordshift_foundation as foundation;
pub use wordshift_parser as parser;
pub use wordshift_runtime as runtime;
