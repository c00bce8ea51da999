//! Session state.
//!
//! A session loads a ruleset and an optional word list from disk and owns
//! the engine built from them. Loading is the only step that can fail;
//! running never does.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use wordshift_engine::{Diagnostics, Engine, EngineConfig, RunStats};
use wordshift_foundation::{Corpus, Error, Result, Ruleset};
use wordshift_parser::{parse_ruleset, parse_words};

use crate::config::RunConfig;

/// A loaded ruleset and corpus.
pub struct Session {
    /// The engine holding ruleset and corpus.
    engine: Engine,

    /// Where the ruleset came from, if loaded from disk.
    rules_path: Option<PathBuf>,
}

impl Session {
    /// Loads the files named by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or the ruleset is
    /// malformed. Parse errors name the ruleset file and line.
    pub fn load(config: &RunConfig) -> Result<Self> {
        let rules_source = read_source(&config.rules_path)?;
        let ruleset =
            parse_ruleset(&rules_source).map_err(|e| with_source(e, &config.rules_path))?;

        let corpus = match &config.words_path {
            Some(path) => parse_words(&read_source(path)?),
            None => Corpus::new(),
        };

        info!(
            "loaded {} group(s), {} rule(s), {} word(s) from {}",
            ruleset.groups.len(),
            ruleset.rule_count(),
            corpus.len(),
            config.rules_path.display()
        );

        let mut session = Self::new(ruleset, corpus, config.engine_config());
        session.rules_path = Some(config.rules_path.clone());
        Ok(session)
    }

    /// Builds a session from in-memory sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the ruleset is malformed.
    pub fn from_sources(rules: &str, words: &str, config: EngineConfig) -> Result<Self> {
        Ok(Self::new(parse_ruleset(rules)?, parse_words(words), config))
    }

    /// Builds a session from parsed values.
    #[must_use]
    pub fn new(ruleset: Ruleset, corpus: Corpus, config: EngineConfig) -> Self {
        Self {
            engine: Engine::new(ruleset, corpus).with_config(config),
            rules_path: None,
        }
    }

    /// Runs both phases over the corpus and returns the result.
    pub fn run(&mut self) -> &Corpus {
        self.engine.run()
    }

    /// Returns the engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the diagnostics from the latest run.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        self.engine.diagnostics()
    }

    /// Returns the run counters.
    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.engine.stats()
    }

    /// Returns the ruleset path, if loaded from disk.
    #[must_use]
    pub fn rules_path(&self) -> Option<&Path> {
        self.rules_path.as_deref()
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), e))
}

fn with_source(error: Error, path: &Path) -> Error {
    let Error { kind, context } = error;
    let context = context
        .unwrap_or_default()
        .with_source(path.display().to_string());
    Error::new(kind).with_context(context)
}
