//! Engine orchestration.
//!
//! The engine owns a ruleset and a corpus and runs the two phases in order:
//!
//! 1. SUBST: literal find/replace rules, no group expansion.
//! 2. POST: sound changes with group expansion and context binding.
//!
//! Each rule runs to completion over the whole corpus before the next one
//! starts. A malformed rule is reported and skipped; the run always finishes.
//! Running the same engine twice applies the rules twice, and because later
//! rules can re-match earlier output the result is generally not a fixed
//! point. Diagnostics describe the latest run; stats accumulate.

use log::debug;
use wordshift_foundation::{Corpus, GroupTable, Ruleset, SoundChange};

use crate::apply::RuleApplier;
use crate::config::EngineConfig;
use crate::context::{BoundPairs, ContextBinder};
use crate::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::expand::Expander;

// =============================================================================
// Run Statistics
// =============================================================================

/// Counters for one or more runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Rules applied (including ones that matched nothing).
    pub rules_applied: usize,
    /// Rules skipped because of a diagnostic.
    pub rules_skipped: usize,
    /// Concrete find/replace pairs applied.
    pub pairs_applied: usize,
    /// Sum over applied rules of the words each one changed.
    pub word_changes: usize,
}

// =============================================================================
// Engine
// =============================================================================

/// Applies a ruleset to a corpus.
pub struct Engine {
    ruleset: Ruleset,
    corpus: Corpus,
    config: EngineConfig,
    diagnostics: Diagnostics,
    stats: RunStats,
}

impl Engine {
    /// Creates an engine. Nothing runs until [`Engine::run`] is called.
    #[must_use]
    pub fn new(ruleset: Ruleset, corpus: Corpus) -> Self {
        Self {
            ruleset,
            corpus,
            config: EngineConfig::default(),
            diagnostics: Diagnostics::new(),
            stats: RunStats::default(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the SUBST phase, then the POST phase, and returns the corpus.
    ///
    /// Diagnostics from any earlier run are discarded first.
    pub fn run(&mut self) -> &Corpus {
        self.diagnostics.clear();
        self.run_subst();
        self.run_post();
        &self.corpus
    }

    /// Applies every SUBST rule in file order, skipping malformed ones.
    pub fn run_subst(&mut self) {
        let Self {
            ruleset,
            corpus,
            config,
            diagnostics,
            stats,
        } = self;

        for rule in &ruleset.substitutions {
            match RuleApplier::apply_pair(&rule.find, &rule.replace, corpus) {
                Ok(changed) => {
                    if config.trace_rules {
                        debug!(
                            "subst {rule} ({}): {changed} word(s) changed",
                            rule.origin
                        );
                    }
                    stats.rules_applied += 1;
                    stats.pairs_applied += 1;
                    stats.word_changes += changed;
                }
                Err(kind) => {
                    stats.rules_skipped += 1;
                    diagnostics.report(Diagnostic::new(rule.origin, rule.to_string(), kind));
                }
            }
        }
    }

    /// Applies every POST rule in file order, skipping malformed ones.
    pub fn run_post(&mut self) {
        let Self {
            ruleset,
            corpus,
            config,
            diagnostics,
            stats,
        } = self;

        for rule in &ruleset.sound_changes {
            if config.trace_rules {
                debug!("applying post rule {rule} ({})", rule.origin);
            }
            if let Some(exceptions) = &rule.exceptions {
                diagnostics.report(diagnostic(
                    rule,
                    DiagnosticKind::ExceptionsIgnored {
                        exceptions: exceptions.clone(),
                    },
                ));
            }

            let outcome = bind_rule(rule, &ruleset.groups, config).and_then(|pairs| {
                if config.trace_rules {
                    trace_pairs(&pairs);
                }
                RuleApplier::apply(&pairs, corpus).map(|changed| (pairs.len(), changed))
            });

            match outcome {
                Ok((pairs, changed)) => {
                    if config.trace_rules {
                        debug!("  {changed} word(s) changed");
                    }
                    stats.rules_applied += 1;
                    stats.pairs_applied += pairs;
                    stats.word_changes += changed;
                }
                Err(kind) => {
                    stats.rules_skipped += 1;
                    diagnostics.report(diagnostic(rule, kind));
                }
            }
        }
    }

    /// Runs the full pipeline on a single word without touching the corpus.
    ///
    /// Malformed rules are skipped silently; their diagnostics are reported
    /// by [`Engine::run`].
    #[must_use]
    pub fn transform_word(&self, word: &str) -> String {
        let mut word = word.to_string();
        for rule in &self.ruleset.substitutions {
            if !rule.find.is_empty() {
                word = word.replace(&rule.find, &rule.replace);
            }
        }
        for rule in &self.ruleset.sound_changes {
            if let Ok(pairs) = bind_rule(rule, &self.ruleset.groups, &self.config) {
                let _ = RuleApplier::apply_to_word(&pairs, &mut word);
            }
        }
        word
    }

    /// Returns the concrete find/replace pairs a sound change denotes.
    ///
    /// The pairs are not length-checked; see [`BoundPairs::is_balanced`].
    ///
    /// # Errors
    ///
    /// Returns the context-binding failure if the rule's context is invalid.
    pub fn expansions(&self, rule: &SoundChange) -> Result<BoundPairs, DiagnosticKind> {
        bind_rule(rule, &self.ruleset.groups, &self.config)
    }

    /// Expands a template against this engine's groups.
    #[must_use]
    pub fn expand(&self, template: &str) -> Vec<String> {
        self.expander().expand(template)
    }

    fn expander(&self) -> Expander<'_> {
        Expander::new(&self.ruleset.groups).with_trace(self.config.trace_expansion)
    }

    /// Returns the ruleset.
    #[must_use]
    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    /// Returns the corpus in its current state.
    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Consumes the engine, returning the corpus.
    #[must_use]
    pub fn into_corpus(self) -> Corpus {
        self.corpus
    }

    /// Returns the diagnostics reported by the latest run.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Returns the run counters.
    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Expands both sides of a rule and binds them into the rule's context.
fn bind_rule(
    rule: &SoundChange,
    groups: &GroupTable,
    config: &EngineConfig,
) -> Result<BoundPairs, DiagnosticKind> {
    let expander = Expander::new(groups).with_trace(config.trace_expansion);
    let pairs = BoundPairs::new(
        expander.expand(&rule.pattern1),
        expander.expand(&rule.pattern2),
    );
    match &rule.context {
        Some(context) => ContextBinder::with_expander(expander).bind(context, &pairs),
        None => Ok(pairs),
    }
}

fn diagnostic(rule: &SoundChange, kind: DiagnosticKind) -> Diagnostic {
    Diagnostic::new(rule.origin, rule.to_string(), kind)
}

fn trace_pairs(pairs: &BoundPairs) {
    for (i, (find, replace)) in pairs.iter().enumerate() {
        debug!("  pair {i}: {find} -> {replace}");
    }
}
