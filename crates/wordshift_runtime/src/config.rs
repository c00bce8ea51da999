//! Run configuration.

use std::path::PathBuf;

use wordshift_engine::EngineConfig;

/// Everything a run needs, passed in explicitly.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Ruleset file.
    pub rules_path: PathBuf,

    /// Word-list file. Optional in interactive mode.
    pub words_path: Option<PathBuf>,

    /// Log each rule as it is applied.
    pub trace_rules: bool,

    /// Log every expansion step.
    pub trace_expansion: bool,

    /// Start the REPL after any batch run.
    pub interactive: bool,

    /// Report skipped rules on stderr.
    pub show_diagnostics: bool,
}

impl RunConfig {
    /// Creates a configuration for the given ruleset file.
    #[must_use]
    pub fn new(rules_path: impl Into<PathBuf>) -> Self {
        Self {
            rules_path: rules_path.into(),
            words_path: None,
            trace_rules: false,
            trace_expansion: false,
            interactive: false,
            show_diagnostics: true,
        }
    }

    /// Builder method to set the word list.
    #[must_use]
    pub fn with_words(mut self, path: impl Into<PathBuf>) -> Self {
        self.words_path = Some(path.into());
        self
    }

    /// Builder method to enable/disable rule tracing.
    #[must_use]
    pub fn with_trace_rules(mut self, trace: bool) -> Self {
        self.trace_rules = trace;
        self
    }

    /// Builder method to enable/disable expansion tracing.
    #[must_use]
    pub fn with_trace_expansion(mut self, trace: bool) -> Self {
        self.trace_expansion = trace;
        self
    }

    /// Builder method to enable/disable the REPL.
    #[must_use]
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Builder method to enable/disable diagnostics output.
    #[must_use]
    pub fn with_diagnostics(mut self, show: bool) -> Self {
        self.show_diagnostics = show;
        self
    }

    /// The engine configuration implied by this run configuration.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new()
            .with_trace_rules(self.trace_rules)
            .with_trace_expansion(self.trace_expansion)
    }

    /// Default log filter for these settings (`RUST_LOG` overrides it).
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.trace_expansion {
            "trace"
        } else if self.trace_rules {
            "debug"
        } else if self.show_diagnostics {
            "warn"
        } else {
            "error"
        }
    }
}
