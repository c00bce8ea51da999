//! Engine configuration.

/// Controls what the engine logs while it runs.
///
/// Rule tracing goes to the `debug` log level and expansion tracing to
/// `trace`; a logger must be installed for either to be visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Log each rule as it is applied, with its concrete pairs.
    pub trace_rules: bool,

    /// Log every step of template expansion.
    pub trace_expansion: bool,
}

impl EngineConfig {
    /// Creates a configuration with all tracing off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with all tracing on.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            trace_rules: true,
            trace_expansion: true,
        }
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
}
