//! Error types for the Wordshift system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Only loading a ruleset or word list can fail fatally. Problems with an
//! individual rule during a run are reported as diagnostics by the engine
//! and never surface as an [`Error`].

use std::fmt;

use thiserror::Error;

/// The main error type for Wordshift operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a parse error at the given 1-based line and column.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32, context: &str) -> Self {
        Self::new(ErrorKind::Parse {
            message: message.into(),
            line,
            column,
            context: context.to_string(),
        })
    }

    /// Creates an error for a group name defined twice.
    #[must_use]
    pub fn duplicate_group(name: char) -> Self {
        Self::new(ErrorKind::DuplicateGroup(name))
    }

    /// Creates an error for a group name that is not a single uppercase letter.
    #[must_use]
    pub fn invalid_group_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidGroupName(name.into()))
    }

    /// Creates an I/O error naming the path that failed.
    #[must_use]
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            source,
        })
    }

    /// Creates an error for a bad interactive command.
    #[must_use]
    pub fn command(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Command(message.into()))
    }

    /// Returns the source line number, if known.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match &self.kind {
            ErrorKind::Parse { line, .. } => Some(*line as usize),
            _ => self.context.as_ref().and_then(|ctx| ctx.line),
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading a ruleset or word list failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Generic syntax error in a ruleset line.
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// A record appeared outside any section, or under an unrecognized one.
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// A record has fewer fields than its section requires.
    #[error("{section} record needs at least {expected} fields, got {actual}")]
    MissingFields {
        /// Section the record belongs to.
        section: String,
        /// Minimum field count for the section.
        expected: usize,
        /// Fields actually present.
        actual: usize,
    },

    /// A record has more fields than its section allows.
    #[error("{section} record allows at most {expected} fields, got {actual}")]
    TooManyFields {
        /// Section the record belongs to.
        section: String,
        /// Maximum field count for the section.
        expected: usize,
        /// Fields actually present.
        actual: usize,
    },

    /// Group names must be a single uppercase ASCII letter.
    #[error("invalid group name {0:?}: expected a single uppercase letter")]
    InvalidGroupName(String),

    /// Group names are unique within a ruleset.
    #[error("group {0} is defined more than once")]
    DuplicateGroup(char),

    /// An interactive command was unknown or malformed.
    #[error("{0}")]
    Command(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// The offending source line, trimmed.
    pub text: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the offending source line.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        } else if let Some(line) = self.line {
            write!(f, "at line {line}")?;
        }
        if let Some(text) = &self.text {
            write!(f, " ({text:?})")?;
        }
        Ok(())
    }
}

/// Result type alias for Wordshift operations.
pub type Result<T> = std::result::Result<T, Error>;
