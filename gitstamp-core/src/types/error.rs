//! gitstamp error types.
//!
//! Only fatal conditions are errors. A file without any usable timestamp is a
//! normal outcome and is reported through [`crate::ResolvedTimestamp::Missing`].

use thiserror::Error;

/// Main error type for gitstamp operations.
#[derive(Debug, Error)]
pub enum GitstampError {
    /// The git tool could not be run, or exited non-zero.
    #[error("git {command} failed: {message}")]
    Invocation {
        /// The git arguments that were run (without paths).
        command: String,
        /// Diagnostic text from git (stderr) or from the OS.
        message: String,
    },

    /// Incompatible or invalid options.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// An explicit field value that is not a recognised date-time.
    #[error("invalid date: {value:?}")]
    InvalidDate { value: String },

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GitstampError {
    /// Create an invocation error.
    pub fn invocation(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invocation {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid date error.
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    /// Get the error type as a string.
    ///
    /// These strings are stable and may be matched on by callers.
    pub fn error_type(&self) -> &'static str {
        match self {
            GitstampError::Invocation { .. } => "invocation_error",
            GitstampError::Configuration { .. } => "configuration_error",
            GitstampError::InvalidDate { .. } => "invalid_date",
            GitstampError::Io(_) => "io_error",
            GitstampError::Toml(_) => "toml_error",
        }
    }

    /// Check if this is an invocation error.
    pub fn is_invocation_error(&self) -> bool {
        matches!(self, GitstampError::Invocation { .. })
    }

    /// Check if this is a configuration error.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, GitstampError::Configuration { .. })
    }
}

/// Result alias used throughout gitstamp-core.
pub type Result<T> = std::result::Result<T, GitstampError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_error_surfaces_diagnostic() {
        let err = GitstampError::invocation("log", "fatal: not a git repository");
        assert_eq!(err.error_type(), "invocation_error");
        assert!(err.is_invocation_error());
        assert_eq!(err.to_string(), "git log failed: fatal: not a git repository");
    }

    #[test]
    fn configuration_error_type() {
        let err = GitstampError::configuration("bad strategy");
        assert!(err.is_configuration_error());
        assert!(!err.is_invocation_error());
        assert_eq!(err.error_type(), "configuration_error");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GitstampError = io.into();
        assert_eq!(err.error_type(), "io_error");
    }
}
