//! Error types for the nameforge-rs library.
//!
//! Structured error types that preserve context and enable proper error
//! propagation throughout preset loading and hierarchy resolution. Soft
//! failures (bad files, dangling references) are logged at the call site
//! and never surface here; these variants cover the hard failures only.

use std::io;

use thiserror::Error;

/// Main result type for nameforge operations.
pub type Result<T> = std::result::Result<T, NameForgeError>;

/// Comprehensive error type for all nameforge operations.
#[derive(Error, Debug)]
pub enum NameForgeError {
    /// I/O related errors (file operations)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Parsing errors for preset, convention, or hierarchy files
    #[error("Parse error: {message}")]
    Parse {
        /// Error description
        message: String,
        /// File path where the error occurred
        file_path: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
        /// Additional context
        context: Option<String>,
    },
}

impl NameForgeError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            file_path: None,
        }
    }

    /// Create a new parse error with file context
    pub fn parse_in_file(message: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            file_path: Some(file_path.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new validation error with field context
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            context: None,
        }
    }

    /// Add context to an existing error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        if let Self::Internal { context: ctx, .. } = &mut self {
            *ctx = Some(context.into());
        }
        self
    }
}

// Implement From traits for common error types
impl From<io::Error> for NameForgeError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for NameForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for NameForgeError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<NameForgeError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = NameForgeError::config("Invalid configuration");
        assert!(matches!(err, NameForgeError::Config { .. }));

        let err = NameForgeError::parse_in_file("bad mapping", "presets/a.npreset");
        assert!(matches!(
            err,
            NameForgeError::Parse {
                file_path: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_error_with_context() {
        let err = NameForgeError::internal("Something went wrong").with_context("During load");

        if let NameForgeError::Internal { context, .. } = err {
            assert_eq!(context, Some("During load".to_string()));
        } else {
            panic!("Expected Internal error");
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: NameForgeError = io_err.into();
        assert!(matches!(err, NameForgeError::Io { .. }));
    }

    #[test]
    fn test_validation_message_format() {
        let err = NameForgeError::validation_field("out of range", "default_preset_name");
        assert!(format!("{err}").contains("out of range"));
    }
}
