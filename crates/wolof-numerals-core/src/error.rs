//! Error types for the Wolof numeral speller.
//!
//! Rendering itself never fails: out-of-range values produce the lexicon's
//! sentinel string. These errors cover the checked API, boundary parsing and
//! lexicon/config loading.

/// Result type alias for speller operations
pub type SpellerResult<T> = Result<T, SpellerError>;

/// Main error type for speller operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SpellerError {
    /// Input could not be interpreted as an integer
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Error message describing the invalid input
        message: String,
    },

    /// Value exceeds the renderable range
    #[error("Value {value} is outside the renderable range (|n| <= {max})")]
    OutOfRange {
        /// The rejected value
        value: i128,
        /// Largest renderable magnitude
        max: u32,
    },

    /// Lexicon or config content is invalid
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Error message describing the configuration issue
        message: String,
    },

    /// File I/O error
    #[error("File I/O error: {message}")]
    FileError {
        /// Error message describing the file operation failure
        message: String,
    },
}

impl SpellerError {
    /// Create a new invalid input error
    #[must_use]
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new out-of-range error for `value`
    #[must_use]
    pub const fn out_of_range(value: i128) -> Self {
        Self::OutOfRange {
            value,
            max: crate::MAX_RENDERABLE,
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// Create a new file error
    #[must_use]
    pub fn file<S: Into<String>>(message: S) -> Self {
        Self::FileError {
            message: message.into(),
        }
    }

    /// Check if this error is due to invalid user input
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::OutOfRange { .. } | Self::ConfigurationError { .. }
        )
    }

    /// Get the error category for logging
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "input",
            Self::OutOfRange { .. } => "range",
            Self::ConfigurationError { .. } => "configuration",
            Self::FileError { .. } => "file",
        }
    }
}

impl From<std::io::Error> for SpellerError {
    fn from(err: std::io::Error) -> Self {
        Self::file(err.to_string())
    }
}

impl From<toml::de::Error> for SpellerError {
    fn from(err: toml::de::Error) -> Self {
        Self::configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpellerError::invalid_input("'abc' is not an integer");
        assert_eq!(err.to_string(), "Invalid input: 'abc' is not an integer");

        let err = SpellerError::out_of_range(1_000_000_000);
        assert_eq!(
            err.to_string(),
            "Value 1000000000 is outside the renderable range (|n| <= 999999999)"
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(SpellerError::invalid_input("test").category(), "input");
        assert_eq!(SpellerError::out_of_range(-5_000_000_000).category(), "range");
        assert_eq!(SpellerError::configuration("test").category(), "configuration");
        assert_eq!(SpellerError::file("test").category(), "file");
    }

    #[test]
    fn test_user_errors() {
        assert!(SpellerError::invalid_input("test").is_user_error());
        assert!(SpellerError::out_of_range(i128::MAX).is_user_error());
        assert!(SpellerError::configuration("test").is_user_error());
        assert!(!SpellerError::file("test").is_user_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err = SpellerError::from(io_err);
        assert!(matches!(err, SpellerError::FileError { .. }));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Table>("units = [").unwrap_err();
        let err = SpellerError::from(toml_err);
        assert!(matches!(err, SpellerError::ConfigurationError { .. }));
    }
}
