use thiserror::Error;

/// Result type alias for configuration operations
pub type ParseResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading, querying, mutating or saving a configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Malformed token stream (for example a key with no value)
    #[error("Parse error at line {line}, column {column}: {message}")]
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Value text could not be converted to the requested number type
    #[error("Invalid number '{value}': {reason}")]
    InvalidNumber { value: String, reason: String },

    /// Configuration key not found
    #[error("Configuration key '{key}' not found")]
    KeyNotFound { key: String },

    /// Key rejected by the mutator
    #[error("Invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// File I/O error
    #[error("I/O error for '{path}': {message}")]
    IoError { path: String, message: String },

    /// Storage for the read buffer or the pair table could not be obtained
    #[error("Could not allocate {requested} {unit}")]
    AllocationError { requested: usize, unit: String },
}

impl ConfigError {
    /// Create a parse error
    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(value: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidNumber {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a key not found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        ConfigError::KeyNotFound { key: key.into() }
    }

    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::IoError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an allocation error, e.g. `allocation(10, "pair slots")`
    pub fn allocation(requested: usize, unit: impl Into<String>) -> Self {
        ConfigError::AllocationError {
            requested,
            unit: unit.into(),
        }
    }

    /// True for a lookup miss, which callers usually treat as a normal outcome
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, ConfigError::KeyNotFound { .. })
    }
}

impl<R: pest::RuleType> From<pest::error::Error<R>> for ConfigError {
    fn from(err: pest::error::Error<R>) -> Self {
        let (line, column) = match err.line_col {
            pest::error::LineColLocation::Pos((line, col)) => (line, col),
            pest::error::LineColLocation::Span((line, col), _) => (line, col),
        };

        ConfigError::ParseError {
            line,
            column,
            message: err.variant.message().to_string(),
        }
    }
}
