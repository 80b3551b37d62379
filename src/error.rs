use thiserror::Error;

/// Unified error type for determine-version operations
#[derive(Error, Debug)]
pub enum DetermineVersionError {
    /// Wrong argument count, or an empty/whitespace-only branch name
    #[error(
        "error: branch name not passed as a sole argument. On GHA pass it as part of `client_payload`."
    )]
    InvalidArgument,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in determine-version
pub type Result<T> = std::result::Result<T, DetermineVersionError>;

impl DetermineVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DetermineVersionError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        DetermineVersionError::Version(msg.into())
    }

    /// Whether this error is a caller-usage error rather than an environment failure
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DetermineVersionError::InvalidArgument)
    }
}

impl From<toml::de::Error> for DetermineVersionError {
    fn from(err: toml::de::Error) -> Self {
        DetermineVersionError::Config(err.to_string())
    }
}
