use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scan pattern failed to compile
    #[error("Invalid regex pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Bad user input (paths, flags, file contents)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP server start-up or runtime failure
    #[error("Server error: {0}")]
    Server(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON error: {}", err))
    }
}
