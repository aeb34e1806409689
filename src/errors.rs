use thiserror::Error;

/// Application-wide error type - single point of truth
///
/// The profiling core itself never produces errors: everything here belongs to the
/// collaborators around it (loading input, reading plugins, configuration, output).
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding outside of record loading
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV output
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input location could not be resolved to any record files
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Field dictionary plugin could not be loaded
    #[error("Plugin error in {plugin}: {reason}")]
    Plugin { plugin: String, reason: String },

    /// Profiling run exceeded its time budget and was abandoned
    #[error("Profiling timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Background task failed to complete
    #[error("Task error: {0}")]
    Task(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

impl From<glob::PatternError> for AppError {
    fn from(err: glob::PatternError) -> Self {
        AppError::InvalidInput(format!("Glob pattern error: {}", err))
    }
}

impl From<glob::GlobError> for AppError {
    fn from(err: glob::GlobError) -> Self {
        AppError::InvalidInput(format!("Glob error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Task(err.to_string())
    }
}
