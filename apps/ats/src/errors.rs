use thiserror::Error;

/// Errors surfaced to callers of the checker and the backend helpers.
///
/// Nothing in the keyword engine itself fails; these cover input validation
/// and backend calls that have no local fallback.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("File too large ({size} bytes, limit {limit}). Please paste text instead.")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True for errors the user fixes by changing their input.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::FileTooLarge { .. })
    }
}

/// Failure talking to the optional backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No backend configured")]
    NotConfigured,
}
