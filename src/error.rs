use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarHistoryError {
    #[error("GitHub API error: {0}")]
    ApiError(u16),

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StarHistoryError>;
