use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("profile '{0}' already exists")]
    AlreadyExists(String),
    #[error("profile '{0}' does not exist")]
    ProfileNotFound(String),
    #[error("key '{key}' does not exist in profile '{profile}'")]
    KeyNotFound { profile: String, key: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
