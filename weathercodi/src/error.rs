//! Error types for the weathercodi application
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to a frontend as plain messages.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Shown to the user as-is on a failed login.
    #[error("이메일 또는 비밀번호가 잘못되었습니다.")]
    InvalidCredentials,

    #[error("No user is logged in")]
    NotAuthenticated,

    #[error("Clothing item not found: {0}")]
    ItemNotFound(String),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
