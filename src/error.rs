//! Error handling module
//!
//! Application-level errors for the demo driver and seeding.

use crate::domain::{StoreError, WalletError};

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Failed to read seed file: {0}")]
    SeedFile(#[from] std::io::Error),

    #[error("Invalid seed file: {0}")]
    SeedFormat(#[from] serde_json::Error),
}
