//! Application error type shared by the api, core, report, export and cli
//! layers. `main` prints it and exits non-zero.

use crate::api::error::ApiError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Api(#[from] ApiError),

    // user input
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    // config file
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True when the failure means the stored token is no longer accepted.
    pub fn needs_login(&self) -> bool {
        matches!(self, AppError::Api(e) if e.is_auth_failure())
    }
}

pub type AppResult<T> = Result<T, AppError>;
