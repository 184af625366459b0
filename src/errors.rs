//! Unified application error type.
//! All modules (core, config, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    // ---------------------------
    // Source file errors
    // ---------------------------
    #[error("{0}")]
    Format(String),

    #[error("Invalid numeric value '{value}' at line {line}")]
    Parse { line: u64, value: String },

    #[error("Missing value for column '{column}' at line {line}")]
    IncompleteRow { line: u64, column: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

// I/O failures surfaced by the csv reader/writer stay I/O errors.
impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        let msg = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => AppError::Io(e),
            _ => AppError::Csv(msg),
        }
    }
}

impl AppError {
    /// Process exit code (sysexits.h values).
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Format(_)
            | AppError::Parse { .. }
            | AppError::IncompleteRow { .. }
            | AppError::Csv(_) => 65,
            AppError::Io(_) => 74,
            AppError::Config(_) | AppError::ConfigParse(_) => 78,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
