//! Unified application error type.
//! All modules (core, config, export, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.
//!
//! Punch-level problems (wrong count, inverted order, late entry…) are NOT
//! errors: they are recorded as data on the daily record.

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
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Import / reconciliation
    // ---------------------------
    #[error("No parseable rows found in {0}")]
    NoParseableRows(String),

    #[error("No record found for {0}")]
    RecordNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
