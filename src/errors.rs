//! Unified application error type.
//! Every module (dataset, export, config, cli) returns AppError so the
//! binary has a single place where failures are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input data
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported input file: {0} (expected .json, .yaml or .yml)")]
    UnsupportedInput(String),

    #[error("Unknown helper id {helper} referenced by {context}")]
    UnknownHelper { helper: u32, context: String },

    #[error("Helper id {0} is defined more than once")]
    DuplicateHelper(u32),

    #[error("Helper id {helper} is listed more than once in {context}")]
    DuplicateAssignment { helper: u32, context: String },

    #[error("Job not found: {0}")]
    JobNotFound(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Export cancelled: {0}")]
    Cancelled(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging setup failed: {0}")]
    Telemetry(String),
}

pub type AppResult<T> = Result<T, AppError>;
