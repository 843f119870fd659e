//! Unified application error type.
//! Every module (ingest, core, export, cli) returns AppError so the binary
//! has exactly one place where fatal failures are reported.

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

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input tables
    // ---------------------------
    #[error("Column '{column}' not found in the {table} header")]
    ColumnNotFound { table: String, column: String },

    #[error("The {0} file has no header row")]
    EmptyTable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("Output format not supported: {0}")]
    InvalidFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn column_not_found(table: &str, column: &str) -> Self {
        AppError::ColumnNotFound {
            table: table.to_string(),
            column: column.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
