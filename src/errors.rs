//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
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

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Malformed storage file '{path}': {source}")]
    MalformedStorage {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Donation amount must be greater than zero (got {0})")]
    InvalidAmount(f64),

    #[error("No NGOs available")]
    NoNgos,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
