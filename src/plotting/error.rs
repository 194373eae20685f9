//! Error types for the plotting engine and the chart layer built on it.

use std::io;

use thiserror::Error;

/// The main error type for plotting operations.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Error during IO operations (file writing, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Malformed JSON input (datasets, chart configuration)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid data provided for plotting
    #[error("Invalid data: {0}")]
    InvalidData(String),
    /// Invalid configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// A selected column does not exist in the dataset
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),
    /// A column does not match the length of the dataset
    #[error("Column '{name}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    /// Empty data provided where non-empty data is required
    #[error("Empty data provided")]
    EmptyData,
    /// Output path extension the backend cannot write
    #[error("Unsupported output format '{0}' (expected .svg)")]
    UnsupportedFormat(String),
}

/// Result type alias for plotting operations.
pub type PlotResult<T> = Result<T, PlotError>;
