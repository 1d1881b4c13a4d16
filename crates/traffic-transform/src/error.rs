use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors produced while reading count tables or building views.
#[derive(Debug, Error)]
pub enum TrafficError {
    /// The input frame does not carry a column the view requires.
    #[error("required column '{0}' not found")]
    MissingColumn(String),

    /// A cell could not be read as the type the view requires.
    #[error("invalid value in column '{column}' row {row}: expected {expected}")]
    InvalidValue {
        column: String,
        row: usize,
        expected: &'static str,
    },

    /// Polars error surfaced while touching the frame.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Result alias for view operations.
pub type Result<T> = std::result::Result<T, TrafficError>;
