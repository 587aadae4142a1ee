//! Error types for column cleaning.

use thiserror::Error;

/// Errors that abort a cleaning or validation call.
#[derive(Debug, Error)]
pub enum CleanError {
    /// A value failed validation under the `raise` error policy.
    #[error("Unable to parse value {value}")]
    Unparseable { value: String },

    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for CleanError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;
