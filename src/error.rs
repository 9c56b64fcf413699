//! Error handling.

use std::io;

use thiserror::Error;

/// Dashboard server error type
///
/// Dataset load errors are contained at the load step: a file that cannot be
/// opened yields an empty table and an unreadable row is skipped, so neither
/// aborts startup. The core transformation functions never return errors.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Error opening a dataset file
    #[error("failed to open dataset file {path}")]
    DatasetOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Error reading a row from a dataset file
    #[error("failed to read dataset row")]
    DatasetRow(#[from] csv::Error),
}
