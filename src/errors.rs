//! Error types for chaside operations.
//!
//! Per-item answer parsing never errors (unrecognized tokens degrade to "no"
//! by policy); errors here are limited to dataset shape, configuration, and
//! I/O problems surfaced before scoring begins.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChasideError {
    /// Required named columns absent from the dataset header. Fatal.
    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Dataset has too few columns to hold metadata plus the item block.
    #[error("dataset has {found} columns, expected at least {expected}")]
    DatasetShape { expected: usize, found: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Inventory tables failed structural validation (item coverage,
    /// per-area counts, duplicate assignment).
    #[error("invalid inventory definition: {0}")]
    InvalidInventory(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
