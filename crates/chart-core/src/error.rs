// File: crates/chart-core/src/error.rs
// Summary: Error type for configuration mutations (selection, styles, renames).

use thiserror::Error;

/// Errors raised while editing source files or styles.
///
/// Building datasets, resolving scales, rendering and pointer queries never fail;
/// only configuration edits can be rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("unknown column '{column}' in file '{file}'")]
    UnknownColumn { file: String, column: String },
    #[error("column '{column}' already exists in file '{file}'")]
    DuplicateColumn { file: String, column: String },
    #[error("invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
