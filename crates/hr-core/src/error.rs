//! Error types for `hr-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A query row did not have the number of columns its contract declares.
  #[error("row has {found} columns, expected {expected}")]
  Arity { expected: usize, found: usize },

  /// A column held a value that cannot be narrowed to the declared type.
  #[error("column {column}: expected {expected}, found {found}")]
  ColumnType {
    column:   usize,
    expected: &'static str,
    found:    &'static str,
  },

  #[error("column {column}: invalid date {value:?}")]
  ColumnDate { column: usize, value: String },

  #[error("unknown report: {0:?}")]
  UnknownQuery(String),

  #[error("validation failed: {0}")]
  Validation(#[from] validator::ValidationErrors),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
