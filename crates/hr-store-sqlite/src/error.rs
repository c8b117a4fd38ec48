//! Error type for `hr-store-sqlite`.

use hr_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(tokio_rusqlite::Error),

  /// A write was rejected by a uniqueness, foreign-key, CHECK or trigger
  /// constraint. Carries the store's own message.
  #[error("integrity violation: {0}")]
  Integrity(String),

  #[error("date parse error: {0}")]
  DateParse(String),
}

impl From<tokio_rusqlite::Error> for Error {
  fn from(e: tokio_rusqlite::Error) -> Self {
    match e {
      tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(failure, message))
        if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
      {
        Error::Integrity(message.unwrap_or_else(|| failure.to_string()))
      }
      other => Error::Database(other),
    }
  }
}

impl StoreError for Error {
  fn integrity_violation(&self) -> Option<&str> {
    match self {
      Error::Integrity(message) => Some(message),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
