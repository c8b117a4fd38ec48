//! Handler error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure renders the generic error view, so clients always get a
//! view model back.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use hr_core::store::StoreError;
use serde_json::json;
use thiserror::Error;

/// An error returned by a handler.
#[derive(Debug, Error)]
pub enum Error {
  #[error("{0}")]
  NotFound(String),

  /// A write rejected by the store's integrity rules.
  #[error("Database error: {0}")]
  Integrity(String),

  #[error(transparent)]
  Core(#[from] hr_core::Error),

  #[error("could not render view: {0}")]
  Render(#[from] serde_json::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
  /// Wrap a backend error, keeping integrity violations apart.
  pub fn store<E: StoreError>(error: E) -> Self {
    match error.integrity_violation() {
      Some(message) => Error::Integrity(message.to_owned()),
      None => Error::Store(Box::new(error)),
    }
  }

  pub fn not_found(what: &str, id: impl std::fmt::Display) -> Self {
    Error::NotFound(format!("{what} {id} not found"))
  }

  fn status(&self) -> StatusCode {
    match self {
      Error::NotFound(_) | Error::Core(hr_core::Error::UnknownQuery(_)) => {
        StatusCode::NOT_FOUND
      }
      Error::Integrity(_) => StatusCode::CONFLICT,
      Error::Core(_) | Error::Render(_) | Error::Store(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    } else {
      tracing::warn!(error = %self, %status, "request rejected");
    }
    let body = json!({ "view": "error/general", "errorMessage": self.to_string() });
    (status, Json(body)).into_response()
  }
}
