//! Request handlers, one module per resource.
//!
//! Handlers are generic over the store backend and take the shared
//! [`AppState`](crate::AppState). Entity pages answer with a
//! [`View`](crate::view::View); writes redirect on success and re-render
//! their form with `422 Unprocessable Entity` when the input is invalid.

pub mod analytics;
pub mod departments;
pub mod diagnostic;
pub mod employees;
pub mod job_history;
pub mod jobs;

use axum::{http::StatusCode, response::Response};

use crate::view::View;

/// Answer with a form view whose submission was rejected.
fn rejected(view: View) -> Response {
  tracing::debug!(view = view.name(), "form rejected");
  view.with_status(StatusCode::UNPROCESSABLE_ENTITY)
}
