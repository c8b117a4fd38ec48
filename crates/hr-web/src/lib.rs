//! HTTP surface of the HR records service.
//!
//! Exposes an axum [`Router`] backed by any [`HrStore`]. Every page answers
//! with a JSON view model: the name of the view plus the attributes a
//! template would render. Entity writes redirect back to the listing on
//! success.

pub mod error;
pub mod forms;
pub mod handlers;
pub mod view;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use hr_core::store::HrStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{analytics, departments, diagnostic, employees, job_history, jobs};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and `HR_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Default page size of the employee listing.
  pub page_size:  usize,
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: HrStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the whole service.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: HrStore + Clone + 'static,
{
  Router::new()
    // Employees
    .route("/employees",                 get(employees::list::<S>))
    .route("/employees/view/{id}",       get(employees::view::<S>))
    .route("/employees/add",             get(employees::add_form::<S>).post(employees::add::<S>))
    .route("/employees/edit/{id}",       get(employees::edit_form::<S>).post(employees::edit::<S>))
    .route("/employees/delete/{id}",     get(employees::delete::<S>))
    // Departments
    .route("/departments",               get(departments::list::<S>))
    .route("/departments/view/{id}",     get(departments::view::<S>))
    .route("/departments/add",           get(departments::add_form::<S>).post(departments::add::<S>))
    .route("/departments/edit/{id}",     get(departments::edit_form::<S>).post(departments::edit::<S>))
    .route("/departments/delete/{id}",   get(departments::delete::<S>))
    // Jobs
    .route("/jobs",                      get(jobs::list::<S>))
    .route("/jobs/view/{id}",            get(jobs::view::<S>))
    .route("/jobs/add",                  get(jobs::add_form).post(jobs::add::<S>))
    .route("/jobs/edit/{id}",            get(jobs::edit_form::<S>).post(jobs::edit::<S>))
    .route("/jobs/delete/{id}",          get(jobs::delete::<S>))
    // Job history
    .route("/jobhistory/employee/{employee_id}", get(job_history::list::<S>))
    .route("/jobhistory/add",            get(job_history::add_form::<S>).post(job_history::add::<S>))
    // Analytics
    .route("/analytics",                 get(analytics::index))
    .route("/analytics/dashboard",       get(analytics::dashboard::<S>))
    .route("/analytics/{slug}",          get(analytics::report::<S>))
    // Diagnostics
    .route("/api/diagnostic/health",       get(diagnostic::health::<S>))
    .route("/api/diagnostic/test-queries", get(diagnostic::test_queries::<S>))
    .route("/api/diagnostic/tables",       get(diagnostic::tables::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────
