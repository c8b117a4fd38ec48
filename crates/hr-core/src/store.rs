//! The `HrStore` trait and supporting types.
//!
//! The trait is implemented by storage backends (e.g. `hr-store-sqlite`).
//! The web layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{
  catalog::QueryId,
  entity::{
    Department, Employee, Job, JobHistory, Location, NewDepartment, NewEmployee,
    NewJob, NewJobHistory,
  },
  report::RawRow,
};

// ─── Supporting types ────────────────────────────────────────────────────────

/// A zero-based page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
  pub number: usize,
  pub size:   usize,
}

impl Page {
  pub fn offset(&self) -> usize { self.number.saturating_mul(self.size) }
}

/// Row counts of the tables the diagnostics report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCounts {
  pub employee_count:   i64,
  pub department_count: i64,
  pub job_count:        i64,
}

// ─── Traits ──────────────────────────────────────────────────────────────────

/// Classification of backend errors that callers react to differently.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// The store's own message when a write was rejected by a data-integrity
  /// rule (unique key, foreign key, check). `None` for any other failure.
  fn integrity_violation(&self) -> Option<&str>;
}

/// Abstraction over an HR store backend.
///
/// Writes are single-row and independent. Relation ids on write inputs that
/// do not resolve to an existing row are stored as `None` rather than
/// failing the write. Constraint violations (duplicate email, a row still
/// referenced elsewhere) are reported as backend errors.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait HrStore: Send + Sync {
  type Error: StoreError;

  // ── Employees ─────────────────────────────────────────────────────────

  fn add_employee(
    &self,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  fn get_employee(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// One page of employees ordered by id.
  fn list_employees(
    &self,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Every employee, ordered by last name then first name.
  fn all_employees(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Replace the fields of employee `id`. Returns `None` if it does not exist.
  fn update_employee(
    &self,
    id: i64,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Delete employee `id`; returns whether a row was removed.
  ///
  /// Subordinates of the deleted employee, and departments they managed,
  /// lose their manager reference. An employee with job history cannot be
  /// deleted.
  fn delete_employee(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Departments ───────────────────────────────────────────────────────

  fn add_department(
    &self,
    input: NewDepartment,
  ) -> impl Future<Output = Result<Department, Self::Error>> + Send + '_;

  fn get_department(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Department>, Self::Error>> + Send + '_;

  fn list_departments(
    &self,
  ) -> impl Future<Output = Result<Vec<Department>, Self::Error>> + Send + '_;

  fn update_department(
    &self,
    id: i64,
    input: NewDepartment,
  ) -> impl Future<Output = Result<Option<Department>, Self::Error>> + Send + '_;

  fn delete_department(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Jobs ──────────────────────────────────────────────────────────────

  fn add_job(
    &self,
    input: NewJob,
  ) -> impl Future<Output = Result<Job, Self::Error>> + Send + '_;

  fn get_job<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Job>, Self::Error>> + Send + 'a;

  fn list_jobs(
    &self,
  ) -> impl Future<Output = Result<Vec<Job>, Self::Error>> + Send + '_;

  /// Replace title and band of job `id`; the id in `input` is ignored.
  fn update_job<'a>(
    &'a self,
    id: &'a str,
    input: NewJob,
  ) -> impl Future<Output = Result<Option<Job>, Self::Error>> + Send + 'a;

  fn delete_job<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  // ── Job history (append-only) ────────────────────────────────────────

  fn record_job_history(
    &self,
    input: NewJobHistory,
  ) -> impl Future<Output = Result<JobHistory, Self::Error>> + Send + '_;

  /// History rows of one employee in start-date order.
  fn job_history_for(
    &self,
    employee_id: i64,
  ) -> impl Future<Output = Result<Vec<JobHistory>, Self::Error>> + Send + '_;

  // ── Locations ─────────────────────────────────────────────────────────

  fn get_location(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Location>, Self::Error>> + Send + '_;

  fn list_locations(
    &self,
  ) -> impl Future<Output = Result<Vec<Location>, Self::Error>> + Send + '_;

  // ── Reports ───────────────────────────────────────────────────────────

  fn table_counts(
    &self,
  ) -> impl Future<Output = Result<TableCounts, Self::Error>> + Send + '_;

  /// Execute catalog query `id` and return its rows by position. Every call
  /// reads the current store contents; nothing is cached.
  fn run_query(
    &self,
    id: QueryId,
  ) -> impl Future<Output = Result<Vec<RawRow>, Self::Error>> + Send + '_;
}
