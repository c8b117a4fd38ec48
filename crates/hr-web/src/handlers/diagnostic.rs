//! Handlers for `/api/diagnostic` endpoints.
//!
//! These always answer `200 OK`; failures are reported inside the body.

use axum::{Json, extract::State};
use hr_core::{
  entity::Employee,
  records::{DepartmentStats, HierarchyEntry, TopEarner},
  store::{HrStore, Page, TableCounts},
};
use serde_json::{Map, Value, json};

use super::analytics::fetch;
use crate::{
  AppState,
  error::{Error, Result},
};

const FIRST: Page = Page { number: 0, size: 1 };

fn outcome<T>(result: Result<T>) -> String {
  match result {
    Ok(_) => "SUCCESS".to_owned(),
    Err(e) => format!("FAILED: {e}"),
  }
}

/// `GET /api/diagnostic/health`
pub async fn health<S: HrStore>(State(state): State<AppState<S>>) -> Json<Value> {
  let store = &*state.store;
  let (counts, first) = match snapshot(store).await {
    Ok(snapshot) => snapshot,
    Err(e) => {
      tracing::error!(error = %e, "health check failed");
      return Json(json!({ "status": "DOWN", "error": e.to_string() }));
    }
  };

  let mut status = Map::new();
  status.insert("status".into(), json!("UP"));
  status.insert("employeeCount".into(), json!(counts.employee_count));
  status.insert("departmentCount".into(), json!(counts.department_count));
  status.insert("jobCount".into(), json!(counts.job_count));
  status.insert("firstEmployee".into(), json!(first));

  match fetch::<TopEarner, _>(store).await {
    Ok(_) => {
      status.insert("nativeQueryStatus".into(), json!("WORKING"));
    }
    Err(e) => {
      status.insert("nativeQueryStatus".into(), json!("FAILED"));
      status.insert("nativeQueryError".into(), json!(e.to_string()));
    }
  }
  Json(Value::Object(status))
}

/// Table counts and the first employee. Either read failing marks the
/// store as down.
async fn snapshot<S: HrStore>(store: &S) -> Result<(TableCounts, Option<Employee>), S::Error> {
  let counts = store.table_counts().await?;
  let first = store.list_employees(FIRST).await?.pop();
  Ok((counts, first))
}

/// `GET /api/diagnostic/test-queries`
pub async fn test_queries<S: HrStore>(State(state): State<AppState<S>>) -> Json<Value> {
  let store = &*state.store;
  let top_earners = outcome(fetch::<TopEarner, _>(store).await);
  let hierarchy = outcome(fetch::<HierarchyEntry, _>(store).await);
  let department_stats = outcome(fetch::<DepartmentStats, _>(store).await);

  Json(json!({
    "queryTests": {
      "topEarners":      top_earners,
      "hierarchy":       hierarchy,
      "departmentStats": department_stats,
    }
  }))
}

/// `GET /api/diagnostic/tables`
pub async fn tables<S: HrStore>(State(state): State<AppState<S>>) -> Json<Value> {
  match table_summary(&*state.store).await {
    Ok(summary) => Json(summary),
    Err(e) => {
      tracing::error!(error = %e, "table check failed");
      Json(json!({ "error": e.to_string() }))
    }
  }
}

async fn table_summary<S: HrStore>(store: &S) -> Result<Value> {
  let counts = store.table_counts().await.map_err(Error::store)?;
  let sample_employee = store.list_employees(FIRST).await.map_err(Error::store)?.pop();
  let sample_department = store
    .list_departments()
    .await
    .map_err(Error::store)?
    .into_iter()
    .next();

  Ok(json!({
    "employees":        counts.employee_count,
    "departments":      counts.department_count,
    "jobs":             counts.job_count,
    "sampleEmployee":   sample_employee,
    "sampleDepartment": sample_department,
  }))
}

#[cfg(test)]
mod tests {
  use std::{path::PathBuf, sync::Arc};

  use axum::{body::Body, http::Request};
  use hr_core::{
    catalog::QueryId,
    entity::{
      Department, Job, JobHistory, Location, NewDepartment, NewEmployee, NewJob,
      NewJobHistory,
    },
    report::RawRow,
    store::StoreError,
  };
  use tower::ServiceExt as _;

  use super::*;
  use crate::{ServerConfig, router};

  #[derive(Debug, thiserror::Error)]
  #[error("disk I/O error")]
  struct Unavailable;

  impl StoreError for Unavailable {
    fn integrity_violation(&self) -> Option<&str> { None }
  }

  /// Answers `table_counts` and fails every other read.
  #[derive(Clone)]
  struct CountsOnly;

  impl HrStore for CountsOnly {
    type Error = Unavailable;

    async fn add_employee(&self, _: NewEmployee) -> Result<Employee, Unavailable> {
      Err(Unavailable)
    }
    async fn get_employee(&self, _: i64) -> Result<Option<Employee>, Unavailable> {
      Err(Unavailable)
    }
    async fn list_employees(&self, _: Page) -> Result<Vec<Employee>, Unavailable> {
      Err(Unavailable)
    }
    async fn all_employees(&self) -> Result<Vec<Employee>, Unavailable> { Err(Unavailable) }
    async fn update_employee(
      &self,
      _: i64,
      _: NewEmployee,
    ) -> Result<Option<Employee>, Unavailable> {
      Err(Unavailable)
    }
    async fn delete_employee(&self, _: i64) -> Result<bool, Unavailable> { Err(Unavailable) }
    async fn add_department(&self, _: NewDepartment) -> Result<Department, Unavailable> {
      Err(Unavailable)
    }
    async fn get_department(&self, _: i64) -> Result<Option<Department>, Unavailable> {
      Err(Unavailable)
    }
    async fn list_departments(&self) -> Result<Vec<Department>, Unavailable> {
      Err(Unavailable)
    }
    async fn update_department(
      &self,
      _: i64,
      _: NewDepartment,
    ) -> Result<Option<Department>, Unavailable> {
      Err(Unavailable)
    }
    async fn delete_department(&self, _: i64) -> Result<bool, Unavailable> { Err(Unavailable) }
    async fn add_job(&self, _: NewJob) -> Result<Job, Unavailable> { Err(Unavailable) }
    async fn get_job<'a>(&'a self, _: &'a str) -> Result<Option<Job>, Unavailable> {
      Err(Unavailable)
    }
    async fn list_jobs(&self) -> Result<Vec<Job>, Unavailable> { Err(Unavailable) }
    async fn update_job<'a>(&'a self, _: &'a str, _: NewJob) -> Result<Option<Job>, Unavailable> {
      Err(Unavailable)
    }
    async fn delete_job<'a>(&'a self, _: &'a str) -> Result<bool, Unavailable> {
      Err(Unavailable)
    }
    async fn record_job_history(&self, _: NewJobHistory) -> Result<JobHistory, Unavailable> {
      Err(Unavailable)
    }
    async fn job_history_for(&self, _: i64) -> Result<Vec<JobHistory>, Unavailable> {
      Err(Unavailable)
    }
    async fn get_location(&self, _: i64) -> Result<Option<Location>, Unavailable> {
      Err(Unavailable)
    }
    async fn list_locations(&self) -> Result<Vec<Location>, Unavailable> { Err(Unavailable) }
    async fn table_counts(&self) -> Result<TableCounts, Unavailable> {
      Ok(TableCounts { employee_count: 16, department_count: 6, job_count: 9 })
    }
    async fn run_query(&self, _: QueryId) -> Result<Vec<RawRow>, Unavailable> {
      Err(Unavailable)
    }
  }

  fn state() -> AppState<CountsOnly> {
    AppState {
      store:  Arc::new(CountsOnly),
      config: Arc::new(ServerConfig {
        host:       "127.0.0.1".to_string(),
        port:       8080,
        store_path: PathBuf::from(":memory:"),
        page_size:  20,
      }),
    }
  }

  async fn get_json(uri: &str) -> Value {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = router(state()).oneshot(req).await.unwrap();
    assert!(resp.status().is_success());
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  #[tokio::test]
  async fn failed_employee_read_reports_store_down() {
    let body = get_json("/api/diagnostic/health").await;
    assert_eq!(body["status"], "DOWN");
    assert_eq!(body["error"], "disk I/O error");
    assert!(body.get("firstEmployee").is_none());
  }

  #[tokio::test]
  async fn failing_queries_are_listed_with_their_message() {
    let body = get_json("/api/diagnostic/test-queries").await;
    let message = body["queryTests"]["hierarchy"].as_str().unwrap();
    assert!(message.starts_with("FAILED: "));
    assert!(message.contains("disk I/O error"));
  }

  #[tokio::test]
  async fn table_check_reports_the_error() {
    let body = get_json("/api/diagnostic/tables").await;
    assert!(body["error"].as_str().unwrap().contains("disk I/O error"));
  }
}
