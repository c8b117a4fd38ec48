//! Handlers for `/jobhistory` pages. History is append-only: there is no
//! edit or delete.

use axum::{
  Form,
  extract::{Path, Query, State},
  response::{IntoResponse, Redirect, Response},
};
use hr_core::store::HrStore;
use serde::Deserialize;

use super::rejected;
use crate::{
  AppState,
  error::{Error, Result},
  forms::{FieldErrors, JobHistoryForm},
  view::View,
};

/// `GET /jobhistory/employee/{employee_id}`
pub async fn list<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(employee_id): Path<i64>,
) -> Result<View> {
  let employee = state
    .store
    .get_employee(employee_id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::not_found("employee", employee_id))?;
  let history = state
    .store
    .job_history_for(employee_id)
    .await
    .map_err(Error::store)?;

  View::new("jobhistory/list")
    .with("employee", employee)?
    .with("jobHistory", history)
}

async fn form_view<S: HrStore>(
  store: &S,
  form: &JobHistoryForm,
  errors: &FieldErrors,
) -> Result<View> {
  let employees = store.all_employees().await.map_err(Error::store)?;
  let jobs = store.list_jobs().await.map_err(Error::store)?;
  let departments = store.list_departments().await.map_err(Error::store)?;

  View::new("jobhistory/add")
    .with("jobHistory", form)?
    .with("errors", errors)?
    .with("employees", employees)?
    .with("jobs", jobs)?
    .with("departments", departments)
}

#[derive(Debug, Deserialize)]
pub struct AddParams {
  #[serde(rename = "employeeId")]
  pub employee_id: Option<i64>,
}

/// `GET /jobhistory/add[?employeeId=<id>]`
pub async fn add_form<S: HrStore>(
  State(state): State<AppState<S>>,
  Query(params): Query<AddParams>,
) -> Result<View> {
  let form = JobHistoryForm {
    employee_id: params.employee_id.map(|id| id.to_string()).unwrap_or_default(),
    ..Default::default()
  };
  form_view(&*state.store, &form, &FieldErrors::default()).await
}

/// `POST /jobhistory/add`
pub async fn add<S: HrStore>(
  State(state): State<AppState<S>>,
  Form(form): Form<JobHistoryForm>,
) -> Result<Response> {
  let input = match form.parse() {
    Ok(input) => input,
    Err(errors) => {
      let view = form_view(&*state.store, &form, &errors).await?;
      return Ok(rejected(view));
    }
  };
  let entry = state.store.record_job_history(input).await.map_err(Error::store)?;
  tracing::info!(
    employee_id = entry.employee_id,
    start_date = %entry.start_date,
    "job history recorded"
  );
  Ok(Redirect::to(&format!("/jobhistory/employee/{}", entry.employee_id)).into_response())
}
