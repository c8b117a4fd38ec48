//! Handlers for `/jobs` pages. Jobs are keyed by their short code.

use axum::{
  Form,
  extract::{Path, State},
  response::{IntoResponse, Redirect, Response},
};
use hr_core::store::HrStore;

use super::rejected;
use crate::{
  AppState,
  error::{Error, Result},
  forms::{FieldErrors, JobForm},
  view::View,
};

/// `GET /jobs`
pub async fn list<S: HrStore>(State(state): State<AppState<S>>) -> Result<View> {
  let jobs = state.store.list_jobs().await.map_err(Error::store)?;
  View::new("job/list").with("jobs", jobs)
}

/// `GET /jobs/view/{id}`
pub async fn view<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<View> {
  let job = state
    .store
    .get_job(&id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::not_found("job", &id))?;
  let mut holders = state.store.all_employees().await.map_err(Error::store)?;
  holders.retain(|e| e.job_id.as_deref() == Some(id.as_str()));

  View::new("job/view").with("job", job)?.with("employees", holders)
}

fn form_view(name: &str, form: &JobForm, errors: &FieldErrors) -> Result<View> {
  View::new(name).with("job", form)?.with("errors", errors)
}

/// `GET /jobs/add`
pub async fn add_form() -> Result<View> {
  form_view("job/add", &JobForm::default(), &FieldErrors::default())
}

/// `POST /jobs/add`
pub async fn add<S: HrStore>(
  State(state): State<AppState<S>>,
  Form(form): Form<JobForm>,
) -> Result<Response> {
  let input = match form.parse() {
    Ok(input) => input,
    Err(errors) => return Ok(rejected(form_view("job/add", &form, &errors)?)),
  };
  let job = state.store.add_job(input).await.map_err(Error::store)?;
  tracing::info!(job_id = %job.job_id, "job added");
  Ok(Redirect::to("/jobs").into_response())
}

/// `GET /jobs/edit/{id}`
pub async fn edit_form<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<View> {
  let job = state
    .store
    .get_job(&id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::not_found("job", &id))?;
  form_view("job/edit", &JobForm::from_job(&job), &FieldErrors::default())
}

/// `POST /jobs/edit/{id}`. The code in the path wins over any submitted one.
pub async fn edit<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
  Form(mut form): Form<JobForm>,
) -> Result<Response> {
  form.job_id = id.clone();
  let input = match form.parse() {
    Ok(input) => input,
    Err(errors) => return Ok(rejected(form_view("job/edit", &form, &errors)?)),
  };
  state
    .store
    .update_job(&id, input)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::not_found("job", &id))?;
  tracing::info!(job_id = %id, "job updated");
  Ok(Redirect::to("/jobs").into_response())
}

/// `GET /jobs/delete/{id}`
pub async fn delete<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Response> {
  if !state.store.delete_job(&id).await.map_err(Error::store)? {
    return Err(Error::not_found("job", &id));
  }
  tracing::info!(job_id = %id, "job deleted");
  Ok(Redirect::to("/jobs").into_response())
}
