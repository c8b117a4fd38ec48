//! Handlers for `/employees` pages.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/employees` | `?page=<n>&size=<n>`, zero-based |
//! | `GET`  | `/employees/view/{id}` | With manager and direct reports |
//! | `GET`/`POST` | `/employees/add` | |
//! | `GET`/`POST` | `/employees/edit/{id}` | |
//! | `GET`  | `/employees/delete/{id}` | Detaches subordinates |

use axum::{
  Form,
  extract::{Path, Query, State},
  response::{IntoResponse, Redirect, Response},
};
use hr_core::{
  entity::Employee,
  lines::ReportingLines,
  store::{HrStore, Page},
};
use serde::Deserialize;

use super::rejected;
use crate::{
  AppState,
  error::{Error, Result},
  forms::{EmployeeForm, FieldErrors},
  view::View,
};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PageParams {
  pub page: Option<usize>,
  pub size: Option<usize>,
}

/// `GET /employees[?page=<n>&size=<n>]`
pub async fn list<S: HrStore>(
  State(state): State<AppState<S>>,
  Query(params): Query<PageParams>,
) -> Result<View> {
  let size = params.size.unwrap_or(state.config.page_size).max(1);
  let page = Page { number: params.page.unwrap_or(0), size };

  let employees = state.store.list_employees(page).await.map_err(Error::store)?;
  let counts = state.store.table_counts().await.map_err(Error::store)?;
  let total = usize::try_from(counts.employee_count).unwrap_or(0);

  View::new("employee/list")
    .with("employees", employees)?
    .with("currentPage", page.number)?
    .with("pageSize", size)?
    .with("totalItems", total)?
    .with("totalPages", total.div_ceil(size))
}

// ─── View ─────────────────────────────────────────────────────────────────────

/// `GET /employees/view/{id}`
pub async fn view<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<View> {
  let store = &*state.store;
  let employee = store
    .get_employee(id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::not_found("employee", id))?;

  let department = match employee.department_id {
    Some(department_id) => store.get_department(department_id).await.map_err(Error::store)?,
    None => None,
  };
  let job = match employee.job_id.as_deref() {
    Some(job_id) => store.get_job(job_id).await.map_err(Error::store)?,
    None => None,
  };

  let staff = store.all_employees().await.map_err(Error::store)?;
  let manager = employee
    .manager_id
    .and_then(|m| staff.iter().find(|e| e.employee_id == m));
  let lines = ReportingLines::from_employees(&staff);
  let direct_reports: Vec<&Employee> = lines
    .direct_reports(id)
    .iter()
    .filter_map(|r| staff.iter().find(|e| e.employee_id == *r))
    .collect();

  View::new("employee/view")
    .with("employee", &employee)?
    .with("department", department)?
    .with("job", job)?
    .with("manager", manager)?
    .with("directReports", direct_reports)
}

// ─── Add / edit ───────────────────────────────────────────────────────────────

/// The form view with its option lists. When editing, the employee is left
/// out of the manager choices.
async fn form_view<S: HrStore>(
  store: &S,
  name: &str,
  form: &EmployeeForm,
  errors: &FieldErrors,
  editing: Option<i64>,
) -> Result<View> {
  let departments = store.list_departments().await.map_err(Error::store)?;
  let jobs = store.list_jobs().await.map_err(Error::store)?;
  let mut managers = store.all_employees().await.map_err(Error::store)?;
  managers.retain(|e| Some(e.employee_id) != editing);

  let view = View::new(name)
    .with("employee", form)?
    .with("errors", errors)?
    .with("departments", departments)?
    .with("jobs", jobs)?
    .with("managers", managers)?;
  match editing {
    Some(id) => view.with("employeeId", id),
    None => Ok(view),
  }
}

/// `GET /employees/add`
pub async fn add_form<S: HrStore>(State(state): State<AppState<S>>) -> Result<View> {
  let form = EmployeeForm::default();
  form_view(&*state.store, "employee/add", &form, &FieldErrors::default(), None).await
}

/// `POST /employees/add`
pub async fn add<S: HrStore>(
  State(state): State<AppState<S>>,
  Form(form): Form<EmployeeForm>,
) -> Result<Response> {
  let input = match form.parse(None) {
    Ok(input) => input,
    Err(errors) => {
      let view = form_view(&*state.store, "employee/add", &form, &errors, None).await?;
      return Ok(rejected(view));
    }
  };
  let employee = state.store.add_employee(input).await.map_err(Error::store)?;
  tracing::info!(employee_id = employee.employee_id, "employee added");
  Ok(Redirect::to("/employees").into_response())
}

/// `GET /employees/edit/{id}`
pub async fn edit_form<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<View> {
  let employee = state
    .store
    .get_employee(id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::not_found("employee", id))?;
  let form = EmployeeForm::from_employee(&employee);
  form_view(&*state.store, "employee/edit", &form, &FieldErrors::default(), Some(id)).await
}

/// `POST /employees/edit/{id}`
pub async fn edit<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  Form(form): Form<EmployeeForm>,
) -> Result<Response> {
  let input = match form.parse(Some(id)) {
    Ok(input) => input,
    Err(errors) => {
      let view = form_view(&*state.store, "employee/edit", &form, &errors, Some(id)).await?;
      return Ok(rejected(view));
    }
  };
  state
    .store
    .update_employee(id, input)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::not_found("employee", id))?;
  tracing::info!(employee_id = id, "employee updated");
  Ok(Redirect::to("/employees").into_response())
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `GET /employees/delete/{id}`
pub async fn delete<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Response> {
  if !state.store.delete_employee(id).await.map_err(Error::store)? {
    return Err(Error::not_found("employee", id));
  }
  tracing::info!(employee_id = id, "employee deleted");
  Ok(Redirect::to("/employees").into_response())
}
