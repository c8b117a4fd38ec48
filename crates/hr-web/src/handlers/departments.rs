//! Handlers for `/departments` pages.

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
  forms::{DepartmentForm, FieldErrors},
  view::View,
};

/// `GET /departments`
pub async fn list<S: HrStore>(State(state): State<AppState<S>>) -> Result<View> {
  let departments = state.store.list_departments().await.map_err(Error::store)?;
  View::new("department/list").with("departments", departments)
}

/// `GET /departments/view/{id}`
pub async fn view<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<View> {
  let store = &*state.store;
  let department = store
    .get_department(id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::not_found("department", id))?;

  let location = match department.location_id {
    Some(location_id) => store.get_location(location_id).await.map_err(Error::store)?,
    None => None,
  };
  let mut staff = store.all_employees().await.map_err(Error::store)?;
  let manager = department
    .manager_id
    .and_then(|m| staff.iter().find(|e| e.employee_id == m).cloned());
  staff.retain(|e| e.department_id == Some(id));

  View::new("department/view")
    .with("department", &department)?
    .with("location", location)?
    .with("manager", manager)?
    .with("employees", staff)
}

async fn form_view<S: HrStore>(
  store: &S,
  name: &str,
  form: &DepartmentForm,
  errors: &FieldErrors,
  editing: Option<i64>,
) -> Result<View> {
  let managers = store.all_employees().await.map_err(Error::store)?;
  let locations = store.list_locations().await.map_err(Error::store)?;

  let view = View::new(name)
    .with("department", form)?
    .with("errors", errors)?
    .with("managers", managers)?
    .with("locations", locations)?;
  match editing {
    Some(id) => view.with("departmentId", id),
    None => Ok(view),
  }
}

/// `GET /departments/add`
pub async fn add_form<S: HrStore>(State(state): State<AppState<S>>) -> Result<View> {
  let form = DepartmentForm::default();
  form_view(&*state.store, "department/add", &form, &FieldErrors::default(), None).await
}

/// `POST /departments/add`
pub async fn add<S: HrStore>(
  State(state): State<AppState<S>>,
  Form(form): Form<DepartmentForm>,
) -> Result<Response> {
  let input = match form.parse() {
    Ok(input) => input,
    Err(errors) => {
      let view = form_view(&*state.store, "department/add", &form, &errors, None).await?;
      return Ok(rejected(view));
    }
  };
  let department = state.store.add_department(input).await.map_err(Error::store)?;
  tracing::info!(department_id = department.department_id, "department added");
  Ok(Redirect::to("/departments").into_response())
}

/// `GET /departments/edit/{id}`
pub async fn edit_form<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<View> {
  let department = state
    .store
    .get_department(id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::not_found("department", id))?;
  let form = DepartmentForm::from_department(&department);
  form_view(&*state.store, "department/edit", &form, &FieldErrors::default(), Some(id)).await
}

/// `POST /departments/edit/{id}`
pub async fn edit<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  Form(form): Form<DepartmentForm>,
) -> Result<Response> {
  let input = match form.parse() {
    Ok(input) => input,
    Err(errors) => {
      let view = form_view(&*state.store, "department/edit", &form, &errors, Some(id)).await?;
      return Ok(rejected(view));
    }
  };
  state
    .store
    .update_department(id, input)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::not_found("department", id))?;
  tracing::info!(department_id = id, "department updated");
  Ok(Redirect::to("/departments").into_response())
}

/// `GET /departments/delete/{id}`
pub async fn delete<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Response> {
  if !state.store.delete_department(id).await.map_err(Error::store)? {
    return Err(Error::not_found("department", id));
  }
  tracing::info!(department_id = id, "department deleted");
  Ok(Redirect::to("/departments").into_response())
}
