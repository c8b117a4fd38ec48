//! View models.
//!
//! A [`View`] names the template a page would be rendered with and carries
//! the attributes that template reads. It is serialised as one flat JSON
//! object: `{"view": "employee/list", "employees": [...], ...}`.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

#[derive(Debug, Clone, Serialize)]
pub struct View {
  view:  String,
  #[serde(flatten)]
  model: Map<String, Value>,
}

impl View {
  pub fn new(name: impl Into<String>) -> Self {
    Self { view: name.into(), model: Map::new() }
  }

  /// Add one model attribute.
  pub fn with(mut self, key: &str, value: impl Serialize) -> Result<Self> {
    self.model.insert(key.to_owned(), serde_json::to_value(value)?);
    Ok(self)
  }

  pub fn name(&self) -> &str { &self.view }

  /// Respond with a status other than `200 OK`.
  pub fn with_status(self, status: StatusCode) -> Response {
    (status, Json(self)).into_response()
  }
}

impl IntoResponse for View {
  fn into_response(self) -> Response { Json(self).into_response() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn attributes_are_flattened_next_to_the_view_name() {
    let view = View::new("employee/list").with("currentPage", 0).unwrap();
    assert_eq!(view.name(), "employee/list");
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json, serde_json::json!({ "view": "employee/list", "currentPage": 0 }));
  }
}
