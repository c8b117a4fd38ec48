//! HTML form bodies.
//!
//! Forms arrive as `application/x-www-form-urlencoded` text. Every field is
//! kept as the string the user typed so an invalid submission can be shown
//! back unchanged; [`parse`](EmployeeForm::parse) turns a form into a store
//! input or a set of per-field messages.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use hr_core::entity::{
  Department, Employee, Job, NewDepartment, NewEmployee, NewJob, NewJobHistory,
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Field errors ────────────────────────────────────────────────────────────

/// Messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
  pub fn add(&mut self, field: &str, message: impl Into<String>) {
    self.0.entry(field.to_owned()).or_default().push(message.into());
  }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn contains(&self, field: &str) -> bool { self.0.contains_key(field) }

  /// Merge validation failures. Fields that already failed to parse keep
  /// only their parse message.
  fn merge(&mut self, result: Result<(), ValidationErrors>) {
    let Err(errors) = result else { return };
    for (field, list) in errors.field_errors() {
      if self.contains(&field) {
        continue;
      }
      for error in list {
        let message = error
          .message
          .as_ref()
          .map(|m| m.to_string())
          .unwrap_or_else(|| error.code.to_string());
        self.add(&field, message);
      }
    }
  }

  fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
    if self.is_empty() { Ok(value) } else { Err(self) }
  }

  // ── Field parsers ───────────────────────────────────────────────────────

  fn decimal(&mut self, field: &str, text: &str) -> f64 {
    match text.trim().parse::<f64>() {
      Ok(n) if n.is_finite() => n,
      _ => {
        self.add(field, "must be a number");
        0.0
      }
    }
  }

  fn opt_decimal(&mut self, field: &str, text: &str) -> Option<f64> {
    optional(text).map(|t| self.decimal(field, t))
  }

  fn opt_id(&mut self, field: &str, text: &str) -> Option<i64> {
    optional(text).and_then(|t| match t.parse::<i64>() {
      Ok(id) => Some(id),
      Err(_) => {
        self.add(field, "must be a whole number");
        None
      }
    })
  }

  fn id(&mut self, field: &str, text: &str) -> i64 {
    match self.opt_id(field, text) {
      Some(id) => id,
      None => {
        if !self.contains(field) {
          self.add(field, "is required");
        }
        0
      }
    }
  }

  fn date(&mut self, field: &str, text: &str) -> NaiveDate {
    match NaiveDate::parse_from_str(text.trim(), DATE_FORMAT) {
      Ok(date) => date,
      Err(_) => {
        self.add(field, "must be a date (YYYY-MM-DD)");
        NaiveDate::default()
      }
    }
  }
}

fn optional(text: &str) -> Option<&str> {
  let text = text.trim();
  (!text.is_empty()).then_some(text)
}

fn opt_string(text: &str) -> Option<String> { optional(text).map(str::to_owned) }

fn opt_display<T: ToString>(value: Option<T>) -> String {
  value.map(|v| v.to_string()).unwrap_or_default()
}

// ─── Employee ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeForm {
  pub first_name:     String,
  pub last_name:      String,
  pub email:          String,
  pub phone_number:   String,
  pub hire_date:      String,
  pub salary:         String,
  pub commission_pct: String,
  pub job_id:         String,
  pub department_id:  String,
  pub manager_id:     String,
}

impl EmployeeForm {
  pub fn from_employee(employee: &Employee) -> Self {
    Self {
      first_name:     employee.first_name.clone(),
      last_name:      employee.last_name.clone(),
      email:          employee.email.clone(),
      phone_number:   employee.phone_number.clone().unwrap_or_default(),
      hire_date:      employee.hire_date.format(DATE_FORMAT).to_string(),
      salary:         employee.salary.to_string(),
      commission_pct: opt_display(employee.commission_pct),
      job_id:         employee.job_id.clone().unwrap_or_default(),
      department_id:  opt_display(employee.department_id),
      manager_id:     opt_display(employee.manager_id),
    }
  }

  /// `employee_id` is the employee being edited, `None` when adding.
  pub fn parse(&self, employee_id: Option<i64>) -> Result<NewEmployee, FieldErrors> {
    let mut errors = FieldErrors::default();
    let input = NewEmployee {
      first_name:     self.first_name.trim().to_owned(),
      last_name:      self.last_name.trim().to_owned(),
      email:          self.email.trim().to_owned(),
      phone_number:   opt_string(&self.phone_number),
      hire_date:      errors.date("hire_date", &self.hire_date),
      salary:         errors.decimal("salary", &self.salary),
      commission_pct: errors.opt_decimal("commission_pct", &self.commission_pct),
      job_id:         opt_string(&self.job_id),
      department_id:  errors.opt_id("department_id", &self.department_id),
      manager_id:     errors.opt_id("manager_id", &self.manager_id),
    };
    errors.merge(input.check(employee_id));
    errors.into_result(input)
  }
}

// ─── Department ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DepartmentForm {
  pub department_name: String,
  pub manager_id:      String,
  pub location_id:     String,
}

impl DepartmentForm {
  pub fn from_department(department: &Department) -> Self {
    Self {
      department_name: department.department_name.clone(),
      manager_id:      opt_display(department.manager_id),
      location_id:     opt_display(department.location_id),
    }
  }

  pub fn parse(&self) -> Result<NewDepartment, FieldErrors> {
    let mut errors = FieldErrors::default();
    let input = NewDepartment {
      department_name: self.department_name.trim().to_owned(),
      manager_id:      errors.opt_id("manager_id", &self.manager_id),
      location_id:     errors.opt_id("location_id", &self.location_id),
    };
    errors.merge(input.validate());
    errors.into_result(input)
  }
}

// ─── Job ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobForm {
  pub job_id:     String,
  pub job_title:  String,
  pub min_salary: String,
  pub max_salary: String,
}

impl JobForm {
  pub fn from_job(job: &Job) -> Self {
    Self {
      job_id:     job.job_id.clone(),
      job_title:  job.job_title.clone(),
      min_salary: job.min_salary.to_string(),
      max_salary: job.max_salary.to_string(),
    }
  }

  pub fn parse(&self) -> Result<NewJob, FieldErrors> {
    let mut errors = FieldErrors::default();
    let input = NewJob {
      job_id:     self.job_id.trim().to_owned(),
      job_title:  self.job_title.trim().to_owned(),
      min_salary: errors.decimal("min_salary", &self.min_salary),
      max_salary: errors.decimal("max_salary", &self.max_salary),
    };
    errors.merge(input.check());
    errors.into_result(input)
  }
}

// ─── Job history ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobHistoryForm {
  pub employee_id:   String,
  pub start_date:    String,
  pub end_date:      String,
  pub job_id:        String,
  pub department_id: String,
}

impl JobHistoryForm {
  pub fn parse(&self) -> Result<NewJobHistory, FieldErrors> {
    let mut errors = FieldErrors::default();
    let input = NewJobHistory {
      employee_id:   errors.id("employee_id", &self.employee_id),
      start_date:    errors.date("start_date", &self.start_date),
      end_date:      errors.date("end_date", &self.end_date),
      job_id:        opt_string(&self.job_id),
      department_id: errors.opt_id("department_id", &self.department_id),
    };
    // A date that failed to parse says nothing about the range.
    if errors.contains("start_date") || errors.contains("end_date") {
      return Err(errors);
    }
    errors.merge(input.check());
    errors.into_result(input)
  }
}
