//! Entity types: the shape of the HR schema.
//!
//! Entities carry plain ids for their relations. Navigation in the other
//! direction (a manager's subordinates, a department's staff) is derived on
//! read; see [`crate::lines`].

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

// ─── Geography ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
  pub region_id:   i64,
  pub region_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
  /// Two-letter code, e.g. `US`.
  pub country_id:   String,
  pub country_name: String,
  pub region_id:    Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
  pub location_id:    i64,
  pub street_address: String,
  pub postal_code:    String,
  pub city:           String,
  pub state_province: Option<String>,
  pub country_id:     Option<String>,
}

// ─── Jobs ────────────────────────────────────────────────────────────────────

/// A job with its salary band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
  /// Short code, e.g. `IT_PROG`.
  pub job_id:     String,
  pub job_title:  String,
  pub min_salary: f64,
  pub max_salary: f64,
}

/// Input for creating or replacing a [`Job`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewJob {
  #[validate(length(min = 1, max = 10, message = "must be 1 to 10 characters"))]
  pub job_id:     String,
  #[validate(length(min = 1, message = "must not be blank"))]
  pub job_title:  String,
  #[validate(range(min = 0.0, message = "must not be negative"))]
  pub min_salary: f64,
  #[validate(range(min = 0.0, message = "must not be negative"))]
  pub max_salary: f64,
}

impl NewJob {
  /// Field rules plus the band rule `min_salary <= max_salary`.
  pub fn check(&self) -> Result<(), ValidationErrors> {
    let mut errors = collected(self.validate());
    if self.min_salary > self.max_salary {
      errors.add(
        "max_salary",
        invalid("band", "must not be below the minimum salary"),
      );
    }
    into_result(errors)
  }
}

// ─── Departments ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
  pub department_id:   i64,
  pub department_name: String,
  pub manager_id:      Option<i64>,
  pub location_id:     Option<i64>,
}

/// Input for creating or replacing a [`Department`].
///
/// Relation ids that do not resolve are stored as `None`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewDepartment {
  #[validate(length(min = 1, message = "must not be blank"))]
  pub department_name: String,
  pub manager_id:      Option<i64>,
  pub location_id:     Option<i64>,
}

// ─── Employees ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
  pub employee_id:    i64,
  pub first_name:     String,
  pub last_name:      String,
  pub email:          String,
  pub phone_number:   Option<String>,
  pub hire_date:      NaiveDate,
  pub salary:         f64,
  /// Fraction in `[0, 1]` applied on top of `salary`.
  pub commission_pct: Option<f64>,
  pub job_id:         Option<String>,
  pub department_id:  Option<i64>,
  pub manager_id:     Option<i64>,
}

impl Employee {
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }

  /// `salary * (1 + commission)`, treating a missing commission as zero.
  pub fn total_compensation(&self) -> f64 {
    self.salary * (1.0 + self.commission_pct.unwrap_or(0.0))
  }
}

/// Input for creating or replacing an [`Employee`].
///
/// Relation ids that do not resolve are stored as `None`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewEmployee {
  #[validate(length(min = 1, message = "must not be blank"))]
  pub first_name:     String,
  #[validate(length(min = 1, message = "must not be blank"))]
  pub last_name:      String,
  #[validate(email(message = "must be a well-formed email address"))]
  pub email:          String,
  pub phone_number:   Option<String>,
  pub hire_date:      NaiveDate,
  #[validate(range(min = 0.0, message = "must not be negative"))]
  pub salary:         f64,
  #[validate(range(min = 0.0, max = 1.0, message = "must be between 0 and 1"))]
  pub commission_pct: Option<f64>,
  pub job_id:         Option<String>,
  pub department_id:  Option<i64>,
  pub manager_id:     Option<i64>,
}

impl NewEmployee {
  /// Field rules plus the rule that an employee never manages themselves.
  ///
  /// `employee_id` is the id being edited, or `None` for a new employee.
  pub fn check(&self, employee_id: Option<i64>) -> Result<(), ValidationErrors> {
    let mut errors = collected(self.validate());
    if employee_id.is_some() && self.manager_id == employee_id {
      errors.add(
        "manager_id",
        invalid("self_manager", "an employee cannot be their own manager"),
      );
    }
    into_result(errors)
  }
}

// ─── Job history ─────────────────────────────────────────────────────────────

/// A past job/department assignment. Keyed by `(employee_id, start_date)`
/// and never modified once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobHistory {
  pub employee_id:   i64,
  pub start_date:    NaiveDate,
  pub end_date:      NaiveDate,
  pub job_id:        Option<String>,
  pub department_id: Option<i64>,
}

/// Input for appending a [`JobHistory`] row.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewJobHistory {
  pub employee_id:   i64,
  pub start_date:    NaiveDate,
  pub end_date:      NaiveDate,
  pub job_id:        Option<String>,
  pub department_id: Option<i64>,
}

impl NewJobHistory {
  pub fn check(&self) -> Result<(), ValidationErrors> {
    let mut errors = collected(self.validate());
    if self.end_date < self.start_date {
      errors.add("end_date", invalid("range", "must not precede the start date"));
    }
    into_result(errors)
  }
}

// ─── Validation helpers ──────────────────────────────────────────────────────

fn collected(result: Result<(), ValidationErrors>) -> ValidationErrors {
  result.err().unwrap_or_default()
}

fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
  if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
  ValidationError::new(code).with_message(Cow::Borrowed(message))
}
