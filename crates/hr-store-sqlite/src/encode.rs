//! Encoding and decoding helpers between Rust domain types and the plain
//! representations stored in SQLite columns.
//!
//! Dates are stored as ISO-8601 `YYYY-MM-DD` text so that string comparison
//! orders them chronologically. Money is stored as REAL.

use chrono::NaiveDate;
use hr_core::{
  entity::{Department, Employee, Job, JobHistory, Location},
  report::{RawRow, Value},
};
use rusqlite::types::{Type, ValueRef};

use crate::{Error, Result};

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Catalog rows ────────────────────────────────────────────────────────────

/// Copy every column of `row` into a positional [`RawRow`].
pub fn decode_raw_row(row: &rusqlite::Row<'_>, width: usize) -> rusqlite::Result<RawRow> {
  let mut values = Vec::with_capacity(width);
  for i in 0..width {
    let value = match row.get_ref(i)? {
      ValueRef::Null => Value::Null,
      ValueRef::Integer(n) => Value::Integer(n),
      ValueRef::Real(r) => Value::Real(r),
      ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
      ValueRef::Blob(_) => {
        return Err(rusqlite::Error::InvalidColumnType(i, format!("column {i}"), Type::Blob));
      }
    };
    values.push(value);
  }
  Ok(RawRow(values))
}

// ─── Row types ───────────────────────────────────────────────────────────────

pub const EMPLOYEE_COLUMNS: &str = "employee_id, first_name, last_name, email, phone_number,
  hire_date, salary, commission_pct, job_id, department_id, manager_id";

/// Raw values read directly from an `employees` row.
pub struct RawEmployee {
  pub employee_id:    i64,
  pub first_name:     String,
  pub last_name:      String,
  pub email:          String,
  pub phone_number:   Option<String>,
  pub hire_date:      String,
  pub salary:         f64,
  pub commission_pct: Option<f64>,
  pub job_id:         Option<String>,
  pub department_id:  Option<i64>,
  pub manager_id:     Option<i64>,
}

impl RawEmployee {
  /// Read a row selected with [`EMPLOYEE_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      employee_id:    row.get(0)?,
      first_name:     row.get(1)?,
      last_name:      row.get(2)?,
      email:          row.get(3)?,
      phone_number:   row.get(4)?,
      hire_date:      row.get(5)?,
      salary:         row.get(6)?,
      commission_pct: row.get(7)?,
      job_id:         row.get(8)?,
      department_id:  row.get(9)?,
      manager_id:     row.get(10)?,
    })
  }

  pub fn into_employee(self) -> Result<Employee> {
    Ok(Employee {
      employee_id:    self.employee_id,
      first_name:     self.first_name,
      last_name:      self.last_name,
      email:          self.email,
      phone_number:   self.phone_number,
      hire_date:      decode_date(&self.hire_date)?,
      salary:         self.salary,
      commission_pct: self.commission_pct,
      job_id:         self.job_id,
      department_id:  self.department_id,
      manager_id:     self.manager_id,
    })
  }
}

/// Raw values read directly from a `job_history` row.
pub struct RawJobHistory {
  pub employee_id:   i64,
  pub start_date:    String,
  pub end_date:      String,
  pub job_id:        Option<String>,
  pub department_id: Option<i64>,
}

impl RawJobHistory {
  pub fn into_job_history(self) -> Result<JobHistory> {
    Ok(JobHistory {
      employee_id:   self.employee_id,
      start_date:    decode_date(&self.start_date)?,
      end_date:      decode_date(&self.end_date)?,
      job_id:        self.job_id,
      department_id: self.department_id,
    })
  }
}

// Departments, jobs and locations hold no encoded columns and map directly.

pub const DEPARTMENT_COLUMNS: &str = "department_id, department_name, manager_id, location_id";

pub fn department_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Department> {
  Ok(Department {
    department_id:   row.get(0)?,
    department_name: row.get(1)?,
    manager_id:      row.get(2)?,
    location_id:     row.get(3)?,
  })
}

pub const JOB_COLUMNS: &str = "job_id, job_title, min_salary, max_salary";

pub fn job_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Job> {
  Ok(Job {
    job_id:     row.get(0)?,
    job_title:  row.get(1)?,
    min_salary: row.get(2)?,
    max_salary: row.get(3)?,
  })
}

pub const LOCATION_COLUMNS: &str =
  "location_id, street_address, postal_code, city, state_province, country_id";

pub fn location_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Location> {
  Ok(Location {
    location_id:    row.get(0)?,
    street_address: row.get(1)?,
    postal_code:    row.get(2)?,
    city:           row.get(3)?,
    state_province: row.get(4)?,
    country_id:     row.get(5)?,
  })
}
