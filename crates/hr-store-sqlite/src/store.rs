//! [`SqliteStore`], the SQLite implementation of [`HrStore`].

use std::path::Path;

use rusqlite::{OptionalExtension as _, ToSql, types::FromSql};

use hr_core::{
  catalog::QueryId,
  entity::{
    Department, Employee, Job, JobHistory, Location, NewDepartment, NewEmployee,
    NewJob, NewJobHistory,
  },
  report::RawRow,
  store::{HrStore, Page, TableCounts},
};

use crate::{
  Result,
  catalog,
  encode::{
    DEPARTMENT_COLUMNS, EMPLOYEE_COLUMNS, JOB_COLUMNS, LOCATION_COLUMNS, RawEmployee,
    RawJobHistory, decode_raw_row, department_from_row, encode_date, job_from_row,
    location_from_row,
  },
  functions,
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An HR store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, e.g. for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        functions::register(conn)?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Look `id` up with `sql`; an id that matches no row resolves to `None`.
fn resolve<T: ToSql + FromSql>(
  conn: &rusqlite::Connection,
  sql: &str,
  id: Option<T>,
) -> rusqlite::Result<Option<T>> {
  match id {
    None => Ok(None),
    Some(id) => conn
      .query_row(sql, rusqlite::params![id], |row| row.get(0))
      .optional(),
  }
}

/// Relation ids of an employee write after resolution.
struct EmployeeRefs {
  job_id:        Option<String>,
  department_id: Option<i64>,
  manager_id:    Option<i64>,
}

impl EmployeeRefs {
  fn resolve(conn: &rusqlite::Connection, input: &NewEmployee) -> rusqlite::Result<Self> {
    Ok(Self {
      job_id:        resolve(conn, "SELECT job_id FROM jobs WHERE job_id = ?1", input.job_id.clone())?,
      department_id: resolve(
        conn,
        "SELECT department_id FROM departments WHERE department_id = ?1",
        input.department_id,
      )?,
      manager_id:    resolve(
        conn,
        "SELECT employee_id FROM employees WHERE employee_id = ?1",
        input.manager_id,
      )?,
    })
  }

  fn into_employee(self, employee_id: i64, input: NewEmployee) -> Employee {
    Employee {
      employee_id,
      first_name:     input.first_name,
      last_name:      input.last_name,
      email:          input.email,
      phone_number:   input.phone_number,
      hire_date:      input.hire_date,
      salary:         input.salary,
      commission_pct: input.commission_pct,
      job_id:         self.job_id,
      department_id:  self.department_id,
      manager_id:     self.manager_id,
    }
  }
}

fn department_refs(
  conn: &rusqlite::Connection,
  input: &NewDepartment,
) -> rusqlite::Result<(Option<i64>, Option<i64>)> {
  let manager_id = resolve(
    conn,
    "SELECT employee_id FROM employees WHERE employee_id = ?1",
    input.manager_id,
  )?;
  let location_id = resolve(
    conn,
    "SELECT location_id FROM locations WHERE location_id = ?1",
    input.location_id,
  )?;
  Ok((manager_id, location_id))
}

// ─── HrStore impl ────────────────────────────────────────────────────────────

impl HrStore for SqliteStore {
  type Error = crate::Error;

  // ── Employees ─────────────────────────────────────────────────────────────

  async fn add_employee(&self, input: NewEmployee) -> Result<Employee> {
    let hire_date = encode_date(input.hire_date);

    let employee = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let refs = EmployeeRefs::resolve(&tx, &input)?;
        tx.execute(
          "INSERT INTO employees (
             first_name, last_name, email, phone_number, hire_date,
             salary, commission_pct, job_id, department_id, manager_id
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          rusqlite::params![
            input.first_name,
            input.last_name,
            input.email,
            input.phone_number,
            hire_date,
            input.salary,
            input.commission_pct,
            refs.job_id,
            refs.department_id,
            refs.manager_id,
          ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(refs.into_employee(id, input))
      })
      .await?;

    tracing::debug!(employee_id = employee.employee_id, "employee added");
    Ok(employee)
  }

  async fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
    let raw: Option<RawEmployee> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employee_id = ?1"),
            rusqlite::params![id],
            RawEmployee::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawEmployee::into_employee).transpose()
  }

  async fn list_employees(&self, page: Page) -> Result<Vec<Employee>> {
    // Out-of-range values clamp so SQLite never sees a negative bound.
    let limit = i64::try_from(page.size).unwrap_or(i64::MAX);
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);

    let raws: Vec<RawEmployee> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {EMPLOYEE_COLUMNS} FROM employees
           ORDER BY employee_id LIMIT ?1 OFFSET ?2"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![limit, offset], RawEmployee::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEmployee::into_employee).collect()
  }

  async fn all_employees(&self) -> Result<Vec<Employee>> {
    let raws: Vec<RawEmployee> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY last_name, first_name"
        ))?;
        let rows = stmt
          .query_map([], RawEmployee::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEmployee::into_employee).collect()
  }

  async fn update_employee(&self, id: i64, input: NewEmployee) -> Result<Option<Employee>> {
    let hire_date = encode_date(input.hire_date);

    let employee = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let refs = EmployeeRefs::resolve(&tx, &input)?;
        let changed = tx.execute(
          "UPDATE employees SET
             first_name = ?1, last_name = ?2, email = ?3, phone_number = ?4,
             hire_date = ?5, salary = ?6, commission_pct = ?7,
             job_id = ?8, department_id = ?9, manager_id = ?10
           WHERE employee_id = ?11",
          rusqlite::params![
            input.first_name,
            input.last_name,
            input.email,
            input.phone_number,
            hire_date,
            input.salary,
            input.commission_pct,
            refs.job_id,
            refs.department_id,
            refs.manager_id,
            id,
          ],
        )?;
        tx.commit()?;
        Ok((changed > 0).then(|| refs.into_employee(id, input)))
      })
      .await?;

    Ok(employee)
  }

  async fn delete_employee(&self, id: i64) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM employees WHERE employee_id = ?1",
          rusqlite::params![id],
        )?;
        Ok(n > 0)
      })
      .await?;

    if deleted {
      tracing::debug!(employee_id = id, "employee deleted");
    }
    Ok(deleted)
  }

  // ── Departments ───────────────────────────────────────────────────────────

  async fn add_department(&self, input: NewDepartment) -> Result<Department> {
    let department = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let (manager_id, location_id) = department_refs(&tx, &input)?;
        tx.execute(
          "INSERT INTO departments (department_name, manager_id, location_id)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![input.department_name, manager_id, location_id],
        )?;
        let department_id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Department {
          department_id,
          department_name: input.department_name,
          manager_id,
          location_id,
        })
      })
      .await?;

    Ok(department)
  }

  async fn get_department(&self, id: i64) -> Result<Option<Department>> {
    let department = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {DEPARTMENT_COLUMNS} FROM departments WHERE department_id = ?1"),
            rusqlite::params![id],
            department_from_row,
          )
          .optional()?)
      })
      .await?;

    Ok(department)
  }

  async fn list_departments(&self) -> Result<Vec<Department>> {
    let departments = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {DEPARTMENT_COLUMNS} FROM departments ORDER BY department_name"
        ))?;
        let rows = stmt
          .query_map([], department_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(departments)
  }

  async fn update_department(
    &self,
    id: i64,
    input: NewDepartment,
  ) -> Result<Option<Department>> {
    let department = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let (manager_id, location_id) = department_refs(&tx, &input)?;
        let changed = tx.execute(
          "UPDATE departments SET department_name = ?1, manager_id = ?2, location_id = ?3
           WHERE department_id = ?4",
          rusqlite::params![input.department_name, manager_id, location_id, id],
        )?;
        tx.commit()?;
        Ok((changed > 0).then(|| Department {
          department_id: id,
          department_name: input.department_name,
          manager_id,
          location_id,
        }))
      })
      .await?;

    Ok(department)
  }

  async fn delete_department(&self, id: i64) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM departments WHERE department_id = ?1",
          rusqlite::params![id],
        )?;
        Ok(n > 0)
      })
      .await?;

    Ok(deleted)
  }

  // ── Jobs ──────────────────────────────────────────────────────────────────

  async fn add_job(&self, input: NewJob) -> Result<Job> {
    let job = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO jobs (job_id, job_title, min_salary, max_salary)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![
            input.job_id,
            input.job_title,
            input.min_salary,
            input.max_salary,
          ],
        )?;
        Ok(Job {
          job_id:     input.job_id,
          job_title:  input.job_title,
          min_salary: input.min_salary,
          max_salary: input.max_salary,
        })
      })
      .await?;

    Ok(job)
  }

  async fn get_job<'a>(&'a self, id: &'a str) -> Result<Option<Job>> {
    let id = id.to_owned();

    let job = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {JOB_COLUMNS} FROM jobs WHERE job_id = ?1"),
            rusqlite::params![id],
            job_from_row,
          )
          .optional()?)
      })
      .await?;

    Ok(job)
  }

  async fn list_jobs(&self) -> Result<Vec<Job>> {
    let jobs = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY job_title"))?;
        let rows = stmt
          .query_map([], job_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(jobs)
  }

  async fn update_job<'a>(&'a self, id: &'a str, input: NewJob) -> Result<Option<Job>> {
    let id = id.to_owned();

    let job = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE jobs SET job_title = ?1, min_salary = ?2, max_salary = ?3
           WHERE job_id = ?4",
          rusqlite::params![input.job_title, input.min_salary, input.max_salary, id],
        )?;
        Ok((changed > 0).then(|| Job {
          job_id:     id,
          job_title:  input.job_title,
          min_salary: input.min_salary,
          max_salary: input.max_salary,
        }))
      })
      .await?;

    Ok(job)
  }

  async fn delete_job<'a>(&'a self, id: &'a str) -> Result<bool> {
    let id = id.to_owned();

    let deleted = self
      .conn
      .call(move |conn| {
        let n = conn.execute("DELETE FROM jobs WHERE job_id = ?1", rusqlite::params![id])?;
        Ok(n > 0)
      })
      .await?;

    Ok(deleted)
  }

  // ── Job history (append-only) ────────────────────────────────────────────

  async fn record_job_history(&self, input: NewJobHistory) -> Result<JobHistory> {
    let start_date = encode_date(input.start_date);
    let end_date = encode_date(input.end_date);

    let history = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let job_id = resolve(&tx, "SELECT job_id FROM jobs WHERE job_id = ?1", input.job_id)?;
        let department_id = resolve(
          &tx,
          "SELECT department_id FROM departments WHERE department_id = ?1",
          input.department_id,
        )?;
        tx.execute(
          "INSERT INTO job_history (employee_id, start_date, end_date, job_id, department_id)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![input.employee_id, start_date, end_date, job_id, department_id],
        )?;
        tx.commit()?;
        Ok(JobHistory {
          employee_id: input.employee_id,
          start_date: input.start_date,
          end_date: input.end_date,
          job_id,
          department_id,
        })
      })
      .await?;

    tracing::debug!(employee_id = history.employee_id, "job history recorded");
    Ok(history)
  }

  async fn job_history_for(&self, employee_id: i64) -> Result<Vec<JobHistory>> {
    let raws: Vec<RawJobHistory> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT employee_id, start_date, end_date, job_id, department_id
           FROM job_history WHERE employee_id = ?1 ORDER BY start_date",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![employee_id], |row| {
            Ok(RawJobHistory {
              employee_id:   row.get(0)?,
              start_date:    row.get(1)?,
              end_date:      row.get(2)?,
              job_id:        row.get(3)?,
              department_id: row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawJobHistory::into_job_history).collect()
  }

  // ── Locations ─────────────────────────────────────────────────────────────

  async fn get_location(&self, id: i64) -> Result<Option<Location>> {
    let location = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE location_id = ?1"),
            rusqlite::params![id],
            location_from_row,
          )
          .optional()?)
      })
      .await?;

    Ok(location)
  }

  async fn list_locations(&self) -> Result<Vec<Location>> {
    let locations = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {LOCATION_COLUMNS} FROM locations ORDER BY city"
        ))?;
        let rows = stmt
          .query_map([], location_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(locations)
  }

  // ── Reports ───────────────────────────────────────────────────────────────

  async fn table_counts(&self) -> Result<TableCounts> {
    let counts = self
      .conn
      .call(|conn| {
        let count = |table: &str| -> rusqlite::Result<i64> {
          conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        };
        Ok(TableCounts {
          employee_count:   count("employees")?,
          department_count: count("departments")?,
          job_count:        count("jobs")?,
        })
      })
      .await?;

    Ok(counts)
  }

  async fn run_query(&self, id: QueryId) -> Result<Vec<RawRow>> {
    let sql = catalog::sql(id);

    let rows: Vec<RawRow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(sql)?;
        let width = stmt.column_count();
        let rows = stmt
          .query_map([], |row| decode_raw_row(row, width))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    tracing::debug!(query = %id, rows = rows.len(), "catalog query executed");
    Ok(rows)
  }
}
