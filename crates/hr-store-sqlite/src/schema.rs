//! SQL schema for the HR SQLite store.
//!
//! Executed once at connection startup. Idempotent thanks to
//! `CREATE ... IF NOT EXISTS`.

/// Full schema DDL.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS regions (
    region_id   INTEGER PRIMARY KEY,
    region_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS countries (
    country_id   TEXT PRIMARY KEY,     -- two-letter code
    country_name TEXT NOT NULL,
    region_id    INTEGER REFERENCES regions(region_id)
);

CREATE TABLE IF NOT EXISTS locations (
    location_id    INTEGER PRIMARY KEY,
    street_address TEXT NOT NULL,
    postal_code    TEXT NOT NULL,
    city           TEXT NOT NULL,
    state_province TEXT,
    country_id     TEXT REFERENCES countries(country_id)
);

CREATE TABLE IF NOT EXISTS jobs (
    job_id     TEXT PRIMARY KEY,
    job_title  TEXT NOT NULL,
    min_salary REAL NOT NULL CHECK (min_salary >= 0),
    max_salary REAL NOT NULL CHECK (max_salary >= 0),
    CHECK (min_salary <= max_salary)
);

CREATE TABLE IF NOT EXISTS departments (
    department_id   INTEGER PRIMARY KEY,
    department_name TEXT NOT NULL,
    manager_id      INTEGER REFERENCES employees(employee_id) ON DELETE SET NULL,
    location_id     INTEGER REFERENCES locations(location_id)
);

CREATE TABLE IF NOT EXISTS employees (
    employee_id    INTEGER PRIMARY KEY,
    first_name     TEXT NOT NULL,
    last_name      TEXT NOT NULL,
    email          TEXT NOT NULL UNIQUE,
    phone_number   TEXT,
    hire_date      TEXT NOT NULL,      -- YYYY-MM-DD
    salary         REAL NOT NULL CHECK (salary >= 0),
    commission_pct REAL CHECK (commission_pct BETWEEN 0 AND 1),
    job_id         TEXT REFERENCES jobs(job_id),
    department_id  INTEGER REFERENCES departments(department_id),
    manager_id     INTEGER REFERENCES employees(employee_id) ON DELETE SET NULL,
    CHECK (manager_id IS NULL OR manager_id != employee_id)
);

-- Audit trail: rows are inserted and never changed.
CREATE TABLE IF NOT EXISTS job_history (
    employee_id   INTEGER NOT NULL REFERENCES employees(employee_id),
    start_date    TEXT NOT NULL,
    end_date      TEXT NOT NULL,
    job_id        TEXT REFERENCES jobs(job_id),
    department_id INTEGER REFERENCES departments(department_id),
    PRIMARY KEY (employee_id, start_date),
    CHECK (end_date >= start_date)
);

CREATE TRIGGER IF NOT EXISTS job_history_no_update
BEFORE UPDATE ON job_history
BEGIN
    SELECT RAISE(ABORT, 'job history is append-only');
END;

CREATE TRIGGER IF NOT EXISTS job_history_no_delete
BEFORE DELETE ON job_history
BEGIN
    SELECT RAISE(ABORT, 'job history is append-only');
END;

CREATE INDEX IF NOT EXISTS employees_manager_idx    ON employees(manager_id);
CREATE INDEX IF NOT EXISTS employees_department_idx ON employees(department_id);
CREATE INDEX IF NOT EXISTS employees_job_idx        ON employees(job_id);
CREATE INDEX IF NOT EXISTS job_history_job_idx      ON job_history(job_id);

PRAGMA user_version = 1;
";
