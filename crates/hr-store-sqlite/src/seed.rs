//! A small demonstration dataset: three regions, six departments, sixteen
//! employees and a handful of job history rows, enough for every catalog
//! query to return something.

use crate::{Result, SqliteStore};

const DEMO_DATA: &str = "
INSERT OR IGNORE INTO regions (region_id, region_name) VALUES
    (1, 'Europe'), (2, 'Americas'), (3, 'Asia');

INSERT OR IGNORE INTO countries (country_id, country_name, region_id) VALUES
    ('US', 'United States of America', 2),
    ('CA', 'Canada', 2),
    ('UK', 'United Kingdom', 1),
    ('JP', 'Japan', 3);

INSERT OR IGNORE INTO locations (location_id, street_address, postal_code, city, state_province, country_id) VALUES
    (1400, '2014 Jabberwocky Rd', '26192', 'Southlake', 'Texas', 'US'),
    (1700, '2004 Charade Rd', '98199', 'Seattle', 'Washington', 'US'),
    (1800, '147 Spadina Ave', 'M5V 2L7', 'Toronto', 'Ontario', 'CA'),
    (2500, 'Magdalen Centre, The Oxford Science Park', 'OX9 9ZB', 'Oxford', 'Oxford', 'UK'),
    (1200, '2017 Shinjuku-ku', '1689', 'Tokyo', 'Tokyo Prefecture', 'JP');

INSERT OR IGNORE INTO jobs (job_id, job_title, min_salary, max_salary) VALUES
    ('AD_PRES', 'President', 20080, 40000),
    ('AD_VP', 'Administration Vice President', 15000, 30000),
    ('IT_PROG', 'Programmer', 4000, 10000),
    ('SA_MAN', 'Sales Manager', 10000, 20080),
    ('SA_REP', 'Sales Representative', 6000, 12008),
    ('FI_MGR', 'Finance Manager', 8200, 16000),
    ('FI_ACCOUNT', 'Accountant', 4200, 9000),
    ('AC_ACCOUNT', 'Public Accountant', 4200, 9000),
    ('AC_MGR', 'Accounting Manager', 8200, 16000);

INSERT OR IGNORE INTO departments (department_id, department_name, manager_id, location_id) VALUES
    (10, 'Executive', NULL, 1700),
    (20, 'IT', NULL, 1400),
    (30, 'Sales', NULL, 2500),
    (40, 'Finance', NULL, 1700),
    (50, 'Research', NULL, 1200),
    (60, 'Marketing', NULL, 1800);

INSERT INTO employees (employee_id, first_name, last_name, email, phone_number, hire_date,
                       salary, commission_pct, job_id, department_id, manager_id) VALUES
    (100, 'Steven', 'King', 'sking@example.com', '515.123.4567', '2003-06-17', 24000, NULL, 'AD_PRES', 10, NULL),
    (101, 'Neena', 'Kochhar', 'nkochhar@example.com', '515.123.4568', '2005-09-21', 17000, NULL, 'AD_VP', 10, 100),
    (102, 'Lex', 'De Haan', 'ldehaan@example.com', '515.123.4569', '2001-01-13', 17000, NULL, 'AD_VP', 10, 100),
    (103, 'Alexander', 'Hunold', 'ahunold@example.com', '590.423.4567', '2006-01-03', 9000, NULL, 'IT_PROG', 20, 102),
    (104, 'Bruce', 'Ernst', 'bernst@example.com', '590.423.4568', '2007-05-21', 6000, NULL, 'IT_PROG', 20, 103),
    (105, 'David', 'Austin', 'daustin@example.com', '590.423.4569', '2005-06-25', 4800, NULL, 'IT_PROG', 20, 103),
    (106, 'Valli', 'Pataballa', 'vpatabal@example.com', '590.423.4560', '2006-02-05', 4800, NULL, 'IT_PROG', 20, 103),
    (107, 'Diana', 'Lorentz', 'dlorentz@example.com', '590.423.5567', '2007-02-07', 4200, NULL, 'IT_PROG', 20, 103),
    (145, 'John', 'Russell', 'jrussel@example.com', '011.44.1344.429268', '2004-10-01', 14000, 0.4, 'SA_MAN', 30, 100),
    (146, 'Karen', 'Partners', 'kpartner@example.com', '011.44.1344.467268', '2005-01-05', 13500, 0.3, 'SA_MAN', 30, 100),
    (150, 'Peter', 'Tucker', 'ptucker@example.com', '011.44.1344.129268', '2005-01-30', 10000, 0.3, 'SA_REP', 30, 145),
    (151, 'David', 'Bernstein', 'dbernste@example.com', '011.44.1344.345268', '2005-03-24', 9500, 0.25, 'SA_REP', 30, 145),
    (152, 'Peter', 'Hall', 'phall@example.com', '011.44.1344.478968', '2005-08-20', 9000, 0.25, 'SA_REP', 30, 146),
    (108, 'Nancy', 'Greenberg', 'ngreenbe@example.com', '515.124.4569', '2002-08-17', 12008, NULL, 'FI_MGR', 40, 101),
    (109, 'Daniel', 'Faviet', 'dfaviet@example.com', '515.124.4169', '2002-08-16', 9000, NULL, 'FI_ACCOUNT', 40, 108),
    (110, 'John', 'Chen', 'jchen@example.com', '515.124.4269', '2005-09-28', 8200, NULL, 'FI_ACCOUNT', 40, 108);

UPDATE departments SET manager_id = 100 WHERE department_id = 10 AND manager_id IS NULL;
UPDATE departments SET manager_id = 103 WHERE department_id = 20 AND manager_id IS NULL;
UPDATE departments SET manager_id = 145 WHERE department_id = 30 AND manager_id IS NULL;
UPDATE departments SET manager_id = 108 WHERE department_id = 40 AND manager_id IS NULL;

INSERT INTO job_history (employee_id, start_date, end_date, job_id, department_id) VALUES
    (101, '1997-09-21', '2001-10-27', 'AC_ACCOUNT', 40),
    (101, '2001-10-28', '2005-03-15', 'AC_MGR', 40),
    (102, '1993-01-13', '1998-07-24', 'IT_PROG', 20),
    (145, '1998-03-24', '2001-12-31', 'SA_REP', 30),
    (145, '2002-01-01', '2004-09-30', 'SA_MAN', 30),
    (110, '2001-01-01', '2003-06-30', 'AC_ACCOUNT', 40),
    (110, '2003-01-01', '2005-09-27', 'FI_ACCOUNT', 40);
";

impl SqliteStore {
  /// Load the demonstration dataset. Does nothing and returns `false` when
  /// the store already holds employees. Reference rows (regions through
  /// departments) that already exist are kept as they are.
  pub async fn seed_demo(&self) -> Result<bool> {
    let seeded = self
      .conn
      .call(|conn| {
        let existing: i64 =
          conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
        if existing > 0 {
          return Ok(false);
        }
        let tx = conn.transaction()?;
        tx.execute_batch(DEMO_DATA)?;
        tx.commit()?;
        Ok(true)
      })
      .await?;

    if seeded {
      tracing::info!("demonstration data loaded");
    }
    Ok(seeded)
  }
}
