//! One typed record per catalog query.
//!
//! Field order follows column order. Each `from_row` narrows columns by
//! position and nothing else.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
  Result,
  catalog::QueryId,
  report::{RawRow, Report},
};

// ─── Compensation ────────────────────────────────────────────────────────────

/// One of the three best-compensated employees of a department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopEarner {
  pub department_name:    String,
  pub employee_name:      String,
  pub salary:             f64,
  /// Zero when the employee has no commission.
  pub commission_pct:     f64,
  pub total_compensation: f64,
}

impl Report for TopEarner {
  const QUERY: QueryId = QueryId::TopEarners;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      department_name:    row.text(0)?,
      employee_name:      row.text(1)?,
      salary:             row.decimal(2)?,
      commission_pct:     row.decimal(3)?,
      total_compensation: row.decimal(4)?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighCommission {
  pub employee_name:         String,
  pub job_title:             String,
  pub salary:                f64,
  pub commission_pct:        f64,
  pub commission_amount:     f64,
  /// `None` for a zero salary.
  pub commission_percentage: Option<f64>,
}

impl Report for HighCommission {
  const QUERY: QueryId = QueryId::HighCommission;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      employee_name:         row.text(0)?,
      job_title:             row.text(1)?,
      salary:                row.decimal(2)?,
      commission_pct:        row.decimal(3)?,
      commission_amount:     row.decimal(4)?,
      commission_percentage: row.opt_decimal(5)?,
    })
  }
}

// ─── Hierarchy and management ────────────────────────────────────────────────

/// One line of the depth-first reporting tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyEntry {
  /// 1 for employees without a manager.
  pub hierarchy_level: i64,
  /// Full name indented by two spaces per level below the root.
  pub employee_name:   String,
  pub job_title:       String,
  pub department_name: String,
  pub salary:          f64,
}

impl Report for HierarchyEntry {
  const QUERY: QueryId = QueryId::EmployeeHierarchy;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      hierarchy_level: row.integer(0)?,
      employee_name:   row.text(1)?,
      job_title:       row.text(2)?,
      department_name: row.text(3)?,
      salary:          row.decimal(4)?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerSalaryImpact {
  pub manager_name:    String,
  pub department_name: String,
  pub avg_team_salary: f64,
  pub dept_avg_salary: f64,
  /// `None` when the department average is zero.
  pub pct_diff:        Option<f64>,
}

impl Report for ManagerSalaryImpact {
  const QUERY: QueryId = QueryId::ManagerSalaryImpact;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      manager_name:    row.text(0)?,
      department_name: row.text(1)?,
      avg_team_salary: row.decimal(2)?,
      dept_avg_salary: row.decimal(3)?,
      pct_diff:        row.opt_decimal(4)?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerWorkload {
  pub manager_name:      String,
  pub department_name:   String,
  pub direct_reports:    i64,
  pub total_team_salary: f64,
}

impl Report for ManagerWorkload {
  const QUERY: QueryId = QueryId::ManagerWorkload;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      manager_name:      row.text(0)?,
      department_name:   row.text(1)?,
      direct_reports:    row.integer(2)?,
      total_team_salary: row.decimal(3)?,
    })
  }
}

// ─── Department aggregates ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentStats {
  pub department_name: String,
  pub employee_count:  i64,
  pub avg_salary:      f64,
  pub median_salary:   f64,
  pub min_salary:      f64,
  pub max_salary:      f64,
  pub stddev_salary:   f64,
}

impl Report for DepartmentStats {
  const QUERY: QueryId = QueryId::DepartmentStats;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      department_name: row.text(0)?,
      employee_count:  row.integer(1)?,
      avg_salary:      row.decimal(2)?,
      median_salary:   row.decimal(3)?,
      min_salary:      row.decimal(4)?,
      max_salary:      row.decimal(5)?,
      stddev_salary:   row.decimal(6)?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryPercentile {
  pub department_name:   String,
  pub employee_name:     String,
  pub salary:            f64,
  /// Percent rank within the department, 0–100.
  pub salary_percentile: f64,
}

impl Report for SalaryPercentile {
  const QUERY: QueryId = QueryId::SalaryPercentiles;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      department_name:   row.text(0)?,
      employee_name:     row.text(1)?,
      salary:            row.decimal(2)?,
      salary_percentile: row.decimal(3)?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiringTrend {
  pub department_name: String,
  pub hire_year:       i64,
  pub hire_count:      i64,
}

impl Report for HiringTrend {
  const QUERY: QueryId = QueryId::HiringTrends;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      department_name: row.text(0)?,
      hire_year:       row.integer(1)?,
      hire_count:      row.integer(2)?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiverseDepartment {
  pub department_name:  String,
  pub unique_job_count: i64,
  /// Job titles of every employee, alphabetical, joined with `", "`.
  pub job_titles:       String,
}

impl Report for DiverseDepartment {
  const QUERY: QueryId = QueryId::DiverseJobRoles;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      department_name:  row.text(0)?,
      unique_job_count: row.integer(1)?,
      job_titles:       row.text(2)?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentPath {
  pub department_name: String,
  /// `Region → Country → City`.
  pub location_path:   String,
}

impl Report for DepartmentPath {
  const QUERY: QueryId = QueryId::DepartmentPath;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      department_name: row.text(0)?,
      location_path:   row.text(1)?,
    })
  }
}

// ─── Geography ───────────────────────────────────────────────────────────────

/// Grouping level of a [`RegionCountryRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupLevel {
  Country,
  RegionSubtotal,
  GrandTotal,
}

/// A per-country row or a subtotal row of the region/country rollup.
/// Subtotals carry `None` in the grouping keys they aggregate over.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionCountryRow {
  pub region_name:    Option<String>,
  pub country_name:   Option<String>,
  pub employee_count: i64,
  pub total_salary:   f64,
  pub avg_salary:     f64,
}

impl RegionCountryRow {
  pub fn level(&self) -> RollupLevel {
    match (&self.region_name, &self.country_name) {
      (None, _) => RollupLevel::GrandTotal,
      (Some(_), None) => RollupLevel::RegionSubtotal,
      (Some(_), Some(_)) => RollupLevel::Country,
    }
  }
}

impl Report for RegionCountryRow {
  const QUERY: QueryId = QueryId::RegionCountry;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      region_name:    row.opt_text(0)?,
      country_name:   row.opt_text(1)?,
      employee_count: row.integer(2)?,
      total_salary:   row.decimal(3)?,
      avg_salary:     row.decimal(4)?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionJobRole {
  pub region_name: String,
  pub job_title:   String,
}

impl Report for RegionJobRole {
  const QUERY: QueryId = QueryId::JobRolesByRegion;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      region_name: row.text(0)?,
      job_title:   row.text(1)?,
    })
  }
}

/// Salary totals of three fixed departments, pivoted per region. A cell is
/// `None` when the region has no such department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryBudget {
  pub region_name: String,
  pub executive:   Option<f64>,
  pub sales:       Option<f64>,
  pub finance:     Option<f64>,
}

impl Report for SalaryBudget {
  const QUERY: QueryId = QueryId::SalaryBudget;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      region_name: row.text(0)?,
      executive:   row.opt_decimal(1)?,
      sales:       row.opt_decimal(2)?,
      finance:     row.opt_decimal(3)?,
    })
  }
}

// ─── Tenure ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongTenureLowSalary {
  pub employee_id:      i64,
  pub employee_name:    String,
  pub job_title:        String,
  pub salary:           f64,
  pub median_salary:    f64,
  pub years_of_service: f64,
}

impl Report for LongTenureLowSalary {
  const QUERY: QueryId = QueryId::LongTenureLowSalary;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      employee_id:      row.integer(0)?,
      employee_name:    row.text(1)?,
      job_title:        row.text(2)?,
      salary:           row.decimal(3)?,
      median_salary:    row.decimal(4)?,
      years_of_service: row.decimal(5)?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StagnantEmployee {
  pub employee_id:      i64,
  pub employee_name:    String,
  pub job_title:        String,
  pub hire_date:        NaiveDate,
  pub years_of_service: f64,
}

impl Report for StagnantEmployee {
  const QUERY: QueryId = QueryId::NoRecentChanges;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      employee_id:      row.integer(0)?,
      employee_name:    row.text(1)?,
      job_title:        row.text(2)?,
      hire_date:        row.date(3)?,
      years_of_service: row.decimal(4)?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnoverYear {
  pub turnover_year:  i64,
  pub turnover_count: i64,
}

impl Report for TurnoverYear {
  const QUERY: QueryId = QueryId::EmployeeTurnover;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      turnover_year:  row.integer(0)?,
      turnover_count: row.integer(1)?,
    })
  }
}

// ─── Job history ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobMobility {
  pub employee_name:       String,
  pub role_count:          i64,
  pub avg_months_per_role: f64,
  /// Titles in start-date order, joined with `", "`.
  pub job_titles:          String,
}

impl Report for JobMobility {
  const QUERY: QueryId = QueryId::JobMobility;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      employee_name:       row.text(0)?,
      role_count:          row.integer(1)?,
      avg_months_per_role: row.decimal(2)?,
      job_titles:          row.text(3)?,
    })
  }
}

/// A move between consecutive history rows into a better-paid band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionPattern {
  pub employee_name:       String,
  pub previous_job_title:  String,
  pub new_job_title:       String,
  pub previous_max_salary: f64,
  pub new_max_salary:      f64,
  /// `None` when the previous band maximum is zero.
  pub salary_increase_pct: Option<f64>,
}

impl Report for PromotionPattern {
  const QUERY: QueryId = QueryId::PromotionPatterns;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      employee_name:       row.text(0)?,
      previous_job_title:  row.text(1)?,
      new_job_title:       row.text(2)?,
      previous_max_salary: row.decimal(3)?,
      new_max_salary:      row.decimal(4)?,
      salary_increase_pct: row.opt_decimal(5)?,
    })
  }
}

/// Two history rows of one employee whose date ranges overlap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlappingAssignment {
  pub employee_id:   i64,
  pub employee_name: String,
  pub job1_id:       String,
  pub job1_title:    String,
  pub job1_start:    NaiveDate,
  pub job1_end:      NaiveDate,
  pub job2_id:       String,
  pub job2_title:    String,
  pub job2_start:    NaiveDate,
  pub job2_end:      NaiveDate,
}

impl Report for OverlappingAssignment {
  const QUERY: QueryId = QueryId::OverlappingJobs;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      employee_id:   row.integer(0)?,
      employee_name: row.text(1)?,
      job1_id:       row.text(2)?,
      job1_title:    row.text(3)?,
      job1_start:    row.date(4)?,
      job1_end:      row.date(5)?,
      job2_id:       row.text(6)?,
      job2_title:    row.text(7)?,
      job2_start:    row.date(8)?,
      job2_end:      row.date(9)?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobTransition {
  pub from_job:         String,
  pub to_job:           String,
  pub transition_count: i64,
}

impl Report for JobTransition {
  const QUERY: QueryId = QueryId::JobTransitions;

  fn from_row(row: &RawRow) -> Result<Self> {
    Ok(Self {
      from_job:         row.text(0)?,
      to_job:           row.text(1)?,
      transition_count: row.integer(2)?,
    })
  }
}
