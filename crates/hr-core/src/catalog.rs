//! The query catalog, the fixed set of named analytical queries.
//!
//! Every query is parameterless and returns rows with a fixed column arity.
//! The SQL text itself is dialect-specific and lives with the store backend;
//! this module only names the queries and fixes their row contracts.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::{Error, Result};

/// Identifies one catalog query. The kebab-case form is the URL slug, e.g.
/// `top-earners`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
  Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum QueryId {
  TopEarners,
  EmployeeHierarchy,
  DepartmentStats,
  RegionCountry,
  JobMobility,
  ManagerSalaryImpact,
  LongTenureLowSalary,
  PromotionPatterns,
  OverlappingJobs,
  JobRolesByRegion,
  EmployeeTurnover,
  HiringTrends,
  SalaryPercentiles,
  NoRecentChanges,
  SalaryBudget,
  DepartmentPath,
  HighCommission,
  JobTransitions,
  DiverseJobRoles,
  ManagerWorkload,
}

impl QueryId {
  pub fn all() -> impl Iterator<Item = QueryId> { Self::iter() }

  /// Parse a URL slug.
  pub fn from_slug(slug: &str) -> Result<Self> {
    slug.parse().map_err(|_| Error::UnknownQuery(slug.to_owned()))
  }

  pub fn slug(self) -> &'static str { self.into() }

  /// Number of columns every row of this query carries.
  pub fn arity(self) -> usize {
    match self {
      QueryId::TopEarners => 5,
      QueryId::EmployeeHierarchy => 5,
      QueryId::DepartmentStats => 7,
      QueryId::RegionCountry => 5,
      QueryId::JobMobility => 4,
      QueryId::ManagerSalaryImpact => 5,
      QueryId::LongTenureLowSalary => 6,
      QueryId::PromotionPatterns => 6,
      QueryId::OverlappingJobs => 10,
      QueryId::JobRolesByRegion => 2,
      QueryId::EmployeeTurnover => 2,
      QueryId::HiringTrends => 3,
      QueryId::SalaryPercentiles => 4,
      QueryId::NoRecentChanges => 5,
      QueryId::SalaryBudget => 4,
      QueryId::DepartmentPath => 2,
      QueryId::HighCommission => 6,
      QueryId::JobTransitions => 3,
      QueryId::DiverseJobRoles => 3,
      QueryId::ManagerWorkload => 4,
    }
  }

  pub fn title(self) -> &'static str {
    match self {
      QueryId::TopEarners => "Top Earners by Department",
      QueryId::EmployeeHierarchy => "Employee Reporting Hierarchy",
      QueryId::DepartmentStats => "Departmental Salary Statistics",
      QueryId::RegionCountry => "Employees by Region and Country",
      QueryId::JobMobility => "Employee Job Mobility",
      QueryId::ManagerSalaryImpact => "Team Salary by Manager",
      QueryId::LongTenureLowSalary => "Long Tenure, Low Salary",
      QueryId::PromotionPatterns => "Promotion Patterns",
      QueryId::OverlappingJobs => "Overlapping Job Assignments",
      QueryId::JobRolesByRegion => "Job Roles by Region",
      QueryId::EmployeeTurnover => "Turnover by Year",
      QueryId::HiringTrends => "Departmental Hiring Trends",
      QueryId::SalaryPercentiles => "Salary Percentiles",
      QueryId::NoRecentChanges => "Employees Without Role Changes",
      QueryId::SalaryBudget => "Salary Budget by Region",
      QueryId::DepartmentPath => "Department Location Paths",
      QueryId::HighCommission => "High Commission Impact",
      QueryId::JobTransitions => "Job Role Transitions",
      QueryId::DiverseJobRoles => "Departments with Diverse Roles",
      QueryId::ManagerWorkload => "Manager Workload",
    }
  }

  /// Name under which a rendered view receives this query's records.
  pub fn model_key(self) -> &'static str {
    match self {
      QueryId::TopEarners => "topEarners",
      QueryId::EmployeeHierarchy => "hierarchy",
      QueryId::DepartmentStats => "stats",
      QueryId::RegionCountry => "regionData",
      QueryId::JobMobility => "mobilityData",
      QueryId::ManagerSalaryImpact => "managerData",
      QueryId::LongTenureLowSalary => "tenureData",
      QueryId::PromotionPatterns => "promotionData",
      QueryId::OverlappingJobs => "overlapData",
      QueryId::JobRolesByRegion => "roleData",
      QueryId::EmployeeTurnover => "turnoverData",
      QueryId::HiringTrends => "hiringData",
      QueryId::SalaryPercentiles => "percentiles",
      QueryId::NoRecentChanges => "stagnantData",
      QueryId::SalaryBudget => "budgetData",
      QueryId::DepartmentPath => "pathData",
      QueryId::HighCommission => "commissionData",
      QueryId::JobTransitions => "transitionData",
      QueryId::DiverseJobRoles => "diverseData",
      QueryId::ManagerWorkload => "workloads",
    }
  }
}
