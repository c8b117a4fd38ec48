//! Handlers for `/analytics` pages.
//!
//! Each catalog query has one page at `/analytics/{slug}`. The page runs the
//! query on every request and hands the projected records to its view under
//! the query's model key.

use axum::extract::{Path, State};
use hr_core::{
  catalog::QueryId,
  records::{
    DepartmentPath, DepartmentStats, DiverseDepartment, HierarchyEntry, HighCommission,
    HiringTrend, JobMobility, JobTransition, LongTenureLowSalary, ManagerSalaryImpact,
    ManagerWorkload, OverlappingAssignment, PromotionPattern, RegionCountryRow,
    RegionJobRole, SalaryBudget, SalaryPercentile, StagnantEmployee, TopEarner,
    TurnoverYear,
  },
  report::{Report, project},
  store::HrStore,
};
use serde_json::json;

use crate::{
  AppState,
  error::{Error, Result},
  view::View,
};

const DASHBOARD_TOP_EARNERS: usize = 5;
const DASHBOARD_WORKLOADS: usize = 3;

/// Run the query behind `R` and project its rows.
pub async fn fetch<R: Report, S: HrStore>(store: &S) -> Result<Vec<R>> {
  let rows = store.run_query(R::QUERY).await.map_err(Error::store)?;
  Ok(project::<R>(&rows)?)
}

/// `GET /analytics`
pub async fn index() -> Result<View> {
  let reports: Vec<_> = QueryId::all()
    .map(|id| json!({ "slug": id.slug(), "title": id.title() }))
    .collect();
  View::new("analytics/index").with("reports", reports)
}

/// `GET /analytics/dashboard`
pub async fn dashboard<S: HrStore>(State(state): State<AppState<S>>) -> Result<View> {
  let store = &*state.store;
  let mut top_earners = fetch::<TopEarner, _>(store).await?;
  top_earners.truncate(DASHBOARD_TOP_EARNERS);
  let dept_stats = fetch::<DepartmentStats, _>(store).await?;
  let mut workloads = fetch::<ManagerWorkload, _>(store).await?;
  workloads.truncate(DASHBOARD_WORKLOADS);

  View::new("analytics/dashboard")
    .with("topEarners", top_earners)?
    .with("deptStats", dept_stats)?
    .with("managerWorkload", workloads)
}

/// `GET /analytics/{slug}`
pub async fn report<S: HrStore>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
) -> Result<View> {
  let id = QueryId::from_slug(&slug)?;
  let view = View::new(format!("analytics/{slug}")).with("title", id.title())?;
  let store = &*state.store;
  let key = id.model_key();

  match id {
    QueryId::TopEarners => view.with(key, fetch::<TopEarner, _>(store).await?),
    QueryId::EmployeeHierarchy => view.with(key, fetch::<HierarchyEntry, _>(store).await?),
    QueryId::DepartmentStats => view.with(key, fetch::<DepartmentStats, _>(store).await?),
    QueryId::RegionCountry => view.with(key, fetch::<RegionCountryRow, _>(store).await?),
    QueryId::JobMobility => view.with(key, fetch::<JobMobility, _>(store).await?),
    QueryId::ManagerSalaryImpact => {
      view.with(key, fetch::<ManagerSalaryImpact, _>(store).await?)
    }
    QueryId::LongTenureLowSalary => {
      view.with(key, fetch::<LongTenureLowSalary, _>(store).await?)
    }
    QueryId::PromotionPatterns => view.with(key, fetch::<PromotionPattern, _>(store).await?),
    QueryId::OverlappingJobs => {
      view.with(key, fetch::<OverlappingAssignment, _>(store).await?)
    }
    QueryId::JobRolesByRegion => view.with(key, fetch::<RegionJobRole, _>(store).await?),
    QueryId::EmployeeTurnover => view.with(key, fetch::<TurnoverYear, _>(store).await?),
    QueryId::HiringTrends => view.with(key, fetch::<HiringTrend, _>(store).await?),
    QueryId::SalaryPercentiles => view.with(key, fetch::<SalaryPercentile, _>(store).await?),
    QueryId::NoRecentChanges => view.with(key, fetch::<StagnantEmployee, _>(store).await?),
    QueryId::SalaryBudget => view.with(key, fetch::<SalaryBudget, _>(store).await?),
    QueryId::DepartmentPath => view.with(key, fetch::<DepartmentPath, _>(store).await?),
    QueryId::HighCommission => view.with(key, fetch::<HighCommission, _>(store).await?),
    QueryId::JobTransitions => view.with(key, fetch::<JobTransition, _>(store).await?),
    QueryId::DiverseJobRoles => view.with(key, fetch::<DiverseDepartment, _>(store).await?),
    QueryId::ManagerWorkload => view.with(key, fetch::<ManagerWorkload, _>(store).await?),
  }
}
