//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use hr_core::{
  catalog::QueryId,
  entity::{NewDepartment, NewEmployee, NewJob, NewJobHistory},
  lines::ReportingLines,
  records::*,
  report::{Report, project},
  store::{HrStore, Page},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

async fn seeded() -> SqliteStore {
  let s = store().await;
  assert!(s.seed_demo().await.unwrap());
  s
}

async fn report<R: Report>(s: &SqliteStore) -> Vec<R> {
  let rows = s.run_query(R::QUERY).await.unwrap();
  project(&rows).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

fn new_employee(last_name: &str, salary: f64) -> NewEmployee {
  NewEmployee {
    first_name:     "Test".into(),
    last_name:      last_name.into(),
    email:          format!("{}@example.com", last_name.to_lowercase()),
    phone_number:   None,
    hire_date:      date(2010, 4, 1),
    salary,
    commission_pct: None,
    job_id:         None,
    department_id:  None,
    manager_id:     None,
  }
}

fn department(name: &str) -> NewDepartment {
  NewDepartment {
    department_name: name.into(),
    manager_id:      None,
    location_id:     None,
  }
}

fn job(id: &str) -> NewJob {
  NewJob {
    job_id:     id.into(),
    job_title:  format!("{id} title"),
    min_salary: 1000.0,
    max_salary: 9000.0,
  }
}

fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-6 }

// ─── Employees ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn employee_round_trips_scalars_and_relations() {
  let s = store().await;
  let dept = s.add_department(department("Research")).await.unwrap();
  s.add_job(job("RS_SCI")).await.unwrap();
  let boss = s.add_employee(new_employee("Boss", 9000.0)).await.unwrap();

  let mut input = new_employee("Lovelace", 5000.0);
  input.phone_number = Some("555.0100".into());
  input.commission_pct = Some(0.15);
  input.job_id = Some("RS_SCI".into());
  input.department_id = Some(dept.department_id);
  input.manager_id = Some(boss.employee_id);

  let added = s.add_employee(input).await.unwrap();
  let fetched = s.get_employee(added.employee_id).await.unwrap().unwrap();

  assert_eq!(fetched, added);
  assert_eq!(fetched.last_name, "Lovelace");
  assert_eq!(fetched.hire_date, date(2010, 4, 1));
  assert_eq!(fetched.phone_number.as_deref(), Some("555.0100"));
  assert_eq!(fetched.commission_pct, Some(0.15));
  assert_eq!(fetched.job_id.as_deref(), Some("RS_SCI"));
  assert_eq!(fetched.department_id, Some(dept.department_id));
  assert_eq!(fetched.manager_id, Some(boss.employee_id));
}

#[tokio::test]
async fn get_employee_missing_returns_none() {
  let s = store().await;
  assert!(s.get_employee(999).await.unwrap().is_none());
}

#[tokio::test]
async fn unknown_relation_ids_are_stored_as_null() {
  let s = store().await;
  let mut input = new_employee("Orphan", 3000.0);
  input.job_id = Some("NO_SUCH".into());
  input.department_id = Some(404);
  input.manager_id = Some(12345);

  let added = s.add_employee(input).await.unwrap();
  assert_eq!(added.job_id, None);
  assert_eq!(added.department_id, None);
  assert_eq!(added.manager_id, None);

  let fetched = s.get_employee(added.employee_id).await.unwrap().unwrap();
  assert_eq!(fetched.manager_id, None);
}

#[tokio::test]
async fn duplicate_email_is_an_integrity_error() {
  let s = store().await;
  s.add_employee(new_employee("Twin", 1000.0)).await.unwrap();
  let err = s.add_employee(new_employee("Twin", 2000.0)).await.unwrap_err();
  assert!(matches!(err, Error::Integrity(msg) if msg.contains("UNIQUE")));
}

#[tokio::test]
async fn update_replaces_fields() {
  let s = store().await;
  let added = s.add_employee(new_employee("Before", 1000.0)).await.unwrap();

  let mut input = new_employee("After", 2500.0);
  input.commission_pct = Some(0.2);
  let updated = s
    .update_employee(added.employee_id, input)
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.last_name, "After");
  let fetched = s.get_employee(added.employee_id).await.unwrap().unwrap();
  assert_eq!(fetched.salary, 2500.0);
  assert_eq!(fetched.commission_pct, Some(0.2));
}

#[tokio::test]
async fn update_missing_employee_returns_none() {
  let s = store().await;
  let result = s.update_employee(77, new_employee("Ghost", 1.0)).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn self_management_is_rejected_by_the_store() {
  let s = store().await;
  let added = s.add_employee(new_employee("Loop", 1000.0)).await.unwrap();
  let mut input = new_employee("Loop", 1000.0);
  input.manager_id = Some(added.employee_id);

  let err = s.update_employee(added.employee_id, input).await.unwrap_err();
  assert!(matches!(err, Error::Integrity(_)));
}

#[tokio::test]
async fn deleting_a_manager_detaches_subordinates_and_departments() {
  let s = store().await;
  let boss = s.add_employee(new_employee("Boss", 9000.0)).await.unwrap();

  let mut report = new_employee("Report", 4000.0);
  report.manager_id = Some(boss.employee_id);
  let report = s.add_employee(report).await.unwrap();

  let mut dept = department("Ops");
  dept.manager_id = Some(boss.employee_id);
  let dept = s.add_department(dept).await.unwrap();
  assert_eq!(dept.manager_id, Some(boss.employee_id));

  assert!(s.delete_employee(boss.employee_id).await.unwrap());

  let report = s.get_employee(report.employee_id).await.unwrap().unwrap();
  assert_eq!(report.manager_id, None);
  let dept = s.get_department(dept.department_id).await.unwrap().unwrap();
  assert_eq!(dept.manager_id, None);
}

#[tokio::test]
async fn deleting_an_employee_with_history_fails() {
  let s = store().await;
  let e = s.add_employee(new_employee("Veteran", 5000.0)).await.unwrap();
  s.record_job_history(NewJobHistory {
    employee_id:   e.employee_id,
    start_date:    date(2001, 1, 1),
    end_date:      date(2002, 1, 1),
    job_id:        None,
    department_id: None,
  })
  .await
  .unwrap();

  let err = s.delete_employee(e.employee_id).await.unwrap_err();
  assert!(matches!(err, Error::Integrity(_)));
  assert!(s.get_employee(e.employee_id).await.unwrap().is_some());
}

#[tokio::test]
async fn delete_missing_employee_returns_false() {
  let s = store().await;
  assert!(!s.delete_employee(5).await.unwrap());
}

#[tokio::test]
async fn list_employees_pages_by_id() {
  let s = store().await;
  for i in 0..5 {
    s.add_employee(new_employee(&format!("Person{i}"), 1000.0)).await.unwrap();
  }

  let first = s.list_employees(Page { number: 0, size: 2 }).await.unwrap();
  let last = s.list_employees(Page { number: 2, size: 2 }).await.unwrap();
  assert_eq!(first.len(), 2);
  assert_eq!(last.len(), 1);
  assert!(first[0].employee_id < first[1].employee_id);
  assert_eq!(last[0].last_name, "Person4");
}

#[tokio::test]
async fn out_of_range_pages_clamp_instead_of_wrapping() {
  let s = seeded().await;

  let beyond = Page { number: usize::MAX / 2, size: 5 };
  assert!(s.list_employees(beyond).await.unwrap().is_empty());

  let everything = Page { number: 0, size: usize::MAX };
  assert_eq!(s.list_employees(everything).await.unwrap().len(), 16);
}

#[tokio::test]
async fn reporting_lines_from_seeded_employees() {
  let s = seeded().await;
  let lines = ReportingLines::from_employees(&s.all_employees().await.unwrap());
  assert_eq!(lines.direct_reports(100), &[101, 102, 145, 146]);
  assert_eq!(lines.direct_reports(103), &[104, 105, 106, 107]);
  assert!(lines.direct_reports(104).is_empty());
}

// ─── Departments and jobs ────────────────────────────────────────────────────

#[tokio::test]
async fn department_crud() {
  let s = seeded().await;
  let mut input = department("Legal");
  input.location_id = Some(2500);
  let added = s.add_department(input).await.unwrap();
  assert_eq!(added.location_id, Some(2500));

  let mut renamed = department("Legal Affairs");
  renamed.location_id = Some(9999);
  let updated = s
    .update_department(added.department_id, renamed)
    .await
    .unwrap()
    .unwrap();
  assert_eq!(updated.department_name, "Legal Affairs");
  assert_eq!(updated.location_id, None);

  assert!(s.delete_department(added.department_id).await.unwrap());
  assert!(s.get_department(added.department_id).await.unwrap().is_none());
}

#[tokio::test]
async fn deleting_a_staffed_department_fails() {
  let s = seeded().await;
  let err = s.delete_department(20).await.unwrap_err();
  assert!(matches!(err, Error::Integrity(_)));
}

#[tokio::test]
async fn job_crud() {
  let s = store().await;
  s.add_job(job("QA_ENG")).await.unwrap();
  assert!(matches!(
    s.add_job(job("QA_ENG")).await.unwrap_err(),
    Error::Integrity(_)
  ));

  let mut input = job("ignored");
  input.job_title = "Quality Engineer".into();
  let updated = s.update_job("QA_ENG", input).await.unwrap().unwrap();
  assert_eq!(updated.job_id, "QA_ENG");
  assert_eq!(
    s.get_job("QA_ENG").await.unwrap().unwrap().job_title,
    "Quality Engineer"
  );

  assert!(s.delete_job("QA_ENG").await.unwrap());
  assert!(s.list_jobs().await.unwrap().is_empty());
}

#[tokio::test]
async fn inverted_salary_band_is_rejected_by_the_store() {
  let s = store().await;
  let mut input = job("BAD");
  input.min_salary = 10.0;
  input.max_salary = 5.0;
  assert!(matches!(s.add_job(input).await.unwrap_err(), Error::Integrity(_)));
}

#[tokio::test]
async fn locations_are_listed_and_fetched() {
  let s = seeded().await;
  assert_eq!(s.list_locations().await.unwrap().len(), 5);
  let oxford = s.get_location(2500).await.unwrap().unwrap();
  assert_eq!(oxford.city, "Oxford");
  assert_eq!(oxford.country_id.as_deref(), Some("UK"));
}

// ─── Job history ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn job_history_is_listed_in_start_order() {
  let s = seeded().await;
  let history = s.job_history_for(101).await.unwrap();
  assert_eq!(history.len(), 2);
  assert_eq!(history[0].job_id.as_deref(), Some("AC_ACCOUNT"));
  assert!(history[0].start_date < history[1].start_date);
}

#[tokio::test]
async fn job_history_is_append_only() {
  let s = seeded().await;
  let attempt = s
    .conn
    .call(|conn| {
      conn.execute("DELETE FROM job_history WHERE employee_id = 101", [])?;
      Ok(())
    })
    .await;
  let err = Error::from(attempt.unwrap_err());
  assert!(matches!(err, Error::Integrity(msg) if msg.contains("append-only")));
  assert_eq!(s.job_history_for(101).await.unwrap().len(), 2);
}

#[tokio::test]
async fn same_day_history_for_one_employee_is_rejected() {
  let s = seeded().await;
  let err = s
    .record_job_history(NewJobHistory {
      employee_id:   101,
      start_date:    date(1997, 9, 21),
      end_date:      date(1998, 1, 1),
      job_id:        Some("AC_MGR".into()),
      department_id: Some(40),
    })
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Integrity(_)));
}

#[tokio::test]
async fn history_for_unknown_employee_is_rejected() {
  let s = store().await;
  let err = s
    .record_job_history(NewJobHistory {
      employee_id:   4242,
      start_date:    date(2001, 1, 1),
      end_date:      date(2002, 1, 1),
      job_id:        None,
      department_id: None,
    })
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Integrity(_)));
}

// ─── Diagnostics ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn seed_keeps_existing_reference_rows() {
  let s = store().await;
  s.add_job(job("AD_PRES")).await.unwrap();

  assert!(s.seed_demo().await.unwrap());
  assert_eq!(s.get_job("AD_PRES").await.unwrap().unwrap().job_title, "AD_PRES title");

  let counts = s.table_counts().await.unwrap();
  assert_eq!(counts.employee_count, 16);
  assert_eq!(counts.job_count, 9);
}

#[tokio::test]
async fn table_counts_and_idempotent_seed() {
  let s = seeded().await;
  let counts = s.table_counts().await.unwrap();
  assert_eq!(counts.employee_count, 16);
  assert_eq!(counts.department_count, 6);
  assert_eq!(counts.job_count, 9);
  assert!(!s.seed_demo().await.unwrap());
}

// ─── Catalog queries ─────────────────────────────────────────────────────────

#[tokio::test]
async fn every_query_projects_on_an_empty_store() {
  let s = store().await;
  for id in QueryId::all() {
    let rows = s.run_query(id).await.unwrap();
    assert!(rows.is_empty(), "{id} returned rows on an empty store");
  }
}

#[tokio::test]
async fn every_query_projects_on_seeded_data() {
  let s = seeded().await;
  assert!(!report::<TopEarner>(&s).await.is_empty());
  assert!(!report::<HierarchyEntry>(&s).await.is_empty());
  assert!(!report::<DepartmentStats>(&s).await.is_empty());
  assert!(!report::<RegionCountryRow>(&s).await.is_empty());
  assert!(!report::<JobMobility>(&s).await.is_empty());
  assert!(!report::<ManagerSalaryImpact>(&s).await.is_empty());
  assert!(!report::<LongTenureLowSalary>(&s).await.is_empty());
  assert!(!report::<PromotionPattern>(&s).await.is_empty());
  assert!(!report::<OverlappingAssignment>(&s).await.is_empty());
  assert!(!report::<RegionJobRole>(&s).await.is_empty());
  assert!(!report::<TurnoverYear>(&s).await.is_empty());
  assert!(!report::<HiringTrend>(&s).await.is_empty());
  assert!(!report::<SalaryPercentile>(&s).await.is_empty());
  assert!(!report::<StagnantEmployee>(&s).await.is_empty());
  assert!(!report::<SalaryBudget>(&s).await.is_empty());
  assert!(!report::<DepartmentPath>(&s).await.is_empty());
  assert!(!report::<HighCommission>(&s).await.is_empty());
  assert!(!report::<JobTransition>(&s).await.is_empty());
  assert!(!report::<DiverseDepartment>(&s).await.is_empty());
  assert!(!report::<ManagerWorkload>(&s).await.is_empty());
}

#[tokio::test]
async fn rows_carry_the_declared_arity() {
  let s = seeded().await;
  for id in QueryId::all() {
    for row in s.run_query(id).await.unwrap() {
      assert_eq!(row.len(), id.arity(), "{id}");
    }
  }
}

#[tokio::test]
async fn department_stats_over_a_known_fixture() {
  let s = store().await;
  let dept = s.add_department(department("Fixture")).await.unwrap();
  for (i, salary) in [1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6000.0].into_iter().enumerate() {
    let mut input = new_employee(&format!("Fixture{i}"), salary);
    input.department_id = Some(dept.department_id);
    s.add_employee(input).await.unwrap();
  }

  let stats = report::<DepartmentStats>(&s).await;
  assert_eq!(stats.len(), 1);
  let row = &stats[0];
  assert_eq!(row.department_name, "Fixture");
  assert_eq!(row.employee_count, 6);
  assert!(approx(row.avg_salary, 3500.0));
  assert!(approx(row.median_salary, 3500.0));
  assert!(approx(row.min_salary, 1000.0));
  assert!(approx(row.max_salary, 6000.0));
  assert!(approx(row.stddev_salary, 1870.83));
}

#[tokio::test]
async fn department_stats_only_cover_large_departments() {
  let s = seeded().await;
  let stats = report::<DepartmentStats>(&s).await;
  let names: Vec<_> = stats.iter().map(|r| r.department_name.as_str()).collect();
  assert_eq!(names, ["Sales", "IT"]);
  for row in &stats {
    assert_eq!(row.employee_count, 5);
    assert!(row.min_salary <= row.median_salary && row.median_salary <= row.max_salary);
  }
  assert!(approx(stats[1].median_salary, 4800.0));
}

#[tokio::test]
async fn top_earners_are_at_most_three_per_department() {
  let s = seeded().await;
  let earners = report::<TopEarner>(&s).await;
  assert_eq!(earners.len(), 12);

  for dept in ["Executive", "Finance", "IT", "Sales"] {
    let rows: Vec<_> = earners.iter().filter(|r| r.department_name == dept).collect();
    assert!(rows.len() <= 3);
    assert!(rows.windows(2).all(|w| w[0].total_compensation >= w[1].total_compensation));
  }

  let russell = earners.iter().find(|r| r.employee_name == "John Russell").unwrap();
  assert!(approx(russell.total_compensation, 19600.0));
  let king = earners.iter().find(|r| r.employee_name == "Steven King").unwrap();
  assert_eq!(king.commission_pct, 0.0);
}

#[tokio::test]
async fn hierarchy_is_depth_first_with_sorted_siblings() {
  let s = seeded().await;
  let tree = report::<HierarchyEntry>(&s).await;
  let names: Vec<_> = tree.iter().map(|r| r.employee_name.trim_start()).collect();
  assert_eq!(
    names,
    [
      "Steven King",
      "Lex De Haan",
      "Alexander Hunold",
      "David Austin",
      "Bruce Ernst",
      "Diana Lorentz",
      "Valli Pataballa",
      "Neena Kochhar",
      "Nancy Greenberg",
      "John Chen",
      "Daniel Faviet",
      "Karen Partners",
      "Peter Hall",
      "John Russell",
      "David Bernstein",
      "Peter Tucker",
    ]
  );

  let mut unique = names.clone();
  unique.sort();
  unique.dedup();
  assert_eq!(unique.len(), names.len());

  for row in &tree {
    let indent = row.employee_name.len() - row.employee_name.trim_start().len();
    assert_eq!(indent as i64, 2 * (row.hierarchy_level - 1));
  }
  assert_eq!(tree[3].hierarchy_level, 4);
}

#[tokio::test]
async fn hierarchy_levels_follow_managers() {
  let s = seeded().await;
  let employees = s.all_employees().await.unwrap();
  let tree = report::<HierarchyEntry>(&s).await;
  let level_of = |name: &str| {
    tree
      .iter()
      .find(|r| r.employee_name.trim_start() == name)
      .map(|r| r.hierarchy_level)
  };

  for e in &employees {
    let Some(level) = level_of(&e.full_name()) else { continue };
    match e.manager_id {
      None => assert_eq!(level, 1),
      Some(manager_id) => {
        let manager = employees.iter().find(|m| m.employee_id == manager_id).unwrap();
        assert_eq!(Some(level - 1), level_of(&manager.full_name()));
      }
    }
  }
}

#[tokio::test]
async fn region_rollup_has_subtotals_and_grand_total() {
  let s = seeded().await;
  let rows = report::<RegionCountryRow>(&s).await;
  let shape: Vec<_> = rows
    .iter()
    .map(|r| (r.region_name.as_deref(), r.country_name.as_deref(), r.employee_count))
    .collect();
  assert_eq!(
    shape,
    [
      (Some("Americas"), Some("United States of America"), 11),
      (Some("Americas"), None, 11),
      (Some("Europe"), Some("United Kingdom"), 5),
      (Some("Europe"), None, 5),
      (None, None, 16),
    ]
  );
  assert_eq!(rows[1].level(), RollupLevel::RegionSubtotal);
  assert_eq!(rows[4].level(), RollupLevel::GrandTotal);
}

#[tokio::test]
async fn salary_percentiles_rise_with_salary() {
  let s = seeded().await;
  let rows = report::<SalaryPercentile>(&s).await;
  assert!(rows.iter().all(|r| (0.0..=100.0).contains(&r.salary_percentile)));

  for dept in ["Executive", "Finance", "IT", "Sales"] {
    let mut rows: Vec<_> = rows.iter().filter(|r| r.department_name == dept).collect();
    rows.sort_by(|a, b| a.salary.total_cmp(&b.salary));
    assert!(rows.windows(2).all(|w| w[0].salary_percentile <= w[1].salary_percentile));
  }
}

#[tokio::test]
async fn department_paths_compose_region_country_city() {
  let s = seeded().await;
  let paths = report::<DepartmentPath>(&s).await;
  let names: Vec<_> = paths.iter().map(|p| p.department_name.as_str()).collect();
  assert_eq!(names, ["Executive", "Finance", "IT", "Marketing", "Sales"]);
  assert_eq!(paths[0].location_path, "Americas → United States of America → Seattle");
  assert_eq!(paths[4].location_path, "Europe → United Kingdom → Oxford");
}

#[tokio::test]
async fn salary_budget_pivots_fixed_departments() {
  let s = seeded().await;
  let budget = report::<SalaryBudget>(&s).await;
  assert_eq!(budget.len(), 2);
  assert_eq!(budget[0].region_name, "Americas");
  assert_eq!(budget[0].executive, Some(58000.0));
  assert_eq!(budget[0].sales, None);
  assert_eq!(budget[1].region_name, "Europe");
  assert_eq!(budget[1].sales, Some(56000.0));
  assert_eq!(budget[1].finance, None);
}

#[tokio::test]
async fn history_reports_follow_start_dates() {
  let s = seeded().await;

  let promotions = report::<PromotionPattern>(&s).await;
  assert_eq!(promotions.len(), 2);
  assert_eq!(promotions[0].employee_name, "Neena Kochhar");
  assert!(approx(promotions[0].salary_increase_pct.unwrap(), 77.78));

  let overlaps = report::<OverlappingAssignment>(&s).await;
  assert_eq!(overlaps.len(), 1);
  assert_eq!(overlaps[0].employee_id, 110);
  assert_eq!(overlaps[0].job1_id, "AC_ACCOUNT");
  assert_eq!(overlaps[0].job2_start, date(2003, 1, 1));

  let mobility = report::<JobMobility>(&s).await;
  assert_eq!(mobility.len(), 3);
  let kochhar = mobility.iter().find(|m| m.employee_name == "Neena Kochhar").unwrap();
  assert_eq!(kochhar.job_titles, "Public Accountant, Accounting Manager");

  let transitions = report::<JobTransition>(&s).await;
  assert_eq!(transitions.len(), 3);
  assert!(transitions.iter().all(|t| t.transition_count == 1));

  let turnover = report::<TurnoverYear>(&s).await;
  let years: Vec<_> = turnover.iter().map(|t| (t.turnover_year, t.turnover_count)).collect();
  assert_eq!(years, [(1998, 1), (2001, 2), (2003, 1), (2004, 1), (2005, 2)]);
}

#[tokio::test]
async fn diverse_roles_list_every_employee_title() {
  let s = seeded().await;
  let rows = report::<DiverseDepartment>(&s).await;
  let sales = rows.iter().find(|r| r.department_name == "Sales").unwrap();
  assert_eq!(sales.unique_job_count, 2);
  assert_eq!(
    sales.job_titles,
    "Sales Manager, Sales Manager, Sales Representative, Sales Representative, \
     Sales Representative"
  );
}

#[tokio::test]
async fn commission_and_workload_reports() {
  let s = seeded().await;

  let commissions = report::<HighCommission>(&s).await;
  assert_eq!(commissions.len(), 3);
  assert_eq!(commissions[0].employee_name, "John Russell");
  assert_eq!(commissions[0].commission_percentage, Some(40.0));

  let workload = report::<ManagerWorkload>(&s).await;
  assert_eq!(workload[0].manager_name, "Steven King");
  assert_eq!(workload[0].direct_reports, 4);
  assert!(workload.windows(2).all(|w| w[0].direct_reports >= w[1].direct_reports));
}

#[tokio::test]
async fn high_commission_filters_on_the_rate_alone() {
  let s = store().await;
  s.add_job(job("SA_REP")).await.unwrap();

  let mut unpaid = new_employee("Unpaid", 0.0);
  unpaid.commission_pct = Some(0.0);
  unpaid.job_id = Some("SA_REP".into());
  s.add_employee(unpaid).await.unwrap();

  let mut closer = new_employee("Closer", 1000.0);
  closer.commission_pct = Some(0.35);
  closer.job_id = Some("SA_REP".into());
  s.add_employee(closer).await.unwrap();

  let rows = report::<HighCommission>(&s).await;
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].employee_name, "Test Closer");
  assert!(approx(rows[0].commission_amount, 350.0));
}

#[tokio::test]
async fn tenure_reports_only_list_long_serving_staff() {
  let s = seeded().await;

  for row in report::<LongTenureLowSalary>(&s).await {
    assert!(row.years_of_service > 5.0);
    assert!(row.salary <= row.median_salary);
  }

  let stagnant = report::<StagnantEmployee>(&s).await;
  assert!(stagnant.iter().all(|r| r.years_of_service > 5.0));
  assert!(stagnant.iter().all(|r| ![101, 102, 110, 145].contains(&r.employee_id)));
}
