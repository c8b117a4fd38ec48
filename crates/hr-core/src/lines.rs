//! Reporting lines: the manager → subordinate direction of the
//! employee/manager relation.
//!
//! Employees only store the id of their manager. The reverse index is
//! rebuilt from a snapshot of employees whenever it is needed and never
//! written back, so there is nothing to keep in sync.

use std::collections::BTreeMap;

use crate::entity::Employee;

/// Direct reports keyed by manager id.
#[derive(Debug, Clone, Default)]
pub struct ReportingLines {
  by_manager: BTreeMap<i64, Vec<i64>>,
}

impl ReportingLines {
  /// Build the index from a snapshot of employees. Subordinate ids are kept
  /// in ascending order.
  pub fn from_employees<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> Self {
    let mut by_manager: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
    for employee in employees {
      if let Some(manager_id) = employee.manager_id {
        by_manager.entry(manager_id).or_default().push(employee.employee_id);
      }
    }
    for ids in by_manager.values_mut() {
      ids.sort_unstable();
    }
    Self { by_manager }
  }

  pub fn direct_reports(&self, manager_id: i64) -> &[i64] {
    self
      .by_manager
      .get(&manager_id)
      .map(Vec::as_slice)
      .unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn employee(id: i64, manager_id: Option<i64>) -> Employee {
    Employee {
      employee_id: id,
      first_name: format!("E{id}"),
      last_name: "Test".into(),
      email: format!("e{id}@example.com"),
      phone_number: None,
      hire_date: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
      salary: 1000.0,
      commission_pct: None,
      job_id: None,
      department_id: None,
      manager_id,
    }
  }

  #[test]
  fn direct_reports_are_sorted_and_scoped() {
    let staff = vec![
      employee(1, None),
      employee(4, Some(1)),
      employee(2, Some(1)),
      employee(3, Some(2)),
    ];
    let lines = ReportingLines::from_employees(&staff);

    assert_eq!(lines.direct_reports(1), &[2, 4]);
    assert_eq!(lines.direct_reports(2), &[3]);
    assert!(lines.direct_reports(3).is_empty());
  }
}
