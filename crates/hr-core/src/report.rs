//! Report projection: raw positional rows into typed records.
//!
//! A backend executes a catalog query and hands back [`RawRow`]s: ordered,
//! loosely typed column values. [`project`] turns them into the query's
//! record type. Projection only narrows types by column position; it never
//! reorders, filters or computes. Any mismatch with the declared contract is
//! an error for the whole result set.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{Error, Result, catalog::QueryId};

// ─── Raw values ──────────────────────────────────────────────────────────────

/// A single column value as the store returned it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
  Null,
  Integer(i64),
  Real(f64),
  Text(String),
}

impl Value {
  pub fn type_name(&self) -> &'static str {
    match self {
      Value::Null => "null",
      Value::Integer(_) => "integer",
      Value::Real(_) => "real",
      Value::Text(_) => "text",
    }
  }
}

/// One result row, addressed by column position only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawRow(pub Vec<Value>);

impl RawRow {
  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn expect_arity(&self, expected: usize) -> Result<()> {
    if self.len() == expected {
      Ok(())
    } else {
      Err(Error::Arity { expected, found: self.len() })
    }
  }

  fn column(&self, column: usize) -> Result<&Value> {
    self.0.get(column).ok_or(Error::Arity {
      expected: column + 1,
      found:    self.len(),
    })
  }

  fn mismatch(&self, column: usize, expected: &'static str) -> Error {
    let found = self.0.get(column).map(Value::type_name).unwrap_or("nothing");
    Error::ColumnType { column, expected, found }
  }

  pub fn opt_text(&self, column: usize) -> Result<Option<String>> {
    match self.column(column)? {
      Value::Null => Ok(None),
      Value::Text(s) => Ok(Some(s.clone())),
      _ => Err(self.mismatch(column, "text")),
    }
  }

  pub fn text(&self, column: usize) -> Result<String> {
    self
      .opt_text(column)?
      .ok_or_else(|| self.mismatch(column, "text"))
  }

  /// Integers widen to decimals; SQL aggregates over whole numbers return
  /// them.
  pub fn opt_decimal(&self, column: usize) -> Result<Option<f64>> {
    match self.column(column)? {
      Value::Null => Ok(None),
      Value::Integer(i) => Ok(Some(*i as f64)),
      Value::Real(r) => Ok(Some(*r)),
      _ => Err(self.mismatch(column, "decimal")),
    }
  }

  pub fn decimal(&self, column: usize) -> Result<f64> {
    self
      .opt_decimal(column)?
      .ok_or_else(|| self.mismatch(column, "decimal"))
  }

  /// A real with no fractional part narrows to an integer.
  pub fn integer(&self, column: usize) -> Result<i64> {
    match self.column(column)? {
      Value::Integer(i) => Ok(*i),
      Value::Real(r) if r.fract() == 0.0 => Ok(*r as i64),
      _ => Err(self.mismatch(column, "integer")),
    }
  }

  /// ISO-8601 `YYYY-MM-DD` text.
  pub fn date(&self, column: usize) -> Result<NaiveDate> {
    let text = self.text(column)?;
    NaiveDate::parse_from_str(&text, "%Y-%m-%d")
      .map_err(|_| Error::ColumnDate { column, value: text })
  }
}

// ─── Projection ──────────────────────────────────────────────────────────────

/// A typed record produced by exactly one catalog query.
pub trait Report: Sized + Serialize {
  const QUERY: QueryId;

  /// Build a record from a row whose arity has already been checked.
  fn from_row(row: &RawRow) -> Result<Self>;
}

/// Project a whole result set into `R`, failing on the first row that does
/// not match the contract of `R::QUERY`.
pub fn project<R: Report>(rows: &[RawRow]) -> Result<Vec<R>> {
  let arity = R::QUERY.arity();
  rows
    .iter()
    .map(|row| {
      row.expect_arity(arity)?;
      R::from_row(row)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::records::{DepartmentStats, RegionCountryRow, RollupLevel, TopEarner};

  fn text(s: &str) -> Value { Value::Text(s.into()) }

  #[test]
  fn projects_top_earner_by_position() {
    let rows = vec![RawRow(vec![
      text("Sales"),
      text("John Russell"),
      Value::Real(14000.0),
      Value::Real(0.4),
      Value::Real(19600.0),
    ])];
    let earners: Vec<TopEarner> = project(&rows).unwrap();
    assert_eq!(earners[0].department_name, "Sales");
    assert_eq!(earners[0].employee_name, "John Russell");
    assert_eq!(earners[0].total_compensation, 19600.0);
  }

  #[test]
  fn integer_columns_widen_to_decimal() {
    let rows = vec![RawRow(vec![
      text("IT"),
      Value::Integer(5),
      Value::Real(5760.0),
      Value::Integer(4800),
      Value::Integer(4200),
      Value::Integer(9000),
      Value::Real(1884.94),
    ])];
    let stats: Vec<DepartmentStats> = project(&rows).unwrap();
    assert_eq!(stats[0].employee_count, 5);
    assert_eq!(stats[0].median_salary, 4800.0);
  }

  #[test]
  fn wrong_arity_is_fatal() {
    let rows = vec![RawRow(vec![text("Sales"), text("John Russell")])];
    let err = project::<TopEarner>(&rows).unwrap_err();
    assert!(matches!(err, Error::Arity { expected: 5, found: 2 }));
  }

  #[test]
  fn wrong_type_is_fatal() {
    let rows = vec![RawRow(vec![
      text("Sales"),
      text("John Russell"),
      text("lots"),
      Value::Real(0.4),
      Value::Real(19600.0),
    ])];
    let err = project::<TopEarner>(&rows).unwrap_err();
    assert!(matches!(
      err,
      Error::ColumnType { column: 2, expected: "decimal", found: "text" }
    ));
  }

  #[test]
  fn null_in_required_column_is_fatal() {
    let rows = vec![RawRow(vec![
      Value::Null,
      text("John Russell"),
      Value::Real(14000.0),
      Value::Real(0.4),
      Value::Real(19600.0),
    ])];
    assert!(project::<TopEarner>(&rows).is_err());
  }

  #[test]
  fn rollup_levels_follow_null_keys() {
    let row = |region: Value, country: Value| {
      RawRow(vec![
        region,
        country,
        Value::Integer(3),
        Value::Real(9000.0),
        Value::Real(3000.0),
      ])
    };
    let rows = vec![
      row(text("Europe"), text("United Kingdom")),
      row(text("Europe"), Value::Null),
      row(Value::Null, Value::Null),
    ];
    let levels: Vec<RollupLevel> = project::<RegionCountryRow>(&rows)
      .unwrap()
      .iter()
      .map(RegionCountryRow::level)
      .collect();
    assert_eq!(
      levels,
      vec![RollupLevel::Country, RollupLevel::RegionSubtotal, RollupLevel::GrandTotal]
    );
  }

  #[test]
  fn whole_reals_narrow_to_integers_but_fractions_do_not() {
    let row = RawRow(vec![Value::Real(2004.0), Value::Real(2.5)]);
    assert_eq!(row.integer(0).unwrap(), 2004);
    assert!(row.integer(1).is_err());
  }

  #[test]
  fn dates_parse_from_iso_text() {
    let row = RawRow(vec![text("2005-09-21"), text("21/09/2005")]);
    assert_eq!(row.date(0).unwrap(), NaiveDate::from_ymd_opt(2005, 9, 21).unwrap());
    assert!(matches!(row.date(1), Err(Error::ColumnDate { column: 1, .. })));
  }
}
