//! Statistical and date functions the catalog SQL relies on but SQLite does
//! not ship: `median(x)`, `stddev(x)` and `months_between(d1, d2)`.
//!
//! They are registered on the connection before the schema runs, so every
//! statement prepared afterwards can use them.

use chrono::{Datelike, NaiveDate};
use rusqlite::{
  Connection,
  functions::{Aggregate, Context, FunctionFlags},
};

/// Register every custom function on `conn`.
pub fn register(conn: &Connection) -> rusqlite::Result<()> {
  let flags = FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC;
  conn.create_aggregate_function("median", 1, flags, Median)?;
  conn.create_aggregate_function("stddev", 1, flags, StdDev)?;
  conn.create_scalar_function("months_between", 2, flags, months_between_sql)?;
  Ok(())
}

// ─── Pure implementations ────────────────────────────────────────────────────

/// Interpolated median: the middle value, or the mean of the two middle
/// values for an even count. `None` for no values.
pub fn median(values: &mut [f64]) -> Option<f64> {
  if values.is_empty() {
    return None;
  }
  values.sort_by(f64::total_cmp);
  let mid = values.len() / 2;
  if values.len() % 2 == 1 {
    Some(values[mid])
  } else {
    Some((values[mid - 1] + values[mid]) / 2.0)
  }
}

/// Sample standard deviation (n − 1 denominator). A single value has a
/// deviation of zero.
pub fn sample_stddev(values: &[f64]) -> Option<f64> {
  match values.len() {
    0 => None,
    1 => Some(0.0),
    n => {
      let mean = values.iter().sum::<f64>() / n as f64;
      let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
      Some((squares / (n - 1) as f64).sqrt())
    }
  }
}

/// Months from `earlier` to `later`, negative when `later` precedes it.
///
/// Whole when both dates fall on the same day of the month or both on the
/// last day of their months; otherwise the day difference counts in 31sts
/// of a month.
pub fn months_between(later: NaiveDate, earlier: NaiveDate) -> f64 {
  let months = (later.year() - earlier.year()) * 12 + later.month() as i32
    - earlier.month() as i32;
  if later.day() == earlier.day() || (is_month_end(later) && is_month_end(earlier)) {
    months as f64
  } else {
    months as f64 + (later.day() as f64 - earlier.day() as f64) / 31.0
  }
}

fn is_month_end(date: NaiveDate) -> bool {
  date.succ_opt().is_none_or(|next| next.month() != date.month())
}

// ─── SQLite glue ─────────────────────────────────────────────────────────────

struct Median;

impl Aggregate<Vec<f64>, Option<f64>> for Median {
  fn init(&self, _: &mut Context<'_>) -> rusqlite::Result<Vec<f64>> { Ok(Vec::new()) }

  fn step(&self, ctx: &mut Context<'_>, acc: &mut Vec<f64>) -> rusqlite::Result<()> {
    if let Some(v) = ctx.get::<Option<f64>>(0)? {
      acc.push(v);
    }
    Ok(())
  }

  fn finalize(&self, _: &mut Context<'_>, acc: Option<Vec<f64>>) -> rusqlite::Result<Option<f64>> {
    Ok(acc.and_then(|mut values| median(&mut values)))
  }
}

struct StdDev;

impl Aggregate<Vec<f64>, Option<f64>> for StdDev {
  fn init(&self, _: &mut Context<'_>) -> rusqlite::Result<Vec<f64>> { Ok(Vec::new()) }

  fn step(&self, ctx: &mut Context<'_>, acc: &mut Vec<f64>) -> rusqlite::Result<()> {
    if let Some(v) = ctx.get::<Option<f64>>(0)? {
      acc.push(v);
    }
    Ok(())
  }

  fn finalize(&self, _: &mut Context<'_>, acc: Option<Vec<f64>>) -> rusqlite::Result<Option<f64>> {
    Ok(acc.and_then(|values| sample_stddev(&values)))
  }
}

fn months_between_sql(ctx: &Context<'_>) -> rusqlite::Result<Option<f64>> {
  let later: Option<String> = ctx.get(0)?;
  let earlier: Option<String> = ctx.get(1)?;
  match (later, earlier) {
    (Some(later), Some(earlier)) => Ok(Some(months_between(parse(&later)?, parse(&earlier)?))),
    _ => Ok(None),
  }
}

/// Accepts plain dates and the `YYYY-MM-DD HH:MM:SS` form of `datetime()`.
fn parse(text: &str) -> rusqlite::Result<NaiveDate> {
  let date = text.get(..10).unwrap_or(text);
  NaiveDate::parse_from_str(date, "%Y-%m-%d")
    .map_err(|e| rusqlite::Error::UserFunctionError(Box::new(e)))
}
