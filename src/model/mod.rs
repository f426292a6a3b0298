// src/model/mod.rs
//
// Records as the API delivers them. Every record keeps keys it does not
// model in `extra`, so files written by the collector hold the full payload.

use chrono::{DateTime, NaiveDate};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod lenient;

mod game;
mod line;
mod ratings;
mod stats;
mod summary;
mod team;

pub use game::{Game, Outcome, Side};
pub use line::{BettingLine, LineKey, LineQuote};
pub use ratings::{AdjustedRating, RatingSet, SrsRating, TeamRatings};
pub use stats::{FourFactors, Points, Rebounds, Record, Shooting, TeamSeasonStats, Turnovers, UnitStats};
pub use summary::{Completeness, DatasetCounts, Summary};
pub use team::Team;

/// Accepts RFC 3339 timestamps ("2024-11-04T23:30:00.000Z") or a bare
/// "YYYY-MM-DD" prefix.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    s.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

/// Decode a JSON array record by record. Elements that do not fit `T` are
/// dropped and counted instead of failing the whole array.
pub fn records_from_value<T: DeserializeOwned>(value: Value) -> Result<(Vec<T>, usize), String> {
    let Value::Array(items) = value else {
        return Err(format!("expected a JSON array, found {}", kind_of(&value)));
    };
    let mut out = Vec::with_capacity(items.len());
    let mut skipped = 0;
    for item in items {
        match serde_json::from_value::<T>(item) {
            Ok(rec) => out.push(rec),
            Err(_) => skipped += 1,
        }
    }
    Ok((out, skipped))
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
