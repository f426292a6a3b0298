// src/model/line.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{lenient, parse_date};

/// One provider's quote for a game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineQuote {
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub over_under: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub home_moneyline: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub away_moneyline: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub spread_open: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub over_under_open: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Betting lines for one game, as `/lines` returns them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BettingLine {
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    pub game_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    pub season: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,

    #[serde(default, deserialize_with = "lenient::vec_of")]
    pub lines: Vec<LineQuote>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Dedup identity of a betting line across per-team responses.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineKey {
    pub game_id: Option<i64>,
    pub start_date: String,
    pub home_team: String,
    pub away_team: String,
    pub provider: String,
}

impl BettingLine {
    pub fn key(&self) -> LineKey {
        LineKey {
            game_id: self.game_id,
            start_date: self.start_date.clone().unwrap_or_default(),
            home_team: self.home_team.clone().unwrap_or_default(),
            away_team: self.away_team.clone().unwrap_or_default(),
            provider: self
                .primary()
                .and_then(|q| q.provider.clone())
                .unwrap_or_default(),
        }
    }

    /// The first provider's quote; charts read this one.
    pub fn primary(&self) -> Option<&LineQuote> {
        self.lines.first()
    }

    pub fn spread(&self) -> Option<f64> {
        self.primary().and_then(|q| q.spread)
    }

    pub fn over_under(&self) -> Option<f64> {
        self.primary().and_then(|q| q.over_under)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_date)
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home_team.as_deref() == Some(team) || self.away_team.as_deref() == Some(team)
    }

    pub fn total_score(&self) -> Option<u64> {
        Some(u64::from(self.home_score?) + u64::from(self.away_score?))
    }
}
