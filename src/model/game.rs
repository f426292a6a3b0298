// src/model/game.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{lenient, parse_date};

/// One contest between two teams.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    pub season: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    pub home_team_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    pub home_points: Option<u32>,

    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    pub away_team_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    pub away_points: Option<u32>,

    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_bool", skip_serializing_if = "Option::is_none")]
    pub neutral_site: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Game {
    pub fn date(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_date)
    }

    /// Both scores, or None when either is missing.
    pub fn scores(&self) -> Option<(u32, u32)> {
        Some((self.home_points?, self.away_points?))
    }

    /// Widened so two out-of-range scores still add up.
    pub fn total_points(&self) -> Option<u64> {
        self.scores().map(|(h, a)| u64::from(h) + u64::from(a))
    }

    /// Home minus away.
    pub fn differential(&self) -> Option<i64> {
        self.scores().map(|(h, a)| h as i64 - a as i64)
    }

    pub fn side_of(&self, team: &str) -> Option<Side> {
        if self.home_team.as_deref() == Some(team) {
            Some(Side::Home)
        } else if self.away_team.as_deref() == Some(team) {
            Some(Side::Away)
        } else {
            None
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.side_of(team).is_some()
    }

    pub fn points_for(&self, team: &str) -> Option<u32> {
        match self.side_of(team)? {
            Side::Home => self.home_points,
            Side::Away => self.away_points,
        }
    }

    /// `team` score minus opponent score.
    pub fn margin_for(&self, team: &str) -> Option<i64> {
        let (h, a) = self.scores()?;
        match self.side_of(team)? {
            Side::Home => Some(h as i64 - a as i64),
            Side::Away => Some(a as i64 - h as i64),
        }
    }

    pub fn outcome_for(&self, team: &str) -> Option<Outcome> {
        let m = self.margin_for(team)?;
        Some(match m.signum() {
            1 => Outcome::Win,
            -1 => Outcome::Loss,
            _ => Outcome::Tie,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn game(v: Value) -> Game {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn perspective_helpers() {
        let g = game(json!({
            "id": 7, "homeTeam": "Duke", "awayTeam": "UNC",
            "homePoints": 80, "awayPoints": 72, "startDate": "2025-03-08T23:30:00.000Z"
        }));
        assert_eq!(g.side_of("UNC"), Some(Side::Away));
        assert_eq!(g.points_for("UNC"), Some(72));
        assert_eq!(g.margin_for("UNC"), Some(-8));
        assert_eq!(g.outcome_for("Duke"), Some(Outcome::Win));
        assert_eq!(g.outcome_for("UNC"), Some(Outcome::Loss));
        assert_eq!(g.outcome_for("Kansas"), None);
        assert_eq!(g.total_points(), Some(152));
        assert_eq!(g.date(), NaiveDate::from_ymd_opt(2025, 3, 8));
    }

    #[test]
    fn missing_score_leaves_only_that_side() {
        let g = game(json!({"id": 8, "homeTeam": "Duke", "awayTeam": "UNC", "homePoints": 70}));
        assert_eq!(g.points_for("Duke"), Some(70));
        assert_eq!(g.points_for("UNC"), None);
        assert_eq!(g.scores(), None);
        assert_eq!(g.outcome_for("Duke"), None);
    }
}
