// src/model/stats.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{lenient, Game, Outcome, Team};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shooting {
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub made: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub attempted: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub pct: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rebounds {
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub offensive: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub defensive: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turnovers {
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub team_total: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Points {
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub in_paint: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub off_turnovers: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub fast_break: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FourFactors {
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub effective_field_goal_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub turnover_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub offensive_rebound_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub free_throw_rate: Option<f64>,
}

/// Season totals for one side of the ball.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitStats {
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub assists: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub blocks: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub steals: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub possessions: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub true_shooting: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default, deserialize_with = "lenient::opt_obj", skip_serializing_if = "Option::is_none")]
    pub field_goals: Option<Shooting>,
    #[serde(default, deserialize_with = "lenient::opt_obj", skip_serializing_if = "Option::is_none")]
    pub two_point_field_goals: Option<Shooting>,
    #[serde(default, deserialize_with = "lenient::opt_obj", skip_serializing_if = "Option::is_none")]
    pub three_point_field_goals: Option<Shooting>,
    #[serde(default, deserialize_with = "lenient::opt_obj", skip_serializing_if = "Option::is_none")]
    pub free_throws: Option<Shooting>,
    #[serde(default, deserialize_with = "lenient::opt_obj", skip_serializing_if = "Option::is_none")]
    pub rebounds: Option<Rebounds>,
    #[serde(default, deserialize_with = "lenient::opt_obj", skip_serializing_if = "Option::is_none")]
    pub turnovers: Option<Turnovers>,
    #[serde(default, deserialize_with = "lenient::opt_obj", skip_serializing_if = "Option::is_none")]
    pub points: Option<Points>,
    #[serde(default, deserialize_with = "lenient::opt_obj", skip_serializing_if = "Option::is_none")]
    pub four_factors: Option<FourFactors>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A team's season line from `/stats/team/season`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSeasonStats {
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    pub season: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    pub games: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    pub wins: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    pub losses: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub pace: Option<f64>,

    /// The live API calls these `teamStats`/`opponentStats`.
    #[serde(default, alias = "teamStats", deserialize_with = "lenient::opt_obj", skip_serializing_if = "Option::is_none")]
    pub offense: Option<UnitStats>,
    #[serde(default, alias = "opponentStats", deserialize_with = "lenient::opt_obj", skip_serializing_if = "Option::is_none")]
    pub defense: Option<UnitStats>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Win/loss tally derived from game results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
}

impl Record {
    /// Every game `team` appears in counts toward `games`; only scored
    /// games count toward wins and losses.
    pub fn from_games<'a, I>(team: &str, games: I) -> Self
    where
        I: IntoIterator<Item = &'a Game>,
    {
        let mut rec = Record::default();
        for g in games.into_iter().filter(|g| g.involves(team)) {
            rec.games += 1;
            match g.outcome_for(team) {
                Some(Outcome::Win) => rec.wins += 1,
                Some(Outcome::Loss) => rec.losses += 1,
                _ => {}
            }
        }
        rec
    }

    /// Percentage of decided games won.
    pub fn win_pct(&self) -> Option<f64> {
        let decided = u64::from(self.wins) + u64::from(self.losses);
        (decided > 0).then(|| self.wins as f64 / decided as f64 * 100.0)
    }
}

impl TeamSeasonStats {
    /// Placeholder row for a team the stats endpoint had nothing on.
    pub fn fallback(team: &Team, season: u16, record: Record) -> Self {
        Self {
            season: Some(season as i64),
            team_id: team.id,
            team: team.name().map(String::from),
            conference: team.conference.clone(),
            games: Some(record.games),
            wins: Some(record.wins),
            losses: Some(record.losses),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.team.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// `wins / (wins + losses)` as a percentage.
    pub fn win_pct(&self) -> Option<f64> {
        Record { games: 0, wins: self.wins?, losses: self.losses? }.win_pct()
    }

    /// Season total divided by games played.
    pub fn per_game(&self, total: Option<f64>) -> Option<f64> {
        let g = self.games.filter(|g| *g > 0)? as f64;
        Some(total? / g)
    }

    pub fn points_per_game(&self) -> Option<f64> {
        self.per_game(self.off().and_then(|o| o.points.as_ref()).and_then(|p| p.total))
    }

    pub fn off(&self) -> Option<&UnitStats> {
        self.offense.as_ref()
    }
}
