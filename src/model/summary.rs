// src/model/summary.rs
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{BettingLine, Game};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completeness {
    #[serde(default)]
    pub games: bool,
    #[serde(default)]
    pub games_with_scores: bool,
    #[serde(default)]
    pub team_stats: bool,
    #[serde(default)]
    pub betting_lines: bool,
    #[serde(default)]
    pub ratings: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetCounts {
    #[serde(default)]
    pub teams: usize,
    #[serde(default)]
    pub games: usize,
    #[serde(default)]
    pub team_stats: usize,
    #[serde(default)]
    pub betting_lines: usize,
    #[serde(default)]
    pub ratings: usize,
}

/// Run overview written to `summary.json`. Unlike the API records its keys
/// are snake_case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub season: u16,
    #[serde(default)]
    pub total_games: usize,
    #[serde(default)]
    pub valid_games_with_scores: usize,
    #[serde(default)]
    pub analyzed_teams: usize,
    #[serde(default)]
    pub teams_list: Vec<String>,
    #[serde(default)]
    pub average_total_score: f64,
    #[serde(default)]
    pub total_betting_lines: usize,
    #[serde(default)]
    pub failed_requests: usize,
    #[serde(default)]
    pub data_collection_date: String,
    #[serde(default)]
    pub data_completeness: Completeness,
    #[serde(default)]
    pub data_counts: DatasetCounts,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Summary {
    /// `teams_list` is sorted here; callers pass names in any order.
    pub fn compute(
        season: u16,
        mut teams_list: Vec<String>,
        games: &[Game],
        lines: &[BettingLine],
        counts: DatasetCounts,
        failed_requests: usize,
        collected_at: DateTime<Local>,
    ) -> Self {
        teams_list.sort();
        teams_list.dedup();

        let totals: Vec<f64> = games.iter().filter_map(Game::total_points).map(|t| t as f64).collect();
        let average = if totals.is_empty() {
            0.0
        } else {
            let mean = totals.iter().sum::<f64>() / totals.len() as f64;
            (mean * 100.0).round() / 100.0
        };

        Self {
            season,
            total_games: games.len(),
            valid_games_with_scores: totals.len(),
            analyzed_teams: teams_list.len(),
            teams_list,
            average_total_score: average,
            total_betting_lines: lines.len(),
            failed_requests,
            data_collection_date: collected_at.to_rfc3339(),
            data_completeness: Completeness {
                games: counts.games > 0,
                games_with_scores: !totals.is_empty(),
                team_stats: counts.team_stats > 0,
                betting_lines: counts.betting_lines > 0,
                ratings: counts.ratings > 0,
            },
            data_counts: counts,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn averages_only_scored_games() {
        let games: Vec<Game> = serde_json::from_value(json!([
            {"id": 1, "homeTeam": "Duke", "awayTeam": "UNC", "homePoints": 80, "awayPoints": 71},
            {"id": 2, "homeTeam": "UNC", "awayTeam": "Duke", "homePoints": 70, "awayPoints": 70},
            {"id": 3, "homeTeam": "Duke", "awayTeam": "Army"}
        ]))
        .unwrap();
        let counts = DatasetCounts { teams: 2, games: 3, ..Default::default() };
        let s = Summary::compute(2025, vec![s!("UNC"), s!("Duke")], &games, &[], counts, 1, Local::now());

        assert_eq!(s.total_games, 3);
        assert_eq!(s.valid_games_with_scores, 2);
        assert_eq!(s.average_total_score, 145.5);
        assert_eq!(s.teams_list, vec!["Duke", "UNC"]);
        assert!(s.data_completeness.games && !s.data_completeness.betting_lines);
        assert_eq!(s.failed_requests, 1);
    }

    #[test]
    fn no_scores_means_zero_average() {
        let s = Summary::compute(2025, vec![], &[], &[], DatasetCounts::default(), 0, Local::now());
        assert_eq!(s.average_total_score, 0.0);
        assert!(!s.data_completeness.games_with_scores);
    }
}
