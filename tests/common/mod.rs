// tests/common/mod.rs
#![allow(dead_code)]
use std::cell::RefCell;
use std::collections::HashSet;
use std::time::Duration;

use serde_json::{json, Value};

use cbb_stats::config::options::{CollectOptions, TeamLimit};
use cbb_stats::core::Fetch;
use cbb_stats::error::{Error, Result};

/// In-memory API: a fixed Duke/UNC season plus a few extra teams that
/// have no games. Every call is recorded.
pub struct StubApi {
    pub teams: Value,
    pub calls: RefCell<Vec<(String, Option<String>)>>,
    /// (endpoint, team) pairs that answer HTTP 500.
    pub failing: HashSet<(&'static str, &'static str)>,
}

impl StubApi {
    pub fn new() -> Self {
        Self {
            teams: json!([
                {"id": 1, "school": "Duke", "conference": "ACC"},
                {"id": 2, "school": "UNC", "conference": "ACC"},
                {"id": 3, "school": "Army", "conference": "Patriot"},
                {"id": 4, "school": "Navy", "conference": "Patriot"}
            ]),
            calls: RefCell::new(Vec::new()),
            failing: HashSet::new(),
        }
    }

    pub fn failing(mut self, endpoint: &'static str, team: &'static str) -> Self {
        self.failing.insert((endpoint, team));
        self
    }

    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.calls.borrow().iter().filter(|(e, _)| e == endpoint).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }
}

fn game(id: i64, home: &str, away: &str, scores: Option<(u32, u32)>, day: &str) -> Value {
    let mut g = json!({"id": id, "homeTeam": home, "awayTeam": away, "startDate": format!("{day}T00:00:00.000Z")});
    if let Some((h, a)) = scores {
        g["homePoints"] = json!(h);
        g["awayPoints"] = json!(a);
    }
    g
}

fn line(game_id: i64, home: &str, away: &str, day: &str, spread: f64, total: f64, scores: (u32, u32)) -> Value {
    json!({"gameId": game_id, "homeTeam": home, "awayTeam": away, "startDate": format!("{day}T00:00:00.000Z"),
           "homeScore": scores.0, "awayScore": scores.1,
           "lines": [{"provider": "consensus", "spread": spread, "overUnder": total}]})
}

fn games_for(team: &str) -> Value {
    let duke_unc = game(1, "Duke", "UNC", Some((80, 70)), "2025-01-04");
    let unc_duke = game(2, "UNC", "Duke", Some((75, 71)), "2025-02-08");
    match team {
        "Duke" => json!([duke_unc, unc_duke, game(3, "Duke", "Army", None, "2025-02-20")]),
        "UNC" => json!([duke_unc, unc_duke, game(4, "UNC", "Navy", Some((88, 60)), "2025-01-15"), {"homeTeam": "UNC"}]),
        _ => json!([]),
    }
}

fn lines_for(team: &str) -> Value {
    let first = line(1, "Duke", "UNC", "2025-01-04", -4.5, 150.5, (80, 70));
    match team {
        "Duke" => json!([first]),
        "UNC" => json!([first, line(4, "UNC", "Navy", "2025-01-15", -20.0, 140.0, (88, 60))]),
        _ => json!([]),
    }
}

fn stats_for(team: &str) -> Value {
    match team {
        "Duke" => json!([{"season": 2025, "teamId": 1, "team": "Duke", "conference": "ACC", "games": 3, "wins": 1, "losses": 1,
                          "pace": 70.1, "teamStats": {"points": {"total": 151}, "fieldGoals": {"made": 55, "attempted": 120, "pct": 45.8}}}]),
        _ => json!([]),
    }
}

impl Fetch for StubApi {
    fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let team = params.iter().find(|(k, _)| *k == "team").map(|(_, v)| v.clone());
        self.calls.borrow_mut().push((endpoint.to_string(), team.clone()));
        let team = team.unwrap_or_default();

        if self.failing.iter().any(|(e, t)| *e == endpoint && *t == team) {
            return Err(Error::Status { endpoint: endpoint.to_string(), status: 500, body: "boom".into() });
        }

        Ok(match endpoint {
            "teams" => self.teams.clone(),
            "games" => games_for(&team),
            "stats/team/season" => stats_for(&team),
            "lines" => lines_for(&team),
            "ratings/adjusted" => json!([{"team": team, "offensiveRating": 115.0, "defensiveRating": 98.5}]),
            "ratings/srs" => json!([{"team": team, "rating": 12.3}]),
            other => panic!("unexpected endpoint {other}"),
        })
    }
}

/// Every `*.json` file in `dir`, sorted.
pub fn json_files(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let Ok(rd) = std::fs::read_dir(dir) else { return Vec::new() };
    let mut out: Vec<_> = rd
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|x| x == "json"))
        .collect();
    out.sort();
    out
}

pub fn options(dir: &std::path::Path, teams: TeamLimit) -> CollectOptions {
    CollectOptions {
        teams,
        out_dir: dir.to_path_buf(),
        pause: Duration::ZERO,
        ..CollectOptions::default()
    }
}
