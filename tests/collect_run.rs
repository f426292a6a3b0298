// tests/collect_run.rs
mod common;

use std::cell::Cell;
use std::fs;

use serde_json::Value;

use cbb_stats::collect::{self, Endpoint};
use cbb_stats::config::{options::TeamLimit, settings::Settings};
use cbb_stats::data::DataBundle;
use cbb_stats::error::Error;
use cbb_stats::progress::Progress;
use cbb_stats::store::{self, DatasetKind};

use common::{json_files, options, StubApi};

fn read(dir: &std::path::Path, kind: DatasetKind) -> Value {
    serde_json::from_str(&fs::read_to_string(kind.path_in(dir)).unwrap()).unwrap()
}

#[derive(Default)]
struct Recorder {
    total: Option<usize>,
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn item_done(&mut self, team: &str) { self.done.push(team.to_string()); }
    fn item_failed(&mut self, team: &str, _reason: &str) { self.failed.push(team.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn team_limit_selects_the_first_teams_only() {
    let dir = tempfile::tempdir().unwrap();
    let api = StubApi::new();
    let mut rec = Recorder::default();

    let report = collect::run(&api, &options(dir.path(), TeamLimit::First(2)), Some(&mut rec)).unwrap();

    assert_eq!(report.teams_available, 4);
    assert_eq!(report.teams_selected, 2);
    assert_eq!(report.teams_processed, 2);
    assert!(report.is_clean());
    assert_eq!(rec.total, Some(2));
    assert_eq!(rec.done, vec!["Duke", "UNC"]);
    assert!(rec.finished);

    // one request per endpoint per selected team, one team list
    assert_eq!(api.calls_to("teams"), 1);
    assert_eq!(api.calls_to("games"), 2);
    assert_eq!(api.calls_to("ratings/srs"), 2);
    assert_eq!(api.total_calls(), 1 + 2 * 5);

    let teams = read(dir.path(), DatasetKind::Teams);
    assert_eq!(teams.as_array().unwrap().len(), 2);
}

#[test]
fn every_dataset_gets_exactly_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let api = StubApi::new();
    let report = collect::run(&api, &options(dir.path(), TeamLimit::All), None).unwrap();

    let files: Vec<String> = json_files(dir.path())
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        files,
        vec!["betting_lines.json", "games.json", "ratings.json", "summary.json", "team_stats.json", "teams.json"]
    );
    assert_eq!(report.written.len(), 6);
    assert_eq!(store::present(dir.path()).len(), DatasetKind::ALL.len());

    // Army and Navy have no games or lines but still count as analyzed
    assert_eq!(report.counts.ratings, 4);
    assert_eq!(report.counts.team_stats, 4);
}

#[test]
fn shared_games_and_lines_are_stored_once() {
    let dir = tempfile::tempdir().unwrap();
    let api = StubApi::new();
    let report = collect::run(&api, &options(dir.path(), TeamLimit::First(2)), None).unwrap();

    // games 1 and 2 come back for both teams; the id-less game is dropped
    assert_eq!(report.counts.games, 4);
    let ids: Vec<i64> = read(dir.path(), DatasetKind::Games)
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    assert_eq!(report.counts.betting_lines, 2);
}

#[test]
fn summary_reflects_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let api = StubApi::new();
    collect::run(&api, &options(dir.path(), TeamLimit::First(2)), None).unwrap();

    let s = store::load_summary(dir.path()).unwrap();
    assert_eq!(s.season, 2025);
    assert_eq!(s.total_games, 4);
    assert_eq!(s.valid_games_with_scores, 3);
    assert_eq!(s.analyzed_teams, 2);
    assert_eq!(s.teams_list, vec!["Duke", "UNC"]);
    // (150 + 146 + 148) / 3
    assert!((s.average_total_score - 148.0).abs() < 1e-9);
    assert_eq!(s.total_betting_lines, 2);
    assert_eq!(s.failed_requests, 0);
    assert_eq!(s.data_counts.teams, 2);
}

#[test]
fn missing_season_stats_fall_back_to_game_record() {
    let dir = tempfile::tempdir().unwrap();
    let api = StubApi::new();
    collect::run(&api, &options(dir.path(), TeamLimit::First(2)), None).unwrap();

    let stats = read(dir.path(), DatasetKind::TeamStats);
    let unc = stats.as_array().unwrap().iter().find(|s| s["team"] == "UNC").unwrap();
    assert_eq!(unc["wins"], 2);
    assert_eq!(unc["losses"], 1);

    let duke = stats.as_array().unwrap().iter().find(|s| s["team"] == "Duke").unwrap();
    assert_eq!(duke["pace"], 70.1);
}

#[test]
fn rerun_replaces_previous_files() {
    let dir = tempfile::tempdir().unwrap();
    collect::run(&StubApi::new(), &options(dir.path(), TeamLimit::All), None).unwrap();
    assert_eq!(read(dir.path(), DatasetKind::Teams).as_array().unwrap().len(), 4);

    collect::run(&StubApi::new(), &options(dir.path(), TeamLimit::First(1)), None).unwrap();
    assert_eq!(read(dir.path(), DatasetKind::Teams).as_array().unwrap().len(), 1);
    assert_eq!(json_files(dir.path()).len(), 6);
    // no temp files left behind
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 6);
}

#[test]
fn missing_api_key_stops_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    let connected = Cell::new(false);

    let err = collect::run_with(
        Settings::from_lookup(|_| None),
        |_| {
            connected.set(true);
            Ok(StubApi::new())
        },
        &options(dir.path(), TeamLimit::All),
        None,
    )
    .unwrap_err();

    assert!(matches!(err, Error::MissingApiKey));
    assert!(!connected.get());
    assert!(json_files(dir.path()).is_empty());
}

#[test]
fn failed_requests_are_skipped_and_counted() {
    let dir = tempfile::tempdir().unwrap();
    let api = StubApi::new().failing("lines", "Duke").failing("games", "UNC");
    let mut rec = Recorder::default();

    let report = collect::run(&api, &options(dir.path(), TeamLimit::First(2)), Some(&mut rec)).unwrap();

    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].endpoint, Endpoint::Lines);
    assert_eq!(report.failures[0].team, "Duke");
    assert_eq!(report.failures[1].endpoint, Endpoint::Games);
    assert_eq!(rec.failed, vec!["Duke", "UNC"]);
    assert_eq!(rec.done.len(), 2);

    // Duke's games and UNC's lines still made it
    assert_eq!(report.counts.games, 3);
    assert_eq!(report.counts.betting_lines, 2);
    assert_eq!(json_files(dir.path()).len(), 6);
    assert_eq!(store::load_summary(dir.path()).unwrap().failed_requests, 2);
}

#[test]
fn empty_team_list_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = StubApi::new();
    api.teams = serde_json::json!([]);

    let err = collect::run(&api, &options(dir.path(), TeamLimit::All), None).unwrap_err();
    assert!(matches!(err, Error::NoTeams));
    // retried once with the season filter
    assert_eq!(api.calls_to("teams"), 2);
    assert_eq!(api.total_calls(), 2);
    assert!(json_files(dir.path()).is_empty());
}

#[test]
fn csv_copies_sit_next_to_the_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(dir.path(), TeamLimit::First(2));
    opts.write_csv = true;
    let report = collect::run(&StubApi::new(), &opts, None).unwrap();

    assert!(dir.path().join("games.csv").is_file());
    assert!(dir.path().join("team_stats.csv").is_file());
    assert_eq!(json_files(dir.path()).len(), 6);
    assert!(report.written.len() > 6);

    opts.write_csv = false;
    let report = collect::run(&StubApi::new(), &opts, None).unwrap();
    assert!(!dir.path().join("games.csv").exists());
    assert!(!dir.path().join("team_stats.csv").exists());
    assert_eq!(report.written.len(), 6);
}

#[test]
fn collected_data_feeds_the_visualizer() {
    let dir = tempfile::tempdir().unwrap();
    collect::run(&StubApi::new(), &options(dir.path(), TeamLimit::First(2)), None).unwrap();

    let data = DataBundle::load(dir.path());
    assert!(!data.is_empty());
    assert!(data.notes.is_empty());
    assert_eq!(data.loaded_kinds().len(), 6);
    assert_eq!(data.team_names(), vec!["Duke", "UNC"]);
    assert_eq!(data.games().len(), 4);
    assert_eq!(data.ratings_for("Duke").and_then(|r| r.srs()), Some(12.3));
}
