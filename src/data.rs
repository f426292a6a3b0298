// src/data.rs
//
// Everything the visualizer reads from the output directory.
//
// Each dataset loads on its own: a missing or malformed file leaves that
// field `None` and adds a note, the rest still load. Only the GUI's Refresh
// action replaces a bundle.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::model::{BettingLine, Game, Summary, Team, TeamRatings, TeamSeasonStats};
use crate::store::{self, DatasetKind, Loaded};

#[derive(Clone, Debug, Default)]
pub struct DataBundle {
    pub dir: PathBuf,
    pub teams: Option<Vec<Team>>,
    pub games: Option<Vec<Game>>,
    pub team_stats: Option<Vec<TeamSeasonStats>>,
    pub betting_lines: Option<Vec<BettingLine>>,
    pub ratings: Option<Vec<TeamRatings>>,
    pub summary: Option<Summary>,
    /// Per-dataset problems worth showing (malformed file, skipped records).
    pub notes: Vec<String>,
    /// Records dropped across all files because they did not decode.
    pub skipped: usize,
}

impl DataBundle {
    pub fn load(dir: &Path) -> Self {
        let mut b = DataBundle { dir: dir.to_path_buf(), ..Default::default() };
        if store::present(dir).is_empty() {
            logw!("No dataset files in {}", dir.display());
            return b;
        }

        b.teams = b.load_one(dir, DatasetKind::Teams);
        b.games = b.load_one(dir, DatasetKind::Games);
        b.team_stats = b.load_one(dir, DatasetKind::TeamStats);
        b.betting_lines = b.load_one(dir, DatasetKind::BettingLines);
        b.ratings = b.load_one(dir, DatasetKind::Ratings);
        b.summary = match store::load_summary(dir) {
            Ok(s) => Some(s),
            Err(e) => {
                b.note_error(DatasetKind::Summary, e);
                None
            }
        };

        logf!(
            "Loaded {} of {} datasets from {} ({} records skipped)",
            b.loaded_kinds().len(),
            DatasetKind::ALL.len(),
            dir.display(),
            b.skipped
        );
        b
    }

    fn load_one<T: DeserializeOwned>(&mut self, dir: &Path, kind: DatasetKind) -> Option<Vec<T>> {
        match store::load_records::<T>(dir, kind) {
            Ok(Loaded { records, skipped }) => {
                if skipped > 0 {
                    self.skipped += skipped;
                    self.notes.push(format!("{}: skipped {skipped} malformed records", kind.label()));
                }
                Some(records)
            }
            Err(e) => {
                self.note_error(kind, e);
                None
            }
        }
    }

    fn note_error(&mut self, kind: DatasetKind, e: Error) {
        match e {
            Error::DataMissing(_) => logd!("{}: not present", kind.file_name()),
            other => {
                loge!("{}: {other}", kind.file_name());
                self.notes.push(format!("{}: unreadable ({other})", kind.label()));
            }
        }
    }

    pub fn loaded_kinds(&self) -> Vec<DatasetKind> {
        let mut out = Vec::new();
        if self.teams.is_some() { out.push(DatasetKind::Teams); }
        if self.games.is_some() { out.push(DatasetKind::Games); }
        if self.team_stats.is_some() { out.push(DatasetKind::TeamStats); }
        if self.betting_lines.is_some() { out.push(DatasetKind::BettingLines); }
        if self.ratings.is_some() { out.push(DatasetKind::Ratings); }
        if self.summary.is_some() { out.push(DatasetKind::Summary); }
        out
    }

    /// No dataset at all: the GUI shows its empty state.
    pub fn is_empty(&self) -> bool {
        self.loaded_kinds().is_empty()
    }

    pub fn teams(&self) -> &[Team] { self.teams.as_deref().unwrap_or_default() }
    pub fn games(&self) -> &[Game] { self.games.as_deref().unwrap_or_default() }
    pub fn team_stats(&self) -> &[TeamSeasonStats] { self.team_stats.as_deref().unwrap_or_default() }
    pub fn betting_lines(&self) -> &[BettingLine] { self.betting_lines.as_deref().unwrap_or_default() }
    pub fn ratings(&self) -> &[TeamRatings] { self.ratings.as_deref().unwrap_or_default() }

    /// Team dropdown entries: distinct names from the team dataset, sorted.
    pub fn team_names(&self) -> Vec<String> {
        self.teams()
            .iter()
            .filter_map(Team::name)
            .map(String::from)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn stats_for(&self, team: &str) -> Option<&TeamSeasonStats> {
        self.team_stats().iter().find(|s| s.name() == Some(team))
    }

    pub fn ratings_for(&self, team: &str) -> Option<&TeamRatings> {
        self.ratings().iter().find(|r| r.team == team)
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams().iter().find(|t| t.name() == Some(name))
    }

    /// One line for the status bar.
    pub fn status_line(&self) -> String {
        if self.is_empty() {
            return format!("No data in {}", self.dir.display());
        }
        let mut s = format!(
            "Loaded {}/{} datasets from {}",
            self.loaded_kinds().len(),
            DatasetKind::ALL.len(),
            self.dir.display()
        );
        if self.skipped > 0 {
            s.push_str(&format!(", {} records skipped", self.skipped));
        }
        s
    }
}
