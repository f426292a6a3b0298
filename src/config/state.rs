// src/config/state.rs
use std::path::PathBuf;

use chrono::NaiveDate;

use super::consts::DEFAULT_OUT_DIR;
use super::options::PageKind;
use crate::analysis::{BettingFilter, MetricGroup};

/// Betting tab filter as edited in the UI. The date pair is kept even while
/// the range is switched off so re-enabling restores it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BettingState {
    pub team: Option<String>,
    pub range_enabled: bool,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl BettingState {
    pub fn filter(&self) -> BettingFilter {
        let (from, to) = if self.range_enabled { (self.from, self.to) } else { (None, None) };
        BettingFilter { team: self.team.clone(), from, to }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub data_dir: PathBuf,

    /// Active tab
    pub page: PageKind,

    /// Team tab dropdown; None until data with teams is loaded.
    pub team: Option<String>,

    /// Games and Win/Loss tabs: None means all teams.
    pub games_team: Option<String>,
    pub win_loss_team: Option<String>,

    pub betting: BettingState,
    pub metrics: MetricGroup,

    pub show_about: bool,
}

impl GuiState {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir, ..Self::default() }
    }

    /// Drop selections that no longer name a known team (after a reload).
    /// `teams` feeds the Team tab; `game_teams` the Games and Win/Loss tabs.
    pub fn retain_known(&mut self, teams: &[String], game_teams: &[String]) {
        let known = |t: &Option<String>, list: &[String]| t.as_ref().is_none_or(|n| list.contains(n));
        if self.team.is_none() || !known(&self.team, teams) {
            self.team = teams.first().cloned();
        }
        if !known(&self.games_team, game_teams) {
            self.games_team = None;
        }
        if !known(&self.win_loss_team, game_teams) {
            self.win_loss_team = None;
        }
    }
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_OUT_DIR),
            page: PageKind::default(),
            team: None,
            games_team: None,
            win_loss_team: None,
            betting: BettingState::default(),
            metrics: MetricGroup::default(),
            show_about: false,
        }
    }
}
