// src/gui/views.rs
//
// Per-tab views, rebuilt only when the tab's inputs change. Cleared as a whole
// on Refresh, since every view derives from the loaded bundle.

use chrono::NaiveDate;

use crate::analysis::{
    betting::{date_span, team_options},
    betting_view, correlation_chart, game_team_names, games_view, summary_view, team_view, win_loss_view,
    BettingFilter, BettingView, Chart, GamesView, MetricGroup, SummaryView, TeamView, WinLossView,
};
use crate::data::DataBundle;

#[derive(Default)]
pub struct ViewCache {
    // dropdown contents
    pub team_names: Vec<String>,
    pub game_teams: Vec<String>,
    pub betting_teams: Vec<String>,
    pub betting_span: Option<(NaiveDate, NaiveDate)>,

    summary: Option<SummaryView>,
    team: Option<(String, TeamView)>,
    games: Option<(Option<String>, GamesView)>,
    betting: Option<(BettingFilter, BettingView)>,
    win_loss: Option<(Option<String>, WinLossView)>,
    correlation: Option<(MetricGroup, Chart)>,
}

fn keyed<'a, K: PartialEq, V>(slot: &'a mut Option<(K, V)>, key: K, build: impl FnOnce(&K) -> V) -> &'a V {
    if slot.as_ref().is_some_and(|(k, _)| *k != key) {
        *slot = None;
    }
    &slot
        .get_or_insert_with(|| {
            let v = build(&key);
            (key, v)
        })
        .1
}

impl ViewCache {
    pub fn new(data: &DataBundle) -> Self {
        Self {
            team_names: data.team_names(),
            game_teams: game_team_names(data.games()),
            betting_teams: team_options(data.betting_lines()),
            betting_span: date_span(data.betting_lines()),
            ..Default::default()
        }
    }

    pub fn summary(&mut self, data: &DataBundle) -> &SummaryView {
        self.summary.get_or_insert_with(|| summary_view(data))
    }

    pub fn team(&mut self, data: &DataBundle, team: &str) -> &TeamView {
        keyed(&mut self.team, s!(team), |t| {
            logd!("View: team {t}");
            team_view(data, t)
        })
    }

    pub fn games(&mut self, data: &DataBundle, team: Option<String>) -> &GamesView {
        keyed(&mut self.games, team, |t| games_view(data.games(), t.as_deref()))
    }

    pub fn betting(&mut self, data: &DataBundle, filter: BettingFilter) -> &BettingView {
        keyed(&mut self.betting, filter, |f| {
            logd!("View: betting {f:?}");
            betting_view(data.betting_lines(), f)
        })
    }

    pub fn win_loss(&mut self, data: &DataBundle, team: Option<String>) -> &WinLossView {
        keyed(&mut self.win_loss, team, |t| win_loss_view(data.games(), t.as_deref()))
    }

    pub fn correlation(&mut self, data: &DataBundle, group: MetricGroup) -> &Chart {
        keyed(&mut self.correlation, group, |g| correlation_chart(data.team_stats(), *g))
    }
}
