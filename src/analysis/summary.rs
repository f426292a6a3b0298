// src/analysis/summary.rs
use super::chart::{Bar, Chart, ChartBody};
use super::numeric::histogram;
use crate::config::consts::{HISTOGRAM_BINS, TOP_TEAMS};
use crate::data::DataBundle;

/// Label/value rows for an overview box.
pub type Facts = Vec<(String, String)>;

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryView {
    /// None when `summary.json` is not there.
    pub overview: Option<Facts>,
    pub top_wins: Chart,
    pub win_pct: Chart,
}

pub fn summary_view(data: &DataBundle) -> SummaryView {
    let overview = data.summary.as_ref().map(|s| {
        vec![
            (s!("Season"), s.season.to_string()),
            (s!("Total games"), s.total_games.to_string()),
            (s!("Games with scores"), s.valid_games_with_scores.to_string()),
            (s!("Teams analyzed"), s.analyzed_teams.to_string()),
            (s!("Average total score"), format!("{:.2}", s.average_total_score)),
            (s!("Total betting lines"), s.total_betting_lines.to_string()),
            (s!("Failed requests"), s.failed_requests.to_string()),
            (s!("Collected"), s.data_collection_date.clone()),
        ]
    });

    let Some(stats) = data.team_stats.as_deref() else {
        let why = "No team statistics available";
        return SummaryView {
            overview,
            top_wins: Chart::placeholder("Top 10 Teams by Wins", why),
            win_pct: Chart::placeholder("Win Percentage Distribution", why),
        };
    };

    let mut by_wins: Vec<(&str, u32)> = stats
        .iter()
        .filter_map(|s| Some((s.name()?, s.wins?)))
        .collect();
    let no_wins = stats.len() - by_wins.len();
    by_wins.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    by_wins.truncate(TOP_TEAMS);

    let top_wins = if by_wins.is_empty() {
        Chart::placeholder("Top 10 Teams by Wins", "No team has a win count")
    } else {
        let bars = by_wins.into_iter().map(|(n, w)| Bar::new(n, w as f64)).collect();
        Chart::new("Top 10 Teams by Wins", ChartBody::Bars { bars, horizontal: true })
            .axes("Wins", "")
    }
    .omitted(no_wins, "teams", "no win count");

    let pcts: Vec<f64> = stats.iter().filter_map(|s| s.win_pct()).collect();
    let no_pct = stats.len() - pcts.len();
    let win_pct = if pcts.is_empty() {
        Chart::placeholder("Win Percentage Distribution", "No team has a decided game")
    } else {
        Chart::new("Win Percentage Distribution", ChartBody::Histogram(histogram(&pcts, HISTOGRAM_BINS)))
            .axes("Win Percentage", "Number of Teams")
    }
    .omitted(no_pct, "teams", "no wins/losses");

    SummaryView { overview, top_wins, win_pct }
}
