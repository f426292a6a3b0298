// src/analysis/games.rs
use std::collections::BTreeSet;

use super::chart::{Chart, ChartBody, Series, Style};
use super::numeric::{histogram, rolling_mean};
use crate::config::consts::{HISTOGRAM_BINS, MOVING_AVG_WINDOW};
use crate::model::Game;

#[derive(Clone, Debug, PartialEq)]
pub struct GamesView {
    pub scored: usize,
    pub unscored: usize,
    pub total_points: Chart,
    pub differential: Chart,
    pub timeline: Chart,
}

/// Every team named as home or away, sorted.
pub fn game_team_names(games: &[Game]) -> Vec<String> {
    games
        .iter()
        .flat_map(|g| [g.home_team.as_deref(), g.away_team.as_deref()])
        .flatten()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub(crate) fn suffix(team: Option<&str>) -> String {
    match team {
        Some(t) => format!("({t})"),
        None => s!("(All Teams)"),
    }
}

/// Games for `team` (or all), split into scored and a count of unscored.
pub(crate) fn scored_games<'a>(games: &'a [Game], team: Option<&str>) -> (Vec<&'a Game>, usize) {
    let selected: Vec<&Game> = games
        .iter()
        .filter(|g| team.is_none_or(|t| g.involves(t)))
        .collect();
    let total = selected.len();
    let scored: Vec<&Game> = selected.into_iter().filter(|g| g.scores().is_some()).collect();
    let unscored = total - scored.len();
    (scored, unscored)
}

fn timeline(team: Option<&str>, scored: &[&Game]) -> Chart {
    let Some(team) = team else {
        return Chart::placeholder("Points Timeline", "Select a specific team to see points timeline");
    };
    let title = format!("Points Timeline for {team}");
    let ys: Vec<f64> = scored.iter().filter_map(|g| g.points_for(team)).map(f64::from).collect();
    if ys.is_empty() {
        return Chart::placeholder(title, "No scored games");
    }

    let pts: Vec<[f64; 2]> = ys.iter().enumerate().map(|(i, y)| [(i + 1) as f64, *y]).collect();
    let mut series = vec![Series::new(format!("{team} points"), pts, Style::Markers)];
    if ys.len() > 1 {
        let window = MOVING_AVG_WINDOW.min(ys.len());
        let avg = rolling_mean(&ys, window)
            .into_iter()
            .enumerate()
            .filter_map(|(i, m)| Some([(i + 1) as f64, m?]))
            .collect();
        series.push(Series::new(format!("{window}-game moving avg"), avg, Style::Dashed));
    }
    Chart::new(title, ChartBody::Lines(series)).axes("Game number", "Points scored")
}

pub fn games_view(games: &[Game], team: Option<&str>) -> GamesView {
    let (mut scored, unscored) = scored_games(games, team);
    scored.sort_by_key(|g| (g.date().is_none(), g.date()));
    let sfx = suffix(team);

    let totals: Vec<f64> = scored.iter().filter_map(|g| g.total_points()).map(|t| t as f64).collect();
    let diffs: Vec<f64> = scored.iter().filter_map(|g| g.differential()).map(|d| d as f64).collect();

    let (total_points, differential) = if scored.is_empty() {
        (
            Chart::placeholder(format!("Total Points Distribution {sfx}"), "No valid game data available"),
            Chart::placeholder("Point Differential Distribution", "No valid game data available"),
        )
    } else {
        (
            Chart::new(
                format!("Total Points Distribution {sfx}"),
                ChartBody::Histogram(histogram(&totals, HISTOGRAM_BINS)),
            )
            .axes("Total Points", "Number of Games"),
            Chart::new("Point Differential Distribution", ChartBody::Histogram(histogram(&diffs, HISTOGRAM_BINS)))
                .axes("Point Differential (home - away)", "Number of Games"),
        )
    };

    GamesView {
        scored: scored.len(),
        unscored,
        total_points: total_points.omitted(unscored, "games", "no score"),
        differential: differential.omitted(unscored, "games", "no score"),
        timeline: timeline(team, &scored).omitted(unscored, "games", "no score"),
    }
}
