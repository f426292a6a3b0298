// src/analysis/win_loss.rs
use super::chart::{Bar, Chart, ChartBody, Series, Style};
use super::games::scored_games;
use super::numeric::histogram;
use super::summary::Facts;
use crate::config::consts::HISTOGRAM_BINS;
use crate::model::{Game, Outcome, Side};

#[derive(Clone, Debug, PartialEq)]
pub struct WinLossView {
    pub facts: Facts,
    pub breakdown: Chart,
    pub differential: Chart,
    pub running_pct: Chart,
}

fn pct(part: usize, whole: usize) -> String {
    if whole == 0 { s!("—") } else { format!("{:.1}%", part as f64 / whole as f64 * 100.0) }
}

fn team_view(team: &str, games: &[&Game], unscored: usize) -> WinLossView {
    let (mut hw, mut hl, mut aw, mut al) = (0usize, 0usize, 0usize, 0usize);
    let mut margins = Vec::with_capacity(games.len());
    let mut running = Vec::with_capacity(games.len());
    let mut won = 0usize;

    for (i, g) in games.iter().enumerate() {
        let outcome = g.outcome_for(team);
        match (g.side_of(team), outcome) {
            (Some(Side::Home), Some(Outcome::Win)) => hw += 1,
            (Some(Side::Home), Some(Outcome::Loss)) => hl += 1,
            (Some(Side::Away), Some(Outcome::Win)) => aw += 1,
            (Some(Side::Away), Some(Outcome::Loss)) => al += 1,
            _ => {}
        }
        if outcome == Some(Outcome::Win) {
            won += 1;
        }
        if let Some(m) = g.margin_for(team) {
            margins.push(m as f64);
        }
        running.push([(i + 1) as f64, won as f64 / (i + 1) as f64 * 100.0]);
    }
    let (wins, losses) = (hw + aw, hl + al);

    let facts = vec![
        (s!("Total games"), games.len().to_string()),
        (s!("Total wins"), wins.to_string()),
        (s!("Total losses"), losses.to_string()),
        (s!("Win percentage"), pct(wins, wins + losses)),
        (s!("Home record"), format!("{hw}-{hl}")),
        (s!("Away record"), format!("{aw}-{al}")),
    ];

    let breakdown = Chart::new(
        format!("Win/Loss Distribution - {team}"),
        ChartBody::Bars { bars: vec![Bar::new("Wins", wins as f64), Bar::new("Losses", losses as f64)], horizontal: false },
    )
    .axes("", "Games");

    let differential = Chart::new(
        format!("Point Differential Distribution - {team}"),
        ChartBody::Histogram(histogram(&margins, HISTOGRAM_BINS)),
    )
    .axes("Point Differential (positive = win)", "Number of Games");

    let running_pct = Chart::new(
        format!("Running Win Percentage - {team}"),
        ChartBody::Lines(vec![Series::new("Win %", running, Style::Solid)]),
    )
    .axes("Games played", "Win percentage");

    WinLossView {
        facts,
        breakdown: breakdown.omitted(unscored, "games", "no score"),
        differential: differential.omitted(unscored, "games", "no score"),
        running_pct: running_pct.omitted(unscored, "games", "no score"),
    }
}

fn league_view(games: &[&Game], unscored: usize) -> WinLossView {
    let n = games.len();
    let home_wins = games.iter().filter(|g| g.differential().is_some_and(|d| d > 0)).count();
    let away_wins = games.iter().filter(|g| g.differential().is_some_and(|d| d < 0)).count();
    let diffs: Vec<f64> = games.iter().filter_map(|g| g.differential()).map(|d| d as f64).collect();

    let facts = vec![
        (s!("Total games"), n.to_string()),
        (s!("Home team wins"), home_wins.to_string()),
        (s!("Away team wins"), away_wins.to_string()),
        (s!("Home win %"), pct(home_wins, n)),
        (s!("Away win %"), pct(away_wins, n)),
    ];

    let breakdown = Chart::new(
        "Home vs Away Wins",
        ChartBody::Bars {
            bars: vec![Bar::new("Home Wins", home_wins as f64), Bar::new("Away Wins", away_wins as f64)],
            horizontal: false,
        },
    )
    .axes("", "Games");
    let differential = Chart::new(
        "Home Team Point Differential Distribution",
        ChartBody::Histogram(histogram(&diffs, HISTOGRAM_BINS)),
    )
    .axes("Point Differential (positive = home win)", "Number of Games");

    WinLossView {
        facts,
        breakdown: breakdown.omitted(unscored, "games", "no score"),
        differential: differential.omitted(unscored, "games", "no score"),
        running_pct: Chart::placeholder("Running Win Percentage", "Select a specific team"),
    }
}

pub fn win_loss_view(games: &[Game], team: Option<&str>) -> WinLossView {
    let (mut scored, unscored) = scored_games(games, team);
    if scored.is_empty() {
        let why = "No game data available for selected team";
        return WinLossView {
            facts: Vec::new(),
            breakdown: Chart::placeholder("Win/Loss Distribution", why).omitted(unscored, "games", "no score"),
            differential: Chart::placeholder("Point Differential Distribution", why),
            running_pct: Chart::placeholder("Running Win Percentage", why),
        };
    }
    scored.sort_by_key(|g| (g.date().is_none(), g.date()));
    match team {
        Some(t) => team_view(t, &scored, unscored),
        None => league_view(&scored, unscored),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn games() -> Vec<Game> {
        serde_json::from_value(json!([
            {"id": 1, "homeTeam": "Duke", "awayTeam": "UNC", "homePoints": 80, "awayPoints": 70, "startDate": "2025-01-01"},
            {"id": 2, "homeTeam": "UNC", "awayTeam": "Duke", "homePoints": 75, "awayPoints": 71, "startDate": "2025-01-08"},
            {"id": 3, "homeTeam": "Army", "awayTeam": "Duke", "homePoints": 50, "awayPoints": 66, "startDate": "2025-01-15"},
            {"id": 4, "homeTeam": "Duke", "awayTeam": "Navy", "startDate": "2025-01-20"}
        ]))
        .unwrap()
    }

    #[test]
    fn team_record_and_running_percentage() {
        let v = win_loss_view(&games(), Some("Duke"));
        let get = |k: &str| v.facts.iter().find(|(l, _)| l == k).map(|(_, v)| v.clone()).unwrap();
        assert_eq!(get("Total games"), "3");
        assert_eq!(get("Home record"), "1-0");
        assert_eq!(get("Away record"), "1-1");
        assert_eq!(get("Win percentage"), "66.7%");

        let ChartBody::Lines(series) = &v.running_pct.body else { panic!("lines") };
        let ys: Vec<f64> = series[0].points.iter().map(|p| p[1]).collect();
        assert_eq!(ys[0], 100.0);
        assert_eq!(ys[1], 50.0);
        assert!((ys[2] - 66.666).abs() < 0.01);
        assert_eq!(v.running_pct.note.as_deref(), Some("1 games omitted (no score)"));
    }

    #[test]
    fn league_counts_home_and_away_wins() {
        let v = win_loss_view(&games(), None);
        let ChartBody::Bars { bars, .. } = &v.breakdown.body else { panic!("bars") };
        assert_eq!(bars[0].value, 2.0);
        assert_eq!(bars[1].value, 1.0);
        assert!(v.running_pct.is_placeholder());
    }

    #[test]
    fn unknown_team_degrades_to_placeholders() {
        let v = win_loss_view(&games(), Some("Gonzaga"));
        assert!(v.facts.is_empty());
        assert!(v.breakdown.is_placeholder());
    }
}
