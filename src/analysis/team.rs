// src/analysis/team.rs
use super::chart::{day_number, Bar, Chart, ChartBody, Series, Style};
use super::numeric::{histogram, rolling_mean};
use super::summary::Facts;
use crate::config::consts::{HISTOGRAM_BINS, MOVING_AVG_WINDOW};
use crate::data::DataBundle;
use crate::model::{Game, Outcome, Record, Side, TeamSeasonStats};

#[derive(Clone, Debug, PartialEq)]
pub struct TeamView {
    pub team: String,
    pub overview: Facts,
    pub record: Chart,
    pub points_distribution: Chart,
    pub points_trend: Chart,
    pub shooting: Chart,
    pub four_factors: Chart,
}

/// Every game involving `team`, scored or not, in date order (undated last,
/// stable). Callers count the unscored ones as omissions.
pub(crate) fn team_games<'a>(games: &'a [Game], team: &str) -> Vec<&'a Game> {
    let mut v: Vec<&Game> = games.iter().filter(|g| g.involves(team)).collect();
    v.sort_by_key(|g| (g.date().is_none(), g.date()));
    v
}

fn pct(x: Option<f64>) -> String {
    or_dash!(x, "{:.1}%")
}

fn one_dp(x: Option<f64>) -> String {
    or_dash!(x, "{:.1}")
}

fn overview(data: &DataBundle, team: &str, stats: Option<&TeamSeasonStats>, from_games: Record) -> Facts {
    let conference = stats
        .and_then(|s| s.conference.clone())
        .or_else(|| data.team(team).and_then(|t| t.conference.clone()));

    // Prefer the API's season line; fall back to what the games show.
    let games = stats.and_then(|s| s.games).unwrap_or(from_games.games);
    let wins = stats.and_then(|s| s.wins).unwrap_or(from_games.wins);
    let losses = stats.and_then(|s| s.losses).unwrap_or(from_games.losses);
    let record = Record { games, wins, losses };

    let off = stats.and_then(TeamSeasonStats::off);
    let per_game = |v: Option<f64>| stats.and_then(|s| s.per_game(v));
    let ratings = data.ratings_for(team);

    vec![
        (s!("Conference"), or_dash!(conference)),
        (s!("Games played"), games.to_string()),
        (s!("Wins"), wins.to_string()),
        (s!("Losses"), losses.to_string()),
        (s!("Win rate"), pct(record.win_pct())),
        (s!("Points/game"), one_dp(stats.and_then(TeamSeasonStats::points_per_game))),
        (s!("FG%"), pct(off.and_then(|o| o.field_goals.as_ref()?.pct))),
        (s!("3P%"), pct(off.and_then(|o| o.three_point_field_goals.as_ref()?.pct))),
        (s!("FT%"), pct(off.and_then(|o| o.free_throws.as_ref()?.pct))),
        (s!("Assists/game"), one_dp(per_game(off.and_then(|o| o.assists)))),
        (s!("Turnovers/game"), one_dp(per_game(off.and_then(|o| o.turnovers.as_ref()?.total)))),
        (s!("Net rating"), one_dp(ratings.and_then(|r| r.net_rating()))),
        (s!("SRS"), one_dp(ratings.and_then(|r| r.srs()))),
    ]
}

fn record_chart(team: &str, games: &[&Game]) -> Chart {
    let (mut hw, mut hl, mut aw, mut al) = (0, 0, 0, 0);
    let mut unscored = 0;
    for g in games {
        match (g.side_of(team), g.outcome_for(team)) {
            (Some(Side::Home), Some(Outcome::Win)) => hw += 1,
            (Some(Side::Home), Some(Outcome::Loss)) => hl += 1,
            (Some(Side::Away), Some(Outcome::Win)) => aw += 1,
            (Some(Side::Away), Some(Outcome::Loss)) => al += 1,
            (_, None) => unscored += 1,
            _ => {}
        }
    }
    let title = format!("Win/Loss Record - {team}");
    if hw + hl + aw + al == 0 {
        return Chart::placeholder(title, "No decided games").omitted(unscored, "games", "no score");
    }
    let bars = vec![
        Bar::new("Home W", hw as f64),
        Bar::new("Home L", hl as f64),
        Bar::new("Away W", aw as f64),
        Bar::new("Away L", al as f64),
    ];
    Chart::new(title, ChartBody::Bars { bars, horizontal: false })
        .axes("", "Games")
        .omitted(unscored, "games", "no score")
}

fn points_distribution(team: &str, games: &[&Game]) -> Chart {
    let pts: Vec<f64> = games.iter().filter(|g| g.scores().is_some()).filter_map(|g| g.points_for(team)).map(f64::from).collect();
    let missing = games.len() - pts.len();
    let title = format!("Points per Game - {team}");
    if pts.is_empty() {
        return Chart::placeholder(title, "No scored games").omitted(missing, "games", "no score");
    }
    Chart::new(title, ChartBody::Histogram(histogram(&pts, HISTOGRAM_BINS)))
        .axes("Points", "Games")
        .omitted(missing, "games", "no score")
}

/// Points by date plus a trailing average over min(5, n) games.
pub(crate) fn points_trend(team: &str, games: &[&Game]) -> Chart {
    let pts: Vec<[f64; 2]> = games
        .iter()
        .filter(|g| g.scores().is_some())
        .filter_map(|g| Some([day_number(g.date()?), f64::from(g.points_for(team)?)]))
        .collect();
    let missing = games.len() - pts.len();
    let title = format!("Points Trend - {team}");
    if pts.is_empty() {
        return Chart::placeholder(title, "No dated, scored games").omitted(missing, "games", "no score or date");
    }

    let mut series = vec![Series::new(format!("{team} points"), pts.clone(), Style::Markers)];
    if pts.len() > 1 {
        let window = MOVING_AVG_WINDOW.min(pts.len());
        let ys: Vec<f64> = pts.iter().map(|p| p[1]).collect();
        let avg: Vec<[f64; 2]> = rolling_mean(&ys, window)
            .into_iter()
            .zip(&pts)
            .filter_map(|(m, p)| Some([p[0], m?]))
            .collect();
        series.push(Series::new(format!("{window}-game moving avg"), avg, Style::Dashed));
    }
    Chart::new(title, ChartBody::Lines(series))
        .axes("Date", "Points scored")
        .dated()
        .omitted(missing, "games", "no score or date")
}

fn shooting(team: &str, stats: Option<&TeamSeasonStats>) -> Chart {
    let title = format!("Shooting Percentages - {team}");
    let Some(off) = stats.and_then(TeamSeasonStats::off) else {
        return Chart::placeholder(title, "No offensive stats");
    };
    let wanted = [
        ("Field Goals", off.field_goals.as_ref()),
        ("2-Point", off.two_point_field_goals.as_ref()),
        ("3-Point", off.three_point_field_goals.as_ref()),
        ("Free Throws", off.free_throws.as_ref()),
    ];
    let bars: Vec<Bar> = wanted
        .iter()
        .filter_map(|(label, s)| Some(Bar::new(*label, s.and_then(|s| s.pct)?)))
        .collect();
    let missing = wanted.len() - bars.len();
    if bars.is_empty() {
        return Chart::placeholder(title, "No shooting percentages");
    }
    Chart::new(title, ChartBody::Bars { bars, horizontal: false })
        .axes("", "Percentage")
        .omitted(missing, "shot types", "missing percentage")
}

fn four_factors(team: &str, stats: Option<&TeamSeasonStats>) -> Chart {
    let title = format!("Four Factors - {team}");
    let Some(ff) = stats.and_then(TeamSeasonStats::off).and_then(|o| o.four_factors.as_ref()) else {
        return Chart::placeholder(title, "No four factors");
    };
    let wanted = [
        ("eFG%", ff.effective_field_goal_pct),
        ("TO Ratio", ff.turnover_ratio),
        ("Off Reb%", ff.offensive_rebound_pct),
        ("FT Rate", ff.free_throw_rate),
    ];
    let bars: Vec<Bar> = wanted.iter().filter_map(|(l, v)| Some(Bar::new(*l, (*v)?))).collect();
    let missing = wanted.len() - bars.len();
    if bars.is_empty() {
        return Chart::placeholder(title, "No four factors");
    }
    Chart::new(title, ChartBody::Bars { bars, horizontal: false }).omitted(missing, "factors", "missing value")
}

pub fn team_view(data: &DataBundle, team: &str) -> TeamView {
    let games = team_games(data.games(), team);
    let from_games = Record::from_games(team, games.iter().copied());
    let stats = data.stats_for(team);

    TeamView {
        team: s!(team),
        overview: overview(data, team, stats, from_games),
        record: record_chart(team, &games),
        points_distribution: points_distribution(team, &games),
        points_trend: points_trend(team, &games),
        shooting: shooting(team, stats),
        four_factors: four_factors(team, stats),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn bundle() -> DataBundle {
        DataBundle {
            games: Some(serde_json::from_value(json!([
                {"id": 1, "homeTeam": "Duke", "awayTeam": "UNC", "homePoints": 80, "awayPoints": 70, "startDate": "2025-01-04T00:00:00Z"},
                {"id": 2, "homeTeam": "UNC", "awayTeam": "Duke", "homePoints": 75, "awayPoints": 71, "startDate": "2025-01-11T00:00:00Z"},
                {"id": 3, "homeTeam": "Duke", "awayTeam": "Army", "startDate": "2025-01-18T00:00:00Z"},
                {"id": 4, "homeTeam": "Duke", "awayTeam": "Navy", "homePoints": 90, "awayPoints": 60}
            ])).unwrap()),
            team_stats: Some(serde_json::from_value(json!([
                {"team": "Duke", "conference": "ACC", "games": 4, "wins": 2, "losses": 1,
                 "offense": {"fieldGoals": {"pct": 48.0}, "freeThrows": {"pct": 75.0}}}
            ])).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn unscored_game_is_left_out_and_noted() {
        let v = team_view(&bundle(), "Duke");
        let ChartBody::Histogram(bins) = &v.points_distribution.body else { panic!("histogram") };
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
        assert_eq!(v.points_distribution.note.as_deref(), Some("1 games omitted (no score)"));

        // undated game 4 is also out of the trend
        let ChartBody::Lines(series) = &v.points_trend.body else { panic!("lines") };
        assert_eq!(series[0].points.len(), 2);
        assert_eq!(series[1].name, "2-game moving avg");
        assert_eq!(series[1].points.len(), 1);
    }

    #[test]
    fn shooting_drops_missing_types_only() {
        let v = team_view(&bundle(), "Duke");
        let ChartBody::Bars { bars, .. } = &v.shooting.body else { panic!("bars") };
        assert_eq!(bars.len(), 2);
        assert_eq!(v.shooting.note.as_deref(), Some("2 shot types omitted (missing percentage)"));
        assert!(v.four_factors.is_placeholder());
    }

    #[test]
    fn overview_prefers_season_line() {
        let v = team_view(&bundle(), "Duke");
        let get = |k: &str| v.overview.iter().find(|(l, _)| l == k).map(|(_, v)| v.clone()).unwrap();
        assert_eq!(get("Conference"), "ACC");
        assert_eq!(get("Games played"), "4");
        assert_eq!(get("Win rate"), "66.7%");
        assert_eq!(get("Net rating"), "—");
    }

    #[test]
    fn record_splits_home_and_away() {
        let v = team_view(&bundle(), "Duke");
        let ChartBody::Bars { bars, .. } = &v.record.body else { panic!("bars") };
        let vals: Vec<f64> = bars.iter().map(|b| b.value).collect();
        assert_eq!(vals, vec![2.0, 0.0, 0.0, 1.0]);
    }
}
