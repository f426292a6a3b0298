// src/analysis/betting.rs
use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::chart::{day_number, Chart, ChartBody, Series, Style};
use super::numeric::{histogram, mean};
use super::summary::Facts;
use crate::config::consts::HISTOGRAM_BINS;
use crate::model::BettingLine;

/// Team plus an inclusive date range; `None` means unbounded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BettingFilter {
    pub team: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl BettingFilter {
    fn has_dates(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Lines without a parseable date never match a date-bounded filter.
    pub fn matches(&self, line: &BettingLine) -> bool {
        if let Some(team) = &self.team {
            if !line.involves(team) {
                return false;
            }
        }
        if !self.has_dates() {
            return true;
        }
        let Some(d) = line.date() else { return false };
        self.from.is_none_or(|f| d >= f) && self.to.is_none_or(|t| d <= t)
    }
}

/// Teams that appear in any line, sorted.
pub fn team_options(lines: &[BettingLine]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|l| [l.home_team.as_deref(), l.away_team.as_deref()])
        .flatten()
        .filter(|n| !n.trim().is_empty())
        .map(String::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Earliest and latest line date.
pub fn date_span(lines: &[BettingLine]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = lines.iter().filter_map(BettingLine::date);
    let first = dates.next()?;
    Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
}

#[derive(Clone, Debug, PartialEq)]
pub struct BettingView {
    pub matched: usize,
    pub facts: Facts,
    pub spread_distribution: Chart,
    pub over_under_distribution: Chart,
    pub spread_trend: Chart,
    pub total_vs_line: Chart,
}

fn hist(title: &str, x: &str, values: &[f64], missing: usize, what: &str) -> Chart {
    let chart = if values.is_empty() {
        Chart::placeholder(title, format!("No lines with {what}"))
    } else {
        Chart::new(title, ChartBody::Histogram(histogram(values, HISTOGRAM_BINS))).axes(x, "Frequency")
    };
    chart.omitted(missing, "lines", &format!("no {what}"))
}

pub fn betting_view(lines: &[BettingLine], filter: &BettingFilter) -> BettingView {
    let mut selected: Vec<&BettingLine> = lines.iter().filter(|l| filter.matches(l)).collect();
    selected.sort_by_key(|l| (l.date().is_none(), l.date()));
    let n = selected.len();

    let spreads: Vec<f64> = selected.iter().filter_map(|l| l.spread()).collect();
    let totals: Vec<f64> = selected.iter().filter_map(|l| l.over_under()).collect();

    let facts = vec![
        (s!("Games with lines"), n.to_string()),
        (s!("Average spread"), or_dash!(mean(&spreads), "{:.1}")),
        (s!("Average over/under"), or_dash!(mean(&totals), "{:.1}")),
    ];

    let spread_distribution = hist("Spread Distribution", "Spread", &spreads, n - spreads.len(), "spread");
    let over_under_distribution =
        hist("Over/Under Distribution", "Over/Under", &totals, n - totals.len(), "over/under");

    let trend_pts: Vec<[f64; 2]> = selected
        .iter()
        .filter_map(|l| Some([day_number(l.date()?), l.spread()?]))
        .collect();
    let spread_trend = if trend_pts.is_empty() {
        Chart::placeholder("Spread Over Time", "No dated lines with a spread")
    } else {
        Chart::new("Spread Over Time", ChartBody::Lines(vec![Series::new("Spread", trend_pts.clone(), Style::Markers)]))
            .axes("Date", "Spread")
            .dated()
    }
    .omitted(n - trend_pts.len(), "lines", "no date or spread");

    let scatter: Vec<[f64; 2]> = selected
        .iter()
        .filter_map(|l| Some([l.over_under()?, l.total_score()? as f64]))
        .collect();
    let total_vs_line = if scatter.is_empty() {
        Chart::placeholder("Actual Total Score vs Over/Under Line", "No lines with both a total and a final score")
    } else {
        Chart::new(
            "Actual Total Score vs Over/Under Line",
            ChartBody::Scatter { points: scatter.clone(), diagonal: true },
        )
        .axes("Over/Under Line", "Actual Total Score")
    }
    .omitted(n - scatter.len(), "lines", "no over/under or score");

    BettingView {
        matched: n,
        facts,
        spread_distribution,
        over_under_distribution,
        spread_trend,
        total_vs_line,
    }
}
