// src/analysis/correlation.rs
use super::chart::{Chart, ChartBody, Matrix};
use super::numeric::pearson;
use crate::model::{TeamSeasonStats, UnitStats};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MetricGroup {
    #[default]
    Basic,
    Offensive,
    Shooting,
    Advanced,
}

type Metric = (&'static str, fn(&TeamSeasonStats) -> Option<f64>);

fn off(s: &TeamSeasonStats) -> Option<&UnitStats> {
    s.off()
}

fn per_game(s: &TeamSeasonStats, f: impl Fn(&UnitStats) -> Option<f64>) -> Option<f64> {
    s.per_game(off(s).and_then(f))
}

const BASIC: &[Metric] = &[
    ("Wins", |s| s.wins.map(f64::from)),
    ("Losses", |s| s.losses.map(f64::from)),
    ("Win Rate", |s| s.win_pct().map(|p| p / 100.0)),
    ("Games", |s| s.games.map(f64::from)),
    ("Pace", |s| s.pace),
    ("Points/Game", |s| s.points_per_game()),
];

const OFFENSIVE: &[Metric] = &[
    ("Points/Game", |s| s.points_per_game()),
    ("Assists/Game", |s| per_game(s, |o| o.assists)),
    ("Turnovers/Game", |s| per_game(s, |o| o.turnovers.as_ref()?.total)),
    ("Off Reb/Game", |s| per_game(s, |o| o.rebounds.as_ref()?.offensive)),
    ("Def Reb/Game", |s| per_game(s, |o| o.rebounds.as_ref()?.defensive)),
];

const SHOOTING: &[Metric] = &[
    ("FG%", |s| off(s)?.field_goals.as_ref()?.pct),
    ("3P%", |s| off(s)?.three_point_field_goals.as_ref()?.pct),
    ("2P%", |s| off(s)?.two_point_field_goals.as_ref()?.pct),
    ("FT%", |s| off(s)?.free_throws.as_ref()?.pct),
    ("True Shooting%", |s| off(s)?.true_shooting),
];

const ADVANCED: &[Metric] = &[
    ("Pace", |s| s.pace),
    ("Off Rating", |s| off(s)?.rating),
    ("eFG%", |s| off(s)?.four_factors.as_ref()?.effective_field_goal_pct),
    ("TO Ratio", |s| off(s)?.four_factors.as_ref()?.turnover_ratio),
    ("Off Reb%", |s| off(s)?.four_factors.as_ref()?.offensive_rebound_pct),
];

impl MetricGroup {
    pub const ALL: [MetricGroup; 4] =
        [MetricGroup::Basic, MetricGroup::Offensive, MetricGroup::Shooting, MetricGroup::Advanced];

    pub fn label(self) -> &'static str {
        match self {
            MetricGroup::Basic => "Basic Stats",
            MetricGroup::Offensive => "Offensive Stats",
            MetricGroup::Shooting => "Shooting Stats",
            MetricGroup::Advanced => "Advanced Stats",
        }
    }

    fn metrics(self) -> &'static [Metric] {
        match self {
            MetricGroup::Basic => BASIC,
            MetricGroup::Offensive => OFFENSIVE,
            MetricGroup::Shooting => SHOOTING,
            MetricGroup::Advanced => ADVANCED,
        }
    }

    pub fn metric_names(self) -> Vec<&'static str> {
        self.metrics().iter().map(|(n, _)| *n).collect()
    }
}

/// Pearson matrix over teams that have every metric of `group`.
/// Cells are NaN where a column is constant.
pub fn correlation_chart(stats: &[TeamSeasonStats], group: MetricGroup) -> Chart {
    let metrics = group.metrics();
    let title = format!("Correlation Heatmap - {}", group.label());

    let rows: Vec<Vec<f64>> = stats
        .iter()
        .filter_map(|s| metrics.iter().map(|(_, f)| f(s)).collect::<Option<Vec<f64>>>())
        .collect();
    let dropped = stats.len() - rows.len();

    if rows.len() < 2 {
        return Chart::placeholder(title, "No valid data available for selected metrics")
            .omitted(dropped, "teams", "missing metric");
    }

    let columns: Vec<Vec<f64>> = (0..metrics.len())
        .map(|j| rows.iter().map(|r| r[j]).collect())
        .collect();
    let cells: Vec<Vec<f64>> = columns
        .iter()
        .enumerate()
        .map(|(i, a)| {
            columns
                .iter()
                .enumerate()
                .map(|(j, b)| if i == j && a.iter().any(|x| *x != a[0]) { 1.0 } else { pearson(a, b).unwrap_or(f64::NAN) })
                .collect()
        })
        .collect();

    let labels = metrics.iter().map(|(n, _)| s!(*n)).collect();
    Chart::new(title, ChartBody::Heatmap(Matrix { labels, cells })).omitted(dropped, "teams", "missing metric")
}
