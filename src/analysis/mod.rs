// src/analysis/mod.rs
//
// Pure (data, filter) -> chart computations behind every tab.

pub mod betting;
pub mod chart;
pub mod correlation;
pub mod games;
pub mod numeric;
pub mod summary;
pub mod team;
pub mod win_loss;

pub use betting::{betting_view, BettingFilter, BettingView};
pub use chart::{Bar, Bin, Chart, ChartBody, Matrix, Series, Style, XAxis};
pub use correlation::{correlation_chart, MetricGroup};
pub use games::{game_team_names, games_view, GamesView};
pub use summary::{summary_view, Facts, SummaryView};
pub use team::{team_view, TeamView};
pub use win_loss::{win_loss_view, WinLossView};
