// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// How many teams a collection run covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TeamLimit {
    #[default]
    All,
    First(usize),
}

impl TeamLimit {
    /// User-facing count: blank or 0 means every team.
    pub fn from_count(n: Option<usize>) -> Self {
        match n {
            None | Some(0) => TeamLimit::All,
            Some(n) => TeamLimit::First(n),
        }
    }

    pub fn apply<T>(&self, items: &mut Vec<T>) {
        if let TeamLimit::First(n) = *self {
            items.truncate(n);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    pub season: u16,
    pub teams: TeamLimit,
    pub out_dir: PathBuf,
    pub write_csv: bool,
    pub pause: Duration,
    /// Optional `status` filter for `/games`; validated when the request is built.
    pub game_status: Option<String>,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            season: DEFAULT_SEASON,
            teams: TeamLimit::All,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            write_csv: false,
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            game_status: None,
        }
    }
}

/// One visualizer tab each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PageKind {
    #[default]
    Summary,
    Team,
    Games,
    Betting,
    WinLoss,
    Correlation,
}

#[cfg(test)]
mod tests {
    use super::TeamLimit;

    #[test]
    fn zero_and_blank_mean_all() {
        assert_eq!(TeamLimit::from_count(None), TeamLimit::All);
        assert_eq!(TeamLimit::from_count(Some(0)), TeamLimit::All);
        assert_eq!(TeamLimit::from_count(Some(3)), TeamLimit::First(3));
    }

    #[test]
    fn apply_truncates_only_when_bounded() {
        let mut v = vec![1, 2, 3, 4];
        TeamLimit::First(2).apply(&mut v);
        assert_eq!(v, vec![1, 2]);

        let mut w = vec![1, 2, 3];
        TeamLimit::All.apply(&mut w);
        assert_eq!(w.len(), 3);

        let mut short = vec![1];
        TeamLimit::First(5).apply(&mut short);
        assert_eq!(short, vec![1]);
    }
}
