// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://api.collegebasketballdata.com";
pub const USER_AGENT: &str = concat!("cbb_stats/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Environment
pub const API_KEY_VAR: &str = "API_KEY";
pub const BASE_URL_VAR: &str = "CBB_API_BASE_URL";

// Collect
pub const DEFAULT_SEASON: u16 = 2025;
pub const SEASON_TYPE: &str = "regular";
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite
pub const GAME_STATUSES: [&str; 5] = ["scheduled", "in_progress", "final", "postponed", "cancelled"];

// Output
pub const DEFAULT_OUT_DIR: &str = "data_output";
pub const LOG_FILE: &str = "cbb_stats.log";

// Charts
pub const HISTOGRAM_BINS: usize = 20;
pub const MOVING_AVG_WINDOW: usize = 5;
pub const TOP_TEAMS: usize = 10;
