// src/collect/collect.rs
use std::collections::HashSet;
use std::path::PathBuf;
use std::thread;

use chrono::Local;

use super::fetch::{self, Endpoint};
use crate::{
    config::{options::CollectOptions, settings::Settings},
    core::{ApiClient, Fetch},
    error::{Error, Result},
    file::ensure_directory,
    model::{BettingLine, DatasetCounts, Game, LineKey, RatingSet, Record, Summary, Team, TeamRatings, TeamSeasonStats},
    progress::{NullProgress, Progress},
    store::{self, DatasetKind},
};

/// One request that failed and was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub team: String,
    pub endpoint: Endpoint,
    pub message: String,
}

/// What a collection run did.
#[derive(Clone, Debug, Default)]
pub struct RunReport {
    pub season: u16,
    /// Teams the API listed, before the limit.
    pub teams_available: usize,
    pub teams_selected: usize,
    pub teams_processed: usize,
    pub counts: DatasetCounts,
    pub failures: Vec<Failure>,
    pub written: Vec<PathBuf>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Default)]
struct Collected {
    games: Vec<Game>,
    seen_games: HashSet<i64>,
    stats: Vec<TeamSeasonStats>,
    lines: Vec<BettingLine>,
    seen_lines: HashSet<LineKey>,
    ratings: Vec<TeamRatings>,
    analyzed: Vec<String>,
    failures: Vec<Failure>,
}

impl Collected {
    /// Transient errors are recorded and swallowed; anything else aborts the run.
    fn soft<T>(&mut self, p: &mut dyn Progress, team: &str, endpoint: Endpoint, res: Result<T>) -> Result<Option<T>> {
        match res {
            Ok(v) => Ok(Some(v)),
            Err(e) if e.is_transient() => {
                loge!("{team}: {endpoint} failed: {e}");
                let message = e.to_string();
                p.item_failed(team, &message);
                self.failures.push(Failure { team: s!(team), endpoint, message });
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn add_games(&mut self, games: Vec<Game>) {
        for g in games {
            match g.id {
                Some(id) if self.seen_games.insert(id) => self.games.push(g),
                Some(_) => {}
                None => logd!("dropping game without id: {:?} vs {:?}", g.home_team, g.away_team),
            }
        }
    }

    fn add_lines(&mut self, lines: Vec<BettingLine>) {
        for l in lines {
            if self.seen_lines.insert(l.key()) {
                self.lines.push(l);
            }
        }
    }

    fn collect_team(
        &mut self,
        api: &dyn Fetch,
        opts: &CollectOptions,
        team: &Team,
        name: &str,
        p: &mut dyn Progress,
    ) -> Result<()> {
        let season = opts.season;

        p.log(&format!("{name}: games"));
        let team_games = self
            .soft(p, name, Endpoint::Games, fetch::games(api, season, name, opts.game_status.as_deref()))?
            .unwrap_or_default();
        let record = Record::from_games(name, &team_games);
        self.add_games(team_games);

        p.log(&format!("{name}: season stats"));
        let rows = self.soft(p, name, Endpoint::TeamStats, fetch::team_stats(api, season, name))?;
        let matched = rows.and_then(|rows| {
            rows.into_iter()
                .find(|s| s.name() == Some(name) || (s.team_id.is_some() && s.team_id == team.id))
        });
        match matched {
            Some(row) => self.stats.push(row),
            None => {
                logw!("{name}: no season stats row, using {}-{} from games", record.wins, record.losses);
                self.stats.push(TeamSeasonStats::fallback(team, season, record));
            }
        }

        p.log(&format!("{name}: betting lines"));
        if let Some(lines) = self.soft(p, name, Endpoint::Lines, fetch::lines(api, season, name))? {
            self.add_lines(lines);
        }

        p.log(&format!("{name}: ratings"));
        let adjusted = self
            .soft(p, name, Endpoint::AdjustedRatings, fetch::adjusted_ratings(api, season, name))?
            .unwrap_or_default();
        let srs = self
            .soft(p, name, Endpoint::SrsRatings, fetch::srs_ratings(api, season, name))?
            .unwrap_or_default();
        let mut entry = TeamRatings::empty(name);
        entry.ratings = RatingSet { adjusted, srs };
        if entry.is_empty() {
            logw!("{name}: no ratings, keeping an empty entry");
        }
        self.ratings.push(entry);

        self.analyzed.push(s!(name));
        Ok(())
    }
}

fn dedup_teams(teams: &mut Vec<Team>) {
    let mut seen = HashSet::new();
    teams.retain(|t| {
        let key = t.key();
        key.is_empty() || seen.insert(key)
    });
}

/// Fetch everything for the selected teams and write the dataset files.
/// Per-request failures are logged and reported; only configuration,
/// an empty team list, or I/O errors fail the run.
pub fn run(api: &dyn Fetch, opts: &CollectOptions, progress: Option<&mut dyn Progress>) -> Result<RunReport> {
    let mut null = NullProgress;
    let p: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    logf!("Starting collection for season {}", opts.season);
    p.log("Fetching team list…");
    let mut teams = fetch::teams(api, opts.season)?;
    dedup_teams(&mut teams);
    if teams.is_empty() {
        loge!("No teams returned; nothing to collect");
        return Err(Error::NoTeams);
    }

    let available = teams.len();
    opts.teams.apply(&mut teams);
    logf!("Collecting {} of {available} teams", teams.len());
    p.begin(teams.len());

    let mut acc = Collected::default();
    for team in &teams {
        let Some(name) = team.name() else {
            logw!("Skipping team without a name (id {:?})", team.id);
            p.log("Skipping team without a name");
            continue;
        };
        if !acc.analyzed.is_empty() && !opts.pause.is_zero() {
            thread::sleep(opts.pause);
        }
        acc.collect_team(api, opts, team, name, p)?;
        p.item_done(name);
    }

    p.log("Saving data…");
    let dir = opts.out_dir.as_path();
    ensure_directory(dir)?;
    let csv = opts.write_csv;

    let mut written = Vec::new();
    written.extend(store::save_records(dir, DatasetKind::Teams, &teams, csv)?);
    written.extend(store::save_records(dir, DatasetKind::Games, &acc.games, csv)?);
    written.extend(store::save_records(dir, DatasetKind::TeamStats, &acc.stats, csv)?);
    written.extend(store::save_records(dir, DatasetKind::BettingLines, &acc.lines, csv)?);
    written.extend(store::save_records(dir, DatasetKind::Ratings, &acc.ratings, csv)?);

    let counts = DatasetCounts {
        teams: teams.len(),
        games: acc.games.len(),
        team_stats: acc.stats.len(),
        betting_lines: acc.lines.len(),
        ratings: acc.ratings.len(),
    };
    let summary = Summary::compute(
        opts.season,
        acc.analyzed.clone(),
        &acc.games,
        &acc.lines,
        counts.clone(),
        acc.failures.len(),
        Local::now(),
    );
    written.push(store::save_summary(dir, &summary)?);

    logf!(
        "Season {}: {} games ({} scored), {} teams, avg total {}, {} betting lines, {} failed requests",
        summary.season,
        summary.total_games,
        summary.valid_games_with_scores,
        summary.analyzed_teams,
        summary.average_total_score,
        summary.total_betting_lines,
        summary.failed_requests
    );
    p.finish();

    Ok(RunReport {
        season: opts.season,
        teams_available: available,
        teams_selected: teams.len(),
        teams_processed: acc.analyzed.len(),
        counts,
        failures: acc.failures,
        written,
    })
}

/// Validate settings, build a client, then run. A settings error returns
/// before `connect` is called, so no client or request exists.
pub fn run_with<F, C>(
    settings: Result<Settings>,
    connect: C,
    opts: &CollectOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunReport>
where
    F: Fetch,
    C: FnOnce(&Settings) -> Result<F>,
{
    let settings = settings?;
    let api = connect(&settings)?;
    run(&api, opts, progress)
}

/// Settings from the environment, live HTTP client.
pub fn run_live(opts: &CollectOptions, progress: Option<&mut dyn Progress>) -> Result<RunReport> {
    run_with(Settings::from_env(), ApiClient::new, opts, progress)
}
