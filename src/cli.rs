// src/cli.rs
//
// `collect` front end: argument parsing, the team-count prompt, an indicatif
// progress bar and the closing report. All real work is in `collect::run`.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    collect::{self, RunReport},
    config::{
        consts::{DEFAULT_OUT_DIR, DEFAULT_SEASON, LOG_FILE, REQUEST_PAUSE_MS},
        options::{CollectOptions, TeamLimit},
        settings::Settings,
    },
    core::{sanitize, ApiClient},
    log,
    progress::Progress,
};

#[derive(Parser, Debug)]
#[command(name = "collect", version, about = "Collect college basketball data into per-dataset JSON files")]
pub struct Args {
    /// Number of teams to collect, 0 for all. Asked interactively when omitted.
    #[arg(short = 'n', long)]
    pub teams: Option<usize>,

    #[arg(long, default_value_t = DEFAULT_SEASON)]
    pub season: u16,

    /// Output directory, created if missing.
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Also write a flattened CSV next to each JSON array.
    #[arg(long)]
    pub csv: bool,

    /// Pause between teams, in milliseconds.
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Only games with this status (scheduled, in_progress, final, postponed, cancelled).
    #[arg(long, value_parser = parse_status)]
    pub status: Option<String>,

    #[arg(long, default_value = LOG_FILE)]
    pub log: PathBuf,
}

fn parse_status(s: &str) -> std::result::Result<String, String> {
    sanitize::validate_status(s).map_err(|e| e.to_string())
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    log::init(&args.log);
    logf!("collect: {args:?}");

    // Checked before the prompt so a missing key fails fast and makes no requests.
    let settings = Settings::from_env().wrap_err("cannot start collection")?;

    let teams = match args.teams {
        Some(n) => TeamLimit::from_count(Some(n)),
        None if io::stdin().is_terminal() => {
            prompt_team_count(io::stdin().lock(), io::stdout()).wrap_err("reading team count")?
        }
        None => TeamLimit::All,
    };

    let opts = CollectOptions {
        season: args.season,
        teams,
        out_dir: args.out,
        write_csv: args.csv,
        pause: Duration::from_millis(args.pause_ms),
        game_status: args.status,
    };

    let mut progress = CliProgress::new();
    let report = collect::run_with(Ok(settings), ApiClient::new, &opts, Some(&mut progress))
        .wrap_err_with(|| format!("collection for season {} failed", opts.season))?;

    print_report(&report, &opts);
    Ok(())
}

/// Ask for a team count until the answer is blank, EOF or a whole number.
pub fn prompt_team_count<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<TeamLimit> {
    loop {
        write!(out, "Number of teams (blank or 0 for all): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(TeamLimit::All);
        }
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(TeamLimit::All);
        }
        match answer.parse::<usize>() {
            Ok(n) => return Ok(TeamLimit::from_count(Some(n))),
            Err(_) => writeln!(out, "Please enter a whole number, e.g. 10.")?,
        }
    }
}

struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        let style = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} teams [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        self.bar.set_style(style);
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    fn log(&mut self, msg: &str) {
        self.bar.set_message(msg.to_owned());
    }

    fn item_done(&mut self, _team: &str) {
        self.bar.inc(1);
    }

    fn item_failed(&mut self, team: &str, reason: &str) {
        self.bar.println(format!("  ! {team}: {reason}"));
    }

    fn finish(&mut self) {
        self.bar.finish_with_message("done");
    }
}

fn print_report(r: &RunReport, opts: &CollectOptions) {
    println!();
    println!(
        "Season {}: processed {}/{} teams ({} available)",
        r.season, r.teams_processed, r.teams_selected, r.teams_available
    );
    let c = &r.counts;
    for (label, n) in [
        ("teams", c.teams),
        ("games", c.games),
        ("team stats", c.team_stats),
        ("betting lines", c.betting_lines),
        ("ratings", c.ratings),
    ] {
        println!("  {label:<14}{n:>6}");
    }

    if !r.is_clean() {
        println!("  {} request(s) failed and were skipped:", r.failures.len());
        for f in r.failures.iter().take(10) {
            println!("    {} / {}: {}", f.team, f.endpoint, f.message);
        }
        if r.failures.len() > 10 {
            println!("    … and {} more (see {})", r.failures.len() - 10, log::path().map(|p| p.display().to_string()).unwrap_or_default());
        }
    }
    println!("Wrote {} files to {}", r.written.len(), opts.out_dir.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &str) -> (TeamLimit, String) {
        let mut out = Vec::new();
        let limit = prompt_team_count(input.as_bytes(), &mut out).unwrap();
        (limit, String::from_utf8(out).unwrap())
    }

    #[test]
    fn blank_zero_and_eof_mean_all() {
        assert_eq!(ask("\n").0, TeamLimit::All);
        assert_eq!(ask("0\n").0, TeamLimit::All);
        assert_eq!(ask("").0, TeamLimit::All);
        assert_eq!(ask("  7  \n").0, TeamLimit::First(7));
    }

    #[test]
    fn invalid_answers_reprompt() {
        let (limit, shown) = ask("ten\n-3\n4\n");
        assert_eq!(limit, TeamLimit::First(4));
        assert_eq!(shown.matches("Number of teams").count(), 3);
        assert_eq!(shown.matches("whole number").count(), 2);
    }

    #[test]
    fn args_parse_with_defaults() {
        let a = Args::try_parse_from(["collect", "-n", "3", "--status", "Final"]).unwrap();
        assert_eq!(a.teams, Some(3));
        assert_eq!(a.season, DEFAULT_SEASON);
        assert_eq!(a.out, PathBuf::from(DEFAULT_OUT_DIR));
        assert_eq!(a.status.as_deref(), Some("final"));
        assert!(!a.csv);

        assert!(Args::try_parse_from(["collect", "--status", "done"]).is_err());
    }
}
