// benches/analysis.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use cbb_stats::analysis::{betting_view, correlation_chart, games_view, BettingFilter, MetricGroup};
use cbb_stats::model::{BettingLine, Game, TeamSeasonStats};

const TEAMS: usize = 360;

fn team(i: usize) -> String {
    format!("Team {i:03}")
}

// A full season's worth of synthetic records; every tenth game unscored.
fn sample_games() -> Vec<Game> {
    let rows: Vec<_> = (0..TEAMS * 30)
        .map(|i| {
            let (h, a) = (i % TEAMS, (i * 7 + 1) % TEAMS);
            let day = 1 + i % 28;
            if i % 10 == 0 {
                json!({"id": i, "homeTeam": team(h), "awayTeam": team(a), "startDate": format!("2025-01-{day:02}")})
            } else {
                json!({"id": i, "homeTeam": team(h), "awayTeam": team(a), "startDate": format!("2025-01-{day:02}"),
                       "homePoints": 60 + i % 31, "awayPoints": 55 + i % 37})
            }
        })
        .collect();
    serde_json::from_value(json!(rows)).unwrap_or_default()
}

fn sample_lines() -> Vec<BettingLine> {
    let rows: Vec<_> = (0..TEAMS * 20)
        .map(|i| {
            json!({"gameId": i, "homeTeam": team(i % TEAMS), "awayTeam": team((i + 3) % TEAMS),
                   "startDate": format!("2025-02-{:02}T00:00:00Z", 1 + i % 28),
                   "homeScore": 70 + i % 13, "awayScore": 65 + i % 17,
                   "lines": [{"provider": "consensus", "spread": -((i % 25) as f64) / 2.0, "overUnder": 130.0 + (i % 30) as f64}]})
        })
        .collect();
    serde_json::from_value(json!(rows)).unwrap_or_default()
}

fn sample_stats() -> Vec<TeamSeasonStats> {
    let rows: Vec<_> = (0..TEAMS)
        .map(|i| {
            json!({"team": team(i), "games": 30, "wins": i % 31, "losses": 30 - i % 31, "pace": 60.0 + (i % 15) as f64,
                   "offense": {"points": {"total": 2000 + i * 3}, "assists": 400 + i % 50,
                               "fieldGoals": {"pct": 40.0 + (i % 12) as f64}}})
        })
        .collect();
    serde_json::from_value(json!(rows)).unwrap_or_default()
}

fn bench_views(c: &mut Criterion) {
    let games = sample_games();
    let lines = sample_lines();
    let stats = sample_stats();

    c.bench_function("games_view_all", |b| {
        b.iter(|| black_box(games_view(black_box(&games), None).scored))
    });

    c.bench_function("games_view_team", |b| {
        b.iter(|| black_box(games_view(black_box(&games), Some("Team 042")).scored))
    });

    let filter = BettingFilter {
        team: Some(team(7)),
        from: chrono::NaiveDate::from_ymd_opt(2025, 2, 5),
        to: chrono::NaiveDate::from_ymd_opt(2025, 2, 20),
    };
    c.bench_function("betting_view_filtered", |b| {
        b.iter(|| black_box(betting_view(black_box(&lines), black_box(&filter)).matched))
    });

    c.bench_function("correlation_basic", |b| {
        b.iter(|| black_box(correlation_chart(black_box(&stats), MetricGroup::Basic)))
    });
}

criterion_group!(benches, bench_views);
criterion_main!(benches);
