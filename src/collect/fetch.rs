// src/collect/fetch.rs
//
// Typed wrappers over `Fetch`, one per API endpoint.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::config::consts::SEASON_TYPE;
use crate::core::sanitize::{query, team_param, validate_status};
use crate::core::Fetch;
use crate::error::{Error, Result};
use crate::model::{records_from_value, AdjustedRating, BettingLine, Game, SrsRating, Team, TeamSeasonStats};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Teams,
    Games,
    TeamStats,
    Lines,
    AdjustedRatings,
    SrsRatings,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Teams => "teams",
            Endpoint::Games => "games",
            Endpoint::TeamStats => "stats/team/season",
            Endpoint::Lines => "lines",
            Endpoint::AdjustedRatings => "ratings/adjusted",
            Endpoint::SrsRatings => "ratings/srs",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

fn get_records<T: DeserializeOwned>(
    api: &dyn Fetch,
    endpoint: Endpoint,
    params: &[(&str, String)],
) -> Result<Vec<T>> {
    let value = api.get_json(endpoint.path(), params)?;
    let (records, skipped) = records_from_value(value).map_err(|message| Error::Decode {
        endpoint: s!(endpoint.path()),
        message,
    })?;
    if skipped > 0 {
        logw!("{endpoint}: dropped {skipped} records that did not decode");
    }
    Ok(records)
}

fn team_query<'a>(season: u16, team: &str, extra: &[(&'a str, Option<String>)]) -> Result<Vec<(&'a str, String)>> {
    let team = team_param(team).ok_or(Error::InvalidParam { name: "team", value: s!(team) })?;
    let mut pairs: Vec<(&'a str, Option<String>)> =
        vec![("season", Some(season.to_string())), ("team", Some(team))];
    pairs.extend_from_slice(extra);
    Ok(query(&pairs))
}

/// All teams. An empty answer is retried once with the season filter.
pub fn teams(api: &dyn Fetch, season: u16) -> Result<Vec<Team>> {
    match get_records::<Team>(api, Endpoint::Teams, &[]) {
        Ok(t) if !t.is_empty() => {
            logf!("Retrieved {} teams", t.len());
            return Ok(t);
        }
        Ok(_) => logw!("/teams returned nothing; retrying with season {season}"),
        Err(e) => logw!("/teams failed ({e}); retrying with season {season}"),
    }
    let t = get_records::<Team>(api, Endpoint::Teams, &query(&[("season", Some(season.to_string()))]))?;
    logf!("Retrieved {} teams for season {season}", t.len());
    Ok(t)
}

pub fn games(api: &dyn Fetch, season: u16, team: &str, status: Option<&str>) -> Result<Vec<Game>> {
    let status = status.map(validate_status).transpose()?;
    let params = team_query(season, team, &[("seasonType", Some(s!(SEASON_TYPE))), ("status", status)])?;
    let games: Vec<Game> = get_records(api, Endpoint::Games, &params)?;

    let scored = games.iter().filter(|g| g.scores().is_some()).count();
    logf!("{team}: {} games ({scored} with scores)", games.len());
    if scored < games.len() {
        logw!("{team}: {} games have no final score", games.len() - scored);
    }
    Ok(games)
}

pub fn team_stats(api: &dyn Fetch, season: u16, team: &str) -> Result<Vec<TeamSeasonStats>> {
    let params = team_query(season, team, &[("seasonType", Some(s!(SEASON_TYPE)))])?;
    get_records(api, Endpoint::TeamStats, &params)
}

pub fn lines(api: &dyn Fetch, season: u16, team: &str) -> Result<Vec<BettingLine>> {
    let params = team_query(season, team, &[])?;
    get_records(api, Endpoint::Lines, &params)
}

pub fn adjusted_ratings(api: &dyn Fetch, season: u16, team: &str) -> Result<Vec<AdjustedRating>> {
    let params = team_query(season, team, &[])?;
    get_records(api, Endpoint::AdjustedRatings, &params)
}

pub fn srs_ratings(api: &dyn Fetch, season: u16, team: &str) -> Result<Vec<SrsRating>> {
    let params = team_query(season, team, &[])?;
    get_records(api, Endpoint::SrsRatings, &params)
}
