// src/model/ratings.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient;

/// Tempo-free efficiency row from `/ratings/adjusted`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedRating {
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    pub season: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub offensive_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub defensive_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub net_rating: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Simple Rating System row from `/ratings/srs`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SrsRating {
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    pub season: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingSet {
    #[serde(default, deserialize_with = "lenient::vec_of")]
    pub adjusted: Vec<AdjustedRating>,
    #[serde(default, deserialize_with = "lenient::vec_of")]
    pub srs: Vec<SrsRating>,
}

/// One `ratings.json` entry. Teams with no ratings still get an entry with
/// empty lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRatings {
    pub team: String,
    #[serde(default)]
    pub ratings: RatingSet,
}

impl TeamRatings {
    pub fn empty(team: &str) -> Self {
        Self { team: s!(team), ratings: RatingSet::default() }
    }

    pub fn adjusted(&self) -> Option<&AdjustedRating> {
        self.ratings.adjusted.first()
    }

    pub fn net_rating(&self) -> Option<f64> {
        let adj = self.adjusted()?;
        adj.net_rating
            .or_else(|| Some(adj.offensive_rating? - adj.defensive_rating?))
    }

    pub fn srs(&self) -> Option<f64> {
        self.ratings.srs.first().and_then(|r| r.rating)
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.adjusted.is_empty() && self.ratings.srs.is_empty()
    }
}
