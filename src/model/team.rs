// src/model/team.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient;

/// Static reference data for one program.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Team name as the API spells it ("Duke", "North Carolina").
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Team {
    pub fn new(id: i64, school: &str, conference: Option<&str>) -> Self {
        Self {
            id: Some(id),
            school: Some(s!(school)),
            conference: conference.map(String::from),
            extra: Map::new(),
        }
    }

    /// `school`, falling back to `displayName`; blank names count as absent.
    pub fn name(&self) -> Option<&str> {
        self.school
            .as_deref()
            .or_else(|| self.extra.get("displayName").and_then(Value::as_str))
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    /// Identity within `teams.json`: the id, or the name when the id is missing.
    pub fn key(&self) -> String {
        match (self.id, self.name()) {
            (Some(id), _) => format!("id:{id}"),
            (None, Some(n)) => format!("name:{n}"),
            (None, None) => s!(),
        }
    }
}
