// src/core/net.rs

// Blocking JSON GET against the stats API (bearer auth).

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::config::settings::Settings;
use crate::error::{Error, Result};

/// Anything that can answer an endpoint + query with a JSON body.
/// The collector only talks to this, so tests can swap in a stub.
pub trait Fetch {
    fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value>;
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: s!(settings.base_url()),
            api_key: s!(settings.api_key()),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

impl Fetch for ApiClient {
    fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = self.url(endpoint);
        logd!("GET {url} {params:?}");

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .query(params)
            .send()
            .map_err(|source| Error::Request { endpoint: s!(endpoint), source })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            if status.as_u16() == 400 {
                loge!("Bad request to {endpoint} {params:?}: {body}");
            } else {
                loge!("{endpoint} answered HTTP {status}");
            }
            return Err(Error::Status { endpoint: s!(endpoint), status: status.as_u16(), body });
        }

        let value: Value = resp.json().map_err(|e| Error::Decode {
            endpoint: s!(endpoint),
            message: e.to_string(),
        })?;

        match &value {
            Value::Array(items) => logf!("{endpoint}: {} records", items.len()),
            Value::Object(_) => logf!("{endpoint}: 1 object"),
            _ => logw!("{endpoint}: unexpected JSON scalar"),
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let settings = Settings::from_lookup(|k| match k {
            "API_KEY" => Some(s!("k")),
            "CBB_API_BASE_URL" => Some(s!("http://localhost:1/")),
            _ => None,
        })
        .unwrap();
        let api = ApiClient::new(&settings).unwrap();
        assert_eq!(api.url("/teams"), "http://localhost:1/teams");
        assert_eq!(api.url("stats/team/season"), "http://localhost:1/stats/team/season");
    }
}
