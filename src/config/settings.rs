// src/config/settings.rs
use std::fmt;

use super::consts::{API_KEY_VAR, BASE_URL, BASE_URL_VAR};
use crate::error::{Error, Result};

/// Process configuration, loaded once at startup and validated before any
/// client is built.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    api_key: String,
    base_url: String,
}

impl Settings {
    /// Read `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` is this over `std::env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(Error::MissingApiKey)?;

        let base_url = match lookup(BASE_URL_VAR).map(|u| u.trim().to_string()) {
            Some(u) if !u.is_empty() => {
                if !(u.starts_with("http://") || u.starts_with("https://")) {
                    return Err(Error::Config(format!("{BASE_URL_VAR} must be an http(s) URL, got {u}")));
                }
                u.trim_end_matches('/').to_string()
            }
            _ => s!(BASE_URL),
        };

        Ok(Self { api_key, base_url })
    }

    pub fn api_key(&self) -> &str { &self.api_key }
    pub fn base_url(&self) -> &str { &self.base_url }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = Settings::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::MissingApiKey));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = Settings::from_lookup(lookup(&[("API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, Error::MissingApiKey));
    }

    #[test]
    fn default_and_overridden_base_url() {
        let s = Settings::from_lookup(lookup(&[("API_KEY", "k")])).unwrap();
        assert_eq!(s.base_url(), BASE_URL);
        assert_eq!(s.api_key(), "k");

        let s = Settings::from_lookup(lookup(&[
            ("API_KEY", "k"),
            ("CBB_API_BASE_URL", "http://localhost:9000/"),
        ]))
        .unwrap();
        assert_eq!(s.base_url(), "http://localhost:9000");
    }

    #[test]
    fn bad_base_url_rejected() {
        let err = Settings::from_lookup(lookup(&[("API_KEY", "k"), ("CBB_API_BASE_URL", "ftp://x")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn debug_hides_the_key() {
        let s = Settings::from_lookup(lookup(&[("API_KEY", "secret-token")])).unwrap();
        assert!(!format!("{s:?}").contains("secret-token"));
    }
}
