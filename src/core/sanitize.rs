// src/core/sanitize.rs

use crate::config::consts::GAME_STATUSES;
use crate::error::{Error, Result};

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Team names go out trimmed with inner runs of whitespace collapsed.
pub fn team_param(name: &str) -> Option<String> {
    let n = normalize_ws(name);
    (!n.is_empty()).then_some(n)
}

/// Lowercased status if it is one the API knows.
pub fn validate_status(status: &str) -> Result<String> {
    let st = status.trim().to_ascii_lowercase();
    if GAME_STATUSES.contains(&st.as_str()) {
        Ok(st)
    } else {
        Err(Error::InvalidParam { name: "status", value: s!(status) })
    }
}

/// Drop pairs whose value is blank after trimming.
pub fn query<'a>(pairs: &[(&'a str, Option<String>)]) -> Vec<(&'a str, String)> {
    pairs
        .iter()
        .filter_map(|(k, v)| {
            let v = v.as_deref()?.trim();
            (!v.is_empty()).then(|| (*k, s!(v)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_names_are_collapsed() {
        assert_eq!(team_param("  North   Carolina\t").as_deref(), Some("North Carolina"));
        assert_eq!(team_param("   "), None);
    }

    #[test]
    fn status_must_be_known() {
        assert_eq!(validate_status(" Final ").unwrap(), "final");
        assert!(matches!(validate_status("done"), Err(Error::InvalidParam { name: "status", .. })));
    }

    #[test]
    fn empty_values_are_dropped() {
        let q = query(&[
            ("season", Some(s!("2025"))),
            ("team", Some(s!("  "))),
            ("status", None),
        ]);
        assert_eq!(q, vec![("season", s!("2025"))]);
    }
}
