// src/model/lenient.rs
//
// Field deserializers for `#[serde(default, deserialize_with = ...)]`.
// A value of the wrong type becomes `None` for that field only; the record
// itself still loads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn value_f64(v: &Value) -> Option<f64> {
    let x = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    x.is_finite().then_some(x)
}

pub fn value_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| whole(n.as_f64()?)),
        Value::String(s) => {
            let t = s.trim();
            t.parse::<i64>().ok().or_else(|| whole(t.parse::<f64>().ok()?))
        }
        _ => None,
    }
}

fn whole(x: f64) -> Option<i64> {
    (x.is_finite() && x.fract() == 0.0 && x.abs() < 9.0e15).then_some(x as i64)
}

pub fn opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(value_f64))
}

pub fn opt_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(value_i64))
}

pub fn opt_u32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(value_i64).and_then(|n| u32::try_from(n).ok()))
}

pub fn opt_bool<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Strings stay strings, numbers are rendered, anything else is dropped.
pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Nested objects that fail to decode are treated as absent.
pub fn opt_obj<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.and_then(|v| serde_json::from_value(v).ok()))
}

/// Arrays keep the elements that decode.
pub fn vec_of<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|it| serde_json::from_value(it).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Deserialize, Debug)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_u32")]
        pts: Option<u32>,
        #[serde(default, deserialize_with = "opt_f64")]
        spread: Option<f64>,
        #[serde(default, deserialize_with = "opt_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "opt_bool")]
        neutral: Option<bool>,
    }

    fn probe(v: Value) -> Probe {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn numbers_and_numeric_strings_coerce() {
        let p = probe(json!({"pts": "75", "spread": "-3.5", "name": 12, "neutral": "TRUE"}));
        assert_eq!(p.pts, Some(75));
        assert_eq!(p.spread, Some(-3.5));
        assert_eq!(p.name.as_deref(), Some("12"));
        assert_eq!(p.neutral, Some(true));

        let p = probe(json!({"pts": 81.0}));
        assert_eq!(p.pts, Some(81));
    }

    #[test]
    fn junk_becomes_none_without_failing_the_record() {
        let p = probe(json!({"pts": "n/a", "spread": {"x": 1}, "name": [1], "neutral": 3}));
        assert_eq!(p.pts, None);
        assert_eq!(p.spread, None);
        assert_eq!(p.name, None);
        assert_eq!(p.neutral, None);

        let p = probe(json!({"pts": -4, "spread": null}));
        assert_eq!(p.pts, None);
        assert_eq!(p.spread, None);
    }

    #[test]
    fn missing_fields_default_to_none() {
        let p = probe(json!({}));
        assert!(p.pts.is_none() && p.spread.is_none() && p.name.is_none());
    }

    #[test]
    fn integer_parsing_rejects_fractions() {
        assert_eq!(value_i64(&json!(3.5)), None);
        assert_eq!(value_i64(&json!("42")), Some(42));
        assert_eq!(value_i64(&json!("42.0")), Some(42));
    }
}
