//! Best-effort decoding for scalar document fields.
//!
//! Documents written by older clients carry numbers as strings, integers as
//! floats or spec values as numbers. A field of the wrong shape reads as its
//! neutral default so the rest of the document still renders.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Use with `#[serde(default, deserialize_with = "lenient::integer")]`
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_integer).unwrap_or_default())
}

/// Use with `#[serde(default, deserialize_with = "lenient::flag")]`
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// String-to-string map; scalar values are stringified, nested ones dropped
pub fn string_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Object(map)) = value else {
        return Ok(BTreeMap::new());
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| as_text(value).map(|text| (key, text)))
        .collect())
}

pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

fn as_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "integer")]
        count: i64,
        #[serde(default, deserialize_with = "flag")]
        active: bool,
        #[serde(default, deserialize_with = "string_map")]
        specs: BTreeMap<String, String>,
    }

    fn read(value: Value) -> Fields {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_integer_shapes() {
        assert_eq!(read(json!({"count": 100})).count, 100);
        assert_eq!(read(json!({"count": "100"})).count, 100);
        assert_eq!(read(json!({"count": " 25 "})).count, 25);
        assert_eq!(read(json!({"count": 1.0})).count, 1);
        assert_eq!(read(json!({"count": "3.0"})).count, 3);
    }

    #[test]
    fn test_unreadable_integer_is_zero() {
        assert_eq!(read(json!({"count": 2.5})).count, 0);
        assert_eq!(read(json!({"count": "lots"})).count, 0);
        assert_eq!(read(json!({"count": [1]})).count, 0);
        assert_eq!(read(json!({"count": null})).count, 0);
        assert_eq!(read(json!({})).count, 0);
    }

    #[test]
    fn test_flag_shapes() {
        assert!(read(json!({"active": true})).active);
        assert!(read(json!({"active": "TRUE"})).active);
        assert!(!read(json!({"active": "no"})).active);
        assert!(!read(json!({"active": 1})).active);
        assert!(!read(json!({})).active);
    }

    #[test]
    fn test_string_map_stringifies_scalars() {
        let specs = read(json!({"specs": {
            "Moisture": 14,
            "Grade": "A",
            "Organic": true,
            "Ratio": 0.5,
            "Nested": {"a": 1},
            "Missing": null,
        }}))
        .specs;

        assert_eq!(specs.len(), 4);
        assert_eq!(specs["Moisture"], "14");
        assert_eq!(specs["Grade"], "A");
        assert_eq!(specs["Organic"], "true");
        assert_eq!(specs["Ratio"], "0.5");

        assert!(read(json!({"specs": "n/a"})).specs.is_empty());
    }
}
