//! Lenient timestamp decoding for documents written by different clients.
//!
//! Accepted shapes: RFC 3339 strings, `{seconds, nanoseconds}` objects (also with
//! leading underscores) and epoch milliseconds. Anything else reads as absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Use with `#[serde(default, deserialize_with = "timestamp::deserialize")]`
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse))
}

pub fn parse(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            DateTime::from_timestamp(seconds, u32::try_from(nanos).ok()?)
        }
        _ => None,
    }
}

/// Sort key for optional timestamps; absent sorts as the epoch
pub fn or_epoch(timestamp: Option<DateTime<Utc>>) -> DateTime<Utc> {
    timestamp.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(default, deserialize_with = "deserialize")]
        at: Option<DateTime<Utc>>,
    }

    fn read(value: Value) -> Option<DateTime<Utc>> {
        serde_json::from_value::<Stamped>(value).unwrap().at
    }

    #[test]
    fn test_accepted_shapes() {
        let expected = DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(read(json!({"at": "2024-03-01T10:00:00Z"})), Some(expected));
        assert_eq!(read(json!({"at": "2024-03-01T17:00:00+07:00"})), Some(expected));
        assert_eq!(
            read(json!({"at": {"seconds": expected.timestamp(), "nanoseconds": 0}})),
            Some(expected)
        );
        assert_eq!(
            read(json!({"at": {"_seconds": expected.timestamp(), "_nanoseconds": 0}})),
            Some(expected)
        );
        assert_eq!(
            read(json!({"at": expected.timestamp_millis()})),
            Some(expected)
        );
    }

    #[test]
    fn test_unreadable_or_missing_is_absent() {
        assert_eq!(read(json!({})), None);
        assert_eq!(read(json!({"at": null})), None);
        assert_eq!(read(json!({"at": "yesterday"})), None);
        assert_eq!(read(json!({"at": true})), None);
        assert_eq!(read(json!({"at": {"nanoseconds": 5}})), None);
    }

    #[test]
    fn test_or_epoch() {
        assert_eq!(or_epoch(None).timestamp(), 0);
    }
}
