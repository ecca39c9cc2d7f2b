//! Custom serde helpers for the exchange's wire formats.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Bittrex timestamp layout: ISO-8601 without a timezone designator,
/// fractional seconds of varying width (`2014-07-09T03:21:20.08`).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub(crate) fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    // Timezone-less by contract; treated as UTC.
    let naive = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)?;
    Ok(Utc.from_utc_datetime(&naive))
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.naive_utc().format(TIMESTAMP_FORMAT).to_string()
}

/// (De)serializes a `DateTime<Utc>` in the exchange's timezone-less format.
pub mod timestamp {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_timestamp(&s)
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {s:?}: {e}")))
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(value))
    }
}

/// Like [`timestamp`], but for nullable fields. Use together with
/// `#[serde(default)]` so absent fields also decode to `None`.
pub mod opt_timestamp {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt = Option::<String>::deserialize(deserializer)?;
        opt.map(|s| {
            parse_timestamp(&s)
                .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {s:?}: {e}")))
        })
        .transpose()
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_some(&format_timestamp(ts)),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_short_fractional_seconds() {
        let ts = parse_timestamp("2014-07-09T03:21:20.08").unwrap();
        assert_eq!(ts.to_rfc3339(), "2014-07-09T03:21:20.080+00:00");
    }

    #[test]
    fn parses_millisecond_precision() {
        let ts = parse_timestamp("2014-07-09T04:01:00.667").unwrap();
        assert_eq!(ts.nanosecond(), 667_000_000);
    }

    #[test]
    fn parses_whole_seconds() {
        let ts = parse_timestamp("2014-02-13T00:00:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2014-02-13T00:00:00+00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("not-a-date").is_err());
        assert!(parse_timestamp("2014-13-40T99:00:00").is_err());
    }

    #[test]
    fn round_trips_through_wire_format() {
        let ts = parse_timestamp("2014-07-09T03:21:20.08").unwrap();
        assert_eq!(parse_timestamp(&format_timestamp(&ts)).unwrap(), ts);
    }
}
