//! Wire-format helpers for business dates.
//!
//! Forms edit dates as date-only values, but the backend has historically
//! stored some of them as full ISO timestamps. Deserialization therefore
//! accepts `2024-03-01`, `2024-03-01T10:30:00Z`, and the zone-less
//! `2024-03-01T10:30:00`, keeping only the date part. Serialization always
//! emits the date-only form, which every endpoint accepts.
//!
//! Use on struct fields via `#[serde(with = "dates::compat")]`, or
//! `dates::compat_opt` for `Option<NaiveDate>` fields.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    None
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub mod compat {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw:?}")))
    }
}

pub mod compat_opt {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&format_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse_date(raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid date: {raw:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Dated {
        #[serde(with = "super::compat")]
        date: NaiveDate,
        #[serde(default, with = "super::compat_opt")]
        end: Option<NaiveDate>,
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_date_only() {
        assert_eq!(parse_date("2024-03-01"), Some(d(2024, 3, 1)));
    }

    #[test]
    fn test_parse_iso_timestamp_keeps_date_part() {
        assert_eq!(parse_date("2024-03-01T10:30:00Z"), Some(d(2024, 3, 1)));
        assert_eq!(
            parse_date("2024-03-01T23:59:59+03:00"),
            Some(d(2024, 3, 1))
        );
        assert_eq!(parse_date("2024-03-01T10:30:00.123"), Some(d(2024, 3, 1)));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("").is_none());
        assert!(parse_date("03/01/2024").is_none());
    }

    #[test]
    fn test_timestamp_reserializes_as_date_only() {
        let dated: Dated =
            serde_json::from_str(r#"{"date": "2024-03-01T10:30:00Z"}"#).unwrap();
        assert_eq!(dated.date, d(2024, 3, 1));
        assert!(dated.end.is_none());

        let json = serde_json::to_string(&dated).unwrap();
        assert_eq!(json, r#"{"date":"2024-03-01","end":null}"#);
    }

    #[test]
    fn test_optional_date_accepts_null_and_empty() {
        let dated: Dated =
            serde_json::from_str(r#"{"date": "2024-03-01", "end": null}"#).unwrap();
        assert!(dated.end.is_none());

        let dated: Dated =
            serde_json::from_str(r#"{"date": "2024-03-01", "end": ""}"#).unwrap();
        assert!(dated.end.is_none());

        let dated: Dated =
            serde_json::from_str(r#"{"date": "2024-03-01", "end": "2024-06-30"}"#).unwrap();
        assert_eq!(dated.end, Some(d(2024, 6, 30)));
    }
}
