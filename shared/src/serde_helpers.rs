//! Serde helpers for values coming from the inventory API, query strings
//! and browser forms.
//!
//! Browsers send every field as a string and send empty strings for
//! untouched inputs; the inventory API sends `null` for unset text and may
//! send date-only fields as full date-times. These helpers normalize both.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a calendar date, accepting a date-time and discarding the time part
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| parse_datetime(value).map(|dt| dt.date()))
}

/// Parse a date-time in naive ISO form, RFC 3339 with offset, or a bare date
/// (midnight). An offset is dropped, keeping the wall-clock time as written.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Deserialize a value that may be `null`, falling back to `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserialize an optional string through `FromStr`; blank means absent
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Parse a checkbox or query-string boolean, case-insensitively
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Some(true),
        "false" | "off" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Optional boolean from a query string; blank means absent
pub fn optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_bool(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid boolean: {}", s))),
    }
}

/// `Option<NaiveDate>` that accepts `null`, blank, a date or a date-time
pub mod optional_date {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => s.serialize_some(&date.format(DATE_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_date(s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", s))),
        }
    }
}

/// `Option<NaiveDateTime>` that accepts `null`, blank, or any form of [`parse_datetime`]
pub mod optional_datetime {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => s.serialize_some(dt),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_datetime(s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date-time: {}", s))),
        }
    }
}

/// `NaiveDateTime` that tolerates offsets and `null` (epoch)
pub mod lenient_datetime {
    use super::*;
    use serde::{Serialize, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::optional_datetime::deserialize(d).map(Option::unwrap_or_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
        #[serde(default, deserialize_with = "empty_as_none")]
        number: Option<i32>,
        #[serde(default, deserialize_with = "optional_bool")]
        flag: Option<bool>,
        #[serde(default, with = "optional_date")]
        date: Option<NaiveDate>,
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_accepts_datetime() {
        assert_eq!(parse_date("2024-05-01"), Some(ymd(2024, 5, 1)));
        assert_eq!(parse_date("2024-05-01T23:59:00"), Some(ymd(2024, 5, 1)));
        assert_eq!(parse_date("2024-05-01T23:59:00.1234567"), Some(ymd(2024, 5, 1)));
        assert_eq!(parse_date("2024-05-01T10:00:00+02:00"), Some(ymd(2024, 5, 1)));
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_parse_datetime_keeps_wall_clock() {
        let dt = parse_datetime("2024-05-01T23:59:00Z").unwrap();
        assert_eq!(dt, ymd(2024, 5, 1).and_hms_opt(23, 59, 0).unwrap());

        let midnight = parse_datetime("2024-05-01").unwrap();
        assert_eq!(midnight, ymd(2024, 5, 1).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_json_nulls_and_blanks() {
        let probe: Probe =
            serde_json::from_str(r#"{"text":null,"number":"","flag":null,"date":null}"#).unwrap();
        assert_eq!(probe.text, "");
        assert_eq!(probe.number, None);
        assert_eq!(probe.flag, None);
        assert_eq!(probe.date, None);
    }

    #[test]
    fn test_json_values() {
        let probe: Probe = serde_json::from_str(
            r#"{"text":"milk","number":" 12 ","flag":"FALSE","date":"2024-05-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(probe.text, "milk");
        assert_eq!(probe.number, Some(12));
        assert_eq!(probe.flag, Some(false));
        assert_eq!(probe.date, Some(ymd(2024, 5, 1)));
    }

    #[test]
    fn test_parse_bool_accepts_checkbox_values() {
        assert_eq!(parse_bool("on"), Some(true));
        assert_eq!(parse_bool(" True "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(serde_json::from_str::<Probe>(r#"{"number":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"flag":"maybe"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"date":"05/01/2024"}"#).is_err());
    }
}
