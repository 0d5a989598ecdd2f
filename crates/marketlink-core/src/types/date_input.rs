//! Accepted date representations.
//!
//! Callers hand dates to the adapter in whatever form they already hold.
//! [`DateInput`] is the closed set of forms the adapter understands; anything
//! else has no conversion into it and is rejected at compile time, while a
//! malformed string is rejected when resolved.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::Date;
use crate::error::CoreResult;

/// A date in one of the representations the adapter accepts.
///
/// Serialized externally tagged (`{"timestamp": "2024-03-15T09:30:00"}`), so
/// each variant deserializes back to itself. An ISO string and a calendar
/// date share a textual form and cannot be told apart untagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateInput {
    /// Already an engine-native date.
    Engine(Date),
    /// ISO string, `YYYY-MM-DD`.
    Iso(String),
    /// Generic calendar date.
    Calendar(NaiveDate),
    /// Timestamp; the time of day is discarded.
    Timestamp(NaiveDateTime),
}

impl DateInput {
    /// Resolves this input into the engine-native date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnrecognizedDate` for strings that are not ISO dates.
    pub fn resolve(&self) -> CoreResult<Date> {
        match self {
            DateInput::Engine(date) => Ok(*date),
            DateInput::Iso(s) => Date::parse(s),
            DateInput::Calendar(date) => Ok(Date::from(*date)),
            DateInput::Timestamp(ts) => Ok(Date::from(ts.date())),
        }
    }
}

/// Resolves an optional input; an absent date stays absent.
pub fn resolve_optional(input: Option<DateInput>) -> CoreResult<Option<Date>> {
    input.map(|d| d.resolve()).transpose()
}

impl From<Date> for DateInput {
    fn from(date: Date) -> Self {
        DateInput::Engine(date)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Iso(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Iso(s)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Calendar(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(ts: NaiveDateTime) -> Self {
        DateInput::Timestamp(ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use proptest::prelude::*;

    #[test]
    fn test_resolve_each_representation() {
        let expected = Date::from_ymd(2024, 3, 15).unwrap();
        let naive = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        assert_eq!(DateInput::from(expected).resolve().unwrap(), expected);
        assert_eq!(DateInput::from("2024-03-15").resolve().unwrap(), expected);
        assert_eq!(DateInput::from(naive).resolve().unwrap(), expected);
        assert_eq!(
            DateInput::from(naive.and_hms_opt(16, 30, 0).unwrap())
                .resolve()
                .unwrap(),
            expected
        );
    }

    #[test]
    fn test_resolve_malformed_string() {
        let err = DateInput::from("March 15th").resolve().unwrap_err();
        assert_eq!(err, CoreError::unrecognized_date("March 15th"));
    }

    #[test]
    fn test_resolve_optional() {
        assert_eq!(resolve_optional(None).unwrap(), None);
        assert_eq!(
            resolve_optional(Some("2024-01-02".into())).unwrap(),
            Some(Date::from_ymd(2024, 1, 2).unwrap())
        );
        assert!(resolve_optional(Some("2024-13-02".into())).is_err());
    }

    #[test]
    fn test_serde_keeps_variant() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let inputs = [
            DateInput::from(Date::from(naive)),
            DateInput::from("2024-03-15"),
            DateInput::from(naive),
            DateInput::from(naive.and_hms_opt(9, 30, 0).unwrap()),
        ];
        for input in inputs {
            let json = serde_json::to_string(&input).unwrap();
            let back: DateInput = serde_json::from_str(&json).unwrap();
            assert_eq!(back, input);
            assert_eq!(back.resolve().unwrap(), Date::from(naive));
        }
    }

    #[test]
    fn test_serde_timestamp_format() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let json = serde_json::to_value(DateInput::from(ts)).unwrap();
        assert_eq!(json["timestamp"], "2024-03-15T09:30:00");
    }

    proptest! {
        #[test]
        fn prop_all_representations_agree(year in 1900i32..2200, month in 1u32..=12, day in 1u32..=28) {
            let naive = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let engine = Date::from_ymd(year, month, day).unwrap();
            let iso = format!("{year:04}-{month:02}-{day:02}");

            let resolved = [
                DateInput::from(engine).resolve().unwrap(),
                DateInput::from(iso).resolve().unwrap(),
                DateInput::from(naive).resolve().unwrap(),
                DateInput::from(naive.and_hms_opt(23, 59, 59).unwrap()).resolve().unwrap(),
            ];
            for date in resolved {
                prop_assert_eq!(date, engine);
                prop_assert_eq!(date.year(), year);
                prop_assert_eq!(date.month(), month);
                prop_assert_eq!(date.day(), day);
            }
        }
    }
}
