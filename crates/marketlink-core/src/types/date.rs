//! Engine-native calendar date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// ISO pattern accepted by [`Date::parse`].
pub(crate) const ISO_FORMAT: &str = "%Y-%m-%d";

/// A calendar date as understood by the valuation engine.
///
/// Newtype over `chrono::NaiveDate`. There is no time-of-day component, so
/// converting to and from `NaiveDate` or an ISO string is lossless.
///
/// # Example
///
/// ```rust
/// use marketlink_core::types::Date;
///
/// let date = Date::from_ymd(2024, 6, 28).unwrap();
/// assert_eq!(date.to_string(), "2024-06-28");
/// assert_eq!(Date::parse("2024-06-28").unwrap(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the components do not form a date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnrecognizedDate` if the string does not match.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)
            .map(Date)
            .map_err(|_| CoreError::unrecognized_date(s))
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of month (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of calendar days.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result falls outside the
    /// supported calendar range.
    pub fn add_days(&self, days: i64) -> CoreResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {days} days is out of range")))
    }

    /// Calendar days from `self` to `other` (negative if `other` is earlier).
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(matches!(
            Date::from_ymd(2025, 2, 30),
            Err(CoreError::InvalidDate { .. })
        ));
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2025-06-15").unwrap();
        assert_eq!(date, Date::from_ymd(2025, 6, 15).unwrap());

        assert!(matches!(
            Date::parse("15/06/2025"),
            Err(CoreError::UnrecognizedDate { .. })
        ));
        assert!(Date::parse("2025-02-30").is_err());
        assert_eq!("2025-06-15".parse::<Date>().unwrap(), date);
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2024, 12, 31).unwrap();
        let d2 = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 31);
        assert_eq!(d2.days_between(&d1), -31);
        assert_eq!(d1.add_days(31).unwrap(), d2);
        assert_eq!(d2.add_days(-31).unwrap(), d1);
    }

    #[test]
    fn test_add_days_out_of_range() {
        let date = Date::from_ymd(2025, 1, 1).unwrap();
        assert!(matches!(
            date.add_days(i64::MAX),
            Err(CoreError::InvalidDate { .. })
        ));
        assert!(date.add_days(-1_000_000_000).is_err());
    }

    #[test]
    fn test_naive_date_conversion() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let date = Date::from(naive);
        assert_eq!(NaiveDate::from(date), naive);
        assert_eq!(date.as_naive_date(), naive);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2025, 1, 5).unwrap();
        assert_eq!(format!("{}", date), "2025-01-05");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
