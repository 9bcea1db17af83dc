//! Calendar month key
//!
//! Identifies a year-month bucket. Displays as the fixed-width `YYYY-MM`, so the
//! derived (year, month) ordering and the string ordering always agree.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, e.g. `2025-06`
///
/// Held as the month's first day, so every key names a month chrono can
/// represent and ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MonthKey {
    start: NaiveDate,
}

impl MonthKey {
    /// Create a month key, rejecting months outside 1..=12 and years outside
    /// the supported date range
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(MonthParseError::YearOutOfRange(year))?;
        Ok(Self { start })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            start: date - Duration::days(i64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let offset = Duration::days(i64::from(self.days_in_month()) - 1);
        // The last day of a representable month is always representable
        self.start
            .checked_add_signed(offset)
            .unwrap_or(NaiveDate::MAX)
    }

    /// Actual number of days in the month, leap years included
    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            4 | 6 | 9 | 11 => 30,
            2 if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Parse a `YYYY-MM` string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    YearOutOfRange(i32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            MonthParseError::YearOutOfRange(y) => write!(f, "Year out of range: {}", y),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let jan = MonthKey::new(2025, 1).unwrap();
        assert_eq!(jan.start_date(), date(2025, 1, 1));
        assert_eq!(jan.end_date(), date(2025, 1, 31));

        let dec = MonthKey::new(2024, 12).unwrap();
        assert_eq!(dec.end_date(), date(2024, 12, 31));
    }

    #[test]
    fn test_days_in_month_leap_years() {
        assert_eq!(MonthKey::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthKey::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthKey::new(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthKey::new(2000, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthKey::new(2025, 4).unwrap().days_in_month(), 30);
    }

    #[test]
    fn test_out_of_range_year_rejected() {
        assert_eq!(
            MonthKey::parse("262144-01"),
            Err(MonthParseError::YearOutOfRange(262144))
        );
        assert_eq!(
            MonthKey::new(-300000, 1),
            Err(MonthParseError::YearOutOfRange(-300000))
        );
    }

    #[test]
    fn test_last_supported_month_has_an_end() {
        let last = MonthKey::of(NaiveDate::MAX);
        assert_eq!(last.days_in_month(), 31);
        assert_eq!(last.end_date(), NaiveDate::MAX);

        let first = MonthKey::of(NaiveDate::MIN);
        assert_eq!(first.start_date(), NaiveDate::MIN);
        assert!(first.end_date() > first.start_date());
    }

    #[test]
    fn test_of_uses_first_day() {
        let key = MonthKey::of(date(2025, 6, 30));
        assert_eq!(key.start_date(), date(2025, 6, 1));
        assert_eq!(key, MonthKey::new(2025, 6).unwrap());
    }

    #[test]
    fn test_contains() {
        let jun = MonthKey::of(date(2025, 6, 15));
        assert!(jun.contains(date(2025, 6, 1)));
        assert!(jun.contains(date(2025, 6, 30)));
        assert!(!jun.contains(date(2024, 6, 15)));
        assert!(!jun.contains(date(2025, 7, 1)));
    }

    #[test]
    fn test_ordering_matches_string_ordering() {
        let mut keys = vec![
            MonthKey::new(2025, 10).unwrap(),
            MonthKey::new(2024, 12).unwrap(),
            MonthKey::new(2025, 2).unwrap(),
        ];
        let mut strings: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        keys.sort();
        strings.sort();
        let sorted: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(sorted, strings);
        assert_eq!(sorted, vec!["2024-12", "2025-02", "2025-10"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(MonthKey::parse("2025-06").unwrap(), MonthKey::new(2025, 6).unwrap());
        assert_eq!(MonthKey::parse("2025-13"), Err(MonthParseError::InvalidMonth(13)));
        assert!(MonthKey::parse("June").is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let key = MonthKey::new(2025, 6).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2025-06\"");
        let back: MonthKey = serde_json::from_str("\"2025-06\"").unwrap();
        assert_eq!(back, key);
    }
}
