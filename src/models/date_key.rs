use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Calendar day identifier used to partition stored rosters.
///
/// Always rendered as zero-padded `YYYY-MM-DD`, so the string order of two
/// keys is the same as their chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Today's key in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Strict parse: exactly `YYYY-MM-DD` (10 chars) and a real calendar day.
    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.len() != 10 {
            return Err(AppError::InvalidDate(s.to_string()));
        }
        NaiveDate::parse_from_str(s, Self::FORMAT)
            .map(Self)
            .map_err(|_| AppError::InvalidDate(s.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_zero_padded() {
        let key = DateKey::from_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(key.to_string(), "2024-05-01");
    }

    #[test]
    fn parse_rejects_loose_forms() {
        assert!(DateKey::parse("2024-5-1").is_err());
        assert!(DateKey::parse("2024-02-30").is_err());
        assert!(DateKey::parse("yesterday").is_err());
        assert!(DateKey::parse("2024-05-01").is_ok());
    }

    #[test]
    fn string_order_matches_date_order() {
        let a = DateKey::parse("2023-12-31").unwrap();
        let b = DateKey::parse("2024-01-09").unwrap();
        let c = DateKey::parse("2024-01-10").unwrap();
        assert!(a < b && b < c);
        assert!(a.to_string() < b.to_string() && b.to_string() < c.to_string());
    }

    #[test]
    fn today_is_stable_within_a_call_pair() {
        // Can only differ if the test runs across midnight.
        let first = DateKey::today();
        let second = DateKey::today();
        assert!(second >= first);
        assert_eq!(first.to_string().len(), 10);
    }
}
