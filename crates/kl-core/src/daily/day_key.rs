//! Canonical calendar day in the game's reference time zone.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::daily::error::SelectionError;

/// A canonical calendar date, rendered as `YYYY-MM-DD` everywhere it is used
/// as a lookup key.
///
/// "Today" is always computed in the configured reference offset so that the
/// word of the day agrees with players' local sense of day no matter where
/// the server process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse an explicit `YYYY-MM-DD` string with strict calendar validation.
    ///
    /// Impossible dates such as `2025-02-30` are rejected alongside malformed
    /// input.
    pub fn parse(input: &str) -> Result<Self, SelectionError> {
        NaiveDate::parse_from_str(input, Self::FORMAT)
            .map(Self)
            .map_err(|_| SelectionError::InvalidDate {
                input: input.to_string(),
            })
    }

    /// The current day as observed in `reference_offset`.
    pub fn today_in(reference_offset: FixedOffset, now_utc: DateTime<Utc>) -> Self {
        Self(now_utc.with_timezone(&reference_offset).date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_canonical_form() {
        let day = DayKey::parse("2025-03-10").expect("valid date");
        assert_eq!(day.to_string(), "2025-03-10");
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["10-03-2025", "2025/03/10", "not-a-date", ""] {
            assert!(matches!(
                DayKey::parse(input),
                Err(SelectionError::InvalidDate { .. })
            ));
        }
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert!(DayKey::parse("2025-02-30").is_err());
        assert!(DayKey::parse("2025-13-01").is_err());
    }

    #[test]
    fn today_follows_reference_offset_not_utc() {
        let riyadh = FixedOffset::east_opt(3 * 3600).expect("valid offset");
        // 22:30 UTC is already the next day at UTC+3.
        let late_evening = Utc.with_ymd_and_hms(2025, 6, 1, 22, 30, 0).unwrap();
        assert_eq!(
            DayKey::today_in(riyadh, late_evening).to_string(),
            "2025-06-02"
        );
        // ...but still the same day shortly before the offset boundary.
        let earlier = Utc.with_ymd_and_hms(2025, 6, 1, 20, 59, 0).unwrap();
        assert_eq!(DayKey::today_in(riyadh, earlier).to_string(), "2025-06-01");
    }
}
