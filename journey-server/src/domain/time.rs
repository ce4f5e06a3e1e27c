//! Time-of-day handling for timetable legs.
//!
//! The timetable gives times as `HHmm` with no date. A leg whose arrival
//! is earlier in the day than its departure runs overnight, so durations
//! are computed modulo one day.

use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day with minute precision.
///
/// # Examples
///
/// ```
/// use journey_server::domain::TimeOfDay;
///
/// let dep = TimeOfDay::parse_hhmm("2330").unwrap();
/// let arr = TimeOfDay::parse_hhmm("0130").unwrap();
///
/// // Overnight legs wrap into the next day
/// assert_eq!(dep.minutes_until(arr), 120);
/// assert_eq!(dep.to_string(), "23:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Create a time of day from hour and minute.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Parse a time in 24-hour `HHmm` format (e.g. `"0930"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmm("0000").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("2359").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmm("09:30").is_err());
    /// assert!(TimeOfDay::parse_hhmm("930").is_err());
    /// assert!(TimeOfDay::parse_hhmm("2400").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(TimeError::new("expected HHmm format"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[2..4])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::from_hm(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Minutes from `self` until the next occurrence of `end`.
    ///
    /// When `end` is earlier in the day than `self` the interval runs past
    /// midnight: `(end of day - self) + (end - start of day)`. Equal times
    /// give zero. The result is always in `0..1440`.
    pub fn minutes_until(&self, end: TimeOfDay) -> u32 {
        let start = self.minutes_since_midnight();
        let end = end.minutes_since_midnight();
        if end < start {
            (MINUTES_PER_DAY - start) + end
        } else {
            end - start
        }
    }

    /// [`minutes_until`](Self::minutes_until) as a `chrono::Duration`.
    pub fn duration_until(&self, end: TimeOfDay) -> Duration {
        Duration::minutes(i64::from(self.minutes_until(end)))
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmm(s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        let time = t("0000");
        assert_eq!((time.hour(), time.minute()), (0, 0));

        let time = t("2359");
        assert_eq!((time.hour(), time.minute()), (23, 59));

        let time = t("1430");
        assert_eq!((time.hour(), time.minute()), (14, 30));
    }

    #[test]
    fn parse_invalid_format() {
        assert!(TimeOfDay::parse_hhmm("").is_err());
        assert!(TimeOfDay::parse_hhmm("143").is_err());
        assert!(TimeOfDay::parse_hhmm("14300").is_err());
        assert!(TimeOfDay::parse_hhmm("14:30").is_err());
        assert!(TimeOfDay::parse_hhmm("1a30").is_err());
        assert!(TimeOfDay::parse_hhmm("+130").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(TimeOfDay::parse_hhmm("2400").is_err());
        assert!(TimeOfDay::parse_hhmm("1260").is_err());
        assert!(TimeOfDay::parse_hhmm("9999").is_err());
    }

    #[test]
    fn same_day_duration() {
        assert_eq!(t("0800").minutes_until(t("1000")), 120);
        assert_eq!(t("0900").minutes_until(t("0945")), 45);
    }

    #[test]
    fn overnight_duration() {
        assert_eq!(t("2330").minutes_until(t("0130")), 120);
        assert_eq!(t("2359").minutes_until(t("0000")), 1);
        assert_eq!(t("1200").minutes_until(t("1159")), 1439);
    }

    #[test]
    fn equal_times_are_zero() {
        assert_eq!(t("0700").minutes_until(t("0700")), 0);
    }

    #[test]
    fn chrono_duration_matches_minutes() {
        assert_eq!(t("2300").duration_until(t("0015")), Duration::minutes(75));
    }

    #[test]
    fn display_format() {
        assert_eq!(t("0905").to_string(), "09:05");
        assert_eq!(format!("{:?}", t("1745")), "TimeOfDay(17:45)");
    }
}
