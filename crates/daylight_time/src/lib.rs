//! Instants, Julian Dates and day boundaries.
//!
//! This crate provides:
//! - `Instant`, a timezone-free point in time at millisecond resolution
//! - Unix time ↔ Julian Date ↔ days-since-J2000 conversion
//! - Local sidereal time for the low-precision ephemeris
//! - Day boundaries (UTC, local, fixed offset) and calendar day shifts

pub mod calendar;
pub mod error;
pub mod julian;
pub mod sidereal;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

pub use calendar::{DayBoundary, shift_days, start_of_day};
pub use error::TimeError;
pub use julian::{
    J1970_JD, J2000_JD, MILLIS_PER_DAY, MILLIS_PER_HOUR, jd_to_days_since_j2000,
    jd_to_unix_millis, unix_millis_to_jd,
};
pub use sidereal::sidereal_time_rad;

/// An absolute point in time, in milliseconds since 1970-01-01T00:00:00Z.
///
/// Carries no timezone. All ephemeris math goes through [`Instant::as_jd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    unix_ms: i64,
}

impl Instant {
    /// Create an instant from Unix milliseconds.
    pub const fn from_unix_millis(ms: i64) -> Self {
        Self { unix_ms: ms }
    }

    /// Unix milliseconds.
    pub const fn as_unix_millis(self) -> i64 {
        self.unix_ms
    }

    /// Create an instant from a Julian Date, rounded to the millisecond.
    pub fn from_jd(jd: f64) -> Self {
        Self {
            unix_ms: jd_to_unix_millis(jd),
        }
    }

    /// Julian Date of this instant.
    pub fn as_jd(self) -> f64 {
        unix_millis_to_jd(self.unix_ms)
    }

    /// Days elapsed since J2000.0 (may be negative or fractional).
    pub fn days_since_j2000(self) -> f64 {
        jd_to_days_since_j2000(self.as_jd())
    }

    /// The instant `hours` later, rounded to the millisecond.
    pub fn plus_hours(self, hours: f64) -> Self {
        let delta = (hours * MILLIS_PER_HOUR as f64).round() as i64;
        self.plus_millis(delta)
    }

    /// The instant `ms` milliseconds later (saturating).
    pub fn plus_millis(self, ms: i64) -> Self {
        Self {
            unix_ms: self.unix_ms.saturating_add(ms),
        }
    }

    /// Signed milliseconds from `earlier` to `self`.
    pub fn millis_since(self, earlier: Instant) -> i64 {
        self.unix_ms.saturating_sub(earlier.unix_ms)
    }

    /// Convert to a chrono UTC date-time.
    pub fn to_datetime(self) -> Result<DateTime<Utc>, TimeError> {
        DateTime::from_timestamp_millis(self.unix_ms).ok_or(TimeError::OutOfRange(self.unix_ms))
    }

    /// Create an instant from any chrono date-time (sub-millisecond part dropped).
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            unix_ms: dt.timestamp_millis(),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::from_datetime(&dt)
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    /// Parse an RFC 3339 timestamp, e.g. `2013-03-05T00:00:00Z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dt = DateTime::parse_from_rfc3339(s.trim())?;
        Ok(Self::from_datetime(&dt))
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Ok(dt) => {
                let format = if self.unix_ms.rem_euclid(1000) == 0 {
                    SecondsFormat::Secs
                } else {
                    SecondsFormat::Millis
                };
                write!(f, "{}", dt.to_rfc3339_opts(format, true))
            }
            Err(_) => write!(f, "{}ms", self.unix_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_roundtrip() {
        let t = Instant::from_unix_millis(1_362_441_600_000);
        assert_eq!(Instant::from_jd(t.as_jd()), t);
    }

    #[test]
    fn j2000_is_day_zero() {
        let t = Instant::from_jd(J2000_JD);
        assert_eq!(t.days_since_j2000(), 0.0);
        assert_eq!(t.to_string(), "2000-01-01T12:00:00Z");
    }

    #[test]
    fn parse_and_display() {
        let t: Instant = "2013-03-05T00:00:00Z".parse().unwrap();
        assert_eq!(t.as_unix_millis(), 1_362_441_600_000);
        assert_eq!(t.to_string(), "2013-03-05T00:00:00Z");
    }

    #[test]
    fn parse_with_offset() {
        let t: Instant = "2013-03-05T02:00:00+02:00".parse().unwrap();
        assert_eq!(t.as_unix_millis(), 1_362_441_600_000);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "yesterday".parse::<Instant>().unwrap_err();
        assert!(matches!(err, TimeError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn display_millis() {
        let t = Instant::from_unix_millis(1_362_441_600_250);
        assert_eq!(t.to_string(), "2013-03-05T00:00:00.250Z");
    }

    #[test]
    fn plus_hours_rounds_to_millis() {
        let t = Instant::from_unix_millis(0);
        assert_eq!(t.plus_hours(1.5).as_unix_millis(), 5_400_000);
        assert_eq!(t.plus_hours(-0.5).as_unix_millis(), -1_800_000);
    }

    #[test]
    fn millis_since_is_signed() {
        let a = Instant::from_unix_millis(1_000);
        let b = Instant::from_unix_millis(4_000);
        assert_eq!(b.millis_since(a), 3_000);
        assert_eq!(a.millis_since(b), -3_000);
    }

    #[test]
    fn out_of_range_datetime() {
        let t = Instant::from_unix_millis(i64::MAX);
        assert_eq!(t.to_datetime(), Err(TimeError::OutOfRange(i64::MAX)));
        assert_eq!(t.to_string(), format!("{}ms", i64::MAX));
    }
}
