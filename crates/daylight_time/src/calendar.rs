//! Day boundaries and calendar-day shifts.
//!
//! The ephemeris itself is timezone-free; these helpers exist for callers
//! that need "midnight of the day containing this instant" (the moonrise
//! scan) or "the same wall-clock time yesterday / tomorrow" (day-length
//! comparison). Both are pure functions of their inputs.

use chrono::{Days, FixedOffset, Local, NaiveTime, TimeZone};

use crate::error::TimeError;
use crate::julian::MILLIS_PER_DAY;
use crate::Instant;

/// Which midnight a day starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayBoundary {
    /// 00:00 UTC.
    #[default]
    Utc,
    /// 00:00 in the process-local timezone.
    Local,
    /// 00:00 at a fixed UTC offset.
    Fixed(FixedOffset),
}

impl DayBoundary {
    /// Map an "in UTC" flag to a boundary: `true` → UTC, `false` → local.
    pub fn from_utc_flag(in_utc: bool) -> Self {
        if in_utc { Self::Utc } else { Self::Local }
    }
}

/// Midnight starting the day that contains `instant`.
pub fn start_of_day(instant: Instant, boundary: DayBoundary) -> Instant {
    match boundary {
        DayBoundary::Utc => floor_to_day(instant, 0),
        DayBoundary::Fixed(offset) => {
            floor_to_day(instant, i64::from(offset.local_minus_utc()) * 1000)
        }
        DayBoundary::Local => start_of_day_in(instant, &Local),
    }
}

/// Midnight in an arbitrary chrono timezone.
///
/// If local midnight does not exist (a DST gap at 00:00), the instant's own
/// UTC offset is used instead. Ambiguous midnights resolve to the earlier one.
pub fn start_of_day_in<Tz: TimeZone>(instant: Instant, tz: &Tz) -> Instant {
    let Ok(utc) = instant.to_datetime() else {
        return floor_to_day(instant, 0);
    };
    let local = utc.with_timezone(tz);
    let offset_ms = (local.naive_local() - local.naive_utc()).num_milliseconds();
    let midnight = local.date_naive().and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight).earliest() {
        Some(dt) => Instant::from_datetime(&dt),
        None => floor_to_day(instant, offset_ms),
    }
}

/// The same wall-clock time `days` calendar days away in `tz`.
///
/// Negative `days` moves backwards. When the shifted wall-clock time does
/// not exist in `tz`, the result falls back to a plain 24-hour multiple.
pub fn shift_days<Tz: TimeZone>(instant: Instant, tz: &Tz, days: i64) -> Result<Instant, TimeError> {
    let out_of_range = TimeError::OutOfRange(instant.as_unix_millis());
    let local = instant.to_datetime()?.with_timezone(tz).naive_local();
    let step = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        local.checked_add_days(step)
    } else {
        local.checked_sub_days(step)
    }
    .ok_or(out_of_range)?;

    Ok(match tz.from_local_datetime(&shifted).earliest() {
        Some(dt) => Instant::from_datetime(&dt),
        None => instant.plus_millis(days.saturating_mul(MILLIS_PER_DAY)),
    })
}

fn floor_to_day(instant: Instant, offset_ms: i64) -> Instant {
    let local = instant.as_unix_millis().saturating_add(offset_ms);
    let midnight = local.saturating_sub(local.rem_euclid(MILLIS_PER_DAY));
    Instant::from_unix_millis(midnight.saturating_sub(offset_ms))
}
