//! Unix time ↔ Julian Date conversion.
//!
//! Instants are counted in whole milliseconds since the Unix epoch. The
//! Julian Date is the continuous day count used by all ephemeris formulas;
//! `J1970_JD` is the Julian Day Number of 1970-01-01 (so the Unix epoch,
//! at midnight, sits at `J1970_JD - 0.5`).

/// Julian Day Number of 1970-01-01.
pub const J1970_JD: f64 = 2_440_588.0;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Milliseconds in one civil day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Julian Date of an instant given in Unix milliseconds.
///
/// `JD = ms / 86_400_000 - 0.5 + J1970`
pub fn unix_millis_to_jd(ms: i64) -> f64 {
    ms as f64 / MILLIS_PER_DAY as f64 - 0.5 + J1970_JD
}

/// Unix milliseconds of a Julian Date, rounded to the nearest millisecond.
///
/// Inverse of [`unix_millis_to_jd`]: the rounding absorbs the floating-point
/// error so `jd_to_unix_millis(unix_millis_to_jd(ms)) == ms` for every
/// instant within a few thousand years of the present. Non-finite input
/// saturates (NaN maps to 0).
pub fn jd_to_unix_millis(jd: f64) -> i64 {
    ((jd + 0.5 - J1970_JD) * MILLIS_PER_DAY as f64).round() as i64
}

/// Days elapsed since J2000.0 for a Julian Date.
pub fn jd_to_days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_is_j1970_minus_half() {
        assert_eq!(unix_millis_to_jd(0), J1970_JD - 0.5);
    }

    #[test]
    fn j2000_noon() {
        // 2000-01-01T12:00:00Z = 946_728_000 s
        let jd = unix_millis_to_jd(946_728_000_000);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
        assert!(jd_to_days_since_j2000(jd).abs() < 1e-9);
    }

    #[test]
    fn jd_back_to_millis() {
        assert_eq!(jd_to_unix_millis(J2000_JD), 946_728_000_000);
        assert_eq!(jd_to_unix_millis(J1970_JD - 0.5), 0);
    }

    #[test]
    fn roundtrip_odd_millisecond() {
        let ms = 1_362_441_600_123;
        assert_eq!(jd_to_unix_millis(unix_millis_to_jd(ms)), ms);
        let neg = -1_234_567_890_987;
        assert_eq!(jd_to_unix_millis(unix_millis_to_jd(neg)), neg);
    }

    #[test]
    fn nan_saturates_to_zero() {
        assert_eq!(jd_to_unix_millis(f64::NAN), 0);
    }
}
