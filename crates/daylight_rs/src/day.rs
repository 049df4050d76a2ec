//! Daylight length, day-to-day difference and the day-progress arc.
//!
//! Daylight runs from the end of sunrise (upper limb fully clear) to
//! sunset. The progress arc maps the fraction p of daylight elapsed onto
//! a half circle in a 100 × 100 box:
//!
//!   θ = π + p·π,  x = 50 + 50 cos θ,  y = |100 sin θ|
//!
//! so p = 0 sits at the left edge, p = 0.5 at the top and p = 1 at the
//! right edge.

use std::f64::consts::PI;

use daylight_ephem::SunTimes;
use daylight_time::Instant;

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Minutes from sunrise end to sunset, if both occur.
pub fn daylight_minutes(times: &SunTimes) -> Option<f64> {
    let set = times.sunset()?;
    let rise_end = times.sunrise_end()?;
    Some(set.millis_since(rise_end) as f64 / MILLIS_PER_MINUTE)
}

/// Whole-minute magnitude of `x − y`, halves rounded up before taking
/// the absolute value.
pub fn daylight_diff_minutes(x: f64, y: f64) -> i64 {
    ((x - y) + 0.5).floor().abs() as i64
}

/// Point on the day-progress arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressPosition {
    pub x: f64,
    pub y: f64,
}

/// Arc position for progress `p`, or `None` outside [0, 1].
pub fn day_progress_position(p: f64) -> Option<ProgressPosition> {
    if !(0.0..=1.0).contains(&p) {
        return None;
    }
    let theta = PI + p * PI;
    Some(ProgressPosition {
        x: 50.0 + theta.cos() * 50.0,
        y: (theta.sin() * 100.0).abs(),
    })
}

/// Fraction of the sunrise→sunset span elapsed at `now`.
///
/// Negative before sunrise and above 1 after sunset; `None` when the Sun
/// does not rise or set that day.
pub fn day_progress(now: Instant, times: &SunTimes) -> Option<f64> {
    let rise = times.sunrise()?;
    let set = times.sunset()?;
    let span = set.millis_since(rise);
    if span <= 0 {
        return None;
    }
    Some(now.millis_since(rise) as f64 / span as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use daylight_ephem::{GeoLocation, SunTimeAngles, sun_times};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn arc_endpoints_and_top() {
        let top = day_progress_position(0.5).unwrap();
        assert!(close(top.x, 50.0) && close(top.y, 100.0), "{top:?}");
        let left = day_progress_position(0.0).unwrap();
        assert!(close(left.x, 0.0) && close(left.y, 0.0), "{left:?}");
        let right = day_progress_position(1.0).unwrap();
        assert!(close(right.x, 100.0) && close(right.y, 0.0), "{right:?}");
    }

    #[test]
    fn arc_rejects_out_of_range() {
        assert_eq!(day_progress_position(-0.01), None);
        assert_eq!(day_progress_position(1.01), None);
        assert_eq!(day_progress_position(f64::NAN), None);
    }

    #[test]
    fn diff_rounding() {
        assert_eq!(daylight_diff_minutes(600.4, 600.0), 0);
        assert_eq!(daylight_diff_minutes(600.5, 600.0), 1);
        assert_eq!(daylight_diff_minutes(597.0, 600.0), 3);
        // -2.5 rounds up to -2.
        assert_eq!(daylight_diff_minutes(597.5, 600.0), 2);
    }

    #[test]
    fn progress_at_noon_near_half() {
        let loc = GeoLocation::new(50.5, 30.5).unwrap();
        let t: Instant = "2013-03-05T00:00:00Z".parse().unwrap();
        let times = sun_times(t, &loc, &SunTimeAngles::standard());
        let p = day_progress(times.solar_noon, &times).unwrap();
        assert!((p - 0.5).abs() < 1e-3, "p = {p}");
        assert!(day_progress(times.nadir, &times).unwrap() < 0.0);

        let minutes = daylight_minutes(&times).unwrap();
        // sunriseEnd 04:38:19 → sunset 15:46:57.
        assert!((minutes - 668.63).abs() < 0.1, "minutes = {minutes}");
    }

    #[test]
    fn no_daylight_in_polar_night() {
        let loc = GeoLocation::new(80.0, 0.0).unwrap();
        let t: Instant = "2024-12-21T12:00:00Z".parse().unwrap();
        let times = sun_times(t, &loc, &SunTimeAngles::standard());
        assert_eq!(daylight_minutes(&times), None);
        assert_eq!(day_progress(t, &times), None);
    }
}
