//! Moonrise and moonset by quadratic interpolation.
//!
//! Starting at the day boundary, the Moon's refracted altitude (less
//! `HC`, a constant allowance for the semidiameter) is sampled every hour.
//! Each 2-hour window (h0, h1, h2) at hours i−1, i, i+1 is fitted with a
//! parabola y(x) = a x² + b x + h1 on x ∈ [−1, 1]:
//!
//!   a = (h0 + h2)/2 − h1,  b = (h2 − h0)/2
//!   extremum xe = −b/2a,  ye = y(xe),  disc = b² − 4 a h1
//!
//! Roots inside [−1, 1] are horizon crossings. A single root is a rise
//! when the window starts below the horizon; with two roots the sign of
//! the extremum decides which comes first.
//!
//! Source: Montenbruck & Pfleger, _Astronomy on the Personal Computer_,
//! §3.8 (quadratic interpolation).

use daylight_time::{DayBoundary, Instant, start_of_day};

use crate::location::GeoLocation;
use crate::moon::moon_position;
use crate::moontimes_types::MoonTimes;

/// 0.133 deg in radians.
const HC: f64 = 0.133 * (std::f64::consts::PI / 180.0);

/// Number of hours scanned after the day boundary.
const SCAN_HOURS: u32 = 24;

/// Result of fitting one window.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WindowFit {
    roots: u8,
    x1: f64,
    x2: f64,
    ye: f64,
}

fn fit_window(h0: f64, h1: f64, h2: f64) -> WindowFit {
    let a = (h0 + h2) / 2.0 - h1;
    let b = (h2 - h0) / 2.0;
    let xe = -b / (2.0 * a);
    let ye = (a * xe + b) * xe + h1;
    let disc = b * b - 4.0 * a * h1;

    let mut fit = WindowFit {
        roots: 0,
        x1: f64::NAN,
        x2: f64::NAN,
        ye,
    };
    if disc >= 0.0 {
        let dx = disc.sqrt() / (a.abs() * 2.0);
        fit.x1 = xe - dx;
        fit.x2 = xe + dx;
        if fit.x1.abs() <= 1.0 {
            fit.roots += 1;
        }
        if fit.x2.abs() <= 1.0 {
            fit.roots += 1;
        }
        if fit.x1 < -1.0 {
            fit.x1 = fit.x2;
        }
    }
    fit
}

/// Rise and set offsets (relative to the window centre) found in `fit`.
///
/// A lone root is a rise when the window starts below the horizon. With
/// two roots a dip (`ye < 0`) sets first and rises second.
fn window_crossings(fit: &WindowFit, h0: f64) -> (Option<f64>, Option<f64>) {
    match fit.roots {
        1 if h0 < 0.0 => (Some(fit.x1), None),
        1 => (None, Some(fit.x1)),
        2 if fit.ye < 0.0 => (Some(fit.x2), Some(fit.x1)),
        2 => (Some(fit.x1), Some(fit.x2)),
        _ => (None, None),
    }
}

/// Moonrise and moonset in the 24 hours after the day boundary of
/// `instant`.
///
/// A crossing found in a later window replaces one of the same kind from
/// an earlier window; the scan stops once both kinds are found.
pub fn moon_times(instant: Instant, location: &GeoLocation, boundary: DayBoundary) -> MoonTimes {
    let t = start_of_day(instant, boundary);
    let alt = |hours: u32| moon_position(t.plus_hours(f64::from(hours)), location).altitude_rad - HC;

    let mut h0 = alt(0);
    let mut rise: Option<f64> = None;
    let mut set: Option<f64> = None;
    let mut ye = 0.0;

    for i in (1..SCAN_HOURS).step_by(2) {
        let h1 = alt(i);
        let h2 = alt(i + 1);
        let fit = fit_window(h0, h1, h2);
        ye = fit.ye;
        let hour = f64::from(i);

        log::trace!("moon window at +{i}h: {} root(s), ye = {:.6}", fit.roots, fit.ye);

        let (r, s) = window_crossings(&fit, h0);
        if let Some(r) = r {
            rise = Some(hour + r);
        }
        if let Some(s) = s {
            set = Some(hour + s);
        }

        if rise.is_some() && set.is_some() {
            break;
        }
        h0 = h2;
    }

    let result = MoonTimes::from_crossings(
        rise.map(|h| t.plus_hours(h)),
        set.map(|h| t.plus_hours(h)),
        ye > 0.0,
    );
    if matches!(result, MoonTimes::AlwaysUp | MoonTimes::AlwaysDown) {
        log::debug!(
            "no moon crossing within 24h of {t} at lat {:.4}: {result:?}",
            location.latitude_deg()
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_single_rising_root() {
        // Linear rise through zero at x = 0.
        let fit = fit_window(-1.0, 0.0, 1.0);
        // a = 0: the parabola degenerates; no finite roots are counted.
        assert_eq!(fit.roots, 0);

        let fit = fit_window(-1.0, 0.1, 1.0);
        assert_eq!(fit.roots, 1);
        assert!(fit.x1.abs() <= 1.0, "x1 = {}", fit.x1);
    }

    #[test]
    fn window_two_roots_below_extremum() {
        // Dips below the horizon mid-window: set then rise.
        let fit = fit_window(0.5, -0.5, 0.5);
        assert_eq!(fit.roots, 2);
        assert!(fit.ye < 0.0);
        assert!(fit.x1 < fit.x2);
    }

    #[test]
    fn dip_sets_before_rising() {
        let fit = fit_window(0.5, -0.5, 0.5);
        let (rise, set) = window_crossings(&fit, 0.5);
        let (rise, set) = (rise.unwrap(), set.unwrap());
        assert_eq!(rise, fit.x2);
        assert_eq!(set, fit.x1);
        assert!(set < rise, "set {set} rise {rise}");
    }

    #[test]
    fn hump_rises_before_setting() {
        let fit = fit_window(-0.5, 0.5, -0.5);
        assert_eq!(fit.roots, 2);
        assert!(fit.ye > 0.0);
        let (rise, set) = window_crossings(&fit, -0.5);
        let (rise, set) = (rise.unwrap(), set.unwrap());
        assert_eq!(rise, fit.x1);
        assert_eq!(set, fit.x2);
        assert!(rise < set, "rise {rise} set {set}");
        assert!((rise + 0.5f64.sqrt()).abs() < 1e-12, "rise = {rise}");
    }

    #[test]
    fn single_root_kind_follows_window_start() {
        let fit = fit_window(-1.0, 0.1, 1.0);
        assert_eq!(window_crossings(&fit, -1.0), (Some(fit.x1), None));
        let fit = fit_window(1.0, -0.1, -1.0);
        assert_eq!(fit.roots, 1);
        assert_eq!(window_crossings(&fit, 1.0), (None, Some(fit.x1)));
    }

    #[test]
    fn window_no_crossing() {
        let fit = fit_window(1.0, 1.2, 1.1);
        assert_eq!(fit.roots, 0);
        assert!(fit.ye > 0.0);
    }

    #[test]
    fn crossings_fall_inside_scan() {
        let loc = GeoLocation::new(48.85, 2.35).unwrap();
        let t: Instant = "2024-05-10T15:00:00Z".parse().unwrap();
        let start = start_of_day(t, DayBoundary::Utc);
        let mt = moon_times(t, &loc, DayBoundary::Utc);
        for x in [mt.rise(), mt.set()].into_iter().flatten() {
            let ms = x.millis_since(start);
            assert!((0..=86_400_000).contains(&ms), "crossing at +{ms} ms");
        }
    }

    #[test]
    fn extreme_instant_does_not_panic() {
        let loc = GeoLocation::new(48.85, 2.35).unwrap();
        let t = Instant::from_unix_millis(i64::MIN);
        let _ = moon_times(t, &loc, DayBoundary::Utc);
    }

    #[test]
    fn high_arctic_has_always_categories() {
        // The Moon's declination swings about ±28 deg in 2024-2025, so at
        // 85 N it stays up or down for days at a time.
        let loc = GeoLocation::new(85.0, 0.0).unwrap();
        let mut up = 0;
        let mut down = 0;
        for day in 0..28 {
            let t = Instant::from_unix_millis(1_704_067_200_000 + day * 86_400_000);
            match moon_times(t, &loc, DayBoundary::Utc) {
                MoonTimes::AlwaysUp => up += 1,
                MoonTimes::AlwaysDown => down += 1,
                _ => {}
            }
        }
        assert!(up > 0 && down > 0, "up {up} down {down}");
    }
}
