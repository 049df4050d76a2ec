//! Equatorial → horizontal transform.
//!
//! With hour angle H, latitude φ and declination δ:
//!
//! A = atan2(sin H, cos H sin φ − tan δ cos φ)   (from south, westward)
//! h = asin(sin φ sin δ + cos φ cos δ cos H)
//! q = atan2(sin H, tan φ cos δ − sin δ cos H)   (parallactic angle)
//!
//! Source: Meeus, _Astronomical Algorithms_ 2nd ed., eqs. 13.5, 13.6, 14.1.

use crate::coords::{EquatorialCoords, HorizontalCoords};

/// Azimuth in radians, measured from south and positive toward west.
pub fn azimuth(hour_angle: f64, phi: f64, dec: f64) -> f64 {
    hour_angle
        .sin()
        .atan2(hour_angle.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// Altitude above the horizon in radians.
pub fn altitude(hour_angle: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * hour_angle.cos()).asin()
}

/// Parallactic angle in radians.
pub fn parallactic_angle(hour_angle: f64, phi: f64, dec: f64) -> f64 {
    hour_angle
        .sin()
        .atan2(phi.tan() * dec.cos() - dec.sin() * hour_angle.cos())
}

/// Horizontal coordinates of a body for an observer.
///
/// `sidereal_time` is the local sidereal time in radians; the hour angle is
/// `sidereal_time - right_ascension`.
pub fn equatorial_to_horizontal(
    eq: &EquatorialCoords,
    sidereal_time: f64,
    phi: f64,
) -> HorizontalCoords {
    let h = sidereal_time - eq.right_ascension_rad;
    HorizontalCoords {
        azimuth_rad: azimuth(h, phi, eq.declination_rad),
        altitude_rad: altitude(h, phi, eq.declination_rad),
    }
}
