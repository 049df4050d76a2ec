//! Ecliptic → equatorial rotation about the x-axis by the obliquity.
//!
//! α = atan2(sin λ cos ε − tan β sin ε, cos λ)
//! δ = asin(sin β cos ε + cos β sin ε sin λ)
//!
//! The obliquity is held fixed at its J2000 value; the drift over a few
//! centuries is far below the accuracy of the periodic-term models.

use crate::coords::{EclipticCoords, EquatorialCoords};

/// Obliquity of the ecliptic used by the model (23.4397 deg).
pub const OBLIQUITY_RAD: f64 = 23.4397 * (std::f64::consts::PI / 180.0);

/// Right ascension in radians from ecliptic longitude `l` and latitude `b`.
pub fn right_ascension(l: f64, b: f64) -> f64 {
    let e = OBLIQUITY_RAD;
    (l.sin() * e.cos() - b.tan() * e.sin()).atan2(l.cos())
}

/// Declination in radians from ecliptic longitude `l` and latitude `b`.
pub fn declination(l: f64, b: f64) -> f64 {
    let e = OBLIQUITY_RAD;
    (b.sin() * e.cos() + b.cos() * e.sin() * l.sin()).asin()
}

/// Rotate ecliptic coordinates into the equatorial frame.
pub fn ecliptic_to_equatorial(ecl: &EclipticCoords) -> EquatorialCoords {
    EquatorialCoords {
        right_ascension_rad: right_ascension(ecl.lon_rad, ecl.lat_rad),
        declination_rad: declination(ecl.lon_rad, ecl.lat_rad),
    }
}
