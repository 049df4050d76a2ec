//! Low-precision solar ephemeris.
//!
//! Mean anomaly plus a three-term equation of centre gives the Sun's
//! ecliptic longitude; ecliptic latitude is taken as zero. Accuracy is
//! about 0.01 deg over a few centuries around J2000, which is well inside
//! the refraction uncertainty at the horizon.
//!
//! Source: aa.quae.nl "Position of the Sun" (Strous), Earth coefficients.

use std::f64::consts::PI;

use daylight_frames::{
    EclipticCoords, EquatorialCoords, HorizontalCoords, ecliptic_to_equatorial,
    equatorial_to_horizontal,
};
use daylight_time::{Instant, sidereal_time_rad};

use crate::location::GeoLocation;

/// Longitude of Earth's perihelion (102.9372 deg) in radians.
const PERIHELION_RAD: f64 = 102.9372 * (PI / 180.0);

/// Solar mean anomaly M in radians for `d` days since J2000.0.
pub fn solar_mean_anomaly(d: f64) -> f64 {
    (357.5291 + 0.985_600_28 * d).to_radians()
}

/// Equation of centre C in radians for mean anomaly `m`.
pub fn equation_of_center(m: f64) -> f64 {
    (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()).to_radians()
}

/// Ecliptic longitude L = M + C + perihelion + 180 deg, in radians.
pub fn ecliptic_longitude(m: f64) -> f64 {
    m + equation_of_center(m) + PERIHELION_RAD + PI
}

/// The Sun's mean anomaly, ecliptic longitude and equatorial position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCoords {
    /// Mean anomaly M in radians.
    pub mean_anomaly_rad: f64,
    /// Ecliptic longitude L in radians (not normalised).
    pub ecliptic_longitude_rad: f64,
    /// Geocentric right ascension and declination.
    pub equatorial: EquatorialCoords,
}

/// Geocentric solar coordinates for `d` days since J2000.0.
pub fn sun_coords(d: f64) -> SunCoords {
    let m = solar_mean_anomaly(d);
    let l = ecliptic_longitude(m);
    SunCoords {
        mean_anomaly_rad: m,
        ecliptic_longitude_rad: l,
        equatorial: ecliptic_to_equatorial(&EclipticCoords {
            lon_rad: l,
            lat_rad: 0.0,
        }),
    }
}

/// Azimuth and altitude of the Sun for an observer at an instant.
///
/// No refraction is applied.
pub fn sun_position(instant: Instant, location: &GeoLocation) -> HorizontalCoords {
    let d = instant.days_since_j2000();
    let c = sun_coords(d);
    let theta = sidereal_time_rad(d, location.west_longitude_rad());
    equatorial_to_horizontal(&c.equatorial, theta, location.latitude_rad())
}
