//! Spherical coordinate pairs used by the ephemeris.

/// Geocentric ecliptic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoords {
    /// Ecliptic longitude in radians (not normalised).
    pub lon_rad: f64,
    /// Ecliptic latitude in radians.
    pub lat_rad: f64,
}

/// Geocentric equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in radians, range (-pi, pi].
    pub right_ascension_rad: f64,
    /// Declination in radians, range [-pi/2, pi/2].
    pub declination_rad: f64,
}

/// Topocentric horizontal coordinates for one observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoords {
    /// Azimuth in radians, measured from south, positive toward west.
    pub azimuth_rad: f64,
    /// Altitude above the horizon in radians.
    pub altitude_rad: f64,
}

impl HorizontalCoords {
    /// Azimuth in degrees measured from north through east, range [0, 360).
    pub fn azimuth_from_north_deg(&self) -> f64 {
        (self.azimuth_rad.to_degrees() + 180.0).rem_euclid(360.0)
    }
}
