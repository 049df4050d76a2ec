//! Observer location on Earth's surface.

use crate::error::EphemError;

/// Geographic location of an observer.
///
/// Construction validates the domain, so every calculation taking a
/// `GeoLocation` works on finite, in-range coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl GeoLocation {
    /// Create a location from latitude (north positive, [-90, 90]) and
    /// longitude (east positive, [-180, 180]) in degrees.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, EphemError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(EphemError::InvalidLocation("latitude must be within [-90, 90] degrees"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(EphemError::InvalidLocation(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in degrees.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees (east positive).
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Latitude φ in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// West longitude in radians, `lw = -longitude`.
    pub fn west_longitude_rad(&self) -> f64 {
        (-self.longitude_deg).to_radians()
    }
}
