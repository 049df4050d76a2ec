//! Low-precision lunar ephemeris.
//!
//! Mean longitude, mean anomaly and mean argument of latitude with one
//! periodic term each for longitude, latitude and distance. Good to a few
//! tenths of a degree, enough for rise/set instants to within minutes.
//!
//! Source: aa.quae.nl "Position of the Moon" (Strous); parallactic angle
//! per Meeus, _Astronomical Algorithms_ 2nd ed., eq. 14.1.

use daylight_frames::{
    EclipticCoords, EquatorialCoords, altitude, astro_refraction, azimuth,
    ecliptic_to_equatorial, parallactic_angle,
};
use daylight_time::{Instant, sidereal_time_rad};

use crate::location::GeoLocation;

/// Geocentric lunar coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonCoords {
    /// Right ascension and declination.
    pub equatorial: EquatorialCoords,
    /// Earth–Moon distance in km.
    pub distance_km: f64,
}

/// Geocentric lunar coordinates for `d` days since J2000.0.
pub fn moon_coords(d: f64) -> MoonCoords {
    let mean_lon = (218.316 + 13.176_396 * d).to_radians();
    let mean_anomaly = (134.963 + 13.064_993 * d).to_radians();
    let mean_arg_lat = (93.272 + 13.229_350 * d).to_radians();

    let lon = mean_lon + 6.289_f64.to_radians() * mean_anomaly.sin();
    let lat = 5.128_f64.to_radians() * mean_arg_lat.sin();
    let distance_km = 385_001.0 - 20_905.0 * mean_anomaly.cos();

    MoonCoords {
        equatorial: ecliptic_to_equatorial(&EclipticCoords {
            lon_rad: lon,
            lat_rad: lat,
        }),
        distance_km,
    }
}

/// Position of the Moon for an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Azimuth in radians, from south, positive toward west.
    pub azimuth_rad: f64,
    /// Altitude in radians, corrected for refraction.
    pub altitude_rad: f64,
    /// Earth–Moon distance in km.
    pub distance_km: f64,
    /// Parallactic angle in radians.
    pub parallactic_angle_rad: f64,
}

/// Azimuth, refracted altitude, distance and parallactic angle of the Moon.
pub fn moon_position(instant: Instant, location: &GeoLocation) -> MoonPosition {
    let d = instant.days_since_j2000();
    let phi = location.latitude_rad();
    let c = moon_coords(d);
    let dec = c.equatorial.declination_rad;

    let h = sidereal_time_rad(d, location.west_longitude_rad()) - c.equatorial.right_ascension_rad;
    let alt = altitude(h, phi, dec);

    MoonPosition {
        azimuth_rad: azimuth(h, phi, dec),
        altitude_rad: alt + astro_refraction(alt),
        distance_km: c.distance_km,
        parallactic_angle_rad: parallactic_angle(h, phi, dec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_bounds() {
        for day in 0..60 {
            let c = moon_coords(f64::from(day) * 0.5);
            assert!(
                (364_096.0..=405_906.0).contains(&c.distance_km),
                "distance = {}",
                c.distance_km
            );
        }
    }

    #[test]
    fn declination_within_orbit_tilt() {
        // |dec| <= obliquity + 5.128 deg.
        for day in 0..400 {
            let dec = moon_coords(f64::from(day)).equatorial.declination_rad.to_degrees();
            assert!(dec.abs() <= 23.4397 + 5.128 + 1e-9, "dec = {dec}");
        }
    }

    #[test]
    fn refraction_lifts_altitude() {
        let loc = GeoLocation::new(50.5, 30.5).unwrap();
        let t: Instant = "2013-03-05T00:00:00Z".parse().unwrap();
        let d = t.days_since_j2000();
        let c = moon_coords(d);
        let h = sidereal_time_rad(d, loc.west_longitude_rad()) - c.equatorial.right_ascension_rad;
        let raw = altitude(h, loc.latitude_rad(), c.equatorial.declination_rad);
        let pos = moon_position(t, &loc);
        assert!(pos.altitude_rad > raw);
        assert!((pos.altitude_rad - raw - astro_refraction(raw)).abs() < 1e-15);
    }

    #[test]
    fn below_horizon_keeps_raw_altitude_offset() {
        // Refraction is evaluated at 0 but added to the negative altitude.
        let loc = GeoLocation::new(50.5, 30.5).unwrap();
        let t: Instant = "2013-03-05T12:00:00Z".parse().unwrap();
        let d = t.days_since_j2000();
        let c = moon_coords(d);
        let h = sidereal_time_rad(d, loc.west_longitude_rad()) - c.equatorial.right_ascension_rad;
        let raw = altitude(h, loc.latitude_rad(), c.equatorial.declination_rad);
        let pos = moon_position(t, &loc);
        if raw < 0.0 {
            assert!((pos.altitude_rad - (raw + astro_refraction(0.0))).abs() < 1e-15);
        } else {
            assert!(pos.altitude_rad > raw);
        }
    }
}
