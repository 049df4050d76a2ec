//! Solar time table: solar noon, nadir and rise/set crossings.
//!
//! The day's transit is located by counting whole Julian cycles since
//! J2000 at the observer's longitude, then correcting the mean transit
//! with the equation of time:
//!
//!   n      = round(d − J0 − lw/2π)
//!   ds     = J0 + lw/2π + n
//!   J_noon = J2000 + ds + 0.0053 sin M − 0.0069 sin 2L
//!
//! For an altitude h the hour angle w solves
//! cos w = (sin h − sin φ sin δ) / (cos φ cos δ); the set transit uses
//! w in place of 0 and the rise is mirrored about noon.
//!
//! Source: aa.quae.nl "Position of the Sun" §8 (Strous).

use std::f64::consts::TAU;

use daylight_frames::declination;
use daylight_time::{Instant, J2000_JD};

use crate::location::GeoLocation;
use crate::sun::{ecliptic_longitude, solar_mean_anomaly};
use crate::suntimes_types::{RiseSet, SunTimeAngles, SunTimePair, SunTimes};

/// Offset of the mean transit from the Julian day boundary.
const J0: f64 = 0.0009;

/// Nearest whole number, halves rounded toward +∞.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Julian cycle number n for `d` days since J2000 and west longitude `lw`.
pub fn julian_cycle(d: f64, lw: f64) -> f64 {
    round_half_up(d - J0 - lw / TAU)
}

/// Approximate transit (days since J2000) for hour angle `ht`.
pub fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / TAU + n
}

/// Julian Date of the transit, corrected by the equation of time.
pub fn solar_transit_jd(ds: f64, m: f64, l: f64) -> f64 {
    J2000_JD + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Cosine of the hour angle at which the Sun reaches altitude `h`.
///
/// Outside [-1, 1] the altitude is never reached: above 1 the Sun stays
/// below it, below -1 the Sun stays above it.
pub fn cos_hour_angle(h: f64, phi: f64, dec: f64) -> f64 {
    (h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Solar noon, nadir and one rise/set row per entry of `angles`.
///
/// The table belongs to the Julian cycle nearest `instant` at the
/// observer's longitude, so any instant within the same local solar day
/// yields the same table.
pub fn sun_times(instant: Instant, location: &GeoLocation, angles: &SunTimeAngles) -> SunTimes {
    let lw = location.west_longitude_rad();
    let phi = location.latitude_rad();

    let n = julian_cycle(instant.days_since_j2000(), lw);
    let ds = approx_transit(0.0, lw, n);
    let m = solar_mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let dec = declination(l, 0.0);
    let j_noon = solar_transit_jd(ds, m, l);

    let pairs = angles
        .iter()
        .map(|entry| {
            let cos_w = cos_hour_angle(entry.angle_deg().to_radians(), phi, dec);
            let event = if cos_w > 1.0 {
                RiseSet::AlwaysBelow
            } else if cos_w < -1.0 {
                RiseSet::AlwaysAbove
            } else {
                let j_set = solar_transit_jd(approx_transit(cos_w.acos(), lw, n), m, l);
                let j_rise = j_noon - (j_set - j_noon);
                RiseSet::Occurs {
                    rise: Instant::from_jd(j_rise),
                    set: Instant::from_jd(j_set),
                }
            };
            if !matches!(event, RiseSet::Occurs { .. }) {
                log::debug!(
                    "sun never crosses {} deg at lat {:.4}: {:?}",
                    entry.angle_deg(),
                    location.latitude_deg(),
                    event
                );
            }
            SunTimePair {
                angle: entry.clone(),
                event,
            }
        })
        .collect();

    SunTimes {
        solar_noon: Instant::from_jd(j_noon),
        nadir: Instant::from_jd(j_noon - 0.5),
        pairs,
    }
}

/// Sun-time computation bound to a fixed angle set.
#[derive(Debug, Clone, Default)]
pub struct SunTimesCalculator {
    angles: SunTimeAngles,
}

impl SunTimesCalculator {
    pub fn new(angles: SunTimeAngles) -> Self {
        Self { angles }
    }

    pub fn angles(&self) -> &SunTimeAngles {
        &self.angles
    }

    pub fn times(&self, instant: Instant, location: &GeoLocation) -> SunTimes {
        sun_times(instant, location, &self.angles)
    }
}
