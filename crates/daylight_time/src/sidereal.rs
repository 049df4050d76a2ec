//! Local sidereal time for the low-precision solar/lunar model.
//!
//! θ = 280.16° + 360.9856235° × d − lw, with d the days since J2000.0 and
//! lw the observer's west longitude in radians.
//!
//! Source: aa.quae.nl "Position of the Sun" (Strous), sidereal time section.

/// Sidereal time at Greenwich (degrees) at J2000.0.
const THETA0_DEG: f64 = 280.16;

/// Sidereal rotation in degrees per day.
const THETA1_DEG: f64 = 360.985_623_5;

/// Local sidereal time in radians (not normalised).
///
/// `lw` is the west longitude in radians, i.e. `-longitude_east`.
pub fn sidereal_time_rad(days_since_j2000: f64, lw: f64) -> f64 {
    (THETA0_DEG + THETA1_DEG * days_since_j2000).to_radians() - lw
}
