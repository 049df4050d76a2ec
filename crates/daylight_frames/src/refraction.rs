//! Empirical atmospheric refraction near the horizon.
//!
//! R = 1.02′ / tan(h + 10.26 / (h + 5.10)), h in degrees, rewritten here
//! with h and R in radians.
//!
//! Source: Meeus, _Astronomical Algorithms_ 2nd ed., eq. 16.4 (Sæmundsson).

/// Refraction in radians for an apparent altitude `h` in radians.
///
/// Negative altitudes are evaluated as 0: the formula has a pole at
/// h ≈ −0.089 rad and is only meaningful above the horizon. The caller
/// adds the result to the original, unclamped altitude.
pub fn astro_refraction(h: f64) -> f64 {
    let h = if h < 0.0 { 0.0 } else { h };
    0.000_296_7 / (h + 0.003_125_36 / (h + 0.089_011_79)).tan()
}
