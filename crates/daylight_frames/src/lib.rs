//! Coordinate frames for the low-precision solar/lunar model.
//!
//! Provides the ecliptic → equatorial rotation through a fixed obliquity,
//! the equatorial → horizontal transform for an observer, and the
//! empirical refraction correction.

pub mod coords;
pub mod equatorial;
pub mod horizontal;
pub mod refraction;

pub use coords::{EclipticCoords, EquatorialCoords, HorizontalCoords};
pub use equatorial::{OBLIQUITY_RAD, declination, ecliptic_to_equatorial, right_ascension};
pub use horizontal::{altitude, azimuth, equatorial_to_horizontal, parallactic_angle};
pub use refraction::astro_refraction;
