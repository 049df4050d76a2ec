//! Solar and lunar ephemeris for an observer on Earth.
//!
//! This crate provides:
//! - Sun position and the solar time table (noon, nadir, twilight and
//!   golden-hour crossings) for any set of altitude angles
//! - Moon position, distance and parallactic angle
//! - Moon illumination (fraction, phase, bright-limb angle)
//! - Moonrise/moonset for a 24-hour window
//!
//! All formulas are low-precision analytic series (Strous, aa.quae.nl),
//! accurate to about a minute for rise and set instants.

pub mod error;
pub mod illumination;
pub mod location;
pub mod moon;
pub mod moontimes;
pub mod moontimes_types;
pub mod sun;
pub mod suntimes;
pub mod suntimes_types;

pub use error::EphemError;
pub use illumination::{MoonIllumination, MoonPhaseName, moon_illumination};
pub use location::GeoLocation;
pub use moon::{MoonCoords, MoonPosition, moon_coords, moon_position};
pub use moontimes::moon_times;
pub use moontimes_types::MoonTimes;
pub use sun::{SunCoords, sun_coords, sun_position};
pub use suntimes::{SunTimesCalculator, sun_times};
pub use suntimes_types::{
    RiseSet, STANDARD_ANGLES, SunTimeAngle, SunTimeAngles, SunTimePair, SunTimes, labels,
};
