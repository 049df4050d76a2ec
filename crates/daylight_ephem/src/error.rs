//! Error types for solar/lunar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use daylight_time::TimeError;

/// Errors from ephemeris inputs.
///
/// Computation itself never fails: these are raised only when building the
/// inputs (a location or a custom angle entry) from out-of-domain values.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Latitude or longitude outside its domain, or not finite.
    InvalidLocation(&'static str),
    /// Sun-time angle outside [-90, 90] degrees, or not finite.
    InvalidAngle(&'static str),
    /// Error from instant conversion.
    Time(TimeError),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidAngle(msg) => write!(f, "invalid sun-time angle: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for EphemError {}

impl From<TimeError> for EphemError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
