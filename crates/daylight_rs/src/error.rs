//! Error type for the convenience layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use daylight_ephem::EphemError;
use daylight_time::TimeError;

/// Errors from the convenience API.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DaylightError {
    /// Invalid location or angle input.
    Ephem(EphemError),
    /// Instant parsing or calendar arithmetic failed.
    Time(TimeError),
}

impl Display for DaylightError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephem(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "{e}"),
        }
    }
}

impl Error for DaylightError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephem(e) => Some(e),
            Self::Time(e) => Some(e),
        }
    }
}

impl From<EphemError> for DaylightError {
    fn from(e: EphemError) -> Self {
        Self::Ephem(e)
    }
}

impl From<TimeError> for DaylightError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_lower_errors() {
        let e: DaylightError = EphemError::InvalidLocation("latitude").into();
        assert_eq!(e.to_string(), "invalid location: latitude");
        assert!(e.source().is_some());
        let t: DaylightError = TimeError::OutOfRange(5).into();
        assert!(matches!(t, DaylightError::Time(TimeError::OutOfRange(5))));
    }
}
