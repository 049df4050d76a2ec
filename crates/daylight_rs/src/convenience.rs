//! One-call helpers taking chrono datetimes and raw coordinates.

use chrono::{DateTime, TimeZone};
use daylight_ephem::{
    GeoLocation, MoonIllumination, MoonPosition, MoonTimes, SunTimeAngles, SunTimes,
};
use daylight_frames::HorizontalCoords;
use daylight_time::{DayBoundary, Instant};

use crate::error::DaylightError;

fn location(latitude_deg: f64, longitude_deg: f64) -> Result<GeoLocation, DaylightError> {
    Ok(GeoLocation::new(latitude_deg, longitude_deg)?)
}

/// Standard sun-time table for the solar day containing `date`.
pub fn sun_times<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<SunTimes, DaylightError> {
    sun_times_with(date, latitude_deg, longitude_deg, &SunTimeAngles::standard())
}

/// Sun-time table for a caller-supplied angle set.
pub fn sun_times_with<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude_deg: f64,
    longitude_deg: f64,
    angles: &SunTimeAngles,
) -> Result<SunTimes, DaylightError> {
    let loc = location(latitude_deg, longitude_deg)?;
    Ok(daylight_ephem::sun_times(Instant::from_datetime(date), &loc, angles))
}

/// Sun azimuth/altitude in radians (azimuth from south, westward).
pub fn sun_position<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<HorizontalCoords, DaylightError> {
    let loc = location(latitude_deg, longitude_deg)?;
    Ok(daylight_ephem::sun_position(Instant::from_datetime(date), &loc))
}

pub fn moon_position<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<MoonPosition, DaylightError> {
    let loc = location(latitude_deg, longitude_deg)?;
    Ok(daylight_ephem::moon_position(Instant::from_datetime(date), &loc))
}

pub fn moon_illumination<Tz: TimeZone>(date: &DateTime<Tz>) -> MoonIllumination {
    daylight_ephem::moon_illumination(Instant::from_datetime(date))
}

pub fn moon_times<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude_deg: f64,
    longitude_deg: f64,
    boundary: DayBoundary,
) -> Result<MoonTimes, DaylightError> {
    let loc = location(latitude_deg, longitude_deg)?;
    Ok(daylight_ephem::moon_times(Instant::from_datetime(date), &loc, boundary))
}
