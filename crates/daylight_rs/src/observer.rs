//! Day summaries for a fixed observer.

use chrono::TimeZone;
use daylight_ephem::{GeoLocation, SunTimeAngles, SunTimes, SunTimesCalculator};
use daylight_time::{Instant, shift_days};

use crate::day::{daylight_diff_minutes, daylight_minutes};
use crate::error::DaylightError;
use crate::message::MessageKind;
use crate::sentence::{Sentence, SentencePicker, generate_sentence};
use crate::theme::Theme;

/// Everything shown for one moment of one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub theme: Theme,
    /// `None` when a compared daylight length is undefined (polar day or
    /// night).
    pub sentence: Option<Sentence>,
    /// Whole-minute day-length change behind the sentence.
    pub minutes: Option<i64>,
    /// Classification of the change; needs all three daylight lengths.
    pub kind: Option<MessageKind>,
    pub sunrise: Option<Instant>,
    pub sunset: Option<Instant>,
}

/// Sun-time calculations bound to one observer.
#[derive(Debug, Clone)]
pub struct Daylight {
    location: GeoLocation,
    calculator: SunTimesCalculator,
}

impl Daylight {
    /// Observer at `latitude_deg`, `longitude_deg` with the standard angles.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, DaylightError> {
        Ok(Self::from_location(GeoLocation::new(latitude_deg, longitude_deg)?))
    }

    pub fn from_location(location: GeoLocation) -> Self {
        Self::with_angles(location, SunTimeAngles::standard())
    }

    pub fn with_angles(location: GeoLocation, angles: SunTimeAngles) -> Self {
        Self {
            location,
            calculator: SunTimesCalculator::new(angles),
        }
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn times(&self, instant: Instant) -> SunTimes {
        self.calculator.times(instant, &self.location)
    }

    pub fn theme(&self, now: Instant) -> Theme {
        Theme::select(now, &self.times(now))
    }

    /// Summary at `now`, comparing against the given neighbouring days.
    ///
    /// By day the sentence compares today with `yesterday`; at night it
    /// compares `tomorrow` with today.
    pub fn day(
        &self,
        now: Instant,
        yesterday: Instant,
        tomorrow: Instant,
        picker: &mut impl SentencePicker,
    ) -> DaySummary {
        let today = self.times(now);
        let theme = Theme::select(now, &today);

        let today_len = daylight_minutes(&today);
        let yesterday_len = daylight_minutes(&self.times(yesterday));
        let tomorrow_len = daylight_minutes(&self.times(tomorrow));

        let night = theme == Theme::Night;
        let compared = if night { tomorrow_len } else { yesterday_len };

        let (sentence, minutes) = match (compared, today_len) {
            (Some(other), Some(today_len)) => {
                let minutes = daylight_diff_minutes(other, today_len);
                let longer = if night { other > today_len } else { today_len > other };
                (Some(generate_sentence(minutes, longer, night, picker)), Some(minutes))
            }
            _ => {
                log::debug!(
                    "daylight length undefined near {now} at lat {:.4}; no sentence",
                    self.location.latitude_deg()
                );
                (None, None)
            }
        };

        let kind = match (yesterday_len, today_len, tomorrow_len) {
            (Some(y), Some(t), Some(n)) => Some(MessageKind::classify(theme, y * 60.0, t * 60.0, n * 60.0)),
            _ => None,
        };

        DaySummary {
            theme,
            sentence,
            minutes,
            kind,
            sunrise: today.sunrise(),
            sunset: today.sunset(),
        }
    }

    /// Summary at `now`, with yesterday and tomorrow taken as the same
    /// wall-clock time one calendar day away in `tz`.
    pub fn day_in<Tz: TimeZone>(
        &self,
        now: Instant,
        tz: &Tz,
        picker: &mut impl SentencePicker,
    ) -> Result<DaySummary, DaylightError> {
        let yesterday = shift_days(now, tz, -1)?;
        let tomorrow = shift_days(now, tz, 1)?;
        Ok(self.day(now, yesterday, tomorrow, picker))
    }
}
