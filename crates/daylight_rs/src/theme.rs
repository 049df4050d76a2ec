//! Screen themes keyed to the Sun's phase.

use std::fmt::{Display, Formatter};

use daylight_ephem::SunTimes;
use daylight_time::Instant;

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.0, self.1, self.2)
    }
}

/// Text and background colours of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub text: Rgb,
    pub background: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Sunrise,
    Daylight,
    Sunset,
    Twilight,
    Night,
}

impl Theme {
    /// All themes, in the order of a day.
    pub const ALL: [Theme; 5] = [
        Self::Sunrise,
        Self::Daylight,
        Self::Sunset,
        Self::Twilight,
        Self::Night,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Daylight => "daylight",
            Self::Sunset => "sunset",
            Self::Twilight => "twilight",
            Self::Night => "night",
        }
    }

    pub fn colors(self) -> ThemeColors {
        let (text, background) = match self {
            Self::Sunrise => (Rgb(219, 96, 40), Rgb(253, 237, 168)),
            Self::Daylight => (Rgb(160, 76, 44), Rgb(250, 221, 164)),
            Self::Sunset => (Rgb(160, 76, 44), Rgb(247, 197, 177)),
            Self::Twilight => (Rgb(64, 88, 155), Rgb(211, 229, 253)),
            Self::Night => (Rgb(144, 207, 239), Rgb(6, 19, 31)),
        };
        ThemeColors { text, background }
    }

    /// Theme for `now` given the day's sun times.
    ///
    /// Checked in order: sunrise → sunriseEnd, sunriseEnd → sunsetStart,
    /// sunsetStart → sunset (all inclusive), then night (after `night` or
    /// before `nightEnd`). Anything else is twilight. A bound that does not
    /// occur that day never matches.
    pub fn select(now: Instant, times: &SunTimes) -> Self {
        let after = |e: Option<Instant>| e.is_some_and(|e| now >= e);
        let before = |e: Option<Instant>| e.is_some_and(|e| now <= e);

        if after(times.sunrise()) && before(times.sunrise_end()) {
            Self::Sunrise
        } else if after(times.sunrise_end()) && before(times.sunset_start()) {
            Self::Daylight
        } else if after(times.sunset_start()) && before(times.sunset()) {
            Self::Sunset
        } else if after(times.night()) || before(times.night_end()) {
            Self::Night
        } else {
            Self::Twilight
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daylight_ephem::{GeoLocation, SunTimeAngles, sun_times};

    fn kyiv_times() -> SunTimes {
        let loc = GeoLocation::new(50.5, 30.5).unwrap();
        sun_times(
            "2013-03-05T00:00:00Z".parse().unwrap(),
            &loc,
            &SunTimeAngles::standard(),
        )
    }

    fn at(s: &str) -> Instant {
        s.parse().unwrap()
    }

    #[test]
    fn selection_through_the_day() {
        let t = kyiv_times();
        let cases = [
            ("2013-03-05T01:00:00Z", Theme::Night),
            ("2013-03-05T03:00:00Z", Theme::Twilight),
            ("2013-03-05T04:36:00Z", Theme::Sunrise),
            ("2013-03-05T10:00:00Z", Theme::Daylight),
            ("2013-03-05T15:45:00Z", Theme::Sunset),
            ("2013-03-05T17:00:00Z", Theme::Twilight),
            ("2013-03-05T20:00:00Z", Theme::Night),
        ];
        for (when, want) in cases {
            assert_eq!(Theme::select(at(when), &t), want, "at {when}");
        }
    }

    #[test]
    fn boundaries_inclusive() {
        let t = kyiv_times();
        assert_eq!(Theme::select(t.sunrise().unwrap(), &t), Theme::Sunrise);
        // sunriseEnd matches both sunrise and daylight; sunrise is checked first.
        assert_eq!(Theme::select(t.sunrise_end().unwrap(), &t), Theme::Sunrise);
        assert_eq!(Theme::select(t.sunset().unwrap(), &t), Theme::Sunset);
    }

    #[test]
    fn white_night_has_no_night_theme() {
        // 65 N at midsummer: astronomical night never starts.
        let loc = GeoLocation::new(65.0, 25.0).unwrap();
        let noon: Instant = "2024-06-21T10:00:00Z".parse().unwrap();
        let t = sun_times(noon, &loc, &SunTimeAngles::standard());
        assert_eq!(t.night(), None);
        assert_eq!(Theme::select(t.nadir, &t), Theme::Twilight);
    }

    #[test]
    fn colours() {
        assert_eq!(Theme::Night.colors().background, Rgb(6, 19, 31));
        assert_eq!(Theme::Sunrise.colors().text.to_string(), "219,96,40");
        assert_eq!(Theme::ALL.len(), 5);
        assert_eq!(Theme::Twilight.to_string(), "twilight");
    }
}
