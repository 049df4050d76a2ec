//! Types for the solar time table.
//!
//! An angle set lists the solar altitudes whose morning and evening
//! crossings the table reports. The set is an ordinary immutable value:
//! extend it with [`SunTimeAngles::with_entry`] and pass it to each call
//! (or bind it once into a `SunTimesCalculator`).

use std::borrow::Cow;

use daylight_time::Instant;

use crate::error::EphemError;

/// Labels of the built-in table entries and of the transit instants.
pub mod labels {
    pub const SOLAR_NOON: &str = "solarNoon";
    pub const NADIR: &str = "nadir";
    pub const SUNRISE: &str = "sunrise";
    pub const SUNSET: &str = "sunset";
    pub const SUNRISE_END: &str = "sunriseEnd";
    pub const SUNSET_START: &str = "sunsetStart";
    pub const DAWN: &str = "dawn";
    pub const DUSK: &str = "dusk";
    pub const NAUTICAL_DAWN: &str = "nauticalDawn";
    pub const NAUTICAL_DUSK: &str = "nauticalDusk";
    pub const NIGHT_END: &str = "nightEnd";
    pub const NIGHT: &str = "night";
    pub const GOLDEN_HOUR_END: &str = "goldenHourEnd";
    pub const GOLDEN_HOUR: &str = "goldenHour";
}

/// A solar altitude with labels for its morning and evening crossings.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimeAngle {
    angle_deg: f64,
    morning: Cow<'static, str>,
    evening: Cow<'static, str>,
}

impl SunTimeAngle {
    /// Create an entry. `angle_deg` is the Sun's altitude (negative below
    /// the horizon) and must lie in [-90, 90].
    pub fn new(
        angle_deg: f64,
        morning: impl Into<Cow<'static, str>>,
        evening: impl Into<Cow<'static, str>>,
    ) -> Result<Self, EphemError> {
        if !angle_deg.is_finite() || !(-90.0..=90.0).contains(&angle_deg) {
            return Err(EphemError::InvalidAngle("angle must be within [-90, 90] degrees"));
        }
        Ok(Self {
            angle_deg,
            morning: morning.into(),
            evening: evening.into(),
        })
    }

    const fn builtin(angle_deg: f64, morning: &'static str, evening: &'static str) -> Self {
        Self {
            angle_deg,
            morning: Cow::Borrowed(morning),
            evening: Cow::Borrowed(evening),
        }
    }

    /// Solar altitude in degrees.
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    /// Label of the morning (rising) crossing.
    pub fn morning_label(&self) -> &str {
        &self.morning
    }

    /// Label of the evening (setting) crossing.
    pub fn evening_label(&self) -> &str {
        &self.evening
    }
}

/// The six standard entries, in table order.
///
/// Sunrise/sunset use −0.833° (34′ refraction + 16′ semidiameter);
/// sunriseEnd/sunsetStart put the lower limb on the horizon.
pub static STANDARD_ANGLES: [SunTimeAngle; 6] = [
    SunTimeAngle::builtin(-0.833, labels::SUNRISE, labels::SUNSET),
    SunTimeAngle::builtin(-0.3, labels::SUNRISE_END, labels::SUNSET_START),
    SunTimeAngle::builtin(-6.0, labels::DAWN, labels::DUSK),
    SunTimeAngle::builtin(-12.0, labels::NAUTICAL_DAWN, labels::NAUTICAL_DUSK),
    SunTimeAngle::builtin(-18.0, labels::NIGHT_END, labels::NIGHT),
    SunTimeAngle::builtin(6.0, labels::GOLDEN_HOUR_END, labels::GOLDEN_HOUR),
];

/// An ordered, immutable set of sun-time angles.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimeAngles {
    entries: Vec<SunTimeAngle>,
}

impl Default for SunTimeAngles {
    fn default() -> Self {
        Self::standard()
    }
}

impl SunTimeAngles {
    /// The six standard entries.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ANGLES.to_vec(),
        }
    }

    /// No entries: the table holds only solar noon and nadir.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// This set with `entry` appended.
    pub fn with_entry(mut self, entry: SunTimeAngle) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &SunTimeAngle> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Morning/evening crossing of one angle, or why there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiseSet {
    /// The Sun crosses the angle twice.
    Occurs { rise: Instant, set: Instant },
    /// The Sun stays below the angle all day.
    AlwaysBelow,
    /// The Sun stays above the angle all day.
    AlwaysAbove,
}

impl RiseSet {
    /// Morning crossing, if any.
    pub fn rise(&self) -> Option<Instant> {
        match self {
            Self::Occurs { rise, .. } => Some(*rise),
            _ => None,
        }
    }

    /// Evening crossing, if any.
    pub fn set(&self) -> Option<Instant> {
        match self {
            Self::Occurs { set, .. } => Some(*set),
            _ => None,
        }
    }
}

/// One table row: an angle entry and its crossings.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimePair {
    pub angle: SunTimeAngle,
    pub event: RiseSet,
}

/// Solar noon, nadir and one rise/set row per angle entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes {
    pub solar_noon: Instant,
    pub nadir: Instant,
    pub pairs: Vec<SunTimePair>,
}

impl SunTimes {
    /// The instant stored under `label`.
    ///
    /// When several entries share a label, the last one wins. `solarNoon`
    /// and `nadir` resolve to the transit instants unless an entry
    /// reuses those labels.
    pub fn get(&self, label: &str) -> Option<Instant> {
        for pair in self.pairs.iter().rev() {
            if pair.angle.evening_label() == label {
                return pair.event.set();
            }
            if pair.angle.morning_label() == label {
                return pair.event.rise();
            }
        }
        match label {
            labels::SOLAR_NOON => Some(self.solar_noon),
            labels::NADIR => Some(self.nadir),
            _ => None,
        }
    }

    /// The row whose morning or evening label is `label` (last wins).
    pub fn pair(&self, label: &str) -> Option<&SunTimePair> {
        self.pairs
            .iter()
            .rev()
            .find(|p| p.angle.morning_label() == label || p.angle.evening_label() == label)
    }

    pub fn sunrise(&self) -> Option<Instant> {
        self.get(labels::SUNRISE)
    }

    pub fn sunset(&self) -> Option<Instant> {
        self.get(labels::SUNSET)
    }

    pub fn sunrise_end(&self) -> Option<Instant> {
        self.get(labels::SUNRISE_END)
    }

    pub fn sunset_start(&self) -> Option<Instant> {
        self.get(labels::SUNSET_START)
    }

    pub fn dawn(&self) -> Option<Instant> {
        self.get(labels::DAWN)
    }

    pub fn dusk(&self) -> Option<Instant> {
        self.get(labels::DUSK)
    }

    pub fn nautical_dawn(&self) -> Option<Instant> {
        self.get(labels::NAUTICAL_DAWN)
    }

    pub fn nautical_dusk(&self) -> Option<Instant> {
        self.get(labels::NAUTICAL_DUSK)
    }

    pub fn night_end(&self) -> Option<Instant> {
        self.get(labels::NIGHT_END)
    }

    pub fn night(&self) -> Option<Instant> {
        self.get(labels::NIGHT)
    }

    pub fn golden_hour_end(&self) -> Option<Instant> {
        self.get(labels::GOLDEN_HOUR_END)
    }

    pub fn golden_hour(&self) -> Option<Instant> {
        self.get(labels::GOLDEN_HOUR)
    }
}
