//! Day-length summaries on top of the daylight ephemeris.
//!
//! Turns a sun-time table into the things a clock face shows: the
//! daylight length and its change from the neighbouring day, a colour
//! theme for the current phase of the day, the position on the
//! day-progress arc, and a short sentence describing the change.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use daylight_rs::*;
//!
//! let observer = Daylight::new(50.5, 30.5)?;
//! let now: Instant = "2013-03-05T10:00:00Z".parse()?;
//! let summary = observer.day_in(now, &chrono::Utc, &mut SeededPicker::new(7))?;
//! if let Some(sentence) = &summary.sentence {
//!     println!("{}: {sentence}", summary.theme);
//! }
//! ```

pub mod convenience;
pub mod day;
pub mod error;
pub mod message;
pub mod observer;
pub mod sentence;
pub mod theme;

pub use convenience::{
    moon_illumination, moon_position, moon_times, sun_position, sun_times, sun_times_with,
};
pub use day::{
    ProgressPosition, day_progress, day_progress_position, daylight_diff_minutes,
    daylight_minutes,
};
pub use error::DaylightError;
pub use message::MessageKind;
pub use observer::{DaySummary, Daylight};
pub use sentence::{
    FixedPicker, SeededPicker, Segment, Sentence, SentencePicker, generate_sentence,
    template_count,
};
pub use theme::{Rgb, Theme, ThemeColors};

// Re-export engine types so callers need only this crate.
pub use daylight_ephem::{
    GeoLocation, MoonIllumination, MoonPhaseName, MoonPosition, MoonTimes, RiseSet, SunTimeAngle,
    SunTimeAngles, SunTimePair, SunTimes, SunTimesCalculator, labels,
};
pub use daylight_frames::HorizontalCoords;
pub use daylight_time::{DayBoundary, Instant};
