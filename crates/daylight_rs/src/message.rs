//! Coarse classification of a day-length change.
//!
//! By day, today is compared with yesterday; after dark, tomorrow is
//! compared with today. A change of more than 150 s counts as "more than
//! a minute", more than 60 s as "one minute", anything else as "less
//! than a minute". A zero change counts as shorter.

use crate::theme::Theme;

const MORE_THAN_A_MINUTE_S: f64 = 150.0;
const ONE_MINUTE_S: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    LongerMoreThanAMinute,
    LongerOneMinute,
    LongerLessThanAMinute,
    ShorterMoreThanAMinute,
    ShorterOneMinute,
    ShorterLessThanAMinute,
    LongerTomorrowMoreThanAMinute,
    LongerTomorrowOneMinute,
    LongerTomorrowLessThanAMinute,
    ShorterTomorrowMoreThanAMinute,
    ShorterTomorrowOneMinute,
    ShorterTomorrowLessThanAMinute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Magnitude {
    MoreThanAMinute,
    OneMinute,
    LessThanAMinute,
}

impl Magnitude {
    fn of(delta_s: f64) -> Self {
        if delta_s > MORE_THAN_A_MINUTE_S {
            Self::MoreThanAMinute
        } else if delta_s > ONE_MINUTE_S {
            Self::OneMinute
        } else {
            Self::LessThanAMinute
        }
    }
}

impl MessageKind {
    /// Classify from daylight lengths in seconds.
    pub fn classify(theme: Theme, yesterday_s: f64, today_s: f64, tomorrow_s: f64) -> Self {
        use Magnitude::*;
        use MessageKind::*;

        let tomorrow = theme == Theme::Night;
        let delta = if tomorrow {
            tomorrow_s - today_s
        } else {
            today_s - yesterday_s
        };
        let longer = delta > 0.0;

        match (tomorrow, longer, Magnitude::of(delta.abs())) {
            (false, true, MoreThanAMinute) => LongerMoreThanAMinute,
            (false, true, OneMinute) => LongerOneMinute,
            (false, true, LessThanAMinute) => LongerLessThanAMinute,
            (false, false, MoreThanAMinute) => ShorterMoreThanAMinute,
            (false, false, OneMinute) => ShorterOneMinute,
            (false, false, LessThanAMinute) => ShorterLessThanAMinute,
            (true, true, MoreThanAMinute) => LongerTomorrowMoreThanAMinute,
            (true, true, OneMinute) => LongerTomorrowOneMinute,
            (true, true, LessThanAMinute) => LongerTomorrowLessThanAMinute,
            (true, false, MoreThanAMinute) => ShorterTomorrowMoreThanAMinute,
            (true, false, OneMinute) => ShorterTomorrowOneMinute,
            (true, false, LessThanAMinute) => ShorterTomorrowLessThanAMinute,
        }
    }

    pub fn is_longer(self) -> bool {
        matches!(
            self,
            Self::LongerMoreThanAMinute
                | Self::LongerOneMinute
                | Self::LongerLessThanAMinute
                | Self::LongerTomorrowMoreThanAMinute
                | Self::LongerTomorrowOneMinute
                | Self::LongerTomorrowLessThanAMinute
        )
    }

    pub fn is_tomorrow(self) -> bool {
        matches!(
            self,
            Self::LongerTomorrowMoreThanAMinute
                | Self::LongerTomorrowOneMinute
                | Self::LongerTomorrowLessThanAMinute
                | Self::ShorterTomorrowMoreThanAMinute
                | Self::ShorterTomorrowOneMinute
                | Self::ShorterTomorrowLessThanAMinute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_thresholds() {
        let k = |today| MessageKind::classify(Theme::Daylight, 36_000.0, today, 0.0);
        assert_eq!(k(36_151.0), MessageKind::LongerMoreThanAMinute);
        assert_eq!(k(36_150.0), MessageKind::LongerOneMinute);
        assert_eq!(k(36_061.0), MessageKind::LongerOneMinute);
        assert_eq!(k(36_060.0), MessageKind::LongerLessThanAMinute);
        assert_eq!(k(36_000.0), MessageKind::ShorterLessThanAMinute);
        assert_eq!(k(35_800.0), MessageKind::ShorterMoreThanAMinute);
    }

    #[test]
    fn night_compares_tomorrow() {
        let k = MessageKind::classify(Theme::Night, 0.0, 36_000.0, 36_100.0);
        assert_eq!(k, MessageKind::LongerTomorrowOneMinute);
        assert!(k.is_tomorrow() && k.is_longer());

        let k = MessageKind::classify(Theme::Night, 99_999.0, 36_000.0, 35_990.0);
        assert_eq!(k, MessageKind::ShorterTomorrowLessThanAMinute);
        assert!(!k.is_longer());
    }

    #[test]
    fn twilight_counts_as_day() {
        let k = MessageKind::classify(Theme::Twilight, 36_000.0, 35_900.0, 99_999.0);
        assert_eq!(k, MessageKind::ShorterOneMinute);
        assert!(!k.is_tomorrow());
    }
}
