//! Outcome of a moonrise/moonset scan.

use daylight_time::Instant;

/// Moonrise and moonset within one 24-hour window.
///
/// Exactly one category holds. The always-up/always-down verdicts apply
/// only when neither crossing was found in the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonTimes {
    RiseAndSet { rise: Instant, set: Instant },
    RiseOnly(Instant),
    SetOnly(Instant),
    /// Above the horizon for the whole window.
    AlwaysUp,
    /// Below the horizon for the whole window.
    AlwaysDown,
}

impl MoonTimes {
    pub(crate) fn from_crossings(rise: Option<Instant>, set: Option<Instant>, up: bool) -> Self {
        match (rise, set) {
            (Some(rise), Some(set)) => Self::RiseAndSet { rise, set },
            (Some(rise), None) => Self::RiseOnly(rise),
            (None, Some(set)) => Self::SetOnly(set),
            (None, None) if up => Self::AlwaysUp,
            (None, None) => Self::AlwaysDown,
        }
    }

    pub fn rise(&self) -> Option<Instant> {
        match self {
            Self::RiseAndSet { rise, .. } | Self::RiseOnly(rise) => Some(*rise),
            _ => None,
        }
    }

    pub fn set(&self) -> Option<Instant> {
        match self {
            Self::RiseAndSet { set, .. } | Self::SetOnly(set) => Some(*set),
            _ => None,
        }
    }

    pub fn is_always_up(&self) -> bool {
        matches!(self, Self::AlwaysUp)
    }

    pub fn is_always_down(&self) -> bool {
        matches!(self, Self::AlwaysDown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_crossings() {
        let a = Instant::from_unix_millis(1_000);
        let b = Instant::from_unix_millis(2_000);
        assert_eq!(
            MoonTimes::from_crossings(Some(a), Some(b), true),
            MoonTimes::RiseAndSet { rise: a, set: b }
        );
        assert_eq!(MoonTimes::from_crossings(None, Some(b), true), MoonTimes::SetOnly(b));
        assert_eq!(MoonTimes::from_crossings(Some(a), None, false).rise(), Some(a));
        assert!(MoonTimes::from_crossings(None, None, true).is_always_up());
        assert!(MoonTimes::from_crossings(None, None, false).is_always_down());
    }

    #[test]
    fn accessors_on_flags() {
        assert_eq!(MoonTimes::AlwaysUp.rise(), None);
        assert_eq!(MoonTimes::AlwaysDown.set(), None);
        assert!(!MoonTimes::AlwaysUp.is_always_down());
    }
}
