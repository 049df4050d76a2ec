//! Illuminated fraction, phase and bright-limb angle of the Moon.
//!
//! The geocentric elongation ψ between Sun and Moon gives the phase angle
//! i = atan2(R sin ψ, Δ − R cos ψ), with R the Earth–Sun and Δ the
//! Earth–Moon distance. The illuminated fraction is (1 + cos i) / 2.
//!
//! Source: Meeus, _Astronomical Algorithms_ 2nd ed., ch. 48; IDL
//! astrolib `mphase.pro`.

use std::f64::consts::PI;

use daylight_time::Instant;

use crate::moon::moon_coords;
use crate::sun::sun_coords;

/// Mean Earth–Sun distance in km used for the phase angle.
const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Illumination of the Moon at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonIllumination {
    /// Illuminated fraction of the disc, in [0, 1].
    pub fraction: f64,
    /// Position in the synodic cycle, in [0, 1]: 0 new, 0.25 first
    /// quarter, 0.5 full, 0.75 last quarter.
    pub phase: f64,
    /// Position angle of the bright limb's midpoint in radians, measured
    /// eastward from north. Negative while waxing.
    pub angle_rad: f64,
}

impl MoonIllumination {
    /// Phase shifted to [-0.5, 0.5] around full moon: negative while
    /// waxing, positive while waning.
    pub fn signed_phase(&self) -> f64 {
        self.phase - 0.5
    }

    /// Whether the illuminated fraction is growing.
    pub fn is_waxing(&self) -> bool {
        self.angle_rad < 0.0
    }

    /// Conventional name of the phase.
    pub fn phase_name(&self) -> MoonPhaseName {
        MoonPhaseName::from_phase(self.phase)
    }
}

/// The eight conventional phase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhaseName {
    /// Bucket a phase in [0, 1] into one of eight names, each centred on
    /// its nominal value (new at 0 and 1, full at 0.5).
    pub fn from_phase(phase: f64) -> Self {
        match phase {
            p if p <= 1.0 / 16.0 => Self::NewMoon,
            p if p <= 3.0 / 16.0 => Self::WaxingCrescent,
            p if p <= 5.0 / 16.0 => Self::FirstQuarter,
            p if p <= 7.0 / 16.0 => Self::WaxingGibbous,
            p if p <= 9.0 / 16.0 => Self::FullMoon,
            p if p <= 11.0 / 16.0 => Self::WaningGibbous,
            p if p <= 13.0 / 16.0 => Self::LastQuarter,
            p if p <= 15.0 / 16.0 => Self::WaningCrescent,
            _ => Self::NewMoon,
        }
    }

    /// Lower-case display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "new moon",
            Self::WaxingCrescent => "waxing crescent",
            Self::FirstQuarter => "first quarter",
            Self::WaxingGibbous => "waxing gibbous",
            Self::FullMoon => "full moon",
            Self::WaningGibbous => "waning gibbous",
            Self::LastQuarter => "last quarter",
            Self::WaningCrescent => "waning crescent",
        }
    }
}

/// Illuminated fraction, phase and bright-limb angle at an instant.
///
/// Geocentric: independent of the observer's location.
pub fn moon_illumination(instant: Instant) -> MoonIllumination {
    let d = instant.days_since_j2000();
    let s = sun_coords(d).equatorial;
    let m = moon_coords(d);
    let (s_ra, s_dec) = (s.right_ascension_rad, s.declination_rad);
    let (m_ra, m_dec) = (m.equatorial.right_ascension_rad, m.equatorial.declination_rad);

    let elongation = (s_dec.sin() * m_dec.sin() + s_dec.cos() * m_dec.cos() * (s_ra - m_ra).cos())
        .clamp(-1.0, 1.0)
        .acos();
    let inc = (SUN_DISTANCE_KM * elongation.sin())
        .atan2(m.distance_km - SUN_DISTANCE_KM * elongation.cos());
    let angle = (s_dec.cos() * (s_ra - m_ra).sin())
        .atan2(s_dec.sin() * m_dec.cos() - s_dec.cos() * m_dec.sin() * (s_ra - m_ra).cos());

    // angle == 0 counts as positive.
    let sign = if angle < 0.0 { -1.0 } else { 1.0 };

    MoonIllumination {
        fraction: (1.0 + inc.cos()) / 2.0,
        phase: 0.5 + 0.5 * inc * sign / PI,
        angle_rad: angle,
    }
}
