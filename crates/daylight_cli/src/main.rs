use chrono::{FixedOffset, Local, Utc};
use clap::{Args, Parser, Subcommand};
use daylight_ephem::{
    GeoLocation, MoonTimes, RiseSet, SunTimeAngle, SunTimeAngles, moon_illumination,
    moon_position, moon_times, sun_position, sun_times,
};
use daylight_rs::{DaySummary, Daylight, SeededPicker, day_progress, day_progress_position};
use daylight_time::{DayBoundary, Instant};

#[derive(Parser)]
#[command(name = "daylight", about = "Sun and Moon times, positions and day-length summaries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Observer {
    /// Latitude in degrees (north positive)
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees (east positive)
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// Instant (RFC 3339, e.g. 2013-03-05T00:00:00Z); defaults to now
    #[arg(long, value_parser = parse_instant)]
    date: Option<Instant>,
}

#[derive(Args)]
struct Boundary {
    /// Start the day at 00:00 UTC
    #[arg(long, conflicts_with = "offset")]
    utc: bool,
    /// Start the day at 00:00 at a fixed UTC offset (e.g. +02:00)
    #[arg(long, value_parser = parse_offset, allow_hyphen_values = true)]
    offset: Option<FixedOffset>,
}

impl Boundary {
    fn day_boundary(&self) -> DayBoundary {
        match self.offset {
            Some(off) => DayBoundary::Fixed(off),
            None => DayBoundary::from_utc_flag(self.utc),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solar noon, nadir and rise/set times for each sun angle
    Times {
        #[command(flatten)]
        observer: Observer,
        /// Extra angle as deg:morningLabel:eveningLabel (repeatable)
        #[arg(long = "angle", value_parser = parse_angle, allow_hyphen_values = true)]
        angles: Vec<SunTimeAngle>,
    },
    /// Sun azimuth and altitude
    Sun {
        #[command(flatten)]
        observer: Observer,
    },
    /// Moon azimuth, altitude, distance and parallactic angle
    Moon {
        #[command(flatten)]
        observer: Observer,
    },
    /// Moon illuminated fraction, phase and bright-limb angle
    Illumination {
        /// Instant (RFC 3339); defaults to now
        #[arg(long, value_parser = parse_instant)]
        date: Option<Instant>,
    },
    /// Moonrise and moonset for the day containing the instant
    MoonTimes {
        #[command(flatten)]
        observer: Observer,
        #[command(flatten)]
        boundary: Boundary,
    },
    /// Theme, day-length change and sentence
    Day {
        #[command(flatten)]
        observer: Observer,
        #[command(flatten)]
        boundary: Boundary,
        /// Seed for sentence selection
        #[arg(long, default_value = "0")]
        seed: u64,
    },
    /// Fraction of daylight elapsed and position on the progress arc
    Progress {
        #[command(flatten)]
        observer: Observer,
    },
}

fn parse_instant(s: &str) -> Result<Instant, String> {
    s.parse::<Instant>().map_err(|e| e.to_string())
}

fn parse_offset(s: &str) -> Result<FixedOffset, String> {
    s.parse::<FixedOffset>()
        .map_err(|e| format!("invalid UTC offset {s:?}: {e}"))
}

fn parse_angle(s: &str) -> Result<SunTimeAngle, String> {
    let mut parts = s.splitn(3, ':');
    let (Some(deg), Some(morning), Some(evening)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected deg:morning:evening, got {s}"));
    };
    let deg: f64 = deg.parse().map_err(|e| format!("invalid angle {deg:?}: {e}"))?;
    SunTimeAngle::new(deg, morning.to_string(), evening.to_string()).map_err(|e| e.to_string())
}

fn require_location(observer: &Observer) -> GeoLocation {
    GeoLocation::new(observer.lat, observer.lon).unwrap_or_else(|e| {
        eprintln!("Invalid location: {e}");
        std::process::exit(1);
    })
}

fn instant_or_now(date: Option<Instant>) -> Instant {
    date.unwrap_or_else(|| Instant::from_datetime(&Utc::now()))
}

fn print_opt(label: &str, value: Option<Instant>) {
    match value {
        Some(t) => println!("{label}: {t}"),
        None => println!("{label}: none"),
    }
}

fn print_absent(morning: &str, evening: &str, side: &str, angle_deg: f64) {
    println!("{morning}: none (sun stays {side} {angle_deg} deg)");
    println!("{evening}: none (sun stays {side} {angle_deg} deg)");
}

fn print_summary(s: &DaySummary) {
    let colors = s.theme.colors();
    println!("theme: {}", s.theme);
    println!("text color: {}", colors.text);
    println!("background color: {}", colors.background);
    print_opt("sunrise", s.sunrise);
    print_opt("sunset", s.sunset);
    match s.minutes {
        Some(m) => println!("change: {m} min"),
        None => println!("change: undefined"),
    }
    if let Some(kind) = s.kind {
        println!("kind: {kind:?}");
    }
    match &s.sentence {
        Some(sentence) => println!("sentence: {sentence}"),
        None => println!("sentence: none"),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Times { observer, angles } => {
            let loc = require_location(&observer);
            let angle_set = angles
                .into_iter()
                .fold(SunTimeAngles::standard(), SunTimeAngles::with_entry);
            let times = sun_times(instant_or_now(observer.date), &loc, &angle_set);
            println!("solarNoon: {}", times.solar_noon);
            println!("nadir: {}", times.nadir);
            for pair in &times.pairs {
                let (morning, evening) = (pair.angle.morning_label(), pair.angle.evening_label());
                let deg = pair.angle.angle_deg();
                match pair.event {
                    RiseSet::Occurs { rise, set } => {
                        println!("{morning}: {rise}");
                        println!("{evening}: {set}");
                    }
                    RiseSet::AlwaysBelow => print_absent(morning, evening, "below", deg),
                    RiseSet::AlwaysAbove => print_absent(morning, evening, "above", deg),
                }
            }
        }

        Commands::Sun { observer } => {
            let loc = require_location(&observer);
            let pos = sun_position(instant_or_now(observer.date), &loc);
            println!(
                "azimuth: {:.6} rad ({:.3} deg from north)",
                pos.azimuth_rad,
                pos.azimuth_from_north_deg()
            );
            println!(
                "altitude: {:.6} rad ({:.3} deg)",
                pos.altitude_rad,
                pos.altitude_rad.to_degrees()
            );
        }

        Commands::Moon { observer } => {
            let loc = require_location(&observer);
            let pos = moon_position(instant_or_now(observer.date), &loc);
            println!("azimuth: {:.6} rad", pos.azimuth_rad);
            println!(
                "altitude: {:.6} rad ({:.3} deg)",
                pos.altitude_rad,
                pos.altitude_rad.to_degrees()
            );
            println!("distance: {:.1} km", pos.distance_km);
            println!("parallactic angle: {:.6} rad", pos.parallactic_angle_rad);
        }

        Commands::Illumination { date } => {
            let ill = moon_illumination(instant_or_now(date));
            println!("fraction: {:.6}", ill.fraction);
            println!("phase: {:.6} ({})", ill.phase, ill.phase_name().name());
            println!("angle: {:.6} rad", ill.angle_rad);
        }

        Commands::MoonTimes { observer, boundary } => {
            let loc = require_location(&observer);
            let mt = moon_times(instant_or_now(observer.date), &loc, boundary.day_boundary());
            match mt {
                MoonTimes::AlwaysUp => println!("always up"),
                MoonTimes::AlwaysDown => println!("always down"),
                _ => {
                    print_opt("rise", mt.rise());
                    print_opt("set", mt.set());
                }
            }
        }

        Commands::Day {
            observer,
            boundary,
            seed,
        } => {
            let loc = require_location(&observer);
            let daylight = Daylight::from_location(loc);
            let now = instant_or_now(observer.date);
            let mut picker = SeededPicker::new(seed);
            let summary = match boundary.day_boundary() {
                DayBoundary::Utc => daylight.day_in(now, &Utc, &mut picker),
                DayBoundary::Local => daylight.day_in(now, &Local, &mut picker),
                DayBoundary::Fixed(off) => daylight.day_in(now, &off, &mut picker),
            };
            match summary {
                Ok(s) => print_summary(&s),
                Err(e) => {
                    eprintln!("Day summary failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Progress { observer } => {
            let loc = require_location(&observer);
            let now = instant_or_now(observer.date);
            let times = sun_times(now, &loc, &SunTimeAngles::standard());
            match day_progress(now, &times) {
                Some(p) => {
                    println!("progress: {p:.4}");
                    match day_progress_position(p) {
                        Some(pos) => println!("position: {:.2},{:.2}", pos.x, pos.y),
                        None => println!("position: none (sun is down)"),
                    }
                }
                None => println!("progress: none (no sunrise or sunset)"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_argument() {
        let a = parse_angle("-4:blueHourEnd:blueHour").unwrap();
        assert_eq!(a.angle_deg(), -4.0);
        assert_eq!(a.morning_label(), "blueHourEnd");
        assert_eq!(a.evening_label(), "blueHour");
        assert!(parse_angle("-4:onlyOne").is_err());
        assert!(parse_angle("100:a:b").is_err());
    }

    #[test]
    fn offset_and_boundary() {
        let off = parse_offset("+02:00").unwrap();
        assert_eq!(off.local_minus_utc(), 7200);
        let b = Boundary {
            utc: false,
            offset: Some(off),
        };
        assert_eq!(b.day_boundary(), DayBoundary::Fixed(off));
        let b = Boundary {
            utc: true,
            offset: None,
        };
        assert_eq!(b.day_boundary(), DayBoundary::Utc);
    }

    #[test]
    fn cli_parses_subcommands() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
        let cli = Cli::try_parse_from([
            "daylight",
            "times",
            "--lat",
            "50.5",
            "--lon",
            "-30.5",
            "--date",
            "2013-03-05T00:00:00Z",
            "--angle",
            "-4:blueHourEnd:blueHour",
        ])
        .unwrap();
        let Commands::Times { observer, angles } = cli.command else {
            panic!("wrong subcommand");
        };
        assert_eq!(observer.lon, -30.5);
        assert_eq!(angles.len(), 1);
    }
}
