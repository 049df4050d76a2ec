//! Short English sentences describing the change in day length.
//!
//! Templates are grouped by time of day (day or night), direction
//! (longer or shorter) and magnitude (whole minutes or under a minute).
//! Each template is a list of segments; the emphasised segment carries
//! the minute count. `{n}` and `{unit}` in a segment are replaced with
//! the count and "minute"/"minutes".

use std::fmt::{Display, Formatter};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one of `len` candidate templates.
pub trait SentencePicker {
    /// Index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Deterministic picker backed by a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SentencePicker for SeededPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same index (wrapped into range).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPicker(pub usize);

impl SentencePicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 { 0 } else { self.0 % len }
    }
}

/// A run of sentence text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub emphasize: bool,
    pub text: String,
}

/// A rendered sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub segments: Vec<Segment>,
}

impl Sentence {
    /// The first emphasised segment, if any.
    pub fn emphasized(&self) -> Option<&str> {
        self.segments
            .iter()
            .find(|s| s.emphasize)
            .map(|s| s.text.as_str())
    }
}

impl Display for Sentence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for s in &self.segments {
            f.write_str(&s.text)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct Part {
    emphasize: bool,
    text: &'static str,
}

const fn plain(text: &'static str) -> Part {
    Part {
        emphasize: false,
        text,
    }
}

const fn emph(text: &'static str) -> Part {
    Part {
        emphasize: true,
        text,
    }
}

type Template = &'static [Part];

static DAY_LONGER_MINUTES: &[Template] = &[
    &[plain("Today is "), emph("{n} {unit} "), plain("longer than yesterday. Happy days!")],
    &[plain("The sun is out for "), emph("{n} more {unit} "), plain("today. Enjoy!")],
    &[emph("{n} extra {unit} "), plain("of sunshine today. Make them count!")],
    &[
        plain("Make sure to soak up that vitamin D. "),
        emph("{n} more {unit} "),
        plain("of daylight today!"),
    ],
    &[plain("Smile! Today has "), emph("{n} more {unit} "), plain("of daylight than yesterday!")],
    &[emph("{n} more {unit} "), plain("of daylight today. Just let it sink in…")],
    &[plain("Today is "), emph("{n} {unit} longer"), plain(". It’s getting better and better!")],
    &[
        plain("Bring out your shorts, because today has "),
        emph("{n} more {unit} "),
        plain("of sunlight."),
    ],
    &[
        plain("Have a great day and enjoy those "),
        emph("{n} extra {unit} "),
        plain("of daylight."),
    ],
    &[plain("After darkness comes daylight. "), emph("{n} more {unit} "), plain("to be precise!")],
];

static DAY_LONGER_SECONDS: &[Template] = &[
    &[
        plain("Little less than "),
        emph("a minute "),
        plain("of extra sunlight today. It’s getting better!"),
    ],
    &[plain("We’ve reached the tipping point: we’ll have more sunlight every day now!")],
    &[
        emph("About a minute "),
        plain("of extra light. You’ll start noticing the difference soon!"),
    ],
    &[
        plain("There’s "),
        emph("about a minute "),
        plain("of extra light at the end of this tunnel."),
    ],
    &[
        plain("We’ll have "),
        emph("about a minute "),
        plain("of extra light today. It’s upwards from here."),
    ],
];

static DAY_SHORTER_MINUTES: &[Template] = &[
    &[plain("The sun will be out "), emph("{n} {unit} less "), plain("today. Keep your head up!")],
    &[emph("{n} {unit} less "), plain("sunlight today, unfortunately. It’ll get better!")],
    &[plain("Sadly, the day will be "), emph("{n} {unit} shorter"), plain(". Make the most out of it!")],
];

static DAY_SHORTER_SECONDS: &[Template] = &[
    &[plain("Unfortunately, the day is a little bit shorter today. Make the most out of it!")],
    &[plain("Sadly, today is a tiny bit shorter than yesterday. Enjoy it while it lasts!")],
    &[plain("Today is shorter than yesterday. But fear not, brighter times ahead!")],
];

static NIGHT_LONGER_MINUTES: &[Template] = &[
    &[
        plain("Get a good night’s sleep: tomorrow there’ll be "),
        emph("{n} more {unit} "),
        plain("of sunlight."),
    ],
    &[plain("Lights out. Enjoy "), emph("{n} more {unit} "), plain("of sunlight tomorrow!")],
    &[plain("Bring out those pyjamas. "), emph("{n} more {unit} "), plain("of light await tomorrow.")],
    &[
        plain("The sun has set for today. Embrace those "),
        emph("{n} {unit} "),
        plain("of extra daylight tomorrow."),
    ],
    &[plain("The sun has set. Soak up the extra vitamin D tomorrow!")],
];

static NIGHT_LONGER_SECONDS: &[Template] = &[
    &[plain("Get a good night’s sleep: tomorrow there’ll be more sunlight for you.")],
    &[plain("Bring out those pyjamas. More daylight awaits tomorrow!")],
    &[plain("The sun has set. Soak up the extra vitamin D tomorrow!")],
];

static NIGHT_SHORTER_MINUTES: &[Template] = &[
    &[
        plain("Unfortunately, tomorrow will be "),
        emph("{n} {unit} "),
        plain("shorter than today. Make the most out of it!"),
    ],
    &[
        plain("Sadly, tomorrow will be "),
        emph("{n} {unit} "),
        plain("shorter than today. Enjoy it while it lasts!"),
    ],
    &[
        plain("Tomorrow will be "),
        emph("{n} {unit} "),
        plain("shorter than today. But fear not, brighter times ahead!"),
    ],
];

static NIGHT_SHORTER_SECONDS: &[Template] = &[
    &[plain(
        "Unfortunately, tomorrow will be a little bit shorter than today. Make the most out of it!",
    )],
    &[plain("Sadly, tomorrow will be a tiny bit shorter than today. Enjoy it while it lasts!")],
    &[plain("Tomorrow will be shorter than today. But fear not, brighter times ahead!")],
];

fn templates(minutes: i64, longer: bool, night: bool) -> &'static [Template] {
    match (night, longer, minutes >= 1) {
        (false, true, true) => DAY_LONGER_MINUTES,
        (false, true, false) => DAY_LONGER_SECONDS,
        (false, false, true) => DAY_SHORTER_MINUTES,
        (false, false, false) => DAY_SHORTER_SECONDS,
        (true, true, true) => NIGHT_LONGER_MINUTES,
        (true, true, false) => NIGHT_LONGER_SECONDS,
        (true, false, true) => NIGHT_SHORTER_MINUTES,
        (true, false, false) => NIGHT_SHORTER_SECONDS,
    }
}

/// Number of candidate templates for a combination.
pub fn template_count(minutes: i64, longer: bool, night: bool) -> usize {
    templates(minutes, longer, night).len()
}

/// Describe a day-length change of `minutes` whole minutes.
///
/// `longer` says whether the compared day is longer; `night` selects the
/// "tomorrow" wording used after dark.
pub fn generate_sentence(
    minutes: i64,
    longer: bool,
    night: bool,
    picker: &mut impl SentencePicker,
) -> Sentence {
    let candidates = templates(minutes, longer, night);
    let index = picker.pick(candidates.len()).min(candidates.len() - 1);
    let unit = if minutes > 1 { "minutes" } else { "minute" };
    let count = minutes.to_string();

    let segments = candidates[index]
        .iter()
        .map(|p| Segment {
            emphasize: p.emphasize,
            text: p.text.replace("{n}", &count).replace("{unit}", unit),
        })
        .collect();
    Sentence { segments }
}
