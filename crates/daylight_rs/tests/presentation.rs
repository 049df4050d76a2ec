//! Property tests for the presentation helpers.

use daylight_rs::{
    Daylight, FixedPicker, Instant, SeededPicker, SentencePicker, day_progress_position,
    generate_sentence, template_count,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn arc_stays_in_box(p in 0.0_f64..=1.0) {
        let pos = day_progress_position(p).unwrap();
        prop_assert!((-1e-9..=100.0 + 1e-9).contains(&pos.x), "x = {}", pos.x);
        prop_assert!((0.0..=100.0 + 1e-9).contains(&pos.y), "y = {}", pos.y);
    }

    #[test]
    fn arc_none_outside_unit_interval(p in prop_oneof![-1e6_f64..-1e-9, 1.0 + 1e-9..1e6_f64]) {
        prop_assert!(day_progress_position(p).is_none());
    }

    #[test]
    fn every_template_renders(
        minutes in 0_i64..600,
        longer in any::<bool>(),
        night in any::<bool>(),
        index in 0_usize..16,
    ) {
        let s = generate_sentence(minutes, longer, night, &mut FixedPicker(index));
        let text = s.to_string();
        prop_assert!(!text.is_empty());
        prop_assert!(!text.contains('{'), "unfilled placeholder in {text}");
        if let Some(e) = s.emphasized() {
            if minutes >= 1 && e.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                prop_assert!(e.starts_with(&minutes.to_string()));
            }
        }
    }

    #[test]
    fn seeded_picker_in_range(seed in any::<u64>(), len in 1_usize..20) {
        let mut p = SeededPicker::new(seed);
        for _ in 0..8 {
            prop_assert!(p.pick(len) < len);
        }
    }

    #[test]
    fn summary_total_for_any_instant(
        ms in 0_i64..4_102_444_800_000,
        lat in -89.0_f64..=89.0,
        lon in -180.0_f64..=180.0,
        seed in any::<u64>(),
    ) {
        let d = Daylight::new(lat, lon).unwrap();
        let now = Instant::from_unix_millis(ms);
        let s = d.day_in(now, &chrono::Utc, &mut SeededPicker::new(seed)).unwrap();
        prop_assert_eq!(s.sentence.is_some(), s.minutes.is_some());
    }
}

#[test]
fn template_counts_cover_all_buckets() {
    let total: usize = [false, true]
        .into_iter()
        .flat_map(|night| [false, true].map(|longer| (night, longer)))
        .flat_map(|(night, longer)| [0, 5].map(|m| template_count(m, longer, night)))
        .sum();
    assert_eq!(total, 10 + 5 + 3 + 3 + 5 + 3 + 3 + 3);
}
