//! Invariants checked over a reproducible corpus of sampled seeds.
//!
//! Seeds are drawn from a fixed `ChaCha8` stream so failures can be replayed
//! exactly.

use alien_avatar::{
    AvatarData, DEFAULT_COLORS, Effects, SeedStream, contrast_ratio, generate_avatar_data,
    pick_effects, unit_from_hash,
};
use rand::distr::{Alphanumeric, SampleString};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rstest::{fixture, rstest};

const STROKE_MIN_CONTRAST: f64 = 2.2;

fn sample_seeds() -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(2026);
    (0..2_000)
        .map(|_| {
            let len = rng.random_range(0..24);
            Alphanumeric.sample_string(&mut rng, len)
        })
        .collect()
}

#[fixture]
fn seeds() -> Vec<String> {
    sample_seeds()
}

fn stroke_is_readable(avatar: &AvatarData, palette: &[&str]) -> bool {
    contrast_ratio(&avatar.wrapper_color, &avatar.stroke_color) >= STROKE_MIN_CONTRAST
        || palette.contains(&avatar.stroke_color.as_str())
}

#[rstest]
fn at_most_two_effects_are_active(seeds: Vec<String>) {
    for seed in &seeds {
        let avatar = generate_avatar_data(seed, &DEFAULT_COLORS);
        assert!(
            avatar.effects.active_count() <= 2,
            "seed {seed:?} activated {:?}",
            avatar.effects
        );
    }
}

#[rstest]
fn pick_effects_never_leaves_three_on(seeds: Vec<String>) {
    for seed in &seeds {
        let mut stream = SeedStream::from_seed(seed);
        let effects: Effects = pick_effects(&mut stream);
        assert!(effects.active_count() <= 2, "seed {seed:?}");
    }
}

#[rstest]
#[case::default_palette(&DEFAULT_COLORS)]
#[case::greys(&["#7f7f7f", "#909090", "#707070"])]
#[case::duplicates(&["#00FF41", "#00ff41", "#00FF41"])]
#[case::black_and_white(&["#000000", "#FFFFFF"])]
fn stroke_meets_contrast_or_falls_back(seeds: Vec<String>, #[case] palette: &[&str]) {
    for seed in &seeds {
        let avatar = generate_avatar_data(seed, palette);
        assert!(
            stroke_is_readable(&avatar, palette),
            "seed {seed:?}: {} on {}",
            avatar.stroke_color,
            avatar.wrapper_color
        );
    }
}

#[rstest]
fn empty_palette_always_yields_black(seeds: Vec<String>) {
    for seed in &seeds {
        let avatar = generate_avatar_data::<&str>(seed, &[]);
        assert_eq!(avatar.wrapper_color, "#000000", "seed {seed:?}");
        assert_eq!(avatar.stroke_color, "#000000", "seed {seed:?}");
        assert_eq!(avatar.face_color, "#FFFFFF", "seed {seed:?}");
    }
}

#[rstest]
fn placement_values_stay_in_range(seeds: Vec<String>) {
    for seed in &seeds {
        let avatar = generate_avatar_data(seed, &DEFAULT_COLORS);
        assert!((0.78..1.22).contains(&avatar.mouth_width_scale));
        assert!((-2..=2).contains(&avatar.mouth_y_offset));
        assert!((-8..=8).contains(&avatar.mouth_tilt));
        assert!((-4..=4).contains(&avatar.face_translate_x));
        assert!((-3..=3).contains(&avatar.face_translate_y));
        assert!((-2..=2).contains(&avatar.stroke_translate_x));
        assert!((-2..=2).contains(&avatar.stroke_translate_y));
        assert!(
            avatar.face_color == "#000000" || avatar.face_color == "#FFFFFF",
            "seed {seed:?}"
        );
    }
}

#[test]
fn unit_from_hash_is_bounded_for_sampled_hashes() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..10_000 {
        let hash = rng.random::<u64>() >> 20;
        let range = rng.random_range(1..=64_u32);
        let position = rng.random_range(0..12_u32);
        let unit = unit_from_hash(hash, range, Some(position));
        assert!(
            unit.unsigned_abs() < u64::from(range),
            "hash {hash} range {range} position {position} gave {unit}"
        );
    }
}

#[test]
fn corpus_is_reproducible() {
    let first = sample_seeds();
    let second = sample_seeds();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2_000);
    for sample in first.iter().take(16) {
        assert_eq!(
            generate_avatar_data(sample, &DEFAULT_COLORS),
            generate_avatar_data(sample, &DEFAULT_COLORS)
        );
    }
}
