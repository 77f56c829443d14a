//! Avatar generation.
//!
//! [`generate_avatar_data`] owns one [`SeedStream`] and one [`UsedIndices`]
//! per call and threads them through every decision in a fixed order:
//!
//! 1. wrapper colour, then a contrasting stroke colour;
//! 2. wrapper jitter, then stroke jitter (dropped when contrast suffers);
//! 3. decorative effects;
//! 4. four hash words for noise, slices, stars and glitch;
//! 5. eye, mouth and the mouth/face/stroke placement values.
//!
//! Layouts derived from the hash words (noise texture, slices, glitch bar,
//! star glyph) consume no further draws.

use tracing::{debug, trace};

use crate::avatar::{
    AvatarData, CANVAS_SIZE, Effect, Effects, EyeVariant, GlitchBar, MouthVariant, NoisePixel,
    SliceBand, StarGlyph, StarVariant,
};
use crate::color::{contrast_ratio, jitter_hex, readable_foreground};
use crate::numeric::unit_from_hash;
use crate::selector::{UsedIndices, pick_color, pick_contrasting_color};
use crate::stream::SeedStream;

/// Minimum wrapper/stroke contrast.
const STROKE_MIN_CONTRAST: f64 = 2.2;

/// Full width of the wrapper jitter window, centred on zero.
const WRAPPER_JITTER: f64 = 0.12;

/// Full width of the stroke jitter window, centred on zero.
const STROKE_JITTER: f64 = 0.18;

/// Activation probability per effect, in [`Effect::ALL`] order.
const EFFECT_CHANCES: [f64; 4] = [0.34, 0.3, 0.22, 0.28];

/// Probability of forcing one effect on when none was drawn.
const FORCE_EFFECT_CHANCE: f64 = 0.6;

const MAX_ACTIVE_EFFECTS: usize = 2;

const NOISE_PIXELS: u64 = 12;
const NOISE_MODULUS: u64 = 0x00FF_FFFF;
const SLICE_BANDS: u64 = 5;

/// Builds the avatar descriptor for `seed` using `colors` as the palette.
///
/// Identical inputs always give identical output. An empty palette is
/// legal: every colour then falls back to black, with a white face.
/// Entries that are not six-digit hex colours are tolerated and simply
/// never jitter.
///
/// # Example
///
/// ```
/// use alien_avatar::{DEFAULT_COLORS, EyeVariant, generate_avatar_data};
///
/// let avatar = generate_avatar_data("alice", &DEFAULT_COLORS);
/// assert_eq!(avatar.wrapper_color, "#9234ff");
/// assert_eq!(avatar.eye_type, EyeVariant::Narrow);
/// assert_eq!(avatar, generate_avatar_data("alice", &DEFAULT_COLORS));
/// ```
#[must_use]
pub fn generate_avatar_data<S: AsRef<str>>(seed: &str, colors: &[S]) -> AvatarData {
    debug!(
        seed_len = seed.len(),
        palette_len = colors.len(),
        "generating avatar"
    );
    let mut stream = SeedStream::from_seed(seed);
    let mut used = UsedIndices::new();

    let wrapper_base = pick_color(&mut stream, colors, &mut used);
    let stroke_base = pick_contrasting_color(
        &mut stream,
        wrapper_base,
        colors,
        &mut used,
        STROKE_MIN_CONTRAST,
    );

    let wrapper_color = jitter_hex(wrapper_base, centred(&mut stream, WRAPPER_JITTER));
    let jittered_stroke = jitter_hex(stroke_base, centred(&mut stream, STROKE_JITTER));
    let stroke_color = if contrast_ratio(&wrapper_color, &jittered_stroke) < STROKE_MIN_CONTRAST {
        trace!(%jittered_stroke, %stroke_base, "stroke jitter lowers contrast; keeping base");
        stroke_base.to_owned()
    } else {
        jittered_stroke
    };

    let effects = pick_effects(&mut stream);

    let noise_hash = stream.next_hash();
    let slices_hash = stream.next_hash();
    let stars_hash = stream.next_hash();
    let glitch_hash = stream.next_hash();

    let eye_type = EyeVariant::from_index(stream.next_index(EyeVariant::ALL.len()));
    let mouth_type = MouthVariant::from_index(stream.next_index(MouthVariant::ALL.len()));
    let mouth_width_scale = 0.78 + stream.next_f64() * 0.44;
    let mouth_y_offset = stream.next_int(-2, 2);
    let mouth_tilt = stream.next_int(-8, 8);
    let face_translate_x = stream.next_int(-4, 4);
    let face_translate_y = stream.next_int(-3, 3);
    let stroke_translate_x = stream.next_int(-2, 2);
    let stroke_translate_y = stream.next_int(-2, 2);

    AvatarData {
        face_color: readable_foreground(&wrapper_color).to_owned(),
        wrapper_color,
        stroke_color,
        eye_type,
        mouth_type,
        mouth_width_scale,
        mouth_y_offset,
        mouth_tilt,
        face_translate_x,
        face_translate_y,
        stroke_translate_x,
        stroke_translate_y,
        effects,
        noise_texture: noise_texture(noise_hash),
        stars: StarGlyph {
            variant: star_variant(stars_hash),
        },
        glitch: glitch_bar(glitch_hash),
        slices: slice_bands(slices_hash),
    }
}

/// One draw mapped onto `[-width / 2, width / 2)`.
fn centred(stream: &mut SeedStream, width: f64) -> f64 {
    (stream.next_f64() - 0.5) * width
}

/// Draws the decorative effects, keeping at most two active.
///
/// Each effect is drawn once in [`Effect::ALL`] order. When none comes up,
/// one more draw decides whether to force a single effect on, chosen by a
/// further draw. While more than two are on, a drawn active effect is
/// switched off.
pub fn pick_effects(stream: &mut SeedStream) -> Effects {
    let mut effects = Effects::default();
    for (effect, chance) in Effect::ALL.into_iter().zip(EFFECT_CHANCES) {
        effects.set(effect, stream.next_f64() < chance);
    }

    if effects.active_count() == 0 && stream.next_f64() < FORCE_EFFECT_CHANCE {
        if let Some(&forced) = Effect::ALL.get(stream.next_index(Effect::ALL.len())) {
            trace!(?forced, "no effect drawn; forcing one on");
            effects.set(forced, true);
        }
    }

    loop {
        let active = effects.active();
        if active.len() <= MAX_ACTIVE_EFFECTS {
            break;
        }
        if let Some(&dropped) = active.get(stream.next_index(active.len())) {
            trace!(?dropped, active = active.len(), "too many effects; dropping one");
            effects.set(dropped, false);
        }
    }

    effects
}

/// Lays out the twelve speckles of the noise overlay from `hash`.
///
/// Speckle `i` mixes the hash with the multipliers `7i + 1`, `7i + 3` and
/// `7i + 5` modulo `0xFFFFFF`; position lands in `[3, 32]`, each side in
/// `[1, 3]`.
#[must_use]
pub fn noise_texture(hash: u32) -> Vec<NoisePixel> {
    let wide = u64::from(hash);
    (0..NOISE_PIXELS)
        .map(|i| {
            let mix = |offset: u64| (wide * (i * 7 + offset)).rem_euclid(NOISE_MODULUS);
            let (h1, h2, h3) = (mix(1), mix(3), mix(5));
            NoisePixel {
                x: narrow(3 + h1.rem_euclid(30)),
                y: narrow(3 + h2.rem_euclid(30)),
                w: narrow(1 + h3.rem_euclid(3)),
                h: narrow(1 + (h3 + 1).rem_euclid(3)),
            }
        })
        .collect()
}

/// Lays out the five bands of the slices overlay from `hash`.
#[must_use]
pub fn slice_bands(hash: u32) -> Vec<SliceBand> {
    let canvas = u32::from(CANVAS_SIZE);
    (1..=SLICE_BANDS)
        .map(|band| {
            let band_hash = u64::from(hash) * band + 100;
            SliceBand {
                y: signed_unit(band_hash, canvas, 1),
                height: (1 + signed_unit(band_hash, 4, 2)).max(1),
                opacity: 0.2 + f64::from(signed_unit(band_hash, 10, 3)) / 20.0,
                rotate: -15 + signed_unit(band_hash, 30, 1),
            }
        })
        .collect()
}

/// Derives the glitch bar geometry from `hash`.
#[must_use]
pub fn glitch_bar(hash: u32) -> GlitchBar {
    let wide = u64::from(hash);
    let span = u32::from(CANVAS_SIZE) - 4;
    let base_width = i32::from(CANVAS_SIZE) - 4;
    GlitchBar {
        y: signed_unit(wide, span, 1),
        height: (1 + signed_unit(wide, 4, 2)).max(1),
        width: (base_width + signed_unit(wide, 8, 3)).max(1),
    }
}

/// Picks the star glyph for `hash`.
#[must_use]
pub const fn star_variant(hash: u32) -> StarVariant {
    StarVariant::from_hash(hash)
}

/// [`unit_from_hash`] narrowed to `i32`; every range used here is tiny.
fn signed_unit(hash: u64, range: u32, sign_digit: u32) -> i32 {
    i32::try_from(unit_from_hash(hash, range, Some(sign_digit))).unwrap_or_default()
}

/// Narrows a value already reduced below the canvas size.
fn narrow(value: u64) -> u32 {
    u32::try_from(value).unwrap_or_default()
}
