//! Deterministic procedural alien avatars derived from text seeds.
//!
//! A seed string (a user id, a wallet address, a nickname) is hashed into
//! four 32-bit words that seed a small pseudo-random stream. The stream
//! drives every visual decision in a fixed order, so the same seed and
//! palette always produce the same [`AvatarData`], across runs and across
//! ports of the generator.
//!
//! The crate only builds the descriptor; drawing it is left to renderers.
//!
//! # Overview
//!
//! - [`SeedDigest`] and [`SeedStream`] provide the entropy.
//! - [`pick_color`] and [`pick_contrasting_color`] choose palette colours.
//! - [`generate_avatar_data`] assembles the full record.
//! - [`AvatarSettings`] loads a palette and display size via OrthoConfig.
//!
//! # Example
//!
//! ```
//! use alien_avatar::{DEFAULT_COLORS, contrast_ratio, generate_avatar_data};
//!
//! let avatar = generate_avatar_data("0xDEADBEEF", &DEFAULT_COLORS);
//!
//! assert!(avatar.effects.active_count() <= 2);
//! assert_eq!(avatar.noise_texture.len(), 12);
//! assert_eq!(avatar.slices.len(), 5);
//! assert!(
//!     contrast_ratio(&avatar.wrapper_color, &avatar.stroke_color) >= 2.2
//!         || DEFAULT_COLORS.contains(&avatar.stroke_color.as_str())
//! );
//! ```

mod avatar;
mod color;
mod digest;
mod error;
mod generator;
mod numeric;
mod palette;
mod selector;
mod settings;
mod stream;

pub use avatar::{
    AvatarData, CANVAS_SIZE, Effect, Effects, EyeVariant, GlitchBar, MouthVariant, NoisePixel,
    SliceBand, StarGlyph, StarVariant,
};
pub use color::{
    DARK_FOREGROUND, DEFAULT_COLOR, LIGHT_FOREGROUND, Rgb, contrast_ratio, jitter_hex,
    readable_foreground, relative_luminance,
};
pub use digest::{SeedDigest, strip_hex_prefix};
pub use error::{PaletteError, SettingsError, StarVariantError};
pub use generator::{
    generate_avatar_data, glitch_bar, noise_texture, pick_effects, slice_bands, star_variant,
};
pub use numeric::{bounded_int, digit, unit_from_hash};
pub use palette::{DEFAULT_COLORS, Palette};
pub use selector::{DEFAULT_MIN_CONTRAST, UsedIndices, pick_color, pick_contrasting_color};
pub use settings::{AvatarSettings, DEFAULT_DISPLAY_SIZE};
pub use stream::SeedStream;
