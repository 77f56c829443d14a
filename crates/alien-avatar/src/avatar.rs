//! The avatar descriptor handed to renderers.
//!
//! Field names serialize in camelCase so the JSON form matches the record
//! existing renderers consume. Variant tables are ordered: a drawn index
//! maps to a variant by position, so reordering them changes every avatar.

use serde::{Deserialize, Serialize};

use crate::error::StarVariantError;

/// Side length of the square coordinate space all geometry is computed in.
pub const CANVAS_SIZE: u8 = 36;

/// Eye glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EyeVariant {
    /// Two open eyes.
    Neutral,
    /// Two squinting eyes.
    Narrow,
    /// Left eye closed.
    WinkLeft,
    /// Right eye closed.
    WinkRight,
}

impl EyeVariant {
    /// Variants in draw order.
    pub const ALL: [Self; 4] = [Self::Neutral, Self::Narrow, Self::WinkLeft, Self::WinkRight];

    /// Maps a drawn index onto a variant; indices past the end saturate.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Neutral,
            1 => Self::Narrow,
            2 => Self::WinkLeft,
            _ => Self::WinkRight,
        }
    }

    /// Wire name of the variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Narrow => "narrow",
            Self::WinkLeft => "wink-left",
            Self::WinkRight => "wink-right",
        }
    }
}

/// Mouth glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouthVariant {
    /// Short flat line.
    Small,
    /// Gentle upward curve.
    Smile,
    /// Open grin.
    Happy,
    /// Downward curve.
    Sad,
    /// Crossed-out mouth.
    #[serde(rename = "x")]
    Cross,
}

impl MouthVariant {
    /// Variants in draw order.
    pub const ALL: [Self; 5] = [Self::Small, Self::Smile, Self::Happy, Self::Sad, Self::Cross];

    /// Maps a drawn index onto a variant; indices past the end saturate.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Small,
            1 => Self::Smile,
            2 => Self::Happy,
            3 => Self::Sad,
            _ => Self::Cross,
        }
    }

    /// Wire name of the variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Smile => "smile",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Cross => "x",
        }
    }
}

/// Star overlay glyph, serialized as its numeric index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StarVariant {
    /// Dot inside a square frame.
    Framed,
    /// Stem over a three-pixel base.
    Sprout,
    /// Winged burst.
    Spark,
    /// Two posts between horizontal bars.
    Gate,
}

impl StarVariant {
    /// Variants in index order.
    pub const ALL: [Self; 4] = [Self::Framed, Self::Sprout, Self::Spark, Self::Gate];

    /// Selects the variant for a stars hash (`hash mod 4`).
    #[must_use]
    pub const fn from_hash(hash: u32) -> Self {
        match hash.rem_euclid(4) {
            0 => Self::Framed,
            1 => Self::Sprout,
            2 => Self::Spark,
            _ => Self::Gate,
        }
    }

    /// Numeric index of the variant.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Framed => 0,
            Self::Sprout => 1,
            Self::Spark => 2,
            Self::Gate => 3,
        }
    }
}

impl From<StarVariant> for u8 {
    fn from(value: StarVariant) -> Self {
        value.index()
    }
}

impl TryFrom<u8> for StarVariant {
    type Error = StarVariantError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(StarVariantError { index })
    }
}

/// A decorative overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Scattered speckle rectangles.
    Noise,
    /// Rotated translucent bands.
    Slices,
    /// A horizontal glitch bar.
    Glitch,
    /// A star glyph.
    Stars,
}

impl Effect {
    /// Effects in draw order.
    pub const ALL: [Self; 4] = [Self::Noise, Self::Slices, Self::Glitch, Self::Stars];
}

/// Which decorative overlays are switched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effects {
    /// Speckle overlay.
    pub noise: bool,
    /// Slice bands overlay.
    pub slices: bool,
    /// Glitch bar overlay.
    pub glitch: bool,
    /// Star overlay.
    pub stars: bool,
}

impl Effects {
    /// Reports whether `effect` is switched on.
    #[must_use]
    pub const fn is_active(self, effect: Effect) -> bool {
        match effect {
            Effect::Noise => self.noise,
            Effect::Slices => self.slices,
            Effect::Glitch => self.glitch,
            Effect::Stars => self.stars,
        }
    }

    /// Switches `effect` on or off.
    pub const fn set(&mut self, effect: Effect, active: bool) {
        match effect {
            Effect::Noise => self.noise = active,
            Effect::Slices => self.slices = active,
            Effect::Glitch => self.glitch = active,
            Effect::Stars => self.stars = active,
        }
    }

    /// Active effects in draw order.
    #[must_use]
    pub fn active(self) -> Vec<Effect> {
        Effect::ALL
            .into_iter()
            .filter(|&effect| self.is_active(effect))
            .collect()
    }

    /// Number of active effects.
    #[must_use]
    pub fn active_count(self) -> usize {
        Effect::ALL
            .into_iter()
            .filter(|&effect| self.is_active(effect))
            .count()
    }
}

/// One speckle rectangle of the noise overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoisePixel {
    /// Left edge in canvas units.
    pub x: u32,
    /// Top edge in canvas units.
    pub y: u32,
    /// Width in canvas units.
    pub w: u32,
    /// Height in canvas units.
    pub h: u32,
}

/// One rotated band of the slices overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceBand {
    /// Vertical offset in canvas units; may be negative.
    pub y: i32,
    /// Band thickness, at least 1.
    pub height: i32,
    /// Fill opacity. Derived from a hash and may fall slightly outside
    /// `[0, 1]`; renderers clamp.
    pub opacity: f64,
    /// Rotation in degrees.
    pub rotate: i32,
}

/// Geometry of the glitch bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlitchBar {
    /// Vertical offset in canvas units; may be negative.
    #[serde(rename = "glitchY")]
    pub y: i32,
    /// Bar thickness, at least 1.
    #[serde(rename = "glitchHeight")]
    pub height: i32,
    /// Bar width, at least 1.
    #[serde(rename = "glitchWidth")]
    pub width: i32,
}

/// Star overlay descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StarGlyph {
    /// Which star glyph to draw.
    #[serde(rename = "type")]
    pub variant: StarVariant,
}

/// Everything a renderer needs to draw one avatar.
///
/// Built by [`crate::generate_avatar_data`]; for a fixed seed and palette
/// every field is reproducible bit for bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarData {
    /// Background colour.
    pub wrapper_color: String,
    /// Face colour, black or white depending on the background.
    pub face_color: String,
    /// Outline colour.
    pub stroke_color: String,
    /// Eye glyph.
    pub eye_type: EyeVariant,
    /// Mouth glyph.
    pub mouth_type: MouthVariant,
    /// Horizontal mouth scale in `[0.78, 1.22)`.
    pub mouth_width_scale: f64,
    /// Vertical mouth offset in `[-2, 2]`.
    pub mouth_y_offset: i32,
    /// Mouth rotation in degrees, `[-8, 8]`.
    pub mouth_tilt: i32,
    /// Face translation along x, `[-4, 4]`.
    pub face_translate_x: i32,
    /// Face translation along y, `[-3, 3]`.
    pub face_translate_y: i32,
    /// Stroke translation along x, `[-2, 2]`.
    pub stroke_translate_x: i32,
    /// Stroke translation along y, `[-2, 2]`.
    pub stroke_translate_y: i32,
    /// Active decorative overlays; at most two are on.
    pub effects: Effects,
    /// Speckle layout for the noise overlay.
    pub noise_texture: Vec<NoisePixel>,
    /// Star overlay descriptor.
    pub stars: StarGlyph,
    /// Glitch bar geometry.
    #[serde(flatten)]
    pub glitch: GlitchBar,
    /// Bands for the slices overlay.
    pub slices: Vec<SliceBand>,
}
