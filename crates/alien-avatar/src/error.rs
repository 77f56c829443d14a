//! Error types for the alien-avatar crate.
//!
//! Generation itself never fails; malformed colours and empty palettes
//! degrade to fixed defaults. These enums cover the strict edges instead:
//! validating a palette list supplied by configuration and decoding a
//! serialized avatar record.

use thiserror::Error;

/// Errors raised while validating a palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The palette list contains no entries.
    #[error("palette contains no colours")]
    Empty,

    /// An entry is not a six-digit hex colour.
    #[error("invalid palette colour at index {index}: '{value}'")]
    InvalidColor {
        /// Position of the offending entry.
        index: usize,
        /// The rejected entry.
        value: String,
    },
}

/// Errors raised while resolving [`crate::AvatarSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The configured palette failed validation.
    #[error("invalid palette setting: {source}")]
    Palette {
        /// Underlying validation failure.
        #[from]
        #[source]
        source: PaletteError,
    },

    /// The configured display size is not usable.
    #[error("display size must be positive, found {size}")]
    InvalidSize {
        /// The rejected size.
        size: u32,
    },
}

/// Returned when decoding a star variant index outside `0..4`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown star variant index {index}")]
pub struct StarVariantError {
    /// The rejected index.
    pub index: u8,
}
