//! Validated colour palettes.
//!
//! The generator accepts any slice of strings and degrades on bad entries.
//! [`Palette`] is the strict counterpart used at configuration boundaries,
//! where a typo in a colour list should be reported rather than silently
//! rendered as black.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::PaletteError;

/// Palette used when the caller supplies none.
pub const DEFAULT_COLORS: [&str; 5] = ["#00ff41", "#00d4ff", "#BCC6C2", "#ff406e", "#8b31ff"];

/// A non-empty, ordered list of `#RRGGBB` colours.
///
/// Entries keep their original spelling; order matters because palette
/// indices are drawn from the seed stream.
///
/// # Example
///
/// ```
/// use alien_avatar::Palette;
///
/// let palette = Palette::parse_list("#112233, #AABBCC").expect("valid palette");
/// assert_eq!(palette.colors(), ["#112233", "#AABBCC"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette(Vec<String>);

impl Palette {
    /// Validate and construct a palette.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] when `colors` yields nothing and
    /// [`PaletteError::InvalidColor`] for the first entry that is not a
    /// six-digit hex colour.
    pub fn new<I, S>(colors: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = colors.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }
        if let Some((index, value)) = entries
            .iter()
            .enumerate()
            .find(|(_, value)| Rgb::parse(value).is_none())
        {
            return Err(PaletteError::InvalidColor {
                index,
                value: value.clone(),
            });
        }
        Ok(Self(entries))
    }

    /// Parse a comma-separated list such as `"#00ff41,#8b31ff"`.
    ///
    /// Whitespace around entries is ignored.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Palette::new`]; an empty entry
    /// (for example a trailing comma) is reported as an invalid colour.
    pub fn parse_list(list: &str) -> Result<Self, PaletteError> {
        if list.trim().is_empty() {
            return Err(PaletteError::Empty);
        }
        Self::new(list.split(',').map(str::trim))
    }

    /// Access the colours in palette order.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_COLORS.iter().map(|&color| color.to_owned()).collect())
    }
}

impl AsRef<[String]> for Palette {
    fn as_ref(&self) -> &[String] {
        self.colors()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl From<Palette> for Vec<String> {
    fn from(value: Palette) -> Self {
        value.0
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = PaletteError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
