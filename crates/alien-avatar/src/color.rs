//! Hex colour parsing and contrast arithmetic.
//!
//! Every operation here degrades instead of failing: a string that is not a
//! six-digit hex colour has zero luminance, reads as a dark background, and
//! passes through jitter untouched.

use std::fmt;

/// Fallback colour returned when no palette colour is available.
pub const DEFAULT_COLOR: &str = "#000000";

/// Foreground chosen for light backgrounds.
pub const DARK_FOREGROUND: &str = "#000000";

/// Foreground chosen for dark (or unparsable) backgrounds.
pub const LIGHT_FOREGROUND: &str = "#FFFFFF";

/// YIQ brightness threshold, scaled by 1000, at or above which a background
/// counts as light.
const LIGHT_BACKGROUND_YIQ: u32 = 128_000;

/// An sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Parses `#RRGGBB` or `RRGGBB` (either case).
    ///
    /// Returns `None` for any other length or for non-hex digits.
    ///
    /// ```
    /// use alien_avatar::Rgb;
    ///
    /// assert_eq!(Rgb::parse("#BCC6C2"), Some(Rgb { r: 0xbc, g: 0xc6, b: 0xc2 }));
    /// assert_eq!(Rgb::parse("#abc"), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |start: usize| {
            hex.get(start..start + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Formats the colour as lower-case `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// WCAG relative luminance of `color`, or `0.0` when it does not parse.
#[must_use]
pub fn relative_luminance(color: &str) -> f64 {
    let Some(rgb) = Rgb::parse(color) else {
        return 0.0;
    };
    let [r, g, b] = rgb.channels().map(channel_to_linear);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn channel_to_linear(channel: u8) -> f64 {
    let s = f64::from(channel) / 255.0;
    if s <= 0.039_28 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG contrast ratio between two colours, in `[1, 21]`.
///
/// ```
/// use alien_avatar::contrast_ratio;
///
/// assert_eq!(contrast_ratio("#000000", "#FFFFFF"), 21.0);
/// assert_eq!(contrast_ratio("#ff406e", "#ff406e"), 1.0);
/// ```
#[must_use]
pub fn contrast_ratio(first: &str, second: &str) -> f64 {
    let l1 = relative_luminance(first);
    let l2 = relative_luminance(second);
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Picks black or white text for a background using YIQ brightness.
///
/// Unparsable input is treated as dark and gets [`LIGHT_FOREGROUND`].
///
/// ```
/// use alien_avatar::readable_foreground;
///
/// assert_eq!(readable_foreground("#00c9f2"), "#000000");
/// assert_eq!(readable_foreground("#9234ff"), "#FFFFFF");
/// ```
#[must_use]
pub fn readable_foreground(background: &str) -> &'static str {
    let Some(Rgb { r, g, b }) = Rgb::parse(background) else {
        return LIGHT_FOREGROUND;
    };
    let yiq = u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114;
    if yiq >= LIGHT_BACKGROUND_YIQ {
        DARK_FOREGROUND
    } else {
        LIGHT_FOREGROUND
    }
}

/// Scales every channel of `color` by `1 + amount`.
///
/// Channels are rounded half-up and clamped to `[0, 255]`, so any finite
/// `amount` is accepted. Unparsable colours and non-finite amounts return
/// `color` unchanged.
///
/// ```
/// use alien_avatar::jitter_hex;
///
/// assert_eq!(jitter_hex("#808080", 0.5), "#c0c0c0");
/// assert_eq!(jitter_hex("#BCC6C2", 0.0), "#bcc6c2");
/// assert_eq!(jitter_hex("not a colour", 0.5), "not a colour");
/// ```
#[must_use]
pub fn jitter_hex(color: &str, amount: f64) -> String {
    let Some(rgb) = Rgb::parse(color) else {
        return color.to_owned();
    };
    if !amount.is_finite() {
        return color.to_owned();
    }
    let scale = 1.0 + amount;
    let [r, g, b] = rgb.channels().map(|channel| scale_channel(channel, scale));
    Rgb { r, g, b }.to_hex()
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is clamped to [0, 255] before the cast"
)]
fn scale_channel(channel: u8, scale: f64) -> u8 {
    round_half_up(f64::from(channel) * scale).clamp(0.0, 255.0) as u8
}

/// Rounds to the nearest integer, resolving ties towards positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}
