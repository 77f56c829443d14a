//! Numeric helpers shared by the generator.
//!
//! [`bounded_int`] maps a single draw onto an inclusive integer range.
//! [`digit`] and [`unit_from_hash`] derive values from a fixed hash word
//! without touching the draw stream, so features built from them stay
//! decorrelated from the order of unrelated draws.

use tracing::warn;

/// Maps `draw` in `[0, 1)` uniformly onto the inclusive range `[min, max]`.
///
/// An inverted range (`max < min`) is a caller bug; it is clamped to `min`
/// and reported through a `warn` event.
///
/// ```
/// use alien_avatar::bounded_int;
///
/// assert_eq!(bounded_int(0.0, -2, 2), -2);
/// assert_eq!(bounded_int(0.999, -2, 2), 2);
/// ```
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the floored product lies in [0, max - min + 1)"
)]
pub fn bounded_int(draw: f64, min: i32, max: i32) -> i32 {
    if max < min {
        warn!(min, max, "inverted range passed to bounded_int; clamping to min");
        return min;
    }
    let span = f64::from(max) - f64::from(min) + 1.0;
    let offset = (draw * span).floor();
    (f64::from(min) + offset) as i32
}

/// Returns the decimal digit of `value` at power-of-ten `position`.
///
/// Positions beyond the width of `u64` yield zero.
///
/// ```
/// use alien_avatar::digit;
///
/// assert_eq!(digit(1_234_567, 0), 7);
/// assert_eq!(digit(1_234_567, 3), 4);
/// assert_eq!(digit(1_234_567, 12), 0);
/// ```
#[must_use]
pub const fn digit(value: u64, position: u32) -> u64 {
    let Some(scale) = 10_u64.checked_pow(position) else {
        return 0;
    };
    match value.checked_div(scale) {
        Some(shifted) => shifted.rem_euclid(10),
        None => 0,
    }
}

/// Derives a signed magnitude in `(-range, range)` from a hash word.
///
/// The magnitude is `hash mod range`. When `sign_digit` names a position
/// whose decimal digit of `hash` is even, the magnitude is negated. A
/// position of `0` behaves like `None`, and a zero `range` yields zero.
///
/// ```
/// use alien_avatar::unit_from_hash;
///
/// assert_eq!(unit_from_hash(1_234_567, 36, None), 19);
/// assert_eq!(unit_from_hash(1_234_567, 36, Some(1)), -19);
/// assert_eq!(unit_from_hash(1_234_567, 36, Some(2)), 19);
/// ```
#[must_use]
pub fn unit_from_hash(hash: u64, range: u32, sign_digit: Option<u32>) -> i64 {
    let Some(magnitude) = hash.checked_rem(u64::from(range)) else {
        return 0;
    };
    // The remainder is below `range`, itself a `u32`.
    let value = i64::try_from(magnitude).unwrap_or_default();
    match sign_digit {
        Some(position) if position > 0 && digit(hash, position).rem_euclid(2) == 0 => -value,
        _ => value,
    }
}
