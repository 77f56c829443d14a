//! Palette colour selection driven by the seed stream.
//!
//! Both pickers share a [`UsedIndices`] set scoped to one generation run.
//! Their retry policies decide how many draws each call consumes, so they
//! are reproduced exactly rather than replaced by removal-based sampling.

use std::collections::BTreeSet;

use tracing::debug;

use crate::color::{DEFAULT_COLOR, contrast_ratio};
use crate::stream::SeedStream;

/// Minimum contrast used when a caller has no stronger requirement.
pub const DEFAULT_MIN_CONTRAST: f64 = 2.0;

/// Palette indices already handed out during one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedIndices(BTreeSet<usize>);

impl UsedIndices {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Reports whether `index` has been handed out.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Records `index` as handed out.
    pub fn insert(&mut self, index: usize) {
        self.0.insert(index);
    }

    /// Number of distinct indices handed out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Reports whether nothing has been handed out yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the recorded indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// An index is skipped only while some palette index is still free.
    fn blocks(&self, index: usize, palette_len: usize) -> bool {
        self.contains(index) && self.len() < palette_len
    }
}

/// Picks a palette colour, preferring indices not yet used.
///
/// An empty palette yields [`DEFAULT_COLOR`] without drawing. Otherwise one
/// index is drawn; while it collides with a used index and free indices
/// remain, it is redrawn up to `2 * len` times, after which the repeat is
/// accepted. The chosen index is recorded in `used`.
///
/// ```
/// use alien_avatar::{SeedDigest, SeedStream, UsedIndices, pick_color};
///
/// let mut stream = SeedStream::from_digest(SeedDigest::from([1, 2, 3, 4]));
/// let mut used = UsedIndices::new();
/// let palette = ["#00ff41", "#00d4ff", "#BCC6C2", "#ff406e", "#8b31ff"];
///
/// assert_eq!(pick_color(&mut stream, &palette, &mut used), "#00ff41");
/// assert!(used.contains(0));
/// ```
pub fn pick_color<'a, S: AsRef<str>>(
    stream: &mut SeedStream,
    colors: &'a [S],
    used: &mut UsedIndices,
) -> &'a str {
    let len = colors.len();
    if len == 0 {
        debug!("empty palette; using default colour");
        return DEFAULT_COLOR;
    }

    let mut index = stream.next_index(len);
    if used.blocks(index, len) {
        let max_attempts = len.saturating_mul(2);
        let mut attempts = 0;
        while used.contains(index) && attempts < max_attempts {
            index = stream.next_index(len);
            attempts += 1;
        }
    }
    used.insert(index);
    colors.get(index).map_or(DEFAULT_COLOR, AsRef::as_ref)
}

/// Picks a palette colour whose contrast against `base` is at least
/// `min_contrast`.
///
/// The palette order is shuffled with the stream, then scanned for the
/// first usable candidate meeting the threshold. Used indices are skipped
/// while free ones remain. When nothing qualifies, the best-scoring
/// candidate is returned (earliest in shuffle order on ties). Either way
/// the chosen index is recorded in `used`; an empty palette yields
/// [`DEFAULT_COLOR`] without drawing.
///
/// ```
/// use alien_avatar::{
///     DEFAULT_COLORS, DEFAULT_MIN_CONTRAST, SeedDigest, SeedStream, UsedIndices,
///     contrast_ratio, pick_contrasting_color,
/// };
///
/// let mut stream = SeedStream::from_digest(SeedDigest::from([1, 2, 3, 4]));
/// let mut used = UsedIndices::new();
///
/// let stroke = pick_contrasting_color(
///     &mut stream,
///     "#00ff41",
///     &DEFAULT_COLORS,
///     &mut used,
///     DEFAULT_MIN_CONTRAST,
/// );
/// assert_eq!(stroke, "#ff406e");
/// assert!(contrast_ratio("#00ff41", stroke) >= DEFAULT_MIN_CONTRAST);
/// ```
pub fn pick_contrasting_color<'a, S: AsRef<str>>(
    stream: &mut SeedStream,
    base: &str,
    colors: &'a [S],
    used: &mut UsedIndices,
    min_contrast: f64,
) -> &'a str {
    let len = colors.len();
    if len == 0 {
        debug!("empty palette; using default colour");
        return DEFAULT_COLOR;
    }

    let order = shuffled_indices(stream, len);
    let mut best_index = order.first().copied().unwrap_or_default();
    let mut best_ratio = -1.0;

    for &index in &order {
        if used.blocks(index, len) {
            continue;
        }
        let Some(candidate) = colors.get(index) else {
            continue;
        };
        let ratio = contrast_ratio(base, candidate.as_ref());
        if ratio >= min_contrast {
            used.insert(index);
            return candidate.as_ref();
        }
        if ratio > best_ratio {
            best_ratio = ratio;
            best_index = index;
        }
    }

    debug!(
        best_index,
        best_ratio, min_contrast, "no palette colour meets contrast; using best candidate"
    );
    used.insert(best_index);
    colors.get(best_index).map_or(DEFAULT_COLOR, AsRef::as_ref)
}

/// Fisher-Yates shuffle of `0..len`, walking from the last slot down to 1.
fn shuffled_indices(stream: &mut SeedStream, len: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    for slot in (1..len).rev() {
        let other = stream.next_index(slot + 1);
        order.swap(slot, other);
    }
    order
}
