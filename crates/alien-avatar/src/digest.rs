//! Seed hashing.
//!
//! A text seed is folded into four 32-bit words using 32-bit wrapping
//! multiply-xor mixing. The words are the only entropy source for a
//! generation run, so every port must produce them bit for bit.

/// Accumulator values before any seed character is mixed in.
const INITIAL_STATE: [u32; 4] = [1_779_033_703, 3_144_134_277, 1_013_904_242, 2_773_480_762];

/// Per-lane multipliers shared by the mixing and finalisation rounds.
const MULTIPLIERS: [u32; 4] = [597_399_067, 2_869_860_233, 951_274_213, 2_716_044_179];

/// Right-shift distances used by the finalisation round.
const FINAL_SHIFTS: [u32; 4] = [18, 22, 17, 19];

/// Four 32-bit words derived from a seed string.
///
/// # Example
///
/// ```
/// use alien_avatar::SeedDigest;
///
/// let digest = SeedDigest::from_seed("0xDEADBEEF");
/// assert_eq!(digest, SeedDigest::from_seed("DEADBEEF"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedDigest([u32; 4]);

impl SeedDigest {
    /// Hashes `seed` after removing an optional `0x`/`0X` prefix.
    ///
    /// The seed is consumed as UTF-16 code units. Lanes update in order and
    /// each update sees the lanes already refreshed for the current unit.
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        let [mut h1, mut h2, mut h3, mut h4] = INITIAL_STATE;
        let [m1, m2, m3, m4] = MULTIPLIERS;

        for unit in strip_hex_prefix(seed).encode_utf16() {
            let k = u32::from(unit);
            h1 = h2 ^ (h1 ^ k).wrapping_mul(m1);
            h2 = h3 ^ (h2 ^ k).wrapping_mul(m2);
            h3 = h4 ^ (h3 ^ k).wrapping_mul(m3);
            h4 = h1 ^ (h4 ^ k).wrapping_mul(m4);
        }

        let [s1, s2, s3, s4] = FINAL_SHIFTS;
        h1 = (h3 ^ (h1 >> s1)).wrapping_mul(m1);
        h2 = (h4 ^ (h2 >> s2)).wrapping_mul(m2);
        h3 = (h1 ^ (h3 >> s3)).wrapping_mul(m3);
        h4 = (h2 ^ (h4 >> s4)).wrapping_mul(m4);

        Self([h1 ^ h2 ^ h3 ^ h4, h2 ^ h1, h3 ^ h1, h4 ^ h1])
    }

    /// Returns the digest words in stream-register order.
    #[must_use]
    pub const fn words(self) -> [u32; 4] {
        self.0
    }
}

impl From<[u32; 4]> for SeedDigest {
    fn from(words: [u32; 4]) -> Self {
        Self(words)
    }
}

/// Removes a single leading `0x` or `0X` from `seed`.
///
/// ```
/// use alien_avatar::strip_hex_prefix;
///
/// assert_eq!(strip_hex_prefix("0XCAFE"), "CAFE");
/// assert_eq!(strip_hex_prefix("x0CAFE"), "x0CAFE");
/// ```
#[must_use]
pub fn strip_hex_prefix(seed: &str) -> &str {
    seed.strip_prefix("0x")
        .or_else(|| seed.strip_prefix("0X"))
        .unwrap_or(seed)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("", [41_608_494, 480_788_319, 2_264_674_419, 2_553_211_394])]
    #[case::prefixed("0xDEADBEEF", [1_344_782_502, 42_864_862, 669_913_130, 1_967_636_562])]
    #[case::plain_name("alice", [2_511_306_855, 1_817_337_564, 70_823_749, 4_257_575_422])]
    #[case::astral_plane("🚀", [4_179_483_749, 3_357_186_690, 3_639_389_460, 3_924_552_691])]
    fn digest_matches_recorded_words(#[case] seed: &str, #[case] expected: [u32; 4]) {
        assert_eq!(SeedDigest::from_seed(seed).words(), expected);
    }

    #[rstest]
    #[case("0xDEADBEEF")]
    #[case("0XDEADBEEF")]
    fn hex_prefix_is_ignored(#[case] seed: &str) {
        assert_eq!(
            SeedDigest::from_seed(seed),
            SeedDigest::from_seed("DEADBEEF")
        );
    }

    #[test]
    fn only_one_prefix_is_stripped() {
        assert_eq!(strip_hex_prefix("0x0xAB"), "0xAB");
        assert_ne!(
            SeedDigest::from_seed("0x0xAB"),
            SeedDigest::from_seed("AB")
        );
    }

    #[test]
    fn a_bare_prefix_hashes_like_the_empty_seed() {
        assert_eq!(SeedDigest::from_seed("0x"), SeedDigest::from_seed(""));
    }

    #[test]
    fn digest_round_trips_through_words() {
        let words = [1, 2, 3, 4];
        assert_eq!(SeedDigest::from(words).words(), words);
    }
}
