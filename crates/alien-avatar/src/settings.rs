//! Avatar settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};

use crate::avatar::AvatarData;
use crate::error::SettingsError;
use crate::generator::generate_avatar_data;
use crate::palette::Palette;

/// Display size handed to renderers when none is configured.
pub const DEFAULT_DISPLAY_SIZE: u32 = 40;

/// Configuration for avatar generation.
///
/// Values layer command-line arguments over `ALIEN_AVATAR_*` environment
/// variables and configuration files. The palette may arrive as one
/// comma-separated string or as a list; the environment layer splits
/// `ALIEN_AVATAR_PALETTE="#112233,#ddeeff"` into a list before it gets here.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ALIEN_AVATAR")]
pub struct AvatarSettings {
    /// Palette entries in order; the default palette when absent.
    #[serde(default, deserialize_with = "palette_entries")]
    pub palette: Option<Vec<String>>,
    /// Display size in pixels for renderers. Geometry is always computed on
    /// the fixed canvas, so this never changes the generated record.
    #[ortho_config(default = DEFAULT_DISPLAY_SIZE)]
    pub size: u32,
}

impl AvatarSettings {
    /// Resolve the configured palette, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Palette`] when the configured list is empty
    /// or holds a malformed colour.
    pub fn palette(&self) -> Result<Palette, SettingsError> {
        self.palette
            .as_deref()
            .map_or_else(|| Ok(Palette::default()), Palette::new)
            .map_err(SettingsError::from)
    }

    /// Validate the configured display size.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidSize`] for a size of zero.
    pub const fn size(&self) -> Result<u32, SettingsError> {
        match self.size {
            0 => Err(SettingsError::InvalidSize { size: 0 }),
            size => Ok(size),
        }
    }

    /// Generate the avatar for `seed` with the configured palette.
    ///
    /// # Errors
    ///
    /// Fails only when the configured palette is invalid.
    pub fn generate(&self, seed: &str) -> Result<AvatarData, SettingsError> {
        let palette = self.palette()?;
        Ok(generate_avatar_data(seed, palette.colors()))
    }
}

/// Raw palette shapes accepted from configuration layers.
#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteSettingSerde {
    List(Vec<String>),
    Joined(String),
    // Unquoted all-digit values such as `112233` reach serde as numbers.
    Digits(u64),
}

impl PaletteSettingSerde {
    fn into_entries(self) -> Vec<String> {
        match self {
            Self::List(items) => items.iter().flat_map(|item| split_entries(item)).collect(),
            Self::Joined(list) if list.trim().is_empty() => Vec::new(),
            Self::Joined(list) => split_entries(&list).collect(),
            Self::Digits(digits) => vec![format!("{digits:06}")],
        }
    }
}

/// Splits on commas and trims each entry. Blank entries are kept so the
/// palette reports them by index.
fn split_entries(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split(',').map(|entry| entry.trim().to_owned())
}

fn palette_entries<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<PaletteSettingSerde>::deserialize(deserializer)?;
    Ok(raw.map(PaletteSettingSerde::into_entries))
}

#[cfg(test)]
mod tests {
    //! Unit tests for avatar settings parsing.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;
    use crate::error::PaletteError;
    use crate::palette::DEFAULT_COLORS;

    fn load_from_args(args: &[&str]) -> AvatarSettings {
        let argv = std::iter::once("alien-avatar")
            .chain(args.iter().copied())
            .map(OsString::from);
        AvatarSettings::load_from_iter(argv).expect("config should load")
    }

    fn load_from_empty_args() -> AvatarSettings {
        load_from_args(&[])
    }

    fn settings_with(palette: Option<&[&str]>, size: u32) -> AvatarSettings {
        AvatarSettings {
            palette: palette.map(|entries| entries.iter().map(|&entry| entry.to_owned()).collect()),
            size,
        }
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("ALIEN_AVATAR_PALETTE", None::<String>),
            ("ALIEN_AVATAR_SIZE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.palette.is_none());
        assert_eq!(settings.palette(), Ok(Palette::default()));
        assert_eq!(settings.size(), Ok(DEFAULT_DISPLAY_SIZE));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ALIEN_AVATAR_PALETTE", Some("#112233, #ddeeff".to_owned())),
            ("ALIEN_AVATAR_SIZE", Some("64".to_owned())),
        ]);

        let settings = load_from_empty_args();
        let palette = settings.palette().expect("palette should parse");
        assert_eq!(palette.colors(), ["#112233", "#ddeeff"]);
        assert_eq!(settings.size(), Ok(64));
    }

    #[rstest]
    #[case::prefixed("#112233", "#112233")]
    #[case::letters("aabbcc", "aabbcc")]
    #[case::digits_only("112233", "112233")]
    #[case::leading_zeros("000001", "000001")]
    fn single_environment_colour_is_accepted(#[case] raw: &str, #[case] expected: &str) {
        let _guard = lock_env([
            ("ALIEN_AVATAR_PALETTE", Some(raw.to_owned())),
            ("ALIEN_AVATAR_SIZE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        let palette = settings.palette().expect("palette should parse");
        assert_eq!(palette.colors(), [expected]);
    }

    #[rstest]
    fn invalid_palette_is_reported() {
        let _guard = lock_env([
            ("ALIEN_AVATAR_PALETTE", Some("#112233,teal".to_owned())),
            ("ALIEN_AVATAR_SIZE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.generate("alice"),
            Err(SettingsError::Palette {
                source: PaletteError::InvalidColor {
                    index: 1,
                    value: "teal".to_owned(),
                },
            })
        );
    }

    #[rstest]
    fn trailing_comma_is_reported_by_index() {
        let _guard = lock_env([
            ("ALIEN_AVATAR_PALETTE", Some("#112233,".to_owned())),
            ("ALIEN_AVATAR_SIZE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.palette(),
            Err(SettingsError::Palette {
                source: PaletteError::InvalidColor {
                    index: 1,
                    value: String::new(),
                },
            })
        );
    }

    #[rstest]
    fn command_line_overrides_the_environment() {
        let _guard = lock_env([
            ("ALIEN_AVATAR_PALETTE", Some("#112233,#ddeeff".to_owned())),
            ("ALIEN_AVATAR_SIZE", Some("64".to_owned())),
        ]);

        let settings = load_from_args(&["--palette", "#000000, #ffffff", "--size", "96"]);
        let palette = settings.palette().expect("palette should parse");
        assert_eq!(palette.colors(), ["#000000", "#ffffff"]);
        assert_eq!(settings.size(), Ok(96));
    }

    #[rstest]
    fn zero_size_is_rejected() {
        let settings = settings_with(None, 0);
        assert_eq!(settings.size(), Err(SettingsError::InvalidSize { size: 0 }));
    }

    #[rstest]
    fn empty_palette_list_is_reported() {
        let settings = settings_with(Some(&[]), DEFAULT_DISPLAY_SIZE);
        assert_eq!(
            settings.palette(),
            Err(SettingsError::Palette {
                source: PaletteError::Empty,
            })
        );
    }

    #[rstest]
    fn generate_uses_the_default_palette() {
        let settings = settings_with(None, 128);
        let avatar = settings.generate("alice").expect("default palette is valid");
        assert_eq!(avatar, generate_avatar_data("alice", &DEFAULT_COLORS));
    }
}
