//! Resolves where each tool's settings files live.

use std::path::{Component, Path, PathBuf};

use configparser::ini::Ini;

use crate::error::SettingsError;

pub const OVERLAY_CONFIG_PATH: &str = "DigitalZone/steam_settings/configs.overlay.ini";
pub const SIDE_CONFIG_FILE: &str = "language_changer.ini";
pub const DEFAULT_SETTINGS_DIR: &str = "steam_settings";
pub const SETTINGS_FILE: &str = "configs.user.ini";
pub const SUPPORTED_LANGUAGES_FILE: &str = "supported_languages.txt";

const SIDE_CONFIG_SECTION: &str = "Settings";
const SIDE_CONFIG_KEY: &str = "config_path";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePaths {
    pub settings_file: PathBuf,
    pub supported_languages_file: PathBuf,
}

pub fn overlay_config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(OVERLAY_CONFIG_PATH)
}

/// Reads the `config_path` entry of the `[Settings]` section. The section
/// name is case-sensitive, the key is not.
pub fn read_side_config(path: &Path) -> Result<PathBuf, SettingsError> {
    let mut config = Ini::new_cs();
    config
        .load(path)
        .map_err(|e| SettingsError::MalformedSideConfig(path.to_path_buf(), e))?;

    config
        .get_map_ref()
        .get(SIDE_CONFIG_SECTION)
        .and_then(|section| {
            section
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(SIDE_CONFIG_KEY))
        })
        .and_then(|(_, value)| value.as_deref())
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            SettingsError::MalformedSideConfig(
                path.to_path_buf(),
                format!(
                    "no '{}' entry in [{}] section",
                    SIDE_CONFIG_KEY, SIDE_CONFIG_SECTION
                ),
            )
        })
}

/// Finds the language tool's settings directory, falling back to
/// `DEFAULT_SETTINGS_DIR` if the side config is absent or unusable.
pub fn locate_language_paths(base_dir: &Path) -> LanguagePaths {
    let side_config = base_dir.join(SIDE_CONFIG_FILE);
    let settings_dir = if side_config.exists() {
        match read_side_config(&side_config) {
            Ok(dir) => dir,
            Err(e) => {
                log::warn!("{}, using default '{}'", e, DEFAULT_SETTINGS_DIR);
                PathBuf::from(DEFAULT_SETTINGS_DIR)
            }
        }
    } else {
        PathBuf::from(DEFAULT_SETTINGS_DIR)
    };

    let settings_dir = normalize(&base_dir.join(settings_dir));
    log::info!("settings directory: {}", settings_dir.display());

    LanguagePaths {
        settings_file: settings_dir.join(SETTINGS_FILE),
        supported_languages_file: settings_dir.join(SUPPORTED_LANGUAGES_FILE),
    }
}

/// Collapses `.` and `..` components without touching the file system.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
