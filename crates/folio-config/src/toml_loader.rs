//! TOML config file loading and creation.

use crate::schema::FolioConfig;
use crate::validation;
use folio_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. If the parsed config fails
/// validation, a warning is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<FolioConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: FolioConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(FolioConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/folio/config.toml`
/// On Linux: `~/.config/folio/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<FolioConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(FolioConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("folio").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Folio Configuration
# Only override what you want to change -- missing fields use defaults.

[tiling]
# gap = 8.0                    # 0-64, spacing between neighboring tiles
# min_tile_width = 200.0
# min_tile_height = 150.0
# default_split_ratio = 0.5    # strictly between 0 and 1
# split_policy = "alternate"   # alternate | horizontal | vertical
# missing_focus = "clear"      # clear | ignore
# focus_succession = "last"    # last | sibling

[keybinds]
# Cmd is Super on macOS and Ctrl elsewhere.
# close_tile = "Cmd+W"
# spawn_home = "Cmd+N"
# focus_tile_1 = "Cmd+1"
# focus_tile_2 = "Cmd+2"
# focus_tile_3 = "Cmd+3"
# focus_tile_4 = "Cmd+4"
# focus_tile_5 = "Cmd+5"
# focus_prev = "Cmd+Left"
# focus_next = "Cmd+Right"
"##
}
