//! Folio configuration system.
//!
//! TOML-based configuration for the tiling engine and its keybinds. Every
//! section uses serde defaults, so a partial file (or none at all) works.

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    FocusSuccession, FolioConfig, KeybindConfig, MissingFocusPolicy, SplitPolicy, TilingConfig,
};

use folio_common::ConfigError;

/// Load config from the platform default path, creating it if absent.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
