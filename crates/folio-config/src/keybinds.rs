//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use folio_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("close_tile", &config.close_tile),
        ("spawn_home", &config.spawn_home),
        ("focus_tile_1", &config.focus_tile_1),
        ("focus_tile_2", &config.focus_tile_2),
        ("focus_tile_3", &config.focus_tile_3),
        ("focus_tile_4", &config.focus_tile_4),
        ("focus_tile_5", &config.focus_tile_5),
        ("focus_prev", &config.focus_prev),
        ("focus_next", &config.focus_next),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (name, binding) in all_keybinds(config) {
        if let Some(existing_name) = seen.get(binding) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(binding, name);
    }

    Ok(())
}
