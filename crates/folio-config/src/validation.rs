//! Full configuration validation.

use crate::keybinds;
use crate::schema::FolioConfig;
use folio_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FolioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    let tiling = &config.tiling;
    validate_range(&mut errors, "tiling.gap", tiling.gap, 0.0, 64.0);
    validate_min(&mut errors, "tiling.min_tile_width", tiling.min_tile_width, 0.0);
    validate_min(&mut errors, "tiling.min_tile_height", tiling.min_tile_height, 0.0);
    validate_open_range(
        &mut errors,
        "tiling.default_split_ratio",
        tiling.default_split_ratio,
        0.0,
        1.0,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

// NaN fails every comparison, so the checks are written to reject it.
fn validate_range(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(value >= min && value <= max) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_open_range(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(value > min && value < max) {
        errors.push(format!("{name} = {value} is out of range ({min}, {max})"));
    }
}

fn validate_min(errors: &mut Vec<String>, name: &str, value: f64, min: f64) {
    if !(value >= min) {
        errors.push(format!("{name} = {value} must be at least {min}"));
    }
}
