//! Tiling engine configuration types.

use serde::{Deserialize, Serialize};

/// How the engine picks the orientation of a new split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitPolicy {
    /// Horizontal at even depth, vertical at odd depth.
    #[default]
    Alternate,
    Horizontal,
    Vertical,
}

/// What `focus_tile` does when the id is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFocusPolicy {
    /// Unfocus every tile.
    #[default]
    Clear,
    /// Leave the current focus untouched.
    Ignore,
}

/// Which tile inherits focus when the focused tile is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusSuccession {
    /// The last tile in the remaining flat tile list.
    #[default]
    Last,
    /// The first leaf of the sibling subtree that took over the closed region.
    Sibling,
}

/// Tiling engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingConfig {
    /// Spacing between neighboring tiles (valid range: 0-64).
    pub gap: f64,
    /// Declared minimum tile width. Not enforced by layout.
    pub min_tile_width: f64,
    /// Declared minimum tile height. Not enforced by layout.
    pub min_tile_height: f64,
    /// Ratio given to the left/top child of a new split (exclusive range: 0-1).
    pub default_split_ratio: f64,
    pub split_policy: SplitPolicy,
    pub missing_focus: MissingFocusPolicy,
    pub focus_succession: FocusSuccession,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            gap: 8.0,
            min_tile_width: 200.0,
            min_tile_height: 150.0,
            default_split_ratio: 0.5,
            split_policy: SplitPolicy::default(),
            missing_focus: MissingFocusPolicy::default(),
            focus_succession: FocusSuccession::default(),
        }
    }
}
