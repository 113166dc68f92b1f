//! Config schema. Each section lives in its own submodule.

mod keybinds;
mod tiling;

pub use keybinds::KeybindConfig;
pub use tiling::{FocusSuccession, MissingFocusPolicy, SplitPolicy, TilingConfig};

use serde::{Deserialize, Serialize};

/// Top-level config file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub tiling: TilingConfig,
    pub keybinds: KeybindConfig,
}
