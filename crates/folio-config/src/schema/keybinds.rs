use serde::{Deserialize, Serialize};

/// Keyboard shortcuts. `Cmd` is the platform accelerator: Super on macOS,
/// Ctrl elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub close_tile: String,
    pub spawn_home: String,
    pub focus_tile_1: String,
    pub focus_tile_2: String,
    pub focus_tile_3: String,
    pub focus_tile_4: String,
    pub focus_tile_5: String,
    pub focus_prev: String,
    pub focus_next: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            close_tile: "Cmd+W".into(),
            spawn_home: "Cmd+N".into(),
            focus_tile_1: "Cmd+1".into(),
            focus_tile_2: "Cmd+2".into(),
            focus_tile_3: "Cmd+3".into(),
            focus_tile_4: "Cmd+4".into(),
            focus_tile_5: "Cmd+5".into(),
            focus_prev: "Cmd+Left".into(),
            focus_next: "Cmd+Right".into(),
        }
    }
}
