use std::collections::HashMap;

use folio_common::Action;
use folio_config::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Maps key combinations to [`Action`]s.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mappings: [(&str, Action); 9] = [
            (config.close_tile.as_str(), Action::CloseTile),
            (config.spawn_home.as_str(), Action::SpawnHome),
            (config.focus_tile_1.as_str(), Action::FocusTile(1)),
            (config.focus_tile_2.as_str(), Action::FocusTile(2)),
            (config.focus_tile_3.as_str(), Action::FocusTile(3)),
            (config.focus_tile_4.as_str(), Action::FocusTile(4)),
            (config.focus_tile_5.as_str(), Action::FocusTile(5)),
            (config.focus_prev.as_str(), Action::FocusPrev),
            (config.focus_next.as_str(), Action::FocusNext),
        ];

        let mut bindings = HashMap::new();
        for (binding_str, action) in mappings {
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}': {e}");
                }
            }
        }

        Self { bindings }
    }

    /// Look up an action for a key combination.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<&Action> {
        self.bindings.get(combo)
    }

    /// Parse a keybind string and look it up in one step.
    pub fn lookup_str(&self, binding: &str) -> Option<&Action> {
        let kb = parse_keybind(binding).ok()?;
        self.lookup(&KeyCombo::from_keybind(&kb))
    }

    /// Display string for the key bound to `action`, if any.
    pub fn keybind_for_action(&self, action: &Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
