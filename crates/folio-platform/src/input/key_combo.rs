use crate::keymap::{KeyBind, Modifier};

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_SUPER: u8 = 0b1000;

/// A canonical key representation for fast HashMap lookup.
///
/// Modifiers are stored as a bitmask so that modifier order never matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "W", "Left", "3").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`].
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mods = kb.modifiers.iter().fold(0u8, |acc, m| {
            acc | match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            }
        });
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from raw modifier state and a normalized key name, as delivered
    /// by an input event.
    pub fn from_modifiers(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let mut mods = 0u8;
        if ctrl {
            mods |= MOD_CTRL;
        }
        if alt {
            mods |= MOD_ALT;
        }
        if shift {
            mods |= MOD_SHIFT;
        }
        if super_key {
            mods |= MOD_SUPER;
        }
        Self { mods, key }
    }

    /// Reconstruct a [`KeyBind`] for display purposes.
    pub(super) fn to_keybind(&self) -> KeyBind {
        let modifiers = [
            (MOD_CTRL, Modifier::Ctrl),
            (MOD_ALT, Modifier::Alt),
            (MOD_SHIFT, Modifier::Shift),
            (MOD_SUPER, Modifier::Super),
        ]
        .into_iter()
        .filter(|(bit, _)| self.mods & bit != 0)
        .map(|(_, m)| m)
        .collect();
        KeyBind {
            modifiers,
            key: self.key.clone(),
        }
    }
}
