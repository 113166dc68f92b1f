//! Keybind registry: maps parsed key combinations to runtime `Action`s.
//!
//! Built from [`folio_config::KeybindConfig`] at startup.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::KeybindRegistry;
