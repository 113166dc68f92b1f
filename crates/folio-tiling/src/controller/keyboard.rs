//! Keyboard shortcut dispatch for WindowController.
//!
//! Index and prev/next navigation walk the flat tile list in insertion
//! order. Prev/next stop at the ends instead of wrapping.

use folio_common::types::TileKind;
use folio_common::Action;
use folio_platform::{KeyCombo, KeybindRegistry};

use super::WindowController;

impl WindowController {
    /// Run an action. Returns `true` if it changed something.
    pub fn execute(&mut self, action: &Action) -> bool {
        match action {
            Action::CloseTile => self.close_focused(),
            Action::SpawnHome => self.spawn_tile(TileKind::Home, None).is_ok(),
            Action::FocusTile(n) => self.focus_index(usize::from(*n)),
            Action::FocusPrev => self.focus_prev(),
            Action::FocusNext => self.focus_next(),
            Action::None => false,
        }
    }

    /// Look up a key combination and run the bound action, if any.
    pub fn handle_key(&mut self, registry: &KeybindRegistry, combo: &KeyCombo) -> bool {
        match registry.lookup(combo).cloned() {
            Some(action) => self.execute(&action),
            None => false,
        }
    }

    pub fn close_focused(&mut self) -> bool {
        match self.focused_id().cloned() {
            Some(id) => self.close_tile(&id).is_ok(),
            None => false,
        }
    }

    /// Focus the `n`-th tile (1-based). Out-of-range indices do nothing.
    pub fn focus_index(&mut self, n: usize) -> bool {
        let Some(id) = n
            .checked_sub(1)
            .and_then(|i| self.engine.tile_ids().get(i))
            .cloned()
        else {
            return false;
        };
        self.focus_tile(&id).is_ok()
    }

    pub fn focus_prev(&mut self) -> bool {
        self.focus_step(|i, _| i.saturating_sub(1))
    }

    pub fn focus_next(&mut self) -> bool {
        self.focus_step(|i, len| (i + 1).min(len - 1))
    }

    /// Move focus to the index `step` picks. With nothing focused, the first
    /// tile gets focus.
    fn focus_step(&mut self, step: impl Fn(usize, usize) -> usize) -> bool {
        let ids = self.engine.tile_ids();
        if ids.is_empty() {
            return false;
        }
        let current = self
            .focused_id()
            .and_then(|focused| ids.iter().position(|id| id == focused));
        let target = match current {
            Some(i) => step(i, ids.len()),
            None => 0,
        };
        if current == Some(target) {
            return false;
        }
        let id = ids[target].clone();
        self.focus_tile(&id).is_ok()
    }
}
