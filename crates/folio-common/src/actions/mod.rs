use serde::{Deserialize, Serialize};

mod dispatch;

/// Every keyboard-triggerable tiling action.
///
/// Keybinds and the command driver both resolve to an `Action`; the window
/// controller matches on it to run the spawn/close/focus primitives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    CloseTile,
    SpawnHome,
    /// Focus the n-th tile (1-based) in the flat tile list.
    FocusTile(u8),
    FocusPrev,
    FocusNext,
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_bindable_actions_have_labels() {
        for action in Action::bindable_actions() {
            assert!(!action.label().is_empty(), "action {:?} has empty label", action);
        }
    }

    #[test]
    fn focus_tile_labels() {
        assert_eq!(Action::FocusTile(1).label(), "Focus Tile 1");
        assert_eq!(Action::FocusTile(5).label(), "Focus Tile 5");
        assert_eq!(Action::FocusTile(9).label(), "Focus Tile");
    }

    #[test]
    fn bindable_actions_cover_five_indices() {
        let count = Action::bindable_actions()
            .iter()
            .filter(|a| matches!(a, Action::FocusTile(_)))
            .count();
        assert_eq!(count, 5);
    }

    #[test]
    fn action_serde_roundtrip() {
        for action in [Action::CloseTile, Action::FocusTile(3), Action::FocusNext] {
            let json = serde_json::to_string(&action).unwrap();
            let back: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(action, back);
        }
    }
}
