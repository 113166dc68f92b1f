use super::Action;

impl Action {
    /// Human-readable label for help output.
    pub fn label(&self) -> &'static str {
        match self {
            Action::CloseTile => "Close Tile",
            Action::SpawnHome => "New Home Tile",
            Action::FocusTile(1) => "Focus Tile 1",
            Action::FocusTile(2) => "Focus Tile 2",
            Action::FocusTile(3) => "Focus Tile 3",
            Action::FocusTile(4) => "Focus Tile 4",
            Action::FocusTile(5) => "Focus Tile 5",
            Action::FocusTile(_) => "Focus Tile",
            Action::FocusPrev => "Focus Previous Tile",
            Action::FocusNext => "Focus Next Tile",
            Action::None => "None",
        }
    }

    /// All actions that can be bound to a key.
    pub fn bindable_actions() -> Vec<Action> {
        vec![
            Action::CloseTile,
            Action::SpawnHome,
            Action::FocusTile(1),
            Action::FocusTile(2),
            Action::FocusTile(3),
            Action::FocusTile(4),
            Action::FocusTile(5),
            Action::FocusPrev,
            Action::FocusNext,
        ]
    }
}
