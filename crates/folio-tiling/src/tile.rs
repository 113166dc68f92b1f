use folio_common::types::{TileId, TileKind};
use serde::{Deserialize, Serialize};

/// One on-screen region and its metadata.
///
/// `data` is an opaque payload for the rendering side; the engine never
/// looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub kind: TileKind,
    pub title: String,
    pub focused: bool,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Tile {
    pub fn new(id: TileId, kind: TileKind) -> Self {
        Self {
            id,
            kind,
            title: kind.default_title().to_string(),
            focused: false,
            data: serde_json::Value::Null,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}
