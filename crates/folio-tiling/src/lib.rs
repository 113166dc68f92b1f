pub mod controller;
pub mod engine;
pub mod layout;
pub mod strategy;
pub mod tile;
pub mod tree;

pub use controller::WindowController;
pub use engine::{RemovedTile, TilingEngine};
pub use layout::{LayoutEngine, TileLayout};
pub use strategy::{AlternateByDepth, Fixed, SplitContext, SplitStrategy};
pub use tile::Tile;
pub use tree::{Direction, NodeId, TileTree};
