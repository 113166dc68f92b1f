//! Split orientation strategies.
//!
//! The engine asks a [`SplitStrategy`] which way to split each time a tile
//! lands on an occupied tree. Strategies are deterministic so a given
//! sequence of inserts always produces the same layout.

use folio_common::types::TileId;
use folio_config::SplitPolicy;

use crate::tree::Direction;

/// What a strategy knows about the split it is deciding.
#[derive(Debug, Clone, Copy)]
pub struct SplitContext<'a> {
    /// Tile currently occupying the leaf being split.
    pub target: &'a TileId,
    /// Tile being inserted.
    pub incoming: &'a TileId,
    /// Depth of the leaf being split (root is 0).
    pub depth: usize,
    /// Leaves in the tree before the insert.
    pub leaf_count: usize,
}

pub trait SplitStrategy {
    fn choose(&mut self, ctx: &SplitContext<'_>) -> Direction;
}

/// Always split the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed(pub Direction);

impl SplitStrategy for Fixed {
    fn choose(&mut self, _ctx: &SplitContext<'_>) -> Direction {
        self.0
    }
}

/// Horizontal at even depth, vertical at odd depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlternateByDepth;

impl SplitStrategy for AlternateByDepth {
    fn choose(&mut self, ctx: &SplitContext<'_>) -> Direction {
        if ctx.depth % 2 == 0 {
            Direction::Horizontal
        } else {
            Direction::Vertical
        }
    }
}

/// Build the strategy a config policy names.
pub fn from_policy(policy: SplitPolicy) -> Box<dyn SplitStrategy> {
    match policy {
        SplitPolicy::Alternate => Box::new(AlternateByDepth),
        SplitPolicy::Horizontal => Box::new(Fixed(Direction::Horizontal)),
        SplitPolicy::Vertical => Box::new(Fixed(Direction::Vertical)),
    }
}
