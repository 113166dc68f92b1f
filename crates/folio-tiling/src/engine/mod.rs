//! The TilingEngine: split tree, tile registry, focus flags, and layout.

mod layout_compute;
mod operations;
mod types;

pub use types::*;
