//! The WindowController wraps a TilingEngine with the spawn/close/focus
//! lifecycle and keyboard navigation.

mod keyboard;
mod lifecycle;
mod types;

pub use types::*;
