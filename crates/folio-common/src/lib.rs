pub mod actions;
pub mod errors;
pub mod id;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, FolioError, PlatformError, TilingError};
pub use id::{new_correlation_id, new_tile_id};
pub use types::{Rect, TileId, TileKind};

pub type Result<T> = std::result::Result<T, FolioError>;
