use std::path::PathBuf;

use crate::types::TileId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TilingError {
    #[error("tile already exists: {0}")]
    DuplicateIdentifier(TileId),

    #[error("tile not found: {0}")]
    NotFound(TileId),

    #[error("tile tree corrupted: {0}")]
    Corrupted(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("invalid keybind: {0}")]
    InvalidKeybind(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error(transparent)]
    Tiling(#[from] TilingError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
