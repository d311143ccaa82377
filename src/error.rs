use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building a session.
///
/// The simulation itself never fails once constructed; all of these are
/// raised up front by constructors or the config loader.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("animation needs at least one frame")]
    ZeroFrameCount,

    #[error("frame delay must be positive, got {0}")]
    InvalidFrameDelay(f32),

    #[error("sprite {id} has an empty size ({width}x{height})")]
    EmptySprite { id: u16, width: u32, height: u32 },

    #[error("sprite {id} is {width}px wide, too narrow for {frames} frames")]
    SheetTooNarrow { id: u16, width: u32, frames: u32 },

    #[error("invalid config value `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
