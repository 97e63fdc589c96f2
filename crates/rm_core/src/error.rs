//! Errors raised while turning a configuration into a renderable scene.

use rm_math::Vec3;
use thiserror::Error;

/// Errors that can occur while loading or validating a scene.
///
/// These are all surfaced once, before rendering begins. The render loop
/// itself has no failure modes.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Sample count must be at least 1")]
    ZeroSamples,

    #[error("Screen size must be non-zero, got {width}x{height}")]
    EmptyScreen { width: u32, height: u32 },

    #[error("Screen size {width}x{height} exceeds {max} pixels (including the extra scanline)")]
    ScreenTooLarge { width: u32, height: u32, max: u64 },

    #[error("Virtual screen size must be positive and finite, got {width}x{height}")]
    InvalidVirtualSize { width: f32, height: f32 },

    #[error("Sphere radius must be positive and finite, got {0}")]
    DegenerateSphere(f32),

    #[error("Color channels must lie in [0, 1], got {0}")]
    ColorOutOfRange(Vec3),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
