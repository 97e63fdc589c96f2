use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rm_core::SceneDescription;
use rm_renderer::{ChannelPolicy, RenderConfig, Scanlines};

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "rm_tracer")]
#[command(about = "Casts rays at a scene of spheres and writes a P3 PPM image")]
pub struct Args {
    /// Scene description (JSON); the built-in scene is used when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "buffer.ppm")]
    pub output: PathBuf,

    /// Image width in pixels (overrides the scene)
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels (overrides the scene)
    #[arg(long)]
    pub height: Option<u32>,

    /// Samples per pixel (overrides the scene)
    #[arg(long, short = 's')]
    pub samples_per_pixel: Option<u32>,

    /// Seed for reproducible jitter
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render exactly `height` rows instead of `height + 1`
    #[arg(long)]
    pub exact_scanlines: bool,

    /// Clamp channels to [0, 255] when writing
    #[arg(long)]
    pub clamp: bool,

    /// Render on one thread with a single random stream
    #[arg(long)]
    pub sequential: bool,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub debug_level: LogLevel,
}

impl Args {
    /// Apply command line overrides on top of a loaded description.
    pub fn apply_overrides(&self, description: &mut SceneDescription) {
        if let Some(width) = self.width {
            description.width = width;
        }
        if let Some(height) = self.height {
            description.height = height;
        }
        if let Some(samples) = self.samples_per_pixel {
            description.samples_per_pixel = samples;
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            seed: self.seed,
            scanlines: if self.exact_scanlines {
                Scanlines::Exact
            } else {
                Scanlines::Inclusive
            },
        }
    }

    pub fn channel_policy(&self) -> ChannelPolicy {
        if self.clamp {
            ChannelPolicy::Clamp
        } else {
            ChannelPolicy::Raw
        }
    }
}
