//! rmtrace core - scene description and configuration errors.
//!
//! This crate provides:
//!
//! - **Scene description**: `SceneDescription` and `ObjectDescription`, the
//!   serializable form of a scene (image size, virtual screen, camera and
//!   primitives)
//! - **Configuration errors**: `ConfigError`, raised once at setup time
//!
//! # Example
//!
//! ```ignore
//! use rm_core::SceneDescription;
//!
//! let description = SceneDescription::load("scenes/default.json")?;
//! println!("{} objects at {}x{}",
//!     description.objects.len(),
//!     description.width,
//!     description.height);
//! ```

pub mod description;
pub mod error;

// Re-export commonly used types
pub use description::{ObjectDescription, SceneDescription};
pub use error::{ConfigError, ConfigResult};
