//! rmtrace renderer - CPU ray casting.
//!
//! Casts one jittered ray per sample from a fixed viewpoint through a
//! virtual screen, resolves the nearest sphere along it and shades the hit
//! with a flat color and a view-dependent blend term. Misses fall back to a
//! radial background gradient. Samples are averaged per pixel in integer
//! color space.

mod camera;
mod hittable;
mod ppm;
mod primitive;
mod renderer;
mod scene;
mod sphere;

pub use camera::{sample_jitter, Camera, CameraBuilder, MAX_PIXELS};
pub use hittable::{HitRecord, Hittable};
pub use ppm::{save_ppm, write_ppm, ChannelPolicy};
pub use primitive::Primitive;
pub use renderer::{
    render, render_pixel, render_pixel_with_jitter, render_sequential, ImageBuffer, RenderConfig,
    Scanlines,
};
pub use scene::{background, shade_surface, Scene, Shade};
pub use sphere::Sphere;

/// Re-export math and configuration types used in the public API
pub use rm_core::{ConfigError, ConfigResult, ObjectDescription, SceneDescription};
pub use rm_math::{IVec3, Interval, Ray, UVec2, Vec2, Vec3};
