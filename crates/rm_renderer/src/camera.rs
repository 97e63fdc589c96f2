//! Camera for ray generation.
//!
//! Maps a discrete pixel grid onto a virtual screen in world space. The
//! virtual screen spans `virtual_size` starting at `lower_left_corner`
//! (relative to the camera position); every ray starts at the camera
//! position and is normalized before it is returned.

use rand::{Rng, RngCore};
use rm_core::{ConfigError, ConfigResult, SceneDescription};
use rm_math::{Ray, UVec2, Vec2, Vec3};

/// Largest image, in pixels, a camera will accept.
pub const MAX_PIXELS: u64 = u32::MAX as u64;

/// Camera for generating rays into the scene.
///
/// Immutable once built; use [`Camera::builder`] to construct one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    screen_size: UVec2,
    virtual_size: Vec2,
    virtual_half_size: Vec2,
    position: Vec3,
    lower_left_corner: Vec3,
    samples_per_pixel: u32,
}

/// Builder for [`Camera`]. Validation happens in [`CameraBuilder::build`].
#[derive(Debug, Clone)]
pub struct CameraBuilder {
    screen_size: UVec2,
    virtual_size: Vec2,
    position: Vec3,
    lower_left_corner: Option<Vec3>,
    samples_per_pixel: u32,
}

impl Default for CameraBuilder {
    fn default() -> Self {
        Self {
            screen_size: UVec2::new(200, 200),
            virtual_size: Vec2::new(2.0, 2.0),
            position: Vec3::new(0.0, 0.0, 1.0),
            lower_left_corner: None,
            samples_per_pixel: 16,
        }
    }
}

impl CameraBuilder {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.screen_size = UVec2::new(width, height);
        self
    }

    /// Set the size of the virtual screen in world units.
    pub fn with_virtual_size(mut self, width: f32, height: f32) -> Self {
        self.virtual_size = Vec2::new(width, height);
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the lower-left corner of the virtual screen.
    ///
    /// Without this the corner is `(-w/2, -h/2, -1)` for a virtual screen of
    /// size `w x h`.
    pub fn with_lower_left_corner(mut self, corner: Vec3) -> Self {
        self.lower_left_corner = Some(corner);
        self
    }

    /// Set samples per pixel.
    pub fn with_samples(mut self, samples_per_pixel: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self
    }

    /// Validate the settings and build the camera.
    pub fn build(self) -> ConfigResult<Camera> {
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.screen_size.cmpeq(UVec2::ZERO).any() {
            return Err(ConfigError::EmptyScreen {
                width: self.screen_size.x,
                height: self.screen_size.y,
            });
        }
        // Room for the inclusive policy's extra row must still fit the pixel budget.
        let pixels = u64::from(self.screen_size.x) * (u64::from(self.screen_size.y) + 1);
        if pixels > MAX_PIXELS {
            return Err(ConfigError::ScreenTooLarge {
                width: self.screen_size.x,
                height: self.screen_size.y,
                max: MAX_PIXELS,
            });
        }
        if !(self.virtual_size.is_finite() && self.virtual_size.cmpgt(Vec2::ZERO).all()) {
            return Err(ConfigError::InvalidVirtualSize {
                width: self.virtual_size.x,
                height: self.virtual_size.y,
            });
        }

        let virtual_half_size = self.virtual_size / 2.0;
        let lower_left_corner = self
            .lower_left_corner
            .unwrap_or_else(|| virtual_half_size.extend(1.0) * -1.0);

        Ok(Camera {
            screen_size: self.screen_size,
            virtual_size: self.virtual_size,
            virtual_half_size,
            position: self.position,
            lower_left_corner,
            samples_per_pixel: self.samples_per_pixel,
        })
    }
}

impl Camera {
    /// Start building a camera from default settings.
    pub fn builder() -> CameraBuilder {
        CameraBuilder::default()
    }

    /// Build and validate a camera from a scene description.
    pub fn from_description(description: &SceneDescription) -> ConfigResult<Self> {
        let mut builder = Camera::builder()
            .with_resolution(description.width, description.height)
            .with_virtual_size(description.virtual_width, description.virtual_height)
            .with_position(description.camera_position)
            .with_samples(description.samples_per_pixel);
        if let Some(corner) = description.lower_left_corner {
            builder = builder.with_lower_left_corner(corner);
        }
        builder.build()
    }

    /// Generate the ray for pixel (x, y) displaced by `jitter`.
    ///
    /// `jitter` is expected in `[0, 1)^2`. Pure: the same inputs always give
    /// the same ray.
    pub fn get_ray(&self, x: u32, y: u32, jitter: Vec2) -> Ray {
        let sample = Vec2::new(x as f32 + jitter.x, y as f32 + jitter.y);
        let screen = self.screen_size.as_vec2();
        let offset = Vec3::new(
            sample.x / screen.x * self.virtual_size.x,
            sample.y / screen.y * self.virtual_size.y,
            0.0,
        );
        let direction = (offset + self.lower_left_corner).normalize();

        Ray::new(self.position, direction)
    }

    pub fn width(&self) -> u32 {
        self.screen_size.x
    }

    pub fn height(&self) -> u32 {
        self.screen_size.y
    }

    pub fn screen_size(&self) -> UVec2 {
        self.screen_size
    }

    pub fn virtual_size(&self) -> Vec2 {
        self.virtual_size
    }

    pub fn virtual_half_size(&self) -> Vec2 {
        self.virtual_half_size
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn lower_left_corner(&self) -> Vec3 {
        self.lower_left_corner
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }
}

/// Sample a uniform sub-pixel offset in `[0, 1) x [0, 1)`.
pub fn sample_jitter(rng: &mut dyn RngCore) -> Vec2 {
    Vec2::new(rng.gen::<f32>(), rng.gen::<f32>())
}
