//! Serializable scene description.
//!
//! A scene description names everything the renderer needs: the pixel
//! grid, the virtual screen it maps onto, the camera position, the sample
//! count and an ordered list of primitives. It is plain data; validation
//! happens when the renderer builds its camera and scene from it.

use std::fs;
use std::path::Path;

use rm_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;

/// Top-level scene description, usually loaded from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Width of the virtual screen in world units
    pub virtual_width: f32,

    /// Height of the virtual screen in world units
    pub virtual_height: f32,

    /// Jittered samples averaged per pixel
    pub samples_per_pixel: u32,

    /// Origin of every primary ray
    pub camera_position: Vec3,

    /// Lower-left corner of the virtual screen, relative to the ray origin.
    /// Defaults to `(-virtual_width/2, -virtual_height/2, -1)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_left_corner: Option<Vec3>,

    /// Primitives, in the order they are tested against each ray
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
}

/// One primitive in a scene description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDescription {
    Sphere {
        center: Vec3,
        radius: f32,
        /// Flat RGB color, each channel in [0, 1]
        color: Vec3,
    },
}

impl Default for SceneDescription {
    /// The built-in scene: a single red unit sphere straight ahead of a
    /// camera at `(0, 0, 1)`, rendered at 200x200.
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            virtual_width: 2.0,
            virtual_height: 2.0,
            samples_per_pixel: 16,
            camera_position: Vec3::new(0.0, 0.0, 1.0),
            lower_left_corner: None,
            objects: vec![ObjectDescription::Sphere {
                center: Vec3::new(0.0, 0.0, -1.0),
                radius: 1.0,
                color: Vec3::new(1.0, 0.0, 0.0),
            }],
        }
    }
}

impl SceneDescription {
    /// Parse a scene description from a JSON string.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let description: SceneDescription = serde_json::from_str(json)?;
        log::debug!(
            "Parsed scene description: {}x{}, {} objects",
            description.width,
            description.height,
            description.objects.len()
        );
        Ok(description)
    }

    /// Load a scene description from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let description = Self::from_json_str(&json)?;
        log::info!("Loaded scene description from {}", path.display());
        Ok(description)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
