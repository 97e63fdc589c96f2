//! Scene ownership, nearest-hit resolution and shading.

use crate::hittable::{HitRecord, Hittable};
use crate::primitive::Primitive;
use rm_core::{ConfigResult, SceneDescription};
use rm_math::{IVec3, Interval, Ray, Vec3};

/// Outcome of resolving one ray against the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shade {
    /// The ray hit a surface at `t`; `color` is that surface's shading.
    Surface { t: f32, color: IVec3 },
    /// Nothing was hit; `color` is the background gradient.
    Background(IVec3),
}

impl Shade {
    /// Integer color of this sample.
    pub fn color(&self) -> IVec3 {
        match *self {
            Shade::Surface { color, .. } => color,
            Shade::Background(color) => color,
        }
    }

    /// Whether any primitive was hit.
    pub fn is_hit(&self) -> bool {
        matches!(self, Shade::Surface { .. })
    }

    /// Ray parameter of the accepted hit, if any.
    pub fn t(&self) -> Option<f32> {
        match *self {
            Shade::Surface { t, .. } => Some(t),
            Shade::Background(_) => None,
        }
    }
}

/// An ordered collection of primitives.
///
/// Insertion order is the order primitives are tested against each ray.
/// The scene is read-only while rendering.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and validate a scene from its description.
    pub fn from_description(description: &SceneDescription) -> ConfigResult<Self> {
        let mut scene = Self::new();
        for object in &description.objects {
            let primitive = Primitive::from_description(object)?;
            log::debug!("Added {} #{}: {:?}", primitive.kind(), scene.len(), primitive);
            scene.add(primitive);
        }
        log::info!("Scene built with {} objects", scene.len());
        Ok(scene)
    }

    /// Add a primitive after all existing ones.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Find the nearest primitive along the ray.
    ///
    /// Returns the winning primitive's index together with its hit record.
    pub fn closest_hit(&self, ray: &Ray) -> Option<(usize, HitRecord)> {
        let mut ray_t = Interval::FORWARD;
        let mut closest = None;

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(rec) = primitive.hit(ray, ray_t) {
                ray_t = ray_t.with_max(rec.t);
                closest = Some((index, rec));
            }
        }

        closest
    }

    /// Resolve a ray to a shaded color.
    ///
    /// Each accepted hit narrows the upper bound of the interval to its own
    /// `t`, so anything behind it is rejected by later tests and the final
    /// color always belongs to the nearest surface, whatever the insertion
    /// order.
    pub fn resolve(&self, ray: &Ray) -> Shade {
        let mut ray_t = Interval::FORWARD;
        let mut shade = None;

        for primitive in &self.primitives {
            if let Some(rec) = primitive.hit(ray, ray_t) {
                ray_t = ray_t.with_max(rec.t);
                let normal = primitive.normal(rec.position);
                shade = Some(Shade::Surface {
                    t: rec.t,
                    color: shade_surface(ray.direction(), normal, primitive.color()),
                });
            }
        }

        shade.unwrap_or_else(|| Shade::Background(background(ray)))
    }
}

/// Shade a surface hit.
///
/// `blend` is 1 when the surface faces the ray head-on and 0 when it faces
/// away. The result is `blend * 256 * color`, truncated per channel, so a
/// head-on white surface yields 256.
pub fn shade_surface(direction: Vec3, normal: Vec3, color: Vec3) -> IVec3 {
    let blend = 1.0 - (1.0 + direction.dot(normal)) / 2.0;
    (color * (blend * 256.0)).as_ivec3()
}

/// Background gradient for a ray that hit nothing.
///
/// Red and green fade out with the length of the direction's xy part; blue
/// is always 255.
pub fn background(ray: &Ray) -> IVec3 {
    let direction = ray.direction();
    let s = (direction.x * direction.x + direction.y * direction.y).sqrt();
    let lerp = s.min(1.0);
    let value = (255.0 * (1.0 - lerp)) as i32;
    IVec3::new(value, value, 255)
}
