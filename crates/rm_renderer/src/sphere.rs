//! Sphere primitive for ray casting.

use crate::hittable::{HitRecord, Hittable};
use rm_core::{ConfigError, ConfigResult};
use rm_math::{Interval, Ray, Vec3};

/// A sphere with a flat color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Vec3,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Fails if the radius is not positive and finite, or if any color
    /// channel lies outside [0, 1].
    pub fn new(center: Vec3, radius: f32, color: Vec3) -> ConfigResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::DegenerateSphere(radius));
        }
        if !color.cmpge(Vec3::ZERO).all() || !color.cmple(Vec3::ONE).all() {
            return Err(ConfigError::ColorOutOfRange(color));
        }

        Ok(Self {
            center,
            radius,
            color,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = ray.origin() - self.center;
        let direction = ray.direction();
        let a = direction.dot(direction);
        let b = 2.0 * direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        // A tangent ray (discriminant == 0) counts as a miss.
        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let far = (-b + sqrtd) / (2.0 * a);
        let near = (-b - sqrtd) / (2.0 * a);
        let t = far.min(near);

        // Only the nearer root is considered; if it falls outside the
        // interval the sphere is missed even when the far root would fit.
        if !ray_t.admits(t) {
            return None;
        }

        Some(HitRecord {
            t,
            position: ray.at(t),
        })
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }

    fn color(&self) -> Vec3 {
        self.color
    }
}
