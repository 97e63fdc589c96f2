//! Closed set of primitive kinds a scene can hold.

use crate::hittable::{HitRecord, Hittable};
use crate::sphere::Sphere;
use rm_core::{ConfigResult, ObjectDescription};
use rm_math::{Interval, Ray, Vec3};

/// A scene primitive, dispatched by variant rather than through a trait object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
}

impl Primitive {
    /// Build and validate a primitive from its description.
    pub fn from_description(description: &ObjectDescription) -> ConfigResult<Self> {
        match *description {
            ObjectDescription::Sphere {
                center,
                radius,
                color,
            } => Ok(Primitive::Sphere(Sphere::new(center, radius, color)?)),
        }
    }

    /// Short name of the primitive kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl Hittable for Primitive {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, ray_t),
        }
    }

    #[inline]
    fn normal(&self, point: Vec3) -> Vec3 {
        match self {
            Primitive::Sphere(sphere) => sphere.normal(point),
        }
    }

    #[inline]
    fn color(&self) -> Vec3 {
        match self {
            Primitive::Sphere(sphere) => sphere.color(),
        }
    }
}
