//! Hittable trait and HitRecord for ray-object intersection.

use rm_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Only produced for an accepted hit; a miss is `None`, so there is no
/// meaningless `t` for a caller to read by mistake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub position: Vec3,
}

/// Capability shared by every scene primitive.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object with a parameter inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;

    /// Outward unit normal at a point on the surface.
    fn normal(&self, point: Vec3) -> Vec3;

    /// Flat surface color, each channel in [0, 1].
    fn color(&self) -> Vec3;
}
