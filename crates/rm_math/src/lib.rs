//! Vector and ray primitives shared by the rmtrace crates.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_dot_and_normalize() {
        let a = Vec3::new(3.0, 0.0, 4.0);
        assert_eq!(a.dot(a), 25.0);

        let n = a.normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_zero_vector_normalizes_to_nan() {
        // The math layer does not guard against degenerate directions.
        let n = Vec3::ZERO.normalize();
        assert!(n.x.is_nan());
    }

    #[test]
    fn test_ivec3_integer_division_truncates() {
        let sum = IVec3::new(511, 256, 7);
        assert_eq!(sum / 2, IVec3::new(255, 128, 3));
    }
}
