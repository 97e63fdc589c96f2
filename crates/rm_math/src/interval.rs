/// Range of ray parameters an intersection test will accept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Everything in front of the ray origin: `[0, +inf)`.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f32::INFINITY,
    };

    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if `min <= t < max`.
    ///
    /// The lower bound is inclusive and the upper bound exclusive, so once
    /// `max` has been narrowed to a hit distance, a second surface at exactly
    /// that distance is rejected.
    #[inline]
    pub fn admits(&self, t: f32) -> bool {
        self.min <= t && t < self.max
    }

    /// Returns a copy of this interval with its upper bound replaced.
    #[inline]
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_creation() {
        let interval = Interval::new(0.0, 10.0);
        assert_eq!(interval.min, 0.0);
        assert_eq!(interval.max, 10.0);
    }

    #[test]
    fn test_interval_admits_half_open() {
        let interval = Interval::new(0.0, 10.0);

        // Lower bound inclusive, upper bound exclusive
        assert!(interval.admits(0.0));
        assert!(!interval.admits(10.0));
        assert!(interval.admits(5.0));
        assert!(interval.admits(9.999));

        assert!(!interval.admits(-0.1));
        assert!(!interval.admits(10.1));
    }

    #[test]
    fn test_interval_forward() {
        let forward = Interval::FORWARD;
        assert!(forward.admits(0.0));
        assert!(forward.admits(1e10));
        assert!(!forward.admits(-1e-6));
        assert!(!forward.admits(f32::NAN));
    }

    #[test]
    fn test_interval_with_max() {
        let narrowed = Interval::FORWARD.with_max(2.5);
        assert_eq!(narrowed, Interval::new(0.0, 2.5));
        assert!(!narrowed.admits(2.5));
        assert!(narrowed.admits(2.4));
    }
}
