//! Multi-sample render loop.
//!
//! Implements:
//! - Jittered multi-sampling with integer accumulation
//! - Scanline ordering (top row first, left to right)
//! - Row-parallel rendering with independent random streams per row

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use rm_math::{I64Vec3, IVec3, Vec2};

use crate::camera::{sample_jitter, Camera};
use crate::scene::Scene;

/// Which rows the render loop visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scanlines {
    /// `y = height, height - 1, ..., 0`: one more row than the image height.
    #[default]
    Inclusive,
    /// `y = height - 1, ..., 0`: exactly `height` rows.
    Exact,
}

impl Scanlines {
    /// Row coordinates in emission order (descending).
    pub fn rows(self, height: u32) -> impl Iterator<Item = u32> {
        let top = match self {
            Scanlines::Inclusive => Some(height),
            Scanlines::Exact => height.checked_sub(1),
        };
        top.into_iter().flat_map(|top| (0..=top).rev())
    }

    /// Number of rows emitted for an image of the given height.
    ///
    /// Saturates at `u32::MAX`; cameras never have a height that large.
    pub fn row_count(self, height: u32) -> u32 {
        match self {
            Scanlines::Inclusive => height.saturating_add(1),
            Scanlines::Exact => height,
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Seed for reproducible jitter; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Row policy
    pub scanlines: Scanlines,
}

/// Image buffer holding averaged integer pixels in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    /// Number of rows actually rendered
    pub height: u32,
    pub pixels: Vec<IVec3>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![IVec3::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, row: u32) -> usize {
        row as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, row), where row 0 is the first row emitted.
    pub fn get(&self, x: u32, row: u32) -> IVec3 {
        self.pixels[self.index(x, row)]
    }

    /// Set the pixel at (x, row).
    pub fn set(&mut self, x: u32, row: u32, color: IVec3) {
        let index = self.index(x, row);
        self.pixels[index] = color;
    }
}

/// Running sum of integer sample colors.
///
/// Sums in 64 bits so that even `u32::MAX` samples of a 256 channel cannot
/// overflow; only the average is narrowed back to `i32`.
#[derive(Debug, Clone, Copy, Default)]
struct SampleSum {
    sum: I64Vec3,
    count: u64,
}

impl SampleSum {
    fn add(&mut self, color: IVec3) {
        self.sum += color.as_i64vec3();
        self.count += 1;
    }

    /// Integer average of the samples added so far; zero when empty.
    fn average(&self) -> IVec3 {
        (self.sum / self.count.max(1) as i64).as_ivec3()
    }
}

/// Render a single pixel with the given sub-pixel jitters.
///
/// The integer colors of all samples are summed and then divided by the
/// number of samples with integer division. Nothing is clamped.
pub fn render_pixel_with_jitter(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    jitters: &[Vec2],
) -> IVec3 {
    let mut samples = SampleSum::default();
    for &jitter in jitters {
        let ray = camera.get_ray(x, y, jitter);
        samples.add(scene.resolve(&ray).color());
    }
    samples.average()
}

/// Render a single pixel with `camera.samples_per_pixel()` random jitters.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> IVec3 {
    let mut samples = SampleSum::default();

    for _ in 0..camera.samples_per_pixel() {
        let ray = camera.get_ray(x, y, sample_jitter(rng));
        samples.add(scene.resolve(&ray).color());
    }

    samples.average()
}

/// Random stream for one row of a parallel render.
fn row_rng(seed: Option<u64>, row_index: usize) -> StdRng {
    match seed {
        Some(seed) => {
            StdRng::seed_from_u64(seed ^ (row_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        }
        None => StdRng::from_entropy(),
    }
}

/// Render the entire scene, one row per rayon task.
///
/// Rows are written straight into their slot in the buffer, so the output
/// stays in scanline order regardless of which task finishes first.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    let rows: Vec<u32> = config.scanlines.rows(camera.height()).collect();
    let mut image = ImageBuffer::new(camera.width(), rows.len() as u32);

    log::info!(
        "Rendering {}x{} ({} rows) @ {} spp, {} objects",
        camera.width(),
        camera.height(),
        rows.len(),
        camera.samples_per_pixel(),
        scene.len()
    );

    image
        .pixels
        .par_chunks_mut(camera.width() as usize)
        .zip(rows.par_iter())
        .enumerate()
        .for_each(|(row_index, (row, &y))| {
            let mut rng = row_rng(config.seed, row_index);
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(camera, scene, x as u32, y, &mut rng);
            }
        });

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

/// Render the entire scene on the calling thread with a single random stream.
pub fn render_sequential(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut image = ImageBuffer::new(
        camera.width(),
        config.scanlines.row_count(camera.height()),
    );

    for (row_index, y) in config.scanlines.rows(camera.height()).enumerate() {
        for x in 0..camera.width() {
            let color = render_pixel(camera, scene, x, y, &mut rng);
            image.set(x, row_index as u32, color);
        }
        log::debug!("Finished row {} (y = {})", row_index, y);
    }

    log::info!("Rendered sequentially in {:?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Sphere;
    use rm_math::Vec3;

    fn red_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.8, Vec3::new(1.0, 0.0, 0.0)).unwrap());
        scene
    }

    fn camera(width: u32, height: u32, samples: u32) -> Camera {
        Camera::builder()
            .with_resolution(width, height)
            .with_virtual_size(2.0, 2.0)
            .with_position(Vec3::new(0.0, 0.0, 1.0))
            .with_samples(samples)
            .build()
            .unwrap()
    }

    #[test]
    fn test_scanline_rows() {
        let inclusive: Vec<u32> = Scanlines::Inclusive.rows(3).collect();
        assert_eq!(inclusive, vec![3, 2, 1, 0]);
        assert_eq!(Scanlines::Inclusive.row_count(3), 4);

        let exact: Vec<u32> = Scanlines::Exact.rows(3).collect();
        assert_eq!(exact, vec![2, 1, 0]);
        assert_eq!(Scanlines::Exact.row_count(3), 3);

        assert_eq!(Scanlines::Exact.rows(0).count(), 0);
        assert_eq!(Scanlines::Inclusive.row_count(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_sample_sum_does_not_overflow_i32() {
        let mut samples = SampleSum::default();
        for _ in 0..3 {
            samples.add(IVec3::new(i32::MAX, 256, 255));
        }
        assert_eq!(samples.average(), IVec3::new(i32::MAX, 256, 255));
    }

    #[test]
    fn test_sample_sum_large_count_averages_exactly() {
        // 9M samples of 256 would wrap an i32 sum.
        let mut samples = SampleSum::default();
        for _ in 0..9_000_000 {
            samples.add(IVec3::new(256, 256, 255));
        }
        assert_eq!(samples.count, 9_000_000);
        assert_eq!(samples.average(), IVec3::new(256, 256, 255));
    }

    #[test]
    fn test_empty_sample_sum_is_black() {
        assert_eq!(SampleSum::default().average(), IVec3::ZERO);
    }

    #[test]
    fn test_image_buffer_indexing() {
        let mut image = ImageBuffer::new(70_000, 2);
        assert_eq!(image.pixels.len(), 140_000);

        image.set(69_999, 1, IVec3::new(1, 2, 3));
        assert_eq!(image.get(69_999, 1), IVec3::new(1, 2, 3));
        assert_eq!(image.pixels[139_999], IVec3::new(1, 2, 3));
    }

    #[test]
    fn test_single_sample_fixed_jitter_is_reproducible() {
        let camera = camera(2, 2, 1);
        let scene = red_sphere_scene();

        let first = render_pixel_with_jitter(&camera, &scene, 1, 1, &[Vec2::ZERO]);
        let second = render_pixel_with_jitter(&camera, &scene, 1, 1, &[Vec2::ZERO]);
        assert_eq!(first, second);

        let ray = camera.get_ray(1, 1, Vec2::ZERO);
        assert_eq!(first, scene.resolve(&ray).color());
    }

    #[test]
    fn test_identical_samples_average_exactly() {
        let camera = camera(2, 2, 8);
        let scene = red_sphere_scene();

        for (x, y) in [(0, 0), (1, 1), (1, 2), (0, 2)] {
            let single = render_pixel_with_jitter(&camera, &scene, x, y, &[Vec2::ZERO]);
            let many = render_pixel_with_jitter(&camera, &scene, x, y, &[Vec2::ZERO; 8]);
            assert_eq!(single, many, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_average_uses_integer_division() {
        let camera = camera(2, 2, 2);
        let scene = Scene::new();

        // Two background samples with different red/green values.
        let jitters = [Vec2::ZERO, Vec2::new(0.5, 0.5)];
        let a = scene.resolve(&camera.get_ray(0, 0, jitters[0])).color();
        let b = scene.resolve(&camera.get_ray(0, 0, jitters[1])).color();

        let averaged = render_pixel_with_jitter(&camera, &scene, 0, 0, &jitters);
        assert_eq!(averaged, (a + b) / 2);
    }

    #[test]
    fn test_head_on_overflow_is_kept() {
        let camera = camera(2, 2, 1);
        let scene = red_sphere_scene();

        // The center ray meets the sphere head-on: 256 in the red channel.
        let color = render_pixel_with_jitter(&camera, &scene, 1, 1, &[Vec2::ZERO]);
        assert_eq!(color, IVec3::new(256, 0, 0));
    }

    #[test]
    fn test_render_pixel_uses_sample_count() {
        let camera = camera(4, 4, 16);
        let scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(3);

        // Background blue is 255 for every sample.
        let color = render_pixel(&camera, &scene, 2, 2, &mut rng);
        assert_eq!(color.z, 255);
    }

    #[test]
    fn test_render_row_count_follows_policy() {
        let camera = camera(3, 2, 1);
        let scene = red_sphere_scene();

        let inclusive = render(&camera, &scene, &RenderConfig::default());
        assert_eq!((inclusive.width, inclusive.height), (3, 3));
        assert_eq!(inclusive.pixels.len(), 9);

        let config = RenderConfig {
            seed: Some(1),
            scanlines: Scanlines::Exact,
        };
        let exact = render(&camera, &scene, &config);
        assert_eq!((exact.width, exact.height), (3, 2));
        assert_eq!(exact.pixels.len(), 6);
    }

    #[test]
    fn test_seeded_render_is_reproducible() {
        let camera = camera(8, 6, 4);
        let scene = red_sphere_scene();
        let config = RenderConfig {
            seed: Some(42),
            scanlines: Scanlines::Inclusive,
        };

        assert_eq!(render(&camera, &scene, &config), render(&camera, &scene, &config));
        assert_eq!(
            render_sequential(&camera, &scene, &config),
            render_sequential(&camera, &scene, &config)
        );
    }

    #[test]
    fn test_rows_emitted_top_first() {
        // With a background-only scene and a tall virtual screen, the first
        // emitted row (highest y) sees a larger |y| than the middle row.
        let camera = Camera::builder()
            .with_resolution(1, 4)
            .with_virtual_size(0.01, 4.0)
            .with_lower_left_corner(Vec3::new(0.0, -2.0, -1.0))
            .with_samples(1)
            .build()
            .unwrap();
        let scene = Scene::new();
        let config = RenderConfig {
            seed: Some(9),
            scanlines: Scanlines::Inclusive,
        };

        let image = render(&camera, &scene, &config);
        let top = image.get(0, 0);
        let middle = image.get(0, 2);
        assert!(top.x < middle.x, "top {top} should be darker than middle {middle}");
    }

    #[test]
    fn test_parallel_and_sequential_agree_on_static_pixels() {
        // Background blue never varies, so both paths agree on it.
        let camera = camera(5, 5, 3);
        let scene = Scene::new();
        let config = RenderConfig::default();

        let parallel = render(&camera, &scene, &config);
        let sequential = render_sequential(&camera, &scene, &config);
        assert_eq!(parallel.pixels.len(), sequential.pixels.len());
        assert!(parallel.pixels.iter().all(|p| p.z == 255));
        assert!(sequential.pixels.iter().all(|p| p.z == 255));
    }
}
