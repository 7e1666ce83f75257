//! The tracing core: camera, registered objects, nearest-hit search and
//! the per-pixel color estimate.
//!
//! Every function that needs randomness takes the stream as a
//! parameter. Nothing here owns a generator, so a render is reproducible
//! from a seed and parallel callers only need one stream per partition.

use std::sync::Arc;

use crate::sampling::{gen_f64, random_disk};
use crate::{Color, HitRecord, Hittable};
use lumen_math::DVec3;
use rand::RngCore;

/// Sky color at the top of the background gradient.
const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Multiplier that maps [0, 1] onto the 8-bit range with truncation.
const QUANTIZE_SCALE: f64 = 255.999;

/// A camera with a thin lens looking at a set of hittable objects.
#[derive(Clone)]
pub struct Scene {
    source: DVec3,
    corner: DVec3,
    horizon: DVec3,
    vertical: DVec3,
    aperture: f64,
    objects: Vec<Arc<dyn Hittable>>,
}

impl Scene {
    /// Create a scene with no objects.
    ///
    /// `corner` is the lower-left corner of the image plane, `horizon` and
    /// `vertical` its full extents. An `aperture` of 0 is a pinhole camera;
    /// negative apertures are clamped to 0.
    pub fn new(source: DVec3, corner: DVec3, horizon: DVec3, vertical: DVec3, aperture: f64) -> Self {
        Self {
            source,
            corner,
            horizon,
            vertical,
            aperture: aperture.max(0.0),
            objects: Vec::new(),
        }
    }

    /// Register an object to hit.
    pub fn register(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn source(&self) -> DVec3 {
        self.source
    }

    pub fn corner(&self) -> DVec3 {
        self.corner
    }

    pub fn horizon(&self) -> DVec3 {
        self.horizon
    }

    pub fn vertical(&self) -> DVec3 {
        self.vertical
    }

    pub fn aperture(&self) -> f64 {
        self.aperture
    }

    pub fn set_source(&mut self, source: DVec3) {
        self.source = source;
    }

    pub fn set_corner(&mut self, corner: DVec3) {
        self.corner = corner;
    }

    pub fn set_horizon(&mut self, horizon: DVec3) {
        self.horizon = horizon;
    }

    pub fn set_vertical(&mut self, vertical: DVec3) {
        self.vertical = vertical;
    }

    /// Set the lens radius, clamped to be non-negative.
    pub fn set_aperture(&mut self, aperture: f64) {
        self.aperture = aperture.max(0.0);
    }

    /// Find the nearest hit across all registered objects.
    ///
    /// The direction is normalized once and handed to every object. Only
    /// a strictly smaller `t` replaces the current best, so on an exact
    /// tie the object registered first wins.
    pub fn ray(&self, origin: DVec3, direction: DVec3) -> Option<HitRecord<'_>> {
        let direction = direction.normalize();
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            if let Some(rec) = object.hit(origin, direction) {
                let closest_so_far = closest.as_ref().map_or(f64::INFINITY, |c| c.t);
                if rec.t < closest_so_far {
                    closest = Some(rec);
                }
            }
        }

        closest
    }

    /// Follow one path for at most `depth` bounces and return its color.
    ///
    /// A path that escapes picks up the sky gradient scaled by every
    /// albedo it met. A path still bouncing after `depth` hits is black.
    /// With `depth == 0` the loop never runs and the result is black too,
    /// matching the exhausted-budget rule.
    pub fn color_trace(
        &self,
        origin: DVec3,
        direction: DVec3,
        depth: u32,
        rng: &mut dyn RngCore,
    ) -> Color {
        let mut color = Color::ONE;
        let mut origin = origin;
        let mut direction = direction;

        for _ in 0..depth {
            match self.ray(origin, direction) {
                Some(rec) => {
                    let scattered = rec.material.scatter(direction, rec.normal.normalize(), rng);
                    color *= rec.material.albedo();
                    origin = rec.point;
                    direction = scattered;
                }
                None => return color * sky_gradient(direction),
            }
        }

        Color::ZERO
    }

    /// Estimate the 8-bit color of pixel (`x`, `y`).
    ///
    /// `y` counts up from the bottom of the image plane. One lens offset
    /// is drawn for the whole pixel, then `samples` jittered rays are
    /// traced and averaged.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is zero or either image dimension is not
    /// positive, since the average would otherwise be NaN.
    #[allow(clippy::too_many_arguments)]
    pub fn color(
        &self,
        x: u32,
        y: u32,
        samples: u32,
        depth: u32,
        width: f64,
        height: f64,
        rng: &mut dyn RngCore,
    ) -> [u8; 3] {
        assert!(samples > 0, "at least one sample per pixel is required");
        assert!(width > 0.0 && height > 0.0, "image dimensions must be positive");

        let (i, j) = random_disk(self.aperture, rng);
        let start = self.source + self.horizon.normalize() * i + self.vertical.normalize() * j;

        let mut color = Color::ZERO;
        for _ in 0..samples {
            let u = (x as f64 + gen_f64(rng)) / width;
            let v = (y as f64 + gen_f64(rng)) / height;
            let end = self.corner + self.horizon * u + self.vertical * v;

            color += self.color_trace(start, end - start, depth, rng);
        }

        quantize(color / samples as f64)
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("source", &self.source)
            .field("corner", &self.corner)
            .field("horizon", &self.horizon)
            .field("vertical", &self.vertical)
            .field("aperture", &self.aperture)
            .field("objects", &self.objects.len())
            .finish()
    }
}

/// Vertical white-to-blue background gradient.
pub fn sky_gradient(direction: DVec3) -> Color {
    let t = (direction.normalize().y + 1.0) * 0.5;
    Color::ONE * (1.0 - t) + SKY_BLUE * t
}

/// Scale a [0, 1] color to 8 bits, truncating toward zero.
///
/// Channels above 1.0 saturate at 255 and negative channels at 0.
#[inline]
pub fn quantize(color: Color) -> [u8; 3] {
    let pixel = color * QUANTIZE_SCALE;
    [pixel.x as u8, pixel.y as u8, pixel.z as u8]
}
