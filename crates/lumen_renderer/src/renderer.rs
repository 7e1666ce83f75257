//! Image driver around [`Scene::color`].
//!
//! Rows are the unit of parallel work. Each row draws from its own
//! `StdRng` seeded from the render seed and the row index, so the image
//! is the same no matter how rayon schedules the rows.

use std::time::Instant;

use crate::{RenderConfig, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur before a render starts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Samples per pixel must be at least 1")]
    NoSamples,

    #[error("Max depth must be at least 1")]
    NoBounces,
}

/// Check a render configuration before any pixel is traced.
pub fn validate(config: &RenderConfig) -> Result<(), RenderError> {
    if config.width == 0 || config.height == 0 {
        return Err(RenderError::EmptyImage {
            width: config.width,
            height: config.height,
        });
    }
    if config.samples_per_pixel == 0 {
        return Err(RenderError::NoSamples);
    }
    if config.max_depth == 0 {
        return Err(RenderError::NoBounces);
    }
    Ok(())
}

/// 8-bit RGB image, stored top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y), counting rows from the top.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y), counting rows from the top.
    pub fn set(&mut self, x: u32, y: u32, color: [u8; 3]) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    // usize math, u32 overflows past 65536x65536
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Flatten to packed RGB bytes (for display or saving).
    pub fn as_raw_rgb(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}

/// Seed of the random stream used for scene row `y`.
#[inline]
pub fn row_seed(seed: u64, y: u32) -> u64 {
    seed.wrapping_add(y as u64)
}

/// Render one row of the image plane.
///
/// `y` counts up from the bottom of the image plane, the same way
/// [`Scene::color`] does.
pub fn render_row(scene: &Scene, y: u32, config: &RenderConfig) -> Vec<[u8; 3]> {
    let mut rng = StdRng::seed_from_u64(row_seed(config.seed, y));
    let width = config.width as f64;
    let height = config.height as f64;

    log::trace!("Rendering row {}", y);

    (0..config.width)
        .map(|x| {
            scene.color(
                x,
                y,
                config.samples_per_pixel,
                config.max_depth,
                width,
                height,
                &mut rng,
            )
        })
        .collect()
}

/// Render the entire scene, one rayon task per row.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<ImageBuffer, RenderError> {
    validate(config)?;

    log::info!(
        "Rendering {}x{} @ {} spp, depth {}, {} objects",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth,
        scene.len()
    );
    let start = Instant::now();

    // Output row 0 is the top of the image, the highest scene row.
    let rows: Vec<Vec<[u8; 3]>> = (0..config.height)
        .into_par_iter()
        .map(|row| render_row(scene, config.height - 1 - row, config))
        .collect();

    let image = ImageBuffer {
        width: config.width,
        height: config.height,
        pixels: rows.into_iter().flatten().collect(),
    };

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
