//! Lumen Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer with a thin-lens camera. For every pixel it
//! casts jittered rays from a random point on the lens, follows each
//! ray through a fixed budget of bounces and averages the result.
//!
//! The random stream is always passed in explicitly; see [`Scene`] for
//! the tracing core and [`render`] for the parallel image driver.

mod builder;
mod camera;
mod hittable;
mod material;
mod renderer;
mod sampling;
mod scene;
mod sphere;

pub use builder::{build_material, build_scene};
pub use camera::CameraBasis;
pub use hittable::{HitRecord, Hittable};
pub use material::{Glass, Lambertian, Material, Metal};
pub use renderer::{render, render_row, row_seed, validate, ImageBuffer, RenderError};
pub use sampling::{gen_f64, random_ball, random_disk};
pub use scene::{quantize, sky_gradient, Scene};
pub use sphere::{Sphere, HIT_EPSILON};

/// Re-export render settings and math types used across the API
pub use lumen_core::RenderConfig;
pub use lumen_math::{Color, DVec3, Ray};
