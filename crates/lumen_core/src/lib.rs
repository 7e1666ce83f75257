//! Lumen Core - Scene description for the Lumen path tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `CameraDescription`,
//!   `MaterialDescription`, `ObjectDescription`, `RenderConfig`
//! - **Loading**: JSON parsing and validation of scene files
//!
//! Nothing here knows how to trace a ray; `lumen_renderer` turns a
//! description into something renderable.
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scenes/three_spheres.json")?;
//! println!("Loaded {} materials, {} objects",
//!     scene.materials.len(),
//!     scene.objects.len());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, SceneError, SceneResult};
pub use scene::{
    CameraDescription, MaterialDescription, ObjectDescription, RenderConfig, SceneDescription,
};
