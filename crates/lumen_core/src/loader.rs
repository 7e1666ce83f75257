//! Scene file loading.
//!
//! Parses a JSON scene file into a [`SceneDescription`] and checks it
//! for the mistakes that would otherwise only show up mid-render.

use std::path::Path;

use thiserror::Error;

use crate::scene::{ObjectDescription, SceneDescription};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Object {index} refers to unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Object {index} has invalid radius {radius}")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("Camera aperture must be non-negative, got {0}")]
    NegativeAperture(f64),
}

/// Result type for loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

impl SceneDescription {
    /// Parse and validate a scene from a JSON string.
    pub fn from_json(source: &str) -> SceneResult<Self> {
        let scene: SceneDescription = serde_json::from_str(source)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Check cross references and numeric invariants.
    pub fn validate(&self) -> SceneResult<()> {
        let aperture = self.camera.aperture();
        // Written this way so NaN is rejected too.
        if !(aperture >= 0.0) {
            return Err(SceneError::NegativeAperture(aperture));
        }

        for (index, object) in self.objects.iter().enumerate() {
            let name = object.material();
            if !self.materials.contains_key(name) {
                return Err(SceneError::UnknownMaterial {
                    index,
                    name: name.to_string(),
                });
            }

            match object {
                ObjectDescription::Sphere { radius, .. } => {
                    if !(*radius > 0.0) {
                        return Err(SceneError::InvalidRadius {
                            index,
                            radius: *radius,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Load a scene file from disk.
///
/// # Example
///
/// ```ignore
/// use lumen_core::load_scene;
///
/// let scene = load_scene("scene.json")?;
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let scene = SceneDescription::from_json(&source)?;

    log::debug!(
        "Loaded {}: {} materials, {} objects",
        path.display(),
        scene.materials.len(),
        scene.objects.len()
    );

    Ok(scene)
}
