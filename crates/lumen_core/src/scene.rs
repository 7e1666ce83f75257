//! Scene description types for Lumen.
//!
//! These types mirror the JSON scene file one to one. They describe a
//! camera, a set of named materials and a list of objects that refer to
//! those materials by name, plus the render settings for the image.

use std::collections::BTreeMap;

use lumen_math::{Color, DVec3};
use serde::{Deserialize, Serialize};

/// Render settings for a single image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Base seed; each pixel row derives its own stream from it
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 225,
            samples_per_pixel: 50,
            max_depth: 20,
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// How the camera is specified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CameraDescription {
    /// Raw image-plane basis: lower-left corner plus horizontal and
    /// vertical spans, seen from `source`.
    Basis {
        source: DVec3,
        corner: DVec3,
        horizon: DVec3,
        vertical: DVec3,
        #[serde(default)]
        aperture: f64,
    },
    /// Positional camera; the basis is derived from the image aspect.
    LookAt {
        look_from: DVec3,
        look_at: DVec3,
        #[serde(default = "default_vup")]
        vup: DVec3,
        /// Vertical field of view in degrees
        vfov: f64,
        /// Distance from camera to plane of perfect focus
        #[serde(default = "default_focus_dist")]
        focus_dist: f64,
        #[serde(default)]
        aperture: f64,
    },
}

fn default_vup() -> DVec3 {
    DVec3::Y
}

fn default_focus_dist() -> f64 {
    1.0
}

fn default_albedo() -> Color {
    Color::ONE
}

impl CameraDescription {
    /// Lens aperture radius.
    pub fn aperture(&self) -> f64 {
        match self {
            Self::Basis { aperture, .. } | Self::LookAt { aperture, .. } => *aperture,
        }
    }
}

/// A surface material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDescription {
    Lambertian {
        albedo: Color,
    },
    Metal {
        albedo: Color,
        /// Roughness, 0.0 = perfect mirror, 1.0 = very rough
        #[serde(default)]
        fuzz: f64,
    },
    Glass {
        #[serde(default = "default_albedo")]
        albedo: Color,
        #[serde(default)]
        blur: f64,
        /// Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
        refractive: f64,
    },
}

/// A hittable object placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDescription {
    Sphere {
        center: DVec3,
        radius: f64,
        /// Name of an entry in `SceneDescription::materials`
        material: String,
    },
}

impl ObjectDescription {
    /// Name of the material this object refers to.
    pub fn material(&self) -> &str {
        match self {
            Self::Sphere { material, .. } => material,
        }
    }
}

/// A complete scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub render: RenderConfig,
    pub camera: CameraDescription,
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDescription>,
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
}

impl SceneDescription {
    /// The built-in demo: a ground sphere with a diffuse, a glass and a
    /// metal sphere side by side.
    pub fn demo() -> Self {
        let mut materials = BTreeMap::new();
        materials.insert(
            "ground".to_string(),
            MaterialDescription::Lambertian {
                albedo: Color::new(0.5, 0.5, 0.5),
            },
        );
        materials.insert(
            "matte".to_string(),
            MaterialDescription::Lambertian {
                albedo: Color::new(0.4, 0.2, 0.1),
            },
        );
        materials.insert(
            "glass".to_string(),
            MaterialDescription::Glass {
                albedo: Color::ONE,
                blur: 0.0,
                refractive: 1.5,
            },
        );
        materials.insert(
            "chrome".to_string(),
            MaterialDescription::Metal {
                albedo: Color::new(0.7, 0.6, 0.5),
                fuzz: 0.0,
            },
        );

        let sphere = |center: DVec3, radius: f64, material: &str| ObjectDescription::Sphere {
            center,
            radius,
            material: material.to_string(),
        };

        Self {
            render: RenderConfig::default(),
            camera: CameraDescription::LookAt {
                look_from: DVec3::new(13.0, 2.0, 3.0),
                look_at: DVec3::ZERO,
                vup: DVec3::Y,
                vfov: 20.0,
                focus_dist: 10.0,
                aperture: 0.05,
            },
            materials,
            objects: vec![
                sphere(DVec3::new(0.0, -1000.0, 0.0), 1000.0, "ground"),
                sphere(DVec3::new(-4.0, 1.0, 0.0), 1.0, "matte"),
                sphere(DVec3::new(0.0, 1.0, 0.0), 1.0, "glass"),
                sphere(DVec3::new(4.0, 1.0, 0.0), 1.0, "chrome"),
            ],
        }
    }
}
