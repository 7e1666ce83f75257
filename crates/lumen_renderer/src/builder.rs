//! Turn a scene description into a renderable [`Scene`].

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{CameraBasis, Glass, Lambertian, Material, Metal, Scene, Sphere};
use lumen_core::{MaterialDescription, ObjectDescription, SceneDescription, SceneError, SceneResult};

/// Instantiate a material.
pub fn build_material(description: &MaterialDescription) -> Arc<dyn Material> {
    match *description {
        MaterialDescription::Lambertian { albedo } => Arc::new(Lambertian::new(albedo)),
        MaterialDescription::Metal { albedo, fuzz } => Arc::new(Metal::new(albedo, fuzz)),
        MaterialDescription::Glass {
            albedo,
            blur,
            refractive,
        } => Arc::new(Glass::new(albedo, blur, refractive)),
    }
}

/// Build a [`Scene`] from a description.
///
/// Each named material is created once and shared by every object that
/// refers to it. The camera basis is resolved for the aspect ratio of
/// the description's render settings.
pub fn build_scene(description: &SceneDescription) -> SceneResult<Scene> {
    description.validate()?;

    let basis = CameraBasis::from_description(&description.camera, description.render.aspect_ratio());
    let mut scene = Scene::new(
        basis.source,
        basis.corner,
        basis.horizon,
        basis.vertical,
        description.camera.aperture(),
    );

    let materials: BTreeMap<&str, Arc<dyn Material>> = description
        .materials
        .iter()
        .map(|(name, material)| (name.as_str(), build_material(material)))
        .collect();

    for (index, object) in description.objects.iter().enumerate() {
        let material = materials
            .get(object.material())
            .cloned()
            .ok_or_else(|| SceneError::UnknownMaterial {
                index,
                name: object.material().to_string(),
            })?;

        match *object {
            ObjectDescription::Sphere { center, radius, .. } => {
                scene.register(Arc::new(Sphere::new(center, radius, material)));
            }
        }
    }

    log::debug!(
        "Built scene with {} materials and {} objects",
        materials.len(),
        scene.len()
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::CameraDescription;
    use lumen_math::{Color, DVec3};

    #[test]
    fn test_build_demo() {
        let description = SceneDescription::demo();
        let scene = build_scene(&description).unwrap();

        assert_eq!(scene.len(), 4);
        assert_eq!(scene.source(), DVec3::new(13.0, 2.0, 3.0));
        assert_eq!(scene.aperture(), 0.05);
    }

    #[test]
    fn test_build_resolves_materials() {
        let description = SceneDescription::demo();
        let scene = build_scene(&description).unwrap();

        // Looking straight down from above hits the ground sphere
        let rec = scene
            .ray(DVec3::new(10.0, 5.0, 10.0), -DVec3::Y)
            .expect("should hit ground");
        assert_eq!(rec.material.albedo(), Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_build_basis_camera() {
        let mut description = SceneDescription::demo();
        description.camera = CameraDescription::Basis {
            source: DVec3::ZERO,
            corner: DVec3::new(-2.0, -1.0, -1.0),
            horizon: DVec3::new(4.0, 0.0, 0.0),
            vertical: DVec3::new(0.0, 2.0, 0.0),
            aperture: 0.0,
        };

        let scene = build_scene(&description).unwrap();
        assert_eq!(scene.corner(), DVec3::new(-2.0, -1.0, -1.0));
        assert_eq!(scene.aperture(), 0.0);
    }

    #[test]
    fn test_build_bundled_scenes() {
        for source in [
            include_str!("../../../scenes/three_spheres.json"),
            include_str!("../../../scenes/depth_of_field.json"),
        ] {
            let description = SceneDescription::from_json(source).unwrap();
            let scene = build_scene(&description).unwrap();
            assert_eq!(scene.len(), 4);
        }
    }

    #[test]
    fn test_build_rejects_unknown_material() {
        let mut description = SceneDescription::demo();
        description.materials.remove("chrome");

        assert!(matches!(
            build_scene(&description),
            Err(SceneError::UnknownMaterial { index: 3, .. })
        ));
    }
}
