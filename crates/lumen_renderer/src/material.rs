//! Material trait for surface scattering.

use crate::sampling::{gen_f64, random_ball};
use lumen_math::{Color, DVec3};
use rand::RngCore;

/// Trait for materials that describe how light interacts with surfaces.
///
/// Materials are shared between objects and never mutated while
/// rendering; the only state they touch is the random stream.
pub trait Material: Send + Sync {
    /// Pick an outgoing direction for a ray arriving along `incoming`
    /// at a surface with the given unit normal.
    fn scatter(&self, incoming: DVec3, normal: DVec3, rng: &mut dyn RngCore) -> DVec3;

    /// Per-channel attenuation applied at each bounce, nominally in [0, 1].
    fn albedo(&self) -> Color;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(&self, _incoming: DVec3, normal: DVec3, rng: &mut dyn RngCore) -> DVec3 {
        let direction = normal + random_ball(1.0, rng);

        // Catch degenerate scatter direction
        if direction.length_squared() < 1e-12 {
            normal
        } else {
            direction
        }
    }

    fn albedo(&self) -> Color {
        self.albedo
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(&self, incoming: DVec3, normal: DVec3, rng: &mut dyn RngCore) -> DVec3 {
        reflect(incoming.normalize(), normal) + random_ball(self.fuzz, rng)
    }

    fn albedo(&self) -> Color {
        self.albedo
    }
}

/// Dielectric (glass) material with optional blur.
#[derive(Debug, Clone)]
pub struct Glass {
    albedo: Color,
    blur: f64,
    /// Index of refraction
    refractive: f64,
}

impl Glass {
    /// Create a new Glass material.
    ///
    /// - `blur`: radius of the random offset added to every outgoing direction
    /// - `refractive`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(albedo: Color, blur: f64, refractive: f64) -> Self {
        Self {
            albedo,
            blur: blur.max(0.0),
            refractive,
        }
    }

    /// Schlick's approximation for reflectance
    fn schlick(cosine: f64, ratio: f64) -> f64 {
        let r0 = ((1.0 - ratio) / (1.0 + ratio)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Glass {
    fn scatter(&self, incoming: DVec3, normal: DVec3, rng: &mut dyn RngCore) -> DVec3 {
        let incoming = incoming.normalize();
        let normal = normal.normalize();
        let cosine = incoming.dot(normal);

        // Negative cosine means the ray is entering through the outer face
        let (facing, ratio, cos_in) = if cosine < 0.0 {
            (normal, 1.0 / self.refractive, -cosine)
        } else {
            (-normal, self.refractive, cosine)
        };

        let cos_out_sq = 1.0 - ratio * ratio * (1.0 - cos_in * cos_in);
        let can_refract = cos_out_sq >= 0.0;

        let chance = gen_f64(rng);
        let blur = random_ball(self.blur, rng);

        if can_refract && chance > Self::schlick(cos_in, self.refractive) {
            ratio * (incoming + cos_in * facing) - cos_out_sq.sqrt() * facing + blur
        } else {
            reflect(incoming, normal) + blur
        }
    }

    fn albedo(&self) -> Color {
        self.albedo
    }
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reflect() {
        let v = DVec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, DVec3::Y), DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_lambertian_scatters_into_hemisphere() {
        let material = Lambertian::new(Color::new(0.5, 0.5, 0.5));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let out = material.scatter(DVec3::new(0.0, -1.0, 0.0), DVec3::Y, &mut rng);
            assert!(out.dot(DVec3::Y) >= 0.0);
        }
        assert_eq!(material.albedo(), Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_metal_perfect_mirror() {
        let material = Metal::new(Color::ONE, 0.0);
        let mut rng = StdRng::seed_from_u64(1);

        let out = material.scatter(DVec3::new(2.0, -2.0, 0.0), DVec3::Y, &mut rng);
        let expected = DVec3::new(1.0, 1.0, 0.0).normalize();
        assert!((out - expected).length() < 1e-12);
    }

    #[test]
    fn test_metal_fuzz_clamped() {
        let material = Metal::new(Color::ONE, 4.0);
        assert_eq!(material.fuzz, 1.0);
    }

    #[test]
    fn test_glass_head_on_passes_straight_through() {
        // At normal incidence with n = 1 reflectance is zero, so every
        // draw refracts and the direction is unchanged.
        let material = Glass::new(Color::ONE, 0.0, 1.0);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..100 {
            let out = material.scatter(DVec3::new(0.0, 0.0, -1.0), DVec3::Z, &mut rng);
            assert!((out - DVec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
        }
    }

    #[test]
    fn test_glass_total_internal_reflection() {
        // Leaving a dense medium at a grazing angle cannot refract.
        let material = Glass::new(Color::ONE, 0.0, 1.5);
        let mut rng = StdRng::seed_from_u64(9);
        let incoming = DVec3::new(1.0, 0.1, 0.0).normalize();

        for _ in 0..100 {
            let out = material.scatter(incoming, DVec3::Y, &mut rng);
            let expected = reflect(incoming, DVec3::Y);
            assert!((out - expected).length() < 1e-12);
        }
    }

    #[test]
    fn test_schlick_bounds() {
        assert!((Glass::schlick(1.0, 1.5) - 0.04).abs() < 1e-12);
        assert!((Glass::schlick(0.0, 1.5) - 1.0).abs() < 1e-12);
    }
}
