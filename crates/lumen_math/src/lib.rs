// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod ray;
pub use ray::Ray;

/// RGB color with linear channels, nominally in [0, 1].
pub type Color = DVec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dvec3_normalize() {
        let v = DVec3::new(3.0, 0.0, 4.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((v.x - 0.6).abs() < 1e-12);
        assert!((v.z - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_color_component_mul() {
        let a = Color::new(0.5, 1.0, 0.25);
        let b = Color::new(0.5, 0.7, 1.0);
        assert_eq!(a * b, Color::new(0.25, 0.7, 0.25));
    }
}
