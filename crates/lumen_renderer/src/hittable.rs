//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use lumen_math::DVec3;

/// Record of a ray-object intersection.
///
/// A miss is represented by the absence of a record (`None` from
/// [`Hittable::hit`]), so a record always describes a real hit.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub point: DVec3,
    /// Surface normal at intersection, not necessarily unit length
    pub normal: DVec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
}

impl std::fmt::Debug for HitRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRecord")
            .field("t", &self.t)
            .field("point", &self.point)
            .field("normal", &self.normal)
            .finish_non_exhaustive()
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection strictly ahead of `origin`.
    ///
    /// Implementations must keep `t` far enough above zero that a ray
    /// leaving a surface does not immediately hit that same surface.
    fn hit(&self, origin: DVec3, direction: DVec3) -> Option<HitRecord<'_>>;
}
