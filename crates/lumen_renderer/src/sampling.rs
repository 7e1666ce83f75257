//! Random sampling helpers.
//!
//! Every helper takes the random stream explicitly so that a render is
//! reproducible for a fixed seed and call order.

use lumen_math::DVec3;
use rand::{Rng, RngCore};

/// Draw a uniform `f64` in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Sample a point uniformly (by area) in a disk of the given radius.
///
/// Both coordinates are drawn from [0, 1) and rejected until they land
/// inside the unit circle, so the retry loop has no upper bound. The
/// expected number of attempts is 4/pi.
pub fn random_disk(radius: f64, rng: &mut dyn RngCore) -> (f64, f64) {
    loop {
        let x = gen_f64(rng);
        let y = gen_f64(rng);
        if x * x + y * y <= 1.0 {
            return (x * radius, y * radius);
        }
    }
}

/// Sample a point uniformly in a ball of the given radius.
pub fn random_ball(radius: f64, rng: &mut dyn RngCore) -> DVec3 {
    loop {
        let p = DVec3::new(
            gen_f64(rng) * 2.0 - 1.0,
            gen_f64(rng) * 2.0 - 1.0,
            gen_f64(rng) * 2.0 - 1.0,
        );
        if p.length_squared() <= 1.0 {
            return p * radius;
        }
    }
}
