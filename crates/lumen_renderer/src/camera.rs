//! Camera basis for ray generation.
//!
//! The tracer only knows a camera as a source point plus an image plane
//! (lower-left corner, horizontal span, vertical span). This module
//! derives that basis from a positional camera description.

use lumen_core::CameraDescription;
use lumen_math::DVec3;

/// Image-plane basis seen from a source point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub source: DVec3,
    /// Lower-left corner of the image plane
    pub corner: DVec3,
    /// Full horizontal extent of the image plane
    pub horizon: DVec3,
    /// Full vertical extent of the image plane, pointing up
    pub vertical: DVec3,
}

impl CameraBasis {
    /// Derive the basis for a camera at `look_from` aimed at `look_at`.
    ///
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect`: image width over height
    /// - `focus_dist`: distance from the source to the image plane, which
    ///   is also the plane of perfect focus
    pub fn look_at(
        look_from: DVec3,
        look_at: DVec3,
        vup: DVec3,
        vfov: f64,
        aspect: f64,
        focus_dist: f64,
    ) -> Self {
        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect * half_height;

        // Calculate camera basis vectors
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let corner = look_from - focus_dist * (half_width * u + half_height * v + w);

        Self {
            source: look_from,
            corner,
            horizon: 2.0 * half_width * focus_dist * u,
            vertical: 2.0 * half_height * focus_dist * v,
        }
    }

    /// Resolve a camera description for an image of the given aspect.
    pub fn from_description(camera: &CameraDescription, aspect: f64) -> Self {
        match *camera {
            CameraDescription::Basis {
                source,
                corner,
                horizon,
                vertical,
                ..
            } => Self {
                source,
                corner,
                horizon,
                vertical,
            },
            CameraDescription::LookAt {
                look_from,
                look_at,
                vup,
                vfov,
                focus_dist,
                ..
            } => Self::look_at(look_from, look_at, vup, vfov, aspect, focus_dist),
        }
    }
}
