//! Stylus angle → filter parameter mapping.
//!
//! # Formula
//! With tilt ratio `t = (π/2 − altitude) / (π/2)` and azimuth unit vector
//! `u = (cos a, sin a)`:
//! ```text
//!   HueSaturation:       hue_angle  = π + a        saturation = 8 × t
//!   BrightnessContrast:  brightness = u.x × t      contrast   = 1 − u.y × t
//!   GammaExposure:       gamma      = 1 + u.x × t  exposure   = −u.y × t
//! ```
//! Only the active mode's pair is written; the other four fields keep their values.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{EulerRot, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::input::sample::PointerSample;
use crate::params::{FilterParameters, FilteringMode};

/// Upper bound of the saturation mapping, reached with the stylus flat.
pub const MAX_SATURATION: f32 = 8.0;

/// How far the stylus leans away from perpendicular: 0 upright, 1 flat.
pub fn tilt_ratio(altitude: f32) -> f32 {
    (FRAC_PI_2 - altitude) / FRAC_PI_2
}

/// Apply one stylus sample to `params` under `mode`.
pub fn map_contact(
    params: FilterParameters,
    sample: &PointerSample,
    mode: FilteringMode,
) -> FilterParameters {
    if !mode.is_active() {
        return params;
    }

    let t = tilt_ratio(sample.altitude);
    let u = Vec2::from_angle(sample.azimuth);
    let mut out = params;

    match mode {
        FilteringMode::HueSaturation => {
            out.hue_angle = PI + sample.azimuth;
            out.saturation = MAX_SATURATION * t;
        }
        FilteringMode::BrightnessContrast => {
            out.brightness = u.x * t;
            out.contrast = 1.0 - u.y * t;
        }
        FilteringMode::GammaExposure => {
            out.gamma = 1.0 + u.x * t;
            out.exposure = -u.y * t;
        }
        FilteringMode::Off => {}
    }

    out
}

/// Pose of the 3D pointer widget that mirrors the stylus.
///
/// The widget is a capsule pivoted at its base, extending along +Y when
/// unrotated. Euler angles are `(pitch, yaw, roll)` applied roll first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorTransform {
    pub position: Vec3,
    pub euler_angles: Vec3,
}

impl IndicatorTransform {
    pub fn from_sample(sample: &PointerSample) -> Self {
        Self {
            position: sample.position.extend(0.0),
            euler_angles: Vec3::new(sample.altitude, 0.0, -sample.azimuth - FRAC_PI_2),
        }
    }

    pub fn rotation(&self) -> Quat {
        let e = self.euler_angles;
        Quat::from_euler(EulerRot::XYZ, e.x, e.y, e.z)
    }

    /// Unit vector along the capsule's axis, from base to tip.
    pub fn direction(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }
}
