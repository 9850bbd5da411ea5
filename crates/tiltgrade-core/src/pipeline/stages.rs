//! The individual image operations of the filter chain.
//!
//! Every stage is a per-pixel RGB transform; alpha is passed through by the
//! chain. Stages operate on encoded values and do not clamp.

use crate::error::PipelineError;

/// Rec. 709 luma weights used by the colour-controls desaturation.
const LUMA_WEIGHTS: [f32; 3] = [0.2125, 0.7154, 0.0721];

/// One operation in the filter chain.
pub trait FilterStage: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Transform one RGB triple.
    fn apply(&self, rgb: [f32; 3]) -> [f32; 3];
}

fn finite(name: &'static str, value: f32) -> Result<f32, PipelineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PipelineError::InvalidParameter { name, value })
    }
}

// ---------------------------------------------------------------------------
// Hue rotation
// ---------------------------------------------------------------------------

/// Rotate colours about the grey axis.
///
/// Rodrigues rotation with axis `k = (1,1,1)/√3`:
/// ```text
/// v_rot = v×cos(a) + (k × v)×sin(a) + k×(k·v)×(1 − cos(a))
/// ```
/// Greys lie on the axis and are unchanged.
#[derive(Debug, Clone, Copy)]
pub struct HueAdjust {
    cos_a: f32,
    sin_a: f32,
}

impl HueAdjust {
    pub fn new(angle: f32) -> Result<Self, PipelineError> {
        let angle = finite("hue_angle", angle)?;
        Ok(Self {
            cos_a: angle.cos(),
            sin_a: angle.sin(),
        })
    }
}

impl FilterStage for HueAdjust {
    fn name(&self) -> &'static str {
        "hue_adjust"
    }

    fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let k = 1.0 / 3.0_f32.sqrt();
        let dot = k * (rgb[0] + rgb[1] + rgb[2]);
        let cross = [
            k * (rgb[2] - rgb[1]),
            k * (rgb[0] - rgb[2]),
            k * (rgb[1] - rgb[0]),
        ];
        let axial = k * dot * (1.0 - self.cos_a);

        let mut out = [0.0_f32; 3];
        for c in 0..3 {
            out[c] = rgb[c] * self.cos_a + cross[c] * self.sin_a + axial;
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Saturation / brightness / contrast
// ---------------------------------------------------------------------------

/// Saturation, brightness and contrast applied in one pass.
///
/// ```text
/// luma = dot(rgb, LUMA_WEIGHTS)
/// rgb  = mix(luma, rgb, saturation)
/// rgb  = rgb + brightness
/// out  = (rgb − 0.5) × contrast + 0.5
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ColorControls {
    saturation: f32,
    brightness: f32,
    contrast: f32,
}

impl ColorControls {
    pub fn new(saturation: f32, brightness: f32, contrast: f32) -> Result<Self, PipelineError> {
        Ok(Self {
            saturation: finite("saturation", saturation)?,
            brightness: finite("brightness", brightness)?,
            contrast: finite("contrast", contrast)?,
        })
    }
}

impl FilterStage for ColorControls {
    fn name(&self) -> &'static str {
        "color_controls"
    }

    fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let luma = rgb[0] * LUMA_WEIGHTS[0] + rgb[1] * LUMA_WEIGHTS[1] + rgb[2] * LUMA_WEIGHTS[2];

        let mut out = [0.0_f32; 3];
        for c in 0..3 {
            let saturated = luma + (rgb[c] - luma) * self.saturation;
            let brightened = saturated + self.brightness;
            out[c] = (brightened - 0.5) * self.contrast + 0.5;
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Exposure
// ---------------------------------------------------------------------------

/// Exposure adjustment in stops: `out = in × 2^ev`.
#[derive(Debug, Clone, Copy)]
pub struct ExposureAdjust {
    gain: f32,
}

impl ExposureAdjust {
    pub fn new(ev: f32) -> Result<Self, PipelineError> {
        let ev = finite("exposure", ev)?;
        Ok(Self { gain: ev.exp2() })
    }
}

impl FilterStage for ExposureAdjust {
    fn name(&self) -> &'static str {
        "exposure_adjust"
    }

    fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        rgb.map(|c| c * self.gain)
    }
}

// ---------------------------------------------------------------------------
// Gamma
// ---------------------------------------------------------------------------

/// Power curve `out = sign(in) × |in|^power`. Negative inputs keep their sign.
#[derive(Debug, Clone, Copy)]
pub struct GammaAdjust {
    power: f32,
}

impl GammaAdjust {
    pub fn new(power: f32) -> Result<Self, PipelineError> {
        Ok(Self {
            power: finite("gamma", power)?,
        })
    }
}

impl FilterStage for GammaAdjust {
    fn name(&self) -> &'static str {
        "gamma_adjust"
    }

    fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        if (self.power - 1.0).abs() < 1e-7 {
            return rgb;
        }
        rgb.map(|c| c.signum() * c.abs().powf(self.power))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-5;

    fn assert_rgb_eq(actual: [f32; 3], expected: [f32; 3]) {
        for i in 0..3 {
            assert!(
                (actual[i] - expected[i]).abs() < EPSILON,
                "channel {i}: {:.6} vs {:.6}",
                actual[i],
                expected[i]
            );
        }
    }

    #[test]
    fn test_hue_zero_is_identity() {
        let stage = HueAdjust::new(0.0).unwrap();
        assert_rgb_eq(stage.apply([0.8, 0.2, 0.4]), [0.8, 0.2, 0.4]);
    }

    #[test]
    fn test_hue_full_turn_is_identity() {
        let stage = HueAdjust::new(2.0 * PI).unwrap();
        assert_rgb_eq(stage.apply([0.8, 0.2, 0.4]), [0.8, 0.2, 0.4]);
    }

    #[test]
    fn test_hue_third_turn_cycles_primaries() {
        let stage = HueAdjust::new(2.0 * PI / 3.0).unwrap();
        assert_rgb_eq(stage.apply([1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_hue_leaves_grey_alone() {
        let stage = HueAdjust::new(1.3).unwrap();
        assert_rgb_eq(stage.apply([0.4, 0.4, 0.4]), [0.4, 0.4, 0.4]);
    }

    #[test]
    fn test_hue_rejects_nan() {
        assert!(matches!(
            HueAdjust::new(f32::NAN),
            Err(PipelineError::InvalidParameter { name: "hue_angle", .. })
        ));
    }

    #[test]
    fn test_color_controls_neutral_is_identity() {
        let stage = ColorControls::new(1.0, 0.0, 1.0).unwrap();
        assert_rgb_eq(stage.apply([0.3, 0.6, 0.9]), [0.3, 0.6, 0.9]);
    }

    #[test]
    fn test_zero_saturation_produces_grey() {
        let stage = ColorControls::new(0.0, 0.0, 1.0).unwrap();
        let out = stage.apply([0.8, 0.4, 0.2]);
        assert!((out[0] - out[1]).abs() < EPSILON);
        assert!((out[1] - out[2]).abs() < EPSILON);
    }

    #[test]
    fn test_brightness_adds_offset() {
        let stage = ColorControls::new(1.0, 0.25, 1.0).unwrap();
        assert_rgb_eq(stage.apply([0.1, 0.2, 0.3]), [0.35, 0.45, 0.55]);
    }

    #[test]
    fn test_contrast_pivots_on_mid_grey() {
        let stage = ColorControls::new(1.0, 0.0, 0.5).unwrap();
        assert_rgb_eq(stage.apply([0.5, 1.0, 0.0]), [0.5, 0.75, 0.25]);
    }

    #[test]
    fn test_exposure_one_stop_doubles() {
        let stage = ExposureAdjust::new(1.0).unwrap();
        assert_rgb_eq(stage.apply([0.1, 0.2, 0.3]), [0.2, 0.4, 0.6]);
    }

    #[test]
    fn test_exposure_rejects_infinity() {
        assert!(ExposureAdjust::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_gamma_two_squares() {
        let stage = GammaAdjust::new(2.0).unwrap();
        assert_rgb_eq(stage.apply([0.5, -0.5, 1.0]), [0.25, -0.25, 1.0]);
    }
}
