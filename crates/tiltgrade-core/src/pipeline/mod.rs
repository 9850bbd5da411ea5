//! Filter pipeline: a fixed four-stage chain over a static source image.
//!
//! ```text
//!   Source ──→ HueAdjust ──→ ColorControls ──→ ExposureAdjust ──→ GammaAdjust ──→ Output
//! ```
//!
//! Each stage consumes the previous stage's output, so the order is part of
//! the contract. The chain is rebuilt from [`FilterParameters`] on every render.

pub mod stages;

use crate::error::PipelineError;
use crate::image::FilterImage;
use crate::params::FilterParameters;

use stages::{ColorControls, ExposureAdjust, FilterStage, GammaAdjust, HueAdjust};

/// An ordered list of filter stages.
pub struct FilterChain {
    stages: Vec<Box<dyn FilterStage>>,
}

impl FilterChain {
    /// Build the standard chain: hue → colour controls → exposure → gamma.
    pub fn from_params(params: &FilterParameters) -> Result<Self, PipelineError> {
        Ok(Self::with_stages(vec![
            Box::new(HueAdjust::new(params.hue_angle)?),
            Box::new(ColorControls::new(
                params.saturation,
                params.brightness,
                params.contrast,
            )?),
            Box::new(ExposureAdjust::new(params.exposure)?),
            Box::new(GammaAdjust::new(params.gamma)?),
        ]))
    }

    /// Build a chain from explicit stages, applied in the given order.
    pub fn with_stages(stages: Vec<Box<dyn FilterStage>>) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run one pixel through every stage. Alpha is untouched.
    pub fn apply_pixel(&self, rgba: [f32; 4]) -> [f32; 4] {
        let rgb = self
            .stages
            .iter()
            .fold([rgba[0], rgba[1], rgba[2]], |rgb, stage| stage.apply(rgb));
        [rgb[0], rgb[1], rgb[2], rgba[3]]
    }

    /// Filter `source` at its native extent.
    pub fn render(&self, source: &FilterImage) -> Result<FilterImage, PipelineError> {
        source.validate()?;

        let pixels = source.pixels.iter().map(|&p| self.apply_pixel(p)).collect();
        Ok(FilterImage {
            width: source.width,
            height: source.height,
            pixels,
            source_bit_depth: source.source_bit_depth,
        })
    }
}

/// Render `source` through the standard chain for `params`.
pub fn render(params: &FilterParameters, source: &FilterImage) -> Result<FilterImage, PipelineError> {
    let chain = FilterChain::from_params(params)?;
    let output = chain.render(source)?;
    tracing::trace!(
        "rendered {}x{} through {:?}",
        output.width,
        output.height,
        chain.stage_names()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_chain_order() {
        let chain = FilterChain::from_params(&FilterParameters::default()).unwrap();
        assert_eq!(
            chain.stage_names(),
            ["hue_adjust", "color_controls", "exposure_adjust", "gamma_adjust"]
        );
    }

    #[test]
    fn test_default_params_pass_through() {
        let source = FilterImage::solid(3, 2, [0.2, 0.5, 0.7, 0.9]);
        let out = render(&FilterParameters::default(), &source).unwrap();
        assert_eq!((out.width, out.height), (3, 2));
        for (a, b) in out.pixels.iter().zip(&source.pixels) {
            for c in 0..4 {
                assert!((a[c] - b[c]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_alpha_is_preserved() {
        let params = FilterParameters {
            exposure: 2.0,
            ..FilterParameters::default()
        };
        let out = render(&params, &FilterImage::solid(1, 1, [0.1, 0.1, 0.1, 0.3])).unwrap();
        assert_eq!(out.pixels[0][3], 0.3);
        assert!((out.pixels[0][0] - 0.4).abs() < 1e-5);
    }

    #[test]
    fn test_invalid_parameter_fails_render() {
        let params = FilterParameters {
            contrast: f32::NAN,
            ..FilterParameters::default()
        };
        let err = render(&params, &FilterImage::solid(1, 1, [0.5; 4])).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidParameter { name: "contrast", .. }
        ));
    }

    #[test]
    fn test_empty_source_fails_render() {
        let err = render(&FilterParameters::default(), &FilterImage::solid(0, 0, [0.0; 4]))
            .unwrap_err();
        assert_eq!(err, PipelineError::EmptyImage);
    }
}
