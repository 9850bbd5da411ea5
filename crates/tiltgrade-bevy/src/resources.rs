//! Bevy resources for the stylus filter pipeline.

use bevy::prelude::*;
use tiltgrade_core::{FilterController, FilterImage, IndicatorTransform, PresentationLayer};

/// Bevy resource holding the controller.
///
/// `None` until the host app has loaded a source image; input arriving
/// before then is dropped.
#[derive(Resource, Default)]
pub struct FilterState {
    pub controller: Option<FilterController>,
}

impl FilterState {
    pub fn new(controller: FilterController) -> Self {
        Self {
            controller: Some(controller),
        }
    }
}

/// Indicator fade requested by the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorFade {
    /// Target opacity.
    pub opacity: f32,
    pub animated: bool,
    pub duration_seconds: f32,
}

/// What the view currently shows. Systems watch for changes via `Res<PresentationState>`.
#[derive(Resource, Default)]
pub struct PresentationState {
    /// Latest filtered bitmap.
    pub image: Option<FilterImage>,
    pub readout_text: String,
    pub readout_visible: bool,
    pub indicator: Option<IndicatorTransform>,
    pub indicator_fade: IndicatorFade,
    /// Number of bitmaps displayed so far.
    pub frames_displayed: u64,
}

impl PresentationLayer for PresentationState {
    fn set_readout_text(&mut self, text: String) {
        self.readout_text = text;
    }

    fn set_readout_visible(&mut self, visible: bool) {
        self.readout_visible = visible;
    }

    fn set_indicator_transform(&mut self, transform: IndicatorTransform) {
        self.indicator = Some(transform);
    }

    fn set_indicator_opacity(&mut self, value: f32, animated: bool, duration_seconds: f32) {
        self.indicator_fade = IndicatorFade {
            opacity: value,
            animated,
            duration_seconds,
        };
    }

    fn set_displayed_image(&mut self, image: FilterImage) {
        self.image = Some(image);
        self.frames_displayed += 1;
    }
}
