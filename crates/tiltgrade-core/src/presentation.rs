//! Outbound surface towards whatever displays the image, readout and indicator.
//!
//! The controller never touches a view directly. It returns a list of
//! [`PresentationUpdate`]s; a [`PresentationLayer`] (a window, an ECS plugin,
//! a test recorder) consumes them in order.

use crate::image::FilterImage;
use crate::input::mapper::IndicatorTransform;

/// Duration of the indicator fade, in seconds.
pub const INDICATOR_FADE_SECONDS: f32 = 0.25;

/// One change the presentation layer must apply.
#[derive(Debug, Clone, PartialEq)]
pub enum PresentationUpdate {
    ReadoutText(String),
    ReadoutVisible(bool),
    IndicatorTransform(IndicatorTransform),
    IndicatorOpacity {
        value: f32,
        animated: bool,
        duration_seconds: f32,
    },
    DisplayedImage(FilterImage),
}

impl PresentationUpdate {
    /// Fade the indicator in or out over [`INDICATOR_FADE_SECONDS`].
    pub fn fade_indicator(visible: bool) -> Self {
        Self::IndicatorOpacity {
            value: if visible { 1.0 } else { 0.0 },
            animated: true,
            duration_seconds: INDICATOR_FADE_SECONDS,
        }
    }

    /// Forward this update to the matching `layer` call.
    pub fn dispatch<L: PresentationLayer + ?Sized>(self, layer: &mut L) {
        match self {
            Self::ReadoutText(text) => layer.set_readout_text(text),
            Self::ReadoutVisible(visible) => layer.set_readout_visible(visible),
            Self::IndicatorTransform(transform) => layer.set_indicator_transform(transform),
            Self::IndicatorOpacity {
                value,
                animated,
                duration_seconds,
            } => layer.set_indicator_opacity(value, animated, duration_seconds),
            Self::DisplayedImage(image) => layer.set_displayed_image(image),
        }
    }
}

/// Receiver of presentation updates.
pub trait PresentationLayer {
    fn set_readout_text(&mut self, text: String);

    fn set_readout_visible(&mut self, visible: bool);

    /// Move the indicator. Not animated.
    fn set_indicator_transform(&mut self, transform: IndicatorTransform);

    fn set_indicator_opacity(&mut self, value: f32, animated: bool, duration_seconds: f32);

    /// Replace the displayed bitmap.
    fn set_displayed_image(&mut self, image: FilterImage);

    /// Apply a batch of updates in order.
    fn apply_all(&mut self, updates: Vec<PresentationUpdate>) {
        for update in updates {
            update.dispatch(self);
        }
    }
}
