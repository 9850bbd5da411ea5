//! Filter parameter state and the active filtering mode.
//!
//! `FilterParameters` is the single source of truth for the filter chain.
//! The input mapper writes two fields at a time; the pipeline reads all six.

use serde::{Deserialize, Serialize};

/// Which pair of parameters stylus input currently drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilteringMode {
    /// Stylus input is ignored.
    #[default]
    Off,
    /// Azimuth drives hue angle, tilt drives saturation.
    HueSaturation,
    /// Azimuth x-component drives brightness, y-component drives contrast.
    BrightnessContrast,
    /// Azimuth x-component drives gamma, y-component drives exposure.
    GammaExposure,
}

impl FilteringMode {
    /// The three selectable modes, in button order.
    pub fn selectable() -> &'static [Self] {
        const ALL: [FilteringMode; 3] = [
            FilteringMode::HueSaturation,
            FilteringMode::BrightnessContrast,
            FilteringMode::GammaExposure,
        ];
        &ALL
    }

    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

/// The six scalar inputs to the filter chain.
///
/// Fields are independent: updating one mode's pair never resets another's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterParameters {
    /// Hue rotation in radians. Not normalized; stylus input yields `[π, 3π)`.
    pub hue_angle: f32,
    /// Saturation multiplier. 1.0 = neutral. Stylus input yields `[0, 8]`.
    pub saturation: f32,
    /// Additive brightness offset. 0.0 = neutral.
    pub brightness: f32,
    /// Contrast multiplier around mid-grey. 1.0 = neutral.
    pub contrast: f32,
    /// Gamma exponent. 1.0 = neutral.
    pub gamma: f32,
    /// Exposure adjustment in stops. 0.0 = neutral.
    pub exposure: f32,
}

impl Default for FilterParameters {
    /// Identity parameters: the chain passes the image through unchanged.
    fn default() -> Self {
        Self {
            hue_angle: 0.0,
            saturation: 1.0,
            brightness: 0.0,
            contrast: 1.0,
            gamma: 1.0,
            exposure: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_off() {
        assert_eq!(FilteringMode::default(), FilteringMode::Off);
        assert!(!FilteringMode::Off.is_active());
        assert!(FilteringMode::selectable().iter().all(|m| m.is_active()));
    }

    #[test]
    fn test_default_params_are_neutral() {
        let p = FilterParameters::default();
        assert_eq!(p.hue_angle, 0.0);
        assert_eq!(p.saturation, 1.0);
        assert_eq!(p.brightness, 0.0);
        assert_eq!(p.contrast, 1.0);
        assert_eq!(p.gamma, 1.0);
        assert_eq!(p.exposure, 0.0);
    }

    #[test]
    fn test_params_json_shape() {
        let json = serde_json::to_value(FilterParameters::default()).unwrap();
        assert_eq!(json["saturation"], 1.0);
        assert_eq!(json["exposure"], 0.0);

        let mode: FilteringMode = serde_json::from_str("\"GammaExposure\"").unwrap();
        assert_eq!(mode, FilteringMode::GammaExposure);
    }
}
