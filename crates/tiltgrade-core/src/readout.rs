//! Text readout of the two parameters governed by the active mode.

use std::f32::consts::PI;

use crate::params::{FilterParameters, FilteringMode};

/// Gap between the two values of a readout.
pub const SEPARATOR: &str = "      ";

/// Format the readout for `mode`. `None` when the mode is `Off`.
pub fn format(mode: FilteringMode, params: &FilterParameters) -> Option<String> {
    let (first, second) = match mode {
        FilteringMode::Off => return None,
        FilteringMode::HueSaturation => (
            format!("↻Hue: {}°", fixed2(params.hue_angle * 180.0 / PI)),
            format!("∢Saturation: {}", fixed2(params.saturation)),
        ),
        FilteringMode::BrightnessContrast => (
            format!("⇔Brightness: {}", fixed2(params.brightness)),
            format!("⇕Contrast: {}", fixed2(params.contrast)),
        ),
        FilteringMode::GammaExposure => (
            format!("⇔Gamma: {}", fixed2(params.gamma)),
            format!("⇕Exposure: {}", fixed2(params.exposure)),
        ),
    };
    Some(format!("{first}{SEPARATOR}{second}"))
}

/// Two decimal places; values that round to zero print without a sign.
fn fixed2(value: f32) -> String {
    let text = format!("{value:.2}");
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            magnitude.to_string()
        }
        _ => text,
    }
}
