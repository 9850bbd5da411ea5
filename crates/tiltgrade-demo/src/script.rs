//! Gesture scripts: recorded stylus sessions replayed one event per frame.
//!
//! Scripts are JSON documents of the form
//! `{ "events": [ { "type": "ModeButtonPressed", "data": "HueSaturation" }, ... ] }`.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tiltgrade_core::{FilteringMode, InputEvent, PointerContact, PointerKind};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureScript {
    pub events: Vec<InputEvent>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read gesture script: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed gesture script: {0}")]
    Json(#[from] serde_json::Error),
}

impl GestureScript {
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Press `mode`, circle the stylus once around the view centre while
    /// leaning it further over, then lift and release.
    pub fn sweep(mode: FilteringMode, view_size: Vec2, steps: usize) -> Self {
        let centre = view_size * 0.5;
        let radius = view_size.min_element() * 0.25;
        let steps = steps.max(1);

        let contact_at = |i: usize| {
            let progress = i as f32 / steps as f32;
            let azimuth = progress * TAU;
            PointerContact {
                kind: PointerKind::Stylus,
                azimuth,
                altitude: FRAC_PI_2 * (1.0 - 0.75 * progress),
                location: centre + Vec2::from_angle(azimuth) * radius,
            }
        };

        let mut events = vec![
            InputEvent::ModeButtonPressed(mode),
            InputEvent::PointerDown(contact_at(0)),
        ];
        events.extend((1..steps).map(|i| InputEvent::PointerMoved(contact_at(i))));
        events.push(InputEvent::PointerUp(PointerKind::Stylus));
        events.push(InputEvent::ModeButtonReleased);

        Self { events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_brackets_contact_with_mode_press() {
        let script = GestureScript::sweep(FilteringMode::GammaExposure, Vec2::new(800.0, 600.0), 8);
        assert_eq!(script.events.len(), 8 + 3);
        assert_eq!(
            script.events[0],
            InputEvent::ModeButtonPressed(FilteringMode::GammaExposure)
        );
        assert!(matches!(script.events[1], InputEvent::PointerDown(_)));
        assert_eq!(script.events.last(), Some(&InputEvent::ModeButtonReleased));
    }

    #[test]
    fn test_parse_script_json() {
        let json = r#"{
            "events": [
                { "type": "ModeButtonPressed", "data": "BrightnessContrast" },
                { "type": "PointerDown", "data": {
                    "kind": "Stylus", "azimuth": 1.0, "altitude": 0.5,
                    "location": [100.0, 200.0] } },
                { "type": "PointerUp", "data": "Stylus" },
                { "type": "ModeButtonReleased" }
            ]
        }"#;
        let script: GestureScript = serde_json::from_str(json).unwrap();
        assert_eq!(script.events.len(), 4);
        match script.events[1] {
            InputEvent::PointerDown(c) => {
                assert_eq!(c.kind, PointerKind::Stylus);
                assert_eq!(c.location, Vec2::new(100.0, 200.0));
            }
            ref other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_bundled_hue_sweep_script_parses() {
        let script: GestureScript =
            serde_json::from_str(include_str!("../scripts/hue_sweep.json")).unwrap();
        assert_eq!(script.events.len(), 12);
        assert_eq!(
            script.events[0],
            InputEvent::ModeButtonPressed(FilteringMode::HueSaturation)
        );
        assert!(matches!(
            script.events[4],
            InputEvent::PointerMoved(PointerContact {
                kind: PointerKind::Finger,
                ..
            })
        ));
        assert_eq!(script.events.last(), Some(&InputEvent::ModeButtonReleased));
    }
}
