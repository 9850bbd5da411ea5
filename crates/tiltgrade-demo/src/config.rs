//! Application configuration for the demo.

use std::path::PathBuf;

use glam::Vec2;

/// Environment variable naming the source image. Required.
pub const SOURCE_VAR: &str = "TILTGRADE_SOURCE";
/// Default output path for the final bitmap.
const DEFAULT_OUTPUT: &str = "tiltgrade-out.png";
/// Default view width in points.
const DEFAULT_WIDTH: f32 = 1024.0;
/// Default view height in points.
const DEFAULT_HEIGHT: f32 = 768.0;

/// Runtime configuration for the Tiltgrade demo application.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Source image to filter. `None` when `TILTGRADE_SOURCE` is unset.
    pub source: Option<PathBuf>,
    /// Gesture script to replay. A built-in sweep is used when absent.
    pub script: Option<PathBuf>,
    /// Where the final displayed bitmap is written.
    pub output: PathBuf,
    /// View width in points.
    pub width: f32,
    /// View height in points.
    pub height: f32,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key → value lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            source: lookup(SOURCE_VAR).map(PathBuf::from),
            script: lookup("TILTGRADE_SCRIPT").map(PathBuf::from),
            output: lookup("TILTGRADE_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            width: positive_f32(lookup("TILTGRADE_VIEW_WIDTH")).unwrap_or(DEFAULT_WIDTH),
            height: positive_f32(lookup("TILTGRADE_VIEW_HEIGHT")).unwrap_or(DEFAULT_HEIGHT),
        }
    }

    pub fn view_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

fn positive_f32(value: Option<String>) -> Option<f32> {
    value
        .and_then(|s| s.trim().parse().ok())
        .filter(|v: &f32| v.is_finite() && *v > 0.0)
}
