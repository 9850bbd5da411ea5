//! Tiltgrade Core: domain layer for stylus-driven image filtering.
//!
//! This crate contains the stylus-to-parameter mapping, the four-stage filter
//! pipeline, the readout formatter and the controller state machine that ties
//! them together. No windowing, GPU or ECS dependencies.

pub mod controller;
pub mod error;
pub mod image;
pub mod input;
pub mod params;
pub mod pipeline;
pub mod presentation;
pub mod readout;

// Re-exports for convenience.
pub use controller::{FilterController, InputEvent};
pub use error::PipelineError;
pub use crate::image::{BitDepth, FilterImage};
pub use input::mapper::{IndicatorTransform, map_contact, tilt_ratio};
pub use input::sample::{PointerContact, PointerKind, PointerSample, ReferencePlane};
pub use params::{FilterParameters, FilteringMode};
pub use pipeline::{FilterChain, render};
pub use presentation::{PresentationLayer, PresentationUpdate};
