//! Tiltgrade Bevy Plugin: runs the stylus filter controller inside Bevy's ECS.
//!
//! Provides `TiltGradePlugin` which registers the resources, messages and
//! systems that turn inbound stylus/mode input into presentation state.

pub mod events;
pub mod resources;
pub mod systems;

use bevy::prelude::*;

use events::{ParamsUpdatedEvent, PresentationMessage, StylusInput};
use resources::{FilterState, PresentationState};
use systems::{apply_presentation_updates, detect_param_changes, handle_stylus_input, start_presentation};

/// Main Bevy plugin for stylus-driven filtering.
///
/// Registers resources, messages and systems for:
/// - Holding the `FilterController` as a Bevy resource
/// - Feeding `StylusInput` messages through the controller
/// - Applying the resulting presentation updates to `PresentationState`
///
/// The host app inserts a `FilterState` built from its source image.
pub struct TiltGradePlugin;

impl Plugin for TiltGradePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<StylusInput>()
            .add_message::<PresentationMessage>()
            .add_message::<ParamsUpdatedEvent>()
            .init_resource::<FilterState>()
            .init_resource::<PresentationState>()
            .add_systems(Startup, start_presentation)
            .add_systems(
                Update,
                (
                    handle_stylus_input,
                    apply_presentation_updates.after(handle_stylus_input),
                    detect_param_changes,
                ),
            );
    }
}
