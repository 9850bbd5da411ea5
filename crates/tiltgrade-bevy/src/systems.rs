//! Bevy systems for the stylus filter pipeline.
//!
//! These systems are the ONLY place filter state changes. Input arrives as
//! `StylusInput`, the controller processes it, and presentation changes go
//! back out as `PresentationMessage`s.

use bevy::prelude::*;

use tiltgrade_core::PresentationUpdate;

use crate::events::{ParamsUpdatedEvent, PresentationMessage, StylusInput};
use crate::resources::{FilterState, PresentationState};

/// Startup system: push the initial, unfiltered presentation.
pub fn start_presentation(
    state: Res<FilterState>,
    mut presentation: MessageWriter<PresentationMessage>,
) {
    let Some(ref controller) = state.controller else {
        tracing::warn!("no source image loaded; nothing to present");
        return;
    };

    tracing::info!(
        "presenting {}x{} source",
        controller.source().width,
        controller.source().height
    );
    write_updates(&mut presentation, controller.start());
}

/// Process inbound stylus and mode-button input.
///
/// Fires one `ParamsUpdatedEvent` per frame if any input changed the parameters.
pub fn handle_stylus_input(
    mut inputs: MessageReader<StylusInput>,
    mut state: ResMut<FilterState>,
    mut presentation: MessageWriter<PresentationMessage>,
    mut params_updated: MessageWriter<ParamsUpdatedEvent>,
) {
    let Some(ref mut controller) = state.controller else {
        inputs.clear();
        return;
    };

    let before = *controller.params();
    for StylusInput(event) in inputs.read() {
        let updates = controller.handle(*event);
        write_updates(&mut presentation, updates);
    }

    let after = *controller.params();
    if after != before {
        params_updated.write(ParamsUpdatedEvent { params: after });
    }
}

/// Apply outbound presentation messages to `PresentationState`, in order.
pub fn apply_presentation_updates(
    mut messages: MessageReader<PresentationMessage>,
    mut view: ResMut<PresentationState>,
) {
    for PresentationMessage(update) in messages.read() {
        update.clone().dispatch(&mut *view);
    }
}

/// Diagnostic system that logs parameter updates.
pub fn detect_param_changes(mut updates: MessageReader<ParamsUpdatedEvent>) {
    for ParamsUpdatedEvent { params } in updates.read() {
        tracing::debug!("filter parameters changed: {:?}", params);
    }
}

fn write_updates(writer: &mut MessageWriter<PresentationMessage>, updates: Vec<PresentationUpdate>) {
    for update in updates {
        writer.write(PresentationMessage(update));
    }
}
