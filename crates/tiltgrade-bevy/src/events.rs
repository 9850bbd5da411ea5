//! Bevy messages carrying input into, and presentation changes out of, the controller.

use bevy::prelude::*;
use tiltgrade_core::{FilterParameters, InputEvent, PresentationUpdate};

/// Inbound pointer or mode-button event from the windowing layer.
#[derive(Message, Debug, Clone, Copy)]
pub struct StylusInput(pub InputEvent);

/// Outbound change for the image view, readout label or indicator.
#[derive(Message, Debug, Clone)]
pub struct PresentationMessage(pub PresentationUpdate);

/// Fired when stylus input changed the filter parameters.
#[derive(Message)]
pub struct ParamsUpdatedEvent {
    /// The new filter parameters.
    pub params: FilterParameters,
}
