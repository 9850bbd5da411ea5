//! Event-driven controller: mode selection, contact lifecycle and re-rendering.
//!
//! All state changes happen here, synchronously, in response to an
//! [`InputEvent`]. Each call returns the [`PresentationUpdate`]s the view must
//! apply, in order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::image::FilterImage;
use crate::input::mapper::{IndicatorTransform, map_contact};
use crate::input::sample::{PointerContact, PointerKind, ReferencePlane, primary_contact};
use crate::params::{FilterParameters, FilteringMode};
use crate::pipeline;
use crate::presentation::PresentationUpdate;
use crate::readout;

/// Inbound events from the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum InputEvent {
    PointerDown(PointerContact),
    PointerMoved(PointerContact),
    PointerUp(PointerKind),
    ModeButtonPressed(FilteringMode),
    ModeButtonReleased,
}

impl InputEvent {
    /// Build a down event from a touch batch, keeping only the first contact.
    pub fn pointer_down(contacts: &[PointerContact]) -> Option<Self> {
        primary_contact(contacts).copied().map(Self::PointerDown)
    }

    /// Build a move event from a touch batch, keeping only the first contact.
    pub fn pointer_moved(contacts: &[PointerContact]) -> Option<Self> {
        primary_contact(contacts).copied().map(Self::PointerMoved)
    }
}

/// Owns the filter state for one source image.
#[derive(Debug, Clone)]
pub struct FilterController {
    source: FilterImage,
    params: FilterParameters,
    mode: FilteringMode,
    contact_active: bool,
    plane: ReferencePlane,
    view_size: Vec2,
}

impl FilterController {
    /// Create a controller for `source`, shown in a view of `view_size` points.
    ///
    /// Fails if the source image is empty or malformed; there is nothing to
    /// show without one.
    pub fn new(source: FilterImage, view_size: Vec2) -> Result<Self, PipelineError> {
        source.validate()?;
        Ok(Self {
            source,
            params: FilterParameters::default(),
            mode: FilteringMode::Off,
            contact_active: false,
            plane: ReferencePlane::default(),
            view_size,
        })
    }

    pub fn with_plane(mut self, plane: ReferencePlane) -> Self {
        self.plane = plane;
        self
    }

    pub fn params(&self) -> &FilterParameters {
        &self.params
    }

    pub fn mode(&self) -> FilteringMode {
        self.mode
    }

    /// Whether a stylus contact is currently down.
    pub fn contact_active(&self) -> bool {
        self.contact_active
    }

    pub fn source(&self) -> &FilterImage {
        &self.source
    }

    /// Initial presentation: hidden readout and indicator, unfiltered render.
    pub fn start(&self) -> Vec<PresentationUpdate> {
        let mut updates = vec![
            PresentationUpdate::ReadoutVisible(false),
            PresentationUpdate::IndicatorOpacity {
                value: 0.0,
                animated: false,
                duration_seconds: 0.0,
            },
        ];
        updates.extend(self.render_update());
        updates
    }

    pub fn handle(&mut self, event: InputEvent) -> Vec<PresentationUpdate> {
        match event {
            InputEvent::PointerDown(contact) => self.pointer_down(&contact),
            InputEvent::PointerMoved(contact) => self.pointer_moved(&contact),
            InputEvent::PointerUp(kind) => self.pointer_up(kind),
            InputEvent::ModeButtonPressed(mode) => self.set_mode(mode),
            InputEvent::ModeButtonReleased => self.clear_mode(),
        }
    }

    /// Select the parameter pair stylus input drives.
    pub fn set_mode(&mut self, mode: FilteringMode) -> Vec<PresentationUpdate> {
        if !mode.is_active() {
            return self.clear_mode();
        }

        tracing::debug!("filtering mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;

        let mut updates = vec![PresentationUpdate::ReadoutVisible(true)];
        updates.extend(readout::format(mode, &self.params).map(PresentationUpdate::ReadoutText));
        if self.contact_active {
            updates.push(PresentationUpdate::fade_indicator(true));
        }
        updates
    }

    /// Return to `Off`. Parameters keep their values.
    pub fn clear_mode(&mut self) -> Vec<PresentationUpdate> {
        tracing::debug!("filtering mode {:?} -> Off", self.mode);
        self.mode = FilteringMode::Off;

        vec![
            PresentationUpdate::ReadoutVisible(false),
            PresentationUpdate::fade_indicator(false),
        ]
    }

    fn accepts(&self, kind: PointerKind) -> bool {
        self.mode.is_active() && kind.is_precision()
    }

    fn pointer_down(&mut self, contact: &PointerContact) -> Vec<PresentationUpdate> {
        if !self.accepts(contact.kind) {
            tracing::trace!("ignoring {:?} down in mode {:?}", contact.kind, self.mode);
            return Vec::new();
        }

        tracing::debug!("stylus contact began");
        self.contact_active = true;

        let mut updates = self.track_contact(contact);
        updates.push(PresentationUpdate::fade_indicator(true));
        updates
    }

    fn pointer_moved(&mut self, contact: &PointerContact) -> Vec<PresentationUpdate> {
        if !self.accepts(contact.kind) {
            return Vec::new();
        }
        self.track_contact(contact)
    }

    fn pointer_up(&mut self, kind: PointerKind) -> Vec<PresentationUpdate> {
        if !kind.is_precision() {
            tracing::trace!("ignoring {:?} up", kind);
            return Vec::new();
        }

        tracing::debug!("stylus contact ended");
        self.contact_active = false;
        vec![PresentationUpdate::fade_indicator(false)]
    }

    /// Move the indicator, update the active parameter pair and re-render.
    fn track_contact(&mut self, contact: &PointerContact) -> Vec<PresentationUpdate> {
        let Some(sample) = contact.project(&self.plane, self.view_size) else {
            tracing::debug!("contact at {} missed the reference plane", contact.location);
            return Vec::new();
        };

        self.params = map_contact(self.params, &sample, self.mode);

        let mut updates = vec![PresentationUpdate::IndicatorTransform(
            IndicatorTransform::from_sample(&sample),
        )];
        updates.extend(readout::format(self.mode, &self.params).map(PresentationUpdate::ReadoutText));
        updates.extend(self.render_update());
        updates
    }

    /// Render the current parameters. Failures are logged and skip the display update.
    fn render_update(&self) -> Option<PresentationUpdate> {
        match pipeline::render(&self.params, &self.source) {
            Ok(image) => Some(PresentationUpdate::DisplayedImage(image)),
            Err(e) => {
                tracing::error!("filter render failed: {e}");
                None
            }
        }
    }
}
