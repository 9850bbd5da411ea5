//! Pointer contacts as delivered by the windowing layer, and their projection
//! onto the indicator's reference plane.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kind of device that produced a contact. Only `Stylus` drives the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    /// Precision pointer reporting azimuth and altitude.
    Stylus,
    /// Plain finger contact.
    Finger,
    /// Indirect pointer such as a mouse or trackpad.
    Indirect,
}

impl PointerKind {
    pub const fn is_precision(&self) -> bool {
        matches!(self, Self::Stylus)
    }
}

/// One contact in view space, before hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerContact {
    pub kind: PointerKind,
    /// Azimuth in radians, `[0, 2π)`.
    pub azimuth: f32,
    /// Altitude in radians, `[0, π/2]`. π/2 is perpendicular to the surface.
    pub altitude: f32,
    /// Location in view points, origin top-left, y down.
    pub location: Vec2,
}

impl PointerContact {
    /// Hit-test the contact against `plane`. `None` when the location misses it.
    pub fn project(&self, plane: &ReferencePlane, view_size: Vec2) -> Option<PointerSample> {
        let position = plane.hit_test(self.location, view_size)?;
        Some(PointerSample {
            azimuth: self.azimuth,
            altitude: self.altitude,
            position,
        })
    }
}

/// First contact of a touch batch. Additional simultaneous contacts are ignored.
pub fn primary_contact(contacts: &[PointerContact]) -> Option<&PointerContact> {
    contacts.first()
}

/// A stylus sample with its location already projected onto the reference plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Azimuth in radians, `[0, 2π)`.
    pub azimuth: f32,
    /// Altitude in radians, `[0, π/2]`.
    pub altitude: f32,
    /// Hit position in the plane's local coordinates.
    pub position: Vec2,
}

/// Invisible plane facing an orthographic camera; stylus locations are
/// projected onto it to position the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePlane {
    /// Half of the visible height in plane units.
    pub ortho_scale: f32,
    /// Half of the plane's side length. Hits outside it miss.
    pub half_extent: f32,
}

impl Default for ReferencePlane {
    fn default() -> Self {
        Self {
            ortho_scale: 1.0,
            half_extent: 10.0,
        }
    }
}

impl ReferencePlane {
    /// Map a view-space location to plane coordinates (y up, origin at centre).
    pub fn hit_test(&self, location: Vec2, view_size: Vec2) -> Option<Vec2> {
        if view_size.x <= 0.0 || view_size.y <= 0.0 {
            return None;
        }

        let ndc = Vec2::new(
            2.0 * location.x / view_size.x - 1.0,
            1.0 - 2.0 * location.y / view_size.y,
        );
        let aspect = view_size.x / view_size.y;
        let hit = Vec2::new(ndc.x * self.ortho_scale * aspect, ndc.y * self.ortho_scale);

        (hit.abs().max_element() <= self.half_extent).then_some(hit)
    }
}
