//! Operator-controlled calibration marker.

use crate::surface::Viewport;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Shape drawn at the marker position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    #[default]
    Circle,
    /// Axis-aligned square with half-side `radius`.
    Rectangle,
}

/// Mutable marker geometry of the surface being calibrated.
///
/// Neither the centre nor the radius is ever clamped: a marker may be moved
/// outside its surface and its radius may reach zero or go negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerState {
    /// Centre in surface-local pixels (origin at the bottom-left corner).
    pub center: Point2<f64>,
    pub radius: i32,
}

impl MarkerState {
    /// Initial marker for a viewport: centred, with a radius equal to the
    /// shorter viewport side (not halved).
    pub fn for_viewport(viewport: &Viewport) -> Self {
        Self {
            center: viewport.midpoint(),
            radius: i32::try_from(viewport.shorter_side()).unwrap_or(i32::MAX),
        }
    }

    #[inline]
    pub fn translate(&mut self, offset: Vector2<f64>) {
        self.center += offset;
    }

    #[inline]
    pub fn resize(&mut self, delta: i32) {
        self.radius = self.radius.wrapping_add(delta);
    }
}
