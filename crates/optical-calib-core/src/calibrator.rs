//! Calibration state of the one surface currently being aligned.

use crate::config::{CalibrationConfig, Rgba};
use crate::error::RenderError;
use crate::marker::{MarkerShape, MarkerState};
use crate::projection::ProjectionMapper;
use crate::result::CalibrationResult;
use crate::surface::{SurfaceGeometry, SurfaceKey, Viewport};
use nalgebra::{Matrix4, Point2, Vector2};

/// Graphics context a frame is rendered into.
///
/// Calls arrive in frame order: one `clear`, then for the target surface
/// `set_viewport`, `load_projection`, `load_identity_model`, `draw_marker`,
/// and finally `present`.
pub trait FrameTarget {
    /// Clear the whole window, ignoring any installed viewport.
    fn clear(&mut self, color: Rgba) -> Result<(), RenderError>;

    fn set_viewport(&mut self, viewport: &Viewport);

    fn load_projection(&mut self, projection: &Matrix4<f64>);

    /// Reset the model transform so marker coordinates are used as-is.
    fn load_identity_model(&mut self);

    /// Draw the marker in surface-local pixels, through the installed
    /// projection and viewport.
    fn draw_marker(
        &mut self,
        shape: MarkerShape,
        center: Point2<f64>,
        radius: i32,
        color: Rgba,
    ) -> Result<(), RenderError>;

    /// Swap buffers. Blocks until the display's next refresh when vsync is on.
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Owns the live [`MarkerState`] and the precomputed projection of one
/// target surface.
#[derive(Clone, Debug)]
pub struct SurfaceCalibrator {
    geometry: SurfaceGeometry,
    projection: ProjectionMapper,
    marker: MarkerState,
    shape: MarkerShape,
    color: Rgba,
}

impl SurfaceCalibrator {
    pub fn new(geometry: SurfaceGeometry, config: &CalibrationConfig) -> Self {
        let projection = ProjectionMapper::for_viewport(&geometry.viewport, config.clip);
        let marker = MarkerState::for_viewport(&geometry.viewport);
        Self {
            geometry,
            projection,
            marker,
            shape: config.marker_shape,
            color: config.marker_color,
        }
    }

    #[inline]
    pub fn key(&self) -> SurfaceKey {
        self.geometry.key
    }

    #[inline]
    pub fn marker(&self) -> &MarkerState {
        &self.marker
    }

    #[inline]
    pub fn center(&self) -> Point2<f64> {
        self.marker.center
    }

    #[inline]
    pub fn radius(&self) -> i32 {
        self.marker.radius
    }

    pub fn move_by(&mut self, offset: Vector2<f64>) {
        self.marker.translate(offset);
    }

    pub fn change_size(&mut self, delta: i32) {
        self.marker.resize(delta);
    }

    /// Render step for one surface visited during the frame.
    ///
    /// Surfaces other than the target are left untouched: no viewport,
    /// projection or draw call reaches `target` for them.
    pub fn render<T: FrameTarget + ?Sized>(
        &self,
        visited: &SurfaceGeometry,
        target: &mut T,
    ) -> Result<(), RenderError> {
        if !self.geometry.matches(visited) {
            return Ok(());
        }
        // The stored viewport wins over the visited one; it was fixed when
        // this calibrator was built.
        target.set_viewport(&self.geometry.viewport);
        target.load_projection(self.projection.matrix());
        target.load_identity_model();
        target.draw_marker(self.shape, self.marker.center, self.marker.radius, self.color)
    }

    /// Consume the calibrator into the result recorded for its surface.
    pub fn into_result(self) -> CalibrationResult {
        CalibrationResult {
            key: self.geometry.key,
            center: self.marker.center,
            radius: self.marker.radius,
        }
    }
}
