//! Pixel-exact orthographic projection for a single surface.

use crate::surface::Viewport;
use nalgebra::{Matrix4, Point2, Point3};
use serde::{Deserialize, Serialize};

/// Fixed depth range of the orthographic volume.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipPlanes {
    pub near: f64,
    pub far: f64,
}

impl Default for ClipPlanes {
    fn default() -> Self {
        Self {
            near: -1.0,
            far: 1.0,
        }
    }
}

/// Orthographic projection mapping `(0,0)..(width,height)` onto normalized
/// device coordinates `[-1, 1]²`.
///
/// Computed once per surface; the matrix is column-major and uses the
/// signed-Z convention (`near -> -1`, `far -> +1`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionMapper {
    matrix: Matrix4<f64>,
}

impl ProjectionMapper {
    pub fn for_viewport(viewport: &Viewport, clip: ClipPlanes) -> Self {
        if viewport.width == 0 || viewport.height == 0 {
            log::warn!(
                "degenerate viewport {}x{}, substituting 1 for the empty dimension",
                viewport.width,
                viewport.height
            );
        }
        let width = viewport.width.max(1) as f64;
        let height = viewport.height.max(1) as f64;
        let depth = if clip.far == clip.near {
            1.0
        } else {
            clip.far - clip.near
        };

        #[rustfmt::skip]
        let matrix = Matrix4::new(
            2.0 / width, 0.0,          0.0,           -1.0,
            0.0,         2.0 / height, 0.0,           -1.0,
            0.0,         0.0,          -2.0 / depth,  -(clip.far + clip.near) / depth,
            0.0,         0.0,          0.0,           1.0,
        );
        Self { matrix }
    }

    /// The projection matrix, ready to be installed by a frame target.
    #[inline]
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Map a surface-local pixel (at depth 0) to normalized device coordinates.
    pub fn project(&self, p: Point2<f64>) -> Point3<f64> {
        self.matrix.transform_point(&Point3::new(p.x, p.y, 0.0))
    }
}
