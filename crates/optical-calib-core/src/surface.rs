//! Surface identity and pixel geometry as reported by the display service.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel rectangle a surface occupies on the physical display.
///
/// The origin is the bottom-left corner of the window, matching the
/// convention of the display-configuration service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: i32,
    pub bottom: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(left: i32, bottom: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    /// Centre of the viewport in surface-local pixels.
    #[inline]
    pub fn midpoint(&self) -> Point2<f64> {
        Point2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// The smaller of `width` and `height`.
    #[inline]
    pub fn shorter_side(&self) -> u32 {
        self.width.min(self.height)
    }
}

/// Viewer / eye / surface triple identifying one rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceKey {
    pub viewer: u8,
    pub eye: u8,
    pub surface: u8,
}

impl SurfaceKey {
    pub fn new(viewer: u8, eye: u8, surface: u8) -> Self {
        Self {
            viewer,
            eye,
            surface,
        }
    }
}

impl fmt::Display for SurfaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "viewer{}/eye{}/surface{}",
            self.viewer, self.eye, self.surface
        )
    }
}

/// Static description of one surface. Owned by the display service and
/// copied into the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    pub key: SurfaceKey,
    pub viewport: Viewport,
}

impl SurfaceGeometry {
    pub fn new(key: SurfaceKey, viewport: Viewport) -> Self {
        Self { key, viewport }
    }

    /// Whether `other` describes the same surface.
    #[inline]
    pub fn matches(&self, other: &SurfaceGeometry) -> bool {
        self.key == other.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_half_of_each_dimension() {
        let vp = Viewport::new(960, 0, 960, 540);
        assert_eq!(vp.midpoint(), Point2::new(480.0, 270.0));
        assert_eq!(vp.shorter_side(), 540);
    }

    #[test]
    fn odd_dimensions_keep_the_half_pixel() {
        let vp = Viewport::new(0, 0, 801, 3);
        assert_eq!(vp.midpoint(), Point2::new(400.5, 1.5));
    }

    #[test]
    fn matching_ignores_viewport() {
        let a = SurfaceGeometry::new(SurfaceKey::new(0, 1, 0), Viewport::new(0, 0, 10, 10));
        let b = SurfaceGeometry::new(SurfaceKey::new(0, 1, 0), Viewport::new(5, 5, 20, 20));
        let c = SurfaceGeometry::new(SurfaceKey::new(0, 0, 0), Viewport::new(0, 0, 10, 10));
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn key_display_names_all_three_ids() {
        assert_eq!(SurfaceKey::new(0, 1, 2).to_string(), "viewer0/eye1/surface2");
    }
}
