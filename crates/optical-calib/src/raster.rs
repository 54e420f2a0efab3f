//! Pixel math for drawing the marker through an installed viewport and
//! projection onto a window with a top-left origin.

use nalgebra::{Matrix4, Point2, Point3};
use optical_calib_core::Viewport;

/// Axis-aligned pixel rectangle, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Maps surface-local marker coordinates to window pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelMapping {
    viewport: Viewport,
    /// Projection times model transform.
    transform: Matrix4<f64>,
    window_height: u32,
}

impl PixelMapping {
    pub fn new(viewport: Viewport, transform: Matrix4<f64>, window_height: u32) -> Self {
        Self {
            viewport,
            transform,
            window_height,
        }
    }

    /// Window position with a bottom-left origin, before pixel snapping.
    pub fn to_window(&self, p: Point2<f64>) -> Point2<f64> {
        let ndc = self.transform.transform_point(&Point3::new(p.x, p.y, 0.0));
        Point2::new(
            self.viewport.left as f64 + (ndc.x + 1.0) * 0.5 * self.viewport.width as f64,
            self.viewport.bottom as f64 + (ndc.y + 1.0) * 0.5 * self.viewport.height as f64,
        )
    }

    /// Pixel containing `p`, as `(column, row)` with rows counted from the top.
    pub fn to_pixel(&self, p: Point2<f64>) -> Point2<i32> {
        let w = self.to_window(p);
        let row = self.window_height as f64 - 1.0 - w.y.floor();
        Point2::new(w.x.floor() as i32, row as i32)
    }

    /// The installed viewport in window pixels, for clipping.
    pub fn clip_rect(&self) -> PixelRect {
        let top = self.window_height as i64
            - self.viewport.bottom as i64
            - self.viewport.height as i64;
        PixelRect {
            x: self.viewport.left,
            y: top.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            width: self.viewport.width,
            height: self.viewport.height,
        }
    }
}

/// Integer offsets of a circle outline (midpoint algorithm).
///
/// A zero radius yields the centre alone; a negative radius yields nothing.
pub fn circle_offsets(radius: i32) -> Vec<(i32, i32)> {
    if radius < 0 {
        return Vec::new();
    }
    if radius == 0 {
        return vec![(0, 0)];
    }

    let mut out = Vec::new();
    let (mut x, mut y) = (radius, 0);
    let mut err = 1 - radius;
    while x >= y {
        out.extend([
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ]);
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
    out
}

/// Window pixels of a circle outline centred at `center` (surface-local).
pub fn circle_pixels(mapping: &PixelMapping, center: Point2<f64>, radius: i32) -> Vec<Point2<i32>> {
    circle_offsets(radius)
        .into_iter()
        .map(|(dx, dy)| mapping.to_pixel(Point2::new(center.x + dx as f64, center.y + dy as f64)))
        .collect()
}

/// Window rectangle of a square marker with half-side `radius`.
pub fn square_rect(mapping: &PixelMapping, center: Point2<f64>, radius: i32) -> Option<PixelRect> {
    if radius < 0 {
        return None;
    }
    let r = radius as f64;
    let a = mapping.to_pixel(Point2::new(center.x - r, center.y - r));
    let b = mapping.to_pixel(Point2::new(center.x + r, center.y + r));
    let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
    let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));
    Some(PixelRect {
        x: x0,
        y: y0,
        width: (x1 as i64 - x0 as i64 + 1) as u32,
        height: (y1 as i64 - y0 as i64 + 1) as u32,
    })
}
