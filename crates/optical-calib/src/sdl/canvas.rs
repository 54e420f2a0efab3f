use crate::raster::{circle_pixels, square_rect, PixelMapping, PixelRect};
use nalgebra::{Matrix4, Point2};
use optical_calib_core::{FrameTarget, MarkerShape, RenderError, Rgba, Viewport};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::WindowCanvas;

fn color(c: Rgba) -> Color {
    Color::RGBA(c.r, c.g, c.b, c.a)
}

fn rect(r: PixelRect) -> Rect {
    Rect::new(r.x, r.y, r.width, r.height)
}

/// [`FrameTarget`] over an SDL window canvas.
///
/// SDL's renderer has no transform stack, so the installed viewport,
/// projection and model matrix are kept here and applied per pixel.
pub struct SdlFrame<'a> {
    canvas: &'a mut WindowCanvas,
    viewport: Option<Viewport>,
    projection: Matrix4<f64>,
    model: Matrix4<f64>,
}

impl<'a> SdlFrame<'a> {
    pub(crate) fn new(canvas: &'a mut WindowCanvas) -> Self {
        Self {
            canvas,
            viewport: None,
            projection: Matrix4::identity(),
            model: Matrix4::identity(),
        }
    }

    fn window_height(&self) -> u32 {
        self.canvas.window().drawable_size().1
    }

    fn mapping(&self) -> Result<PixelMapping, RenderError> {
        let viewport = self
            .viewport
            .ok_or_else(|| RenderError::new("draw", "no viewport installed"))?;
        Ok(PixelMapping::new(
            viewport,
            self.projection * self.model,
            self.window_height(),
        ))
    }
}

impl FrameTarget for SdlFrame<'_> {
    fn clear(&mut self, background: Rgba) -> Result<(), RenderError> {
        self.canvas.set_clip_rect(None::<Rect>);
        self.viewport = None;
        self.canvas.set_draw_color(color(background));
        self.canvas.clear();
        Ok(())
    }

    fn set_viewport(&mut self, viewport: &Viewport) {
        self.viewport = Some(*viewport);
        let clip = PixelMapping::new(*viewport, Matrix4::identity(), self.window_height()).clip_rect();
        self.canvas.set_clip_rect(rect(clip));
    }

    fn load_projection(&mut self, projection: &Matrix4<f64>) {
        self.projection = *projection;
    }

    fn load_identity_model(&mut self) {
        self.model = Matrix4::identity();
    }

    fn draw_marker(
        &mut self,
        shape: MarkerShape,
        center: Point2<f64>,
        radius: i32,
        marker_color: Rgba,
    ) -> Result<(), RenderError> {
        let mapping = self.mapping()?;
        self.canvas.set_draw_color(color(marker_color));
        match shape {
            MarkerShape::Circle => {
                let points: Vec<Point> = circle_pixels(&mapping, center, radius)
                    .into_iter()
                    .map(|p| Point::new(p.x, p.y))
                    .collect();
                if points.is_empty() {
                    return Ok(());
                }
                self.canvas
                    .draw_points(&points[..])
                    .map_err(|e| RenderError::new("draw", e))
            }
            MarkerShape::Rectangle => match square_rect(&mapping, center, radius) {
                Some(r) => self
                    .canvas
                    .draw_rect(rect(r))
                    .map_err(|e| RenderError::new("draw", e)),
                None => Ok(()),
            },
        }
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.canvas.present();
        Ok(())
    }
}
