use crate::marker::MarkerShape;
use crate::projection::ClipPlanes;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Rendering parameters shared by every surface of a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    #[serde(default)]
    pub marker_shape: MarkerShape,
    #[serde(default)]
    pub clip: ClipPlanes,
    /// Colour the whole frame is cleared to before surfaces are visited.
    #[serde(default = "default_background")]
    pub background: Rgba,
    #[serde(default = "default_marker_color")]
    pub marker_color: Rgba,
}

fn default_background() -> Rgba {
    Rgba::BLACK
}

fn default_marker_color() -> Rgba {
    Rgba::WHITE
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            marker_shape: MarkerShape::default(),
            clip: ClipPlanes::default(),
            background: default_background(),
            marker_color: default_marker_color(),
        }
    }
}
