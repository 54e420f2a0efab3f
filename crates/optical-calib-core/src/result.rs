use crate::surface::SurfaceKey;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final marker geometry recorded for a completed surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalibrationResult {
    pub key: SurfaceKey,
    pub center: Point2<f64>,
    pub radius: i32,
}

impl fmt::Display for CalibrationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: center=({},{}), radius={}",
            self.key, self.center.x, self.center.y, self.radius
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_pixels_print_without_fraction() {
        let r = CalibrationResult {
            key: SurfaceKey::new(0, 0, 0),
            center: Point2::new(402.0, 300.0),
            radius: 600,
        };
        assert_eq!(
            r.to_string(),
            "viewer0/eye0/surface0: center=(402,300), radius=600"
        );
    }

    #[test]
    fn half_pixels_keep_their_fraction() {
        let r = CalibrationResult {
            key: SurfaceKey::new(1, 1, 0),
            center: Point2::new(400.5, -2.0),
            radius: -1,
        };
        assert_eq!(
            r.to_string(),
            "viewer1/eye1/surface0: center=(400.5,-2), radius=-1"
        );
    }
}
