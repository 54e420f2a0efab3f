//! Built-in display description for a side-by-side head-mounted display.
//!
//! Stands in for a display-configuration service: one viewer, two eyes,
//! one surface per eye, splitting the window into left and right halves.
//! The display reports a successful startup once it has been updated once,
//! which plays the role of the first pose report.

use optical_calib_core::{DisplayConfig, DisplayError, SurfaceGeometry, SurfaceKey, Viewport};

#[derive(Clone, Debug)]
pub struct SideBySideDisplay {
    surfaces: Vec<SurfaceGeometry>,
    updates: u64,
}

impl SideBySideDisplay {
    /// Lay out both eyes on a `width` x `height` window.
    ///
    /// An odd width gives the extra column to the right eye.
    pub fn new(width: u32, height: u32) -> Result<Self, DisplayError> {
        if width < 2 || height == 0 {
            return Err(DisplayError::InvalidLayout { width, height });
        }
        let left_width = width / 2;
        let right_width = width - left_width;
        let left_offset = i32::try_from(left_width)
            .map_err(|_| DisplayError::InvalidLayout { width, height })?;

        let surfaces = vec![
            SurfaceGeometry::new(
                SurfaceKey::new(0, 0, 0),
                Viewport::new(0, 0, left_width, height),
            ),
            SurfaceGeometry::new(
                SurfaceKey::new(0, 1, 0),
                Viewport::new(left_offset, 0, right_width, height),
            ),
        ];
        log::debug!("side-by-side layout for {width}x{height}: {surfaces:?}");

        Ok(Self {
            surfaces,
            updates: 0,
        })
    }
}

impl DisplayConfig for SideBySideDisplay {
    fn check_startup(&self) -> bool {
        self.updates > 0
    }

    fn update(&mut self) {
        self.updates += 1;
    }

    fn surfaces(&self) -> Vec<SurfaceGeometry> {
        self.surfaces.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optical_calib_core::wait_for_startup;

    #[test]
    fn splits_window_into_two_eyes() {
        let display = SideBySideDisplay::new(1920, 1080).expect("layout");
        let surfaces = display.surfaces();
        assert_eq!(surfaces.len(), 2);
        assert_eq!(surfaces[0].key, SurfaceKey::new(0, 0, 0));
        assert_eq!(surfaces[0].viewport, Viewport::new(0, 0, 960, 1080));
        assert_eq!(surfaces[1].key, SurfaceKey::new(0, 1, 0));
        assert_eq!(surfaces[1].viewport, Viewport::new(960, 0, 960, 1080));
    }

    #[test]
    fn odd_width_goes_to_the_right_eye() {
        let display = SideBySideDisplay::new(7, 3).expect("layout");
        let surfaces = display.surfaces();
        assert_eq!(surfaces[0].viewport.width, 3);
        assert_eq!(surfaces[1].viewport, Viewport::new(3, 0, 4, 3));
    }

    #[test]
    fn rejects_degenerate_windows() {
        assert_eq!(
            SideBySideDisplay::new(1, 100).unwrap_err(),
            DisplayError::InvalidLayout {
                width: 1,
                height: 100
            }
        );
        assert!(SideBySideDisplay::new(100, 0).is_err());
    }

    #[test]
    fn ready_after_first_update() {
        let mut display = SideBySideDisplay::new(800, 600).expect("layout");
        assert!(!display.check_startup());
        assert_eq!(wait_for_startup(&mut display), 1);
        assert!(display.check_startup());
        assert_eq!(display.updates, 1);
    }
}
