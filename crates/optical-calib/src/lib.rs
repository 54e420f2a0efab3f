//! High-level facade for the `optical-calib-*` workspace.
//!
//! This crate provides:
//! - re-exports of the I/O-free calibration core
//! - a built-in side-by-side HMD display layout ([`hmd`])
//! - pixel math for drawing the marker onto a window ([`raster`])
//! - (feature `sdl`) an SDL2 window backend implementing the core's
//!   frame-target and event-source traits
//!
//! ## Quickstart
//!
//! ```no_run
//! # #[cfg(feature = "sdl")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use optical_calib::sdl::{SdlContext, WindowConfig};
//! use optical_calib::{wait_for_startup, CalibrationSession, SideBySideDisplay};
//!
//! let mut ctx = SdlContext::open(&WindowConfig::default())?;
//! let (w, h) = ctx.window_size();
//! let mut display = SideBySideDisplay::new(w, h)?;
//! wait_for_startup(&mut display);
//!
//! let (mut events, mut frame) = ctx.split();
//! let outcome = CalibrationSession::default().run(&mut display, &mut events, &mut frame)?;
//! for line in outcome.report_lines() {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "sdl"))]
//! # fn main() {}
//! ```
//!
//! ## API map
//! - `optical_calib::core`: marker state, projection, input mapping and the
//!   session state machine.
//! - `optical_calib::hmd`: two-eye display layout that stands in for a
//!   display-configuration service.
//! - `optical_calib::raster`: surface-space to window-pixel mapping, circle
//!   and square outlines.
//! - `optical_calib::sdl` (feature `sdl`): window, canvas and event pump.

pub use optical_calib_core as core;

pub mod hmd;
pub mod raster;

#[cfg(feature = "sdl")]
pub mod sdl;

pub use hmd::SideBySideDisplay;
pub use optical_calib_core::{
    wait_for_startup, CalibrationConfig, CalibrationResult, CalibrationSession, MarkerShape,
    SessionOutcome,
};
