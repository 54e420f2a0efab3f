//! Per-surface optical alignment for head-mounted displays.
//!
//! An operator walks through every rendering surface (one per viewer/eye
//! combination), moves and resizes an on-screen marker with the keyboard
//! until it lines up with the optics, and confirms. The final marker
//! geometry of each confirmed surface is recorded.
//!
//! This crate holds the I/O-free part: marker state, the pixel-exact
//! projection, key mapping and the session state machine. The display
//! service, the event queue and the graphics context are reached through
//! the [`DisplayConfig`], [`EventSource`] and [`FrameTarget`] traits.

mod calibrator;
mod config;
mod error;
mod input;
mod logger;
mod marker;
mod projection;
mod result;
mod session;
mod surface;

pub use calibrator::{FrameTarget, SurfaceCalibrator};
pub use config::{CalibrationConfig, Rgba};
pub use error::{DisplayError, RenderError, SessionError};
pub use input::{Action, InputDispatcher, InputEvent, Key};
pub use marker::{MarkerShape, MarkerState};
pub use projection::{ClipPlanes, ProjectionMapper};
pub use result::CalibrationResult;
pub use session::{
    wait_for_startup, CalibrationSession, DisplayConfig, EventSource, SessionOutcome,
    SessionStatus,
};
pub use surface::{SurfaceGeometry, SurfaceKey, Viewport};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
