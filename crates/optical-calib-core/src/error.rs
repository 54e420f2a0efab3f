use crate::result::CalibrationResult;

/// Failure reported by a rendering backend while drawing or presenting.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("render backend failed during {stage}: {message}")]
pub struct RenderError {
    pub stage: &'static str,
    pub message: String,
}

impl RenderError {
    pub fn new(stage: &'static str, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }
}

/// Errors surfaced while building or querying a display description.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    #[error("cannot lay out surfaces on a {width}x{height} display")]
    InvalidLayout { width: u32, height: u32 },
}

/// Errors that end a calibration session early.
///
/// Operator aborts are not errors; they are reported through
/// [`crate::SessionOutcome::aborted`].
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// The backend failed while `results` already held every surface
    /// confirmed before the failure.
    #[error("{source} (after {} surface(s) recorded)", .results.len())]
    Render {
        #[source]
        source: RenderError,
        results: Vec<CalibrationResult>,
    },
}

impl SessionError {
    /// Surfaces confirmed before the session failed, in calibration order.
    pub fn partial_results(&self) -> &[CalibrationResult] {
        match self {
            SessionError::Render { results, .. } => results,
        }
    }
}
