//! SDL2 backend: window and canvas lifetime, event mapping and marker
//! drawing.

mod canvas;
mod context;
mod events;

pub use canvas::SdlFrame;
pub use context::{SdlContext, WindowConfig, APP_ID};
pub use events::{map_event, map_scancode, SdlEvents};

/// Failures while bringing up SDL, the window or its canvas.
#[derive(thiserror::Error, Debug)]
pub enum SdlError {
    #[error("{context}: {message}")]
    Sdl {
        context: &'static str,
        message: String,
    },
    #[error("failed to create window: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),
    #[error("failed to create canvas: {0}")]
    Canvas(#[from] sdl2::IntegerOrSdlError),
}

/// Attach context to SDL's stringly-typed errors.
pub(crate) trait SdlResultExt<T> {
    fn sdl_context(self, context: &'static str) -> Result<T, SdlError>;
}

impl<T> SdlResultExt<T> for Result<T, String> {
    fn sdl_context(self, context: &'static str) -> Result<T, SdlError> {
        self.map_err(|message| SdlError::Sdl { context, message })
    }
}
