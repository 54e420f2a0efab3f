use super::{SdlError, SdlEvents, SdlFrame, SdlResultExt};
use sdl2::render::WindowCanvas;
use sdl2::EventPump;

/// Application id reported to the window manager.
pub const APP_ID: &str = "org.opticalcalib.OpticalCalibration";

/// Window placement for the calibration display.
#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub borderless: bool,
    /// Pace presentation to the display refresh.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Optical Calibration".to_string(),
            x: 0,
            y: 0,
            width: 1920,
            height: 1080,
            borderless: true,
            vsync: true,
        }
    }
}

/// SDL library, window canvas and event pump, acquired together and
/// released together when dropped.
pub struct SdlContext {
    canvas: WindowCanvas,
    event_pump: EventPump,
    // Declared last so it drops after the canvas and pump.
    _sdl: sdl2::Sdl,
}

impl SdlContext {
    pub fn open(config: &WindowConfig) -> Result<Self, SdlError> {
        if !sdl2::hint::set("SDL_APP_ID", APP_ID) {
            log::debug!("SDL_APP_ID hint not accepted");
        }
        let sdl = sdl2::init().sdl_context("SDL init failed")?;
        let video = sdl.video().sdl_context("video subsystem init failed")?;
        // Keep the cursor off the marker.
        sdl.mouse().show_cursor(false);

        let mut builder = video.window(&config.title, config.width, config.height);
        builder.position(config.x, config.y);
        if config.borderless {
            builder.borderless();
        }
        let window = builder.build()?;

        let mut canvas = window.into_canvas().accelerated();
        if config.vsync {
            canvas = canvas.present_vsync();
        }
        let canvas = canvas.build()?;

        let event_pump = sdl.event_pump().sdl_context("failed to get event pump")?;

        let (w, h) = canvas.window().drawable_size();
        log::info!(
            "opened {}x{} window at ({}, {}) on {}",
            w,
            h,
            config.x,
            config.y,
            video.current_video_driver()
        );

        Ok(Self {
            canvas,
            event_pump,
            _sdl: sdl,
        })
    }

    /// Drawable size in pixels, the same size the frame target flips rows
    /// and clips against. Differs from the window size on high-DPI displays.
    pub fn window_size(&self) -> (u32, u32) {
        self.canvas.window().drawable_size()
    }

    /// Borrow the event source and the frame target at the same time.
    pub fn split(&mut self) -> (SdlEvents<'_>, SdlFrame<'_>) {
        (
            SdlEvents::new(&mut self.event_pump),
            SdlFrame::new(&mut self.canvas),
        )
    }
}
