//! Interactive optical calibration for a side-by-side head-mounted display.
//!
//! Opens a borderless window over the HMD, then walks the operator through
//! each eye: arrow keys move the marker, `+`/`-` resize it, Enter confirms
//! the surface and Escape aborts. Confirmed results are printed to stdout,
//! including those confirmed before a rendering failure.

use std::process::ExitCode;

use clap::Parser;
use optical_calib::core::{DisplayError, SessionError, SessionOutcome};
use optical_calib::sdl::{SdlContext, SdlError, WindowConfig};
use optical_calib::{wait_for_startup, CalibrationSession, SideBySideDisplay};
#[cfg(feature = "tracing")]
use tracing_log::LogTracer;

#[derive(Parser)]
#[command(name = "optical-calibration")]
#[command(about = "Align an on-screen marker with the optics of each HMD eye")]
#[command(version)]
struct Cli {}

#[derive(thiserror::Error, Debug)]
enum AppError {
    #[error(transparent)]
    Sdl(#[from] SdlError),
    #[error(transparent)]
    Display(#[from] DisplayError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

fn init_logging() {
    #[cfg(feature = "tracing")]
    {
        let _ = LogTracer::init();
        optical_calib::core::init_tracing(false);
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = optical_calib::core::init_with_level(log::LevelFilter::Info);
    }
}

fn run() -> Result<SessionOutcome, AppError> {
    // Dropped on every return path below, which closes the window.
    let mut ctx = SdlContext::open(&WindowConfig::default())?;
    let (width, height) = ctx.window_size();
    let mut display = SideBySideDisplay::new(width, height)?;

    wait_for_startup(&mut display);

    let (mut events, mut frame) = ctx.split();
    let outcome = CalibrationSession::default().run(&mut display, &mut events, &mut frame)?;
    Ok(outcome)
}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_logging();

    match run() {
        Ok(outcome) => {
            for line in outcome.report_lines() {
                println!("{line}");
            }
            if outcome.aborted {
                log::info!(
                    "aborted: {} of {} surface(s) calibrated",
                    outcome.results.len(),
                    outcome.surfaces_total
                );
            } else {
                log::info!(
                    "{} of {} surface(s) calibrated",
                    outcome.results.len(),
                    outcome.surfaces_total
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let AppError::Session(session) = &err {
                for result in session.partial_results() {
                    println!("{result}");
                }
            }
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
