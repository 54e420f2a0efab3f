//! Session-level state machine: one surface after another, until every
//! surface is done or the operator aborts.

use crate::calibrator::{FrameTarget, SurfaceCalibrator};
use crate::config::CalibrationConfig;
use crate::error::{RenderError, SessionError};
use crate::input::{InputDispatcher, InputEvent};
use crate::result::CalibrationResult;
use crate::surface::SurfaceGeometry;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Control signal consumed at the top of every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Running,
    /// The current surface is finished; advance to the next one.
    SurfaceDone,
    /// Stop immediately and discard every remaining surface.
    Aborted,
}

/// External display-configuration service.
pub trait DisplayConfig {
    /// `true` once the display has started and received its first pose.
    fn check_startup(&self) -> bool;

    /// Pump the service: refreshes pose data. Must not block the frame loop.
    fn update(&mut self);

    /// All surfaces, in the service's stable enumeration order.
    fn surfaces(&self) -> Vec<SurfaceGeometry>;
}

/// Non-blocking source of operator input.
pub trait EventSource {
    /// Next pending event, or `None` when the queue is empty.
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// Pump `display` until it reports a successful startup.
///
/// Never times out. Returns the number of `update` calls it took.
pub fn wait_for_startup<D: DisplayConfig + ?Sized>(display: &mut D) -> usize {
    log::info!("waiting for the display to fully start up, including the initial pose update");
    let mut updates = 0;
    while !display.check_startup() {
        display.update();
        updates += 1;
    }
    log::info!("display startup status is good after {updates} update(s)");
    updates
}

/// What a finished session produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// One entry per completed surface, in calibration order.
    pub results: Vec<CalibrationResult>,
    pub aborted: bool,
    pub surfaces_total: usize,
}

impl SessionOutcome {
    /// Every surface reached `SurfaceDone`.
    pub fn is_complete(&self) -> bool {
        !self.aborted && self.results.len() == self.surfaces_total
    }

    /// One human-readable line per recorded result.
    pub fn report_lines(&self) -> Vec<String> {
        self.results.iter().map(ToString::to_string).collect()
    }
}

/// Drives one [`SurfaceCalibrator`] per surface through the frame loop.
#[derive(Clone, Debug, Default)]
pub struct CalibrationSession {
    config: CalibrationConfig,
}

impl CalibrationSession {
    pub fn new(config: CalibrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Calibrate every surface `display` enumerates.
    ///
    /// The calibration order is the enumeration order at the time of the
    /// call. An operator abort is not an error: results collected before it
    /// are returned with `aborted = true`. A backend failure ends the session
    /// with an error that still carries those results.
    #[cfg_attr(feature = "tracing", instrument(level = "info", skip_all))]
    pub fn run<D, E, T>(
        &self,
        display: &mut D,
        events: &mut E,
        target: &mut T,
    ) -> Result<SessionOutcome, SessionError>
    where
        D: DisplayConfig + ?Sized,
        E: EventSource + ?Sized,
        T: FrameTarget + ?Sized,
    {
        let order = display.surfaces();
        let surfaces_total = order.len();
        let mut results = Vec::with_capacity(surfaces_total);

        for (index, geometry) in order.into_iter().enumerate() {
            log::info!(
                "calibrating surface {} of {}: {}",
                index + 1,
                surfaces_total,
                geometry.key
            );
            let mut calibrator = SurfaceCalibrator::new(geometry, &self.config);
            let status = match self.calibrate_surface(&mut calibrator, display, events, target) {
                Ok(status) => status,
                Err(source) => {
                    log::error!(
                        "rendering {} failed with {} of {} surface(s) recorded: {source}",
                        geometry.key,
                        results.len(),
                        surfaces_total
                    );
                    return Err(SessionError::Render { source, results });
                }
            };

            if status == SessionStatus::Aborted {
                log::info!(
                    "calibration aborted on {} with {} of {} surface(s) recorded",
                    geometry.key,
                    results.len(),
                    surfaces_total
                );
                return Ok(SessionOutcome {
                    results,
                    aborted: true,
                    surfaces_total,
                });
            }

            let result = calibrator.into_result();
            log::info!("recorded {result}");
            results.push(result);
        }

        log::info!("calibration finished: {surfaces_total} surface(s) recorded");
        Ok(SessionOutcome {
            results,
            aborted: false,
            surfaces_total,
        })
    }

    /// Frame loop for one surface. Returns `SurfaceDone` or `Aborted`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip_all, fields(surface = %calibrator.key()))
    )]
    fn calibrate_surface<D, E, T>(
        &self,
        calibrator: &mut SurfaceCalibrator,
        display: &mut D,
        events: &mut E,
        target: &mut T,
    ) -> Result<SessionStatus, RenderError>
    where
        D: DisplayConfig + ?Sized,
        E: EventSource + ?Sized,
        T: FrameTarget + ?Sized,
    {
        let mut status = SessionStatus::Running;
        loop {
            match status {
                SessionStatus::Running => {}
                done => return Ok(done),
            }
            status = self.frame(calibrator, display, events, target)?;
        }
    }

    fn frame<D, E, T>(
        &self,
        calibrator: &mut SurfaceCalibrator,
        display: &mut D,
        events: &mut E,
        target: &mut T,
    ) -> Result<SessionStatus, RenderError>
    where
        D: DisplayConfig + ?Sized,
        E: EventSource + ?Sized,
        T: FrameTarget + ?Sized,
    {
        let mut status = SessionStatus::Running;
        // Stop at the first terminal signal; anything still queued belongs
        // to the next surface.
        while let Some(event) = events.poll_event() {
            status = InputDispatcher::dispatch(&event, calibrator);
            if status != SessionStatus::Running {
                break;
            }
        }

        display.update();

        target.clear(self.config.background)?;
        for visited in display.surfaces() {
            calibrator.render(&visited, target)?;
        }
        target.present()?;

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowStart {
        updates: usize,
        ready_after: usize,
    }

    impl DisplayConfig for SlowStart {
        fn check_startup(&self) -> bool {
            self.updates >= self.ready_after
        }
        fn update(&mut self) {
            self.updates += 1;
        }
        fn surfaces(&self) -> Vec<SurfaceGeometry> {
            Vec::new()
        }
    }

    #[test]
    fn startup_wait_pumps_until_ready() {
        let mut display = SlowStart {
            updates: 0,
            ready_after: 5,
        };
        assert_eq!(wait_for_startup(&mut display), 5);
        assert_eq!(wait_for_startup(&mut display), 0);
    }

    #[test]
    fn status_wire_names_are_snake_case() {
        let json = serde_json::to_string(&SessionStatus::SurfaceDone).expect("serialize");
        assert_eq!(json, "\"surface_done\"");
    }

    #[test]
    fn outcome_completeness() {
        let outcome = SessionOutcome {
            results: Vec::new(),
            aborted: false,
            surfaces_total: 0,
        };
        assert!(outcome.is_complete());

        let aborted = SessionOutcome {
            aborted: true,
            ..outcome
        };
        assert!(!aborted.is_complete());
    }
}
