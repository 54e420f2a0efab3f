//! Keyboard input mapping.
//!
//! Every key-down event maps to exactly one [`Action`]. Repeated key-down
//! events produced while a key is held each act as a single step; there is
//! no acceleration.

use crate::calibrator::SurfaceCalibrator;
use crate::session::SessionStatus;
use nalgebra::Vector2;

/// Keys the calibration tool distinguishes. Everything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Right,
    Left,
    Up,
    Down,
    Plus,
    KeypadPlus,
    Minus,
    KeypadMinus,
    Enter,
    KeypadEnter,
    Other,
}

/// Discrete input event delivered by an event source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown { key: Key, repeat: bool },
    /// Window or system quit request.
    Quit,
}

impl InputEvent {
    /// A fresh (non-repeat) key press.
    pub fn press(key: Key) -> Self {
        InputEvent::KeyDown { key, repeat: false }
    }
}

/// Effect of one input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Move(Vector2<f64>),
    Resize(i32),
    /// Finish the current surface.
    Finish,
    /// Abort the whole session.
    Abort,
    Ignore,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InputDispatcher;

impl InputDispatcher {
    pub fn action_for(event: &InputEvent) -> Action {
        let key = match *event {
            InputEvent::Quit => return Action::Abort,
            InputEvent::KeyDown { key, .. } => key,
        };
        match key {
            Key::Escape => Action::Abort,
            Key::Right => Action::Move(Vector2::new(1.0, 0.0)),
            Key::Left => Action::Move(Vector2::new(-1.0, 0.0)),
            Key::Up => Action::Move(Vector2::new(0.0, 1.0)),
            Key::Down => Action::Move(Vector2::new(0.0, -1.0)),
            Key::Plus | Key::KeypadPlus => Action::Resize(1),
            Key::Minus | Key::KeypadMinus => Action::Resize(-1),
            Key::Enter | Key::KeypadEnter => Action::Finish,
            Key::Other => Action::Ignore,
        }
    }

    /// Apply `event` to the active calibrator and report the resulting
    /// session signal.
    pub fn dispatch(event: &InputEvent, calibrator: &mut SurfaceCalibrator) -> SessionStatus {
        let action = Self::action_for(event);
        log::debug!("{}: {:?} -> {:?}", calibrator.key(), event, action);
        match action {
            Action::Move(offset) => {
                calibrator.move_by(offset);
                SessionStatus::Running
            }
            Action::Resize(delta) => {
                calibrator.change_size(delta);
                SessionStatus::Running
            }
            Action::Finish => SessionStatus::SurfaceDone,
            Action::Abort => SessionStatus::Aborted,
            Action::Ignore => SessionStatus::Running,
        }
    }
}
