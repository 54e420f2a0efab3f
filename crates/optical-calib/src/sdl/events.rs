use optical_calib_core::{EventSource, InputEvent, Key};
use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;

/// Physical key to calibration key. Layout-independent, so `=` on the main
/// row acts as plus without shift.
pub fn map_scancode(scancode: Scancode) -> Key {
    match scancode {
        Scancode::Escape => Key::Escape,
        Scancode::Right => Key::Right,
        Scancode::Left => Key::Left,
        Scancode::Up => Key::Up,
        Scancode::Down => Key::Down,
        Scancode::Equals => Key::Plus,
        Scancode::KpPlus => Key::KeypadPlus,
        Scancode::Minus => Key::Minus,
        Scancode::KpMinus => Key::KeypadMinus,
        Scancode::Return => Key::Enter,
        Scancode::KpEnter => Key::KeypadEnter,
        _ => Key::Other,
    }
}

/// SDL event to input event; `None` for everything the session ignores.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match *event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            scancode: Some(scancode),
            repeat,
            ..
        } => Some(InputEvent::KeyDown {
            key: map_scancode(scancode),
            repeat,
        }),
        _ => None,
    }
}

/// Non-blocking view of the SDL event queue.
pub struct SdlEvents<'a> {
    pump: &'a mut EventPump,
}

impl<'a> SdlEvents<'a> {
    pub(crate) fn new(pump: &'a mut EventPump) -> Self {
        Self { pump }
    }
}

impl EventSource for SdlEvents<'_> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        while let Some(event) = self.pump.poll_event() {
            if let Some(input) = map_event(&event) {
                return Some(input);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(scancode: Option<Scancode>, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: None,
            scancode,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    #[test]
    fn both_plus_and_minus_keys_are_distinguished() {
        assert_eq!(map_scancode(Scancode::Equals), Key::Plus);
        assert_eq!(map_scancode(Scancode::KpPlus), Key::KeypadPlus);
        assert_eq!(map_scancode(Scancode::Minus), Key::Minus);
        assert_eq!(map_scancode(Scancode::KpMinus), Key::KeypadMinus);
        assert_eq!(map_scancode(Scancode::Return), Key::Enter);
        assert_eq!(map_scancode(Scancode::KpEnter), Key::KeypadEnter);
        assert_eq!(map_scancode(Scancode::A), Key::Other);
    }

    #[test]
    fn repeat_flag_is_preserved() {
        assert_eq!(
            map_event(&key_down(Some(Scancode::Left), true)),
            Some(InputEvent::KeyDown {
                key: Key::Left,
                repeat: true
            })
        );
    }

    #[test]
    fn quit_and_unrelated_events() {
        assert_eq!(
            map_event(&Event::Quit { timestamp: 0 }),
            Some(InputEvent::Quit)
        );
        assert_eq!(map_event(&key_down(None, false)), None);
        assert_eq!(
            map_event(&Event::KeyUp {
                timestamp: 0,
                window_id: 1,
                keycode: None,
                scancode: Some(Scancode::Escape),
                keymod: Mod::NOMOD,
                repeat: false,
            }),
            None
        );
    }
}
