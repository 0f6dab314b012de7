//! Host input mapping
//!
//! Raw key/pointer/touch events land in an [`InputSignal`] latch between
//! frames. The frame driver takes the latch once per frame, so any number of
//! activations inside one frame collapse into a single flap.

use crate::sim::TickInput;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowUp,
    /// `P`
    Pause,
    /// `I` - toggle demo mode
    Idle,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            " " | "Spacebar" => Key::Space,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "p" | "P" => Key::Pause,
            "i" | "I" => Key::Idle,
            _ => Key::Other,
        }
    }
}

/// A raw host input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    PointerDown,
    TouchStart,
}

/// Input latched between frames
#[derive(Debug, Clone, Default)]
pub struct InputSignal {
    activate: bool,
    pause: bool,
    /// Sticky, unlike the one-shot requests
    pub idle_mode: bool,
}

impl InputSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flap (or start the run)
    pub fn request_activate(&mut self) {
        self.activate = true;
    }

    pub fn request_pause(&mut self) {
        // Two toggles in one frame cancel out
        self.pause = !self.pause;
    }

    pub fn toggle_idle(&mut self) {
        self.idle_mode = !self.idle_mode;
        log::info!("Idle mode: {}", self.idle_mode);
    }

    /// Feed a raw event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Space | Key::ArrowUp)
            | InputEvent::PointerDown
            | InputEvent::TouchStart => self.request_activate(),
            InputEvent::KeyDown(Key::Pause) => self.request_pause(),
            InputEvent::KeyDown(Key::Idle) => self.toggle_idle(),
            InputEvent::KeyDown(Key::Other) => {}
        }
    }

    /// Take this frame's input, clearing one-shot requests
    pub fn take(&mut self) -> TickInput {
        let input = TickInput {
            flap: self.activate,
            pause: self.pause,
            idle_mode: self.idle_mode,
        };
        self.activate = false;
        self.pause = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activations_coalesce() {
        let mut signal = InputSignal::new();
        signal.handle(InputEvent::KeyDown(Key::Space));
        signal.handle(InputEvent::PointerDown);
        signal.handle(InputEvent::TouchStart);

        let input = signal.take();
        assert!(input.flap);
        assert!(!input.pause);
        assert!(!signal.take().flap);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("ArrowUp"), Key::ArrowUp);
        assert_eq!(Key::from_dom("P"), Key::Pause);
        assert_eq!(Key::from_dom("Enter"), Key::Other);

        let mut signal = InputSignal::new();
        signal.handle(InputEvent::KeyDown(Key::Other));
        let input = signal.take();
        assert!(!input.flap && !input.pause);
    }

    #[test]
    fn test_pause_and_idle() {
        let mut signal = InputSignal::new();
        signal.handle(InputEvent::KeyDown(Key::Pause));
        assert!(signal.take().pause);

        signal.handle(InputEvent::KeyDown(Key::Pause));
        signal.handle(InputEvent::KeyDown(Key::Pause));
        assert!(!signal.take().pause);

        signal.handle(InputEvent::KeyDown(Key::Idle));
        assert!(signal.take().idle_mode);
        // Idle stays on across frames
        assert!(signal.take().idle_mode);
    }
}
