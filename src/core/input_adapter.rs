use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use super::controller::{Controller, Intent, MotionFlags};

/// Fixed key table. Several keys may drive the same intent.
const BINDINGS: [(KeyCode, Intent); 15] = [
    (KeyCode::KeyW, Intent::MoveForward),
    (KeyCode::ArrowUp, Intent::MoveForward),
    (KeyCode::KeyS, Intent::MoveBackward),
    (KeyCode::ArrowDown, Intent::MoveBackward),
    (KeyCode::KeyA, Intent::MoveLeft),
    (KeyCode::KeyD, Intent::MoveRight),
    (KeyCode::ArrowLeft, Intent::YawLeft),
    (KeyCode::KeyQ, Intent::YawLeft),
    (KeyCode::ArrowRight, Intent::YawRight),
    (KeyCode::KeyE, Intent::YawRight),
    (KeyCode::KeyR, Intent::PitchUp),
    (KeyCode::PageUp, Intent::PitchUp),
    (KeyCode::KeyF, Intent::PitchDown),
    (KeyCode::PageDown, Intent::PitchDown),
    (KeyCode::KeyP, Intent::ToggleFreeze),
];

/// Turns winit keyboard events into motion flags.
/// Bound to one window, or to every window when unbound.
#[derive(Debug, Clone, Default)]
pub struct KeyboardTracker {
    flags: MotionFlags,
    frozen: bool,
    surface: Option<WindowId>,
}

impl KeyboardTracker {
    /// Tracker listening to every window
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker that ignores events from any window but `window`
    pub fn bound_to(window: WindowId) -> Self {
        Self {
            surface: Some(window),
            ..Self::default()
        }
    }

    pub fn surface(&self) -> Option<WindowId> {
        self.surface
    }

    /// Intent driven by `code`, if any
    pub fn binding(code: KeyCode) -> Option<Intent> {
        BINDINGS
            .iter()
            .find(|(key, _)| *key == code)
            .map(|&(_, intent)| intent)
    }

    /// Every key bound to `intent`
    pub fn keys_for(intent: Intent) -> Vec<KeyCode> {
        BINDINGS
            .iter()
            .filter(|&&(_, bound)| bound == intent)
            .map(|&(key, _)| key)
            .collect()
    }

    /// Applies one key transition. Returns the intent it touched.
    /// Toggles fire on fresh presses only, never on release or auto-repeat.
    pub fn handle_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) -> Option<Intent> {
        let intent = Self::binding(code)?;
        if intent.is_toggle() {
            if state.is_pressed() && !repeat {
                self.frozen = !self.frozen;
                log::debug!("freeze toggled: {}", self.frozen);
            }
        } else {
            self.flags.set(intent, state.is_pressed());
        }
        Some(intent)
    }

    pub fn press(&mut self, code: KeyCode) -> Option<Intent> {
        self.handle_key(code, ElementState::Pressed, false)
    }

    pub fn release(&mut self, code: KeyCode) -> Option<Intent> {
        self.handle_key(code, ElementState::Released, false)
    }

    /// Feeds a winit window event. Returns true when the event changed tracker state.
    pub fn process_event(&mut self, window: WindowId, event: &WindowEvent) -> bool {
        if self.surface.is_some_and(|bound| bound != window) {
            return false;
        }
        match event {
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => self.handle_key(code, event.state, event.repeat).is_some(),
                PhysicalKey::Unidentified(_) => false,
            },
            WindowEvent::Focused(false) => {
                self.release_all();
                true
            }
            _ => false,
        }
    }

    /// Drops every held flag. Freeze state is kept.
    pub fn release_all(&mut self) {
        if self.flags != MotionFlags::default() {
            log::debug!("releasing held intents: {:?}", self.flags.active_intents());
        }
        self.flags.clear();
    }

    pub fn flags(&self) -> MotionFlags {
        self.flags
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl Controller for KeyboardTracker {
    fn is_active(&self, intent: Intent) -> bool {
        self.flags.is_active(intent)
    }
}

/// Parses a winit key code name such as `"KeyW"` or `"ArrowLeft"`
pub fn parse_key_code(name: &str) -> Option<KeyCode> {
    let code = match name {
        "KeyW" => KeyCode::KeyW,
        "KeyA" => KeyCode::KeyA,
        "KeyS" => KeyCode::KeyS,
        "KeyD" => KeyCode::KeyD,
        "KeyQ" => KeyCode::KeyQ,
        "KeyE" => KeyCode::KeyE,
        "KeyR" => KeyCode::KeyR,
        "KeyF" => KeyCode::KeyF,
        "KeyP" => KeyCode::KeyP,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Space" => KeyCode::Space,
        "Escape" => KeyCode::Escape,
        _ => return None,
    };
    Some(code)
}
