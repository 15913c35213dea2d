/// What a bound key asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    ToggleFreeze,
}

impl Intent {
    /// Intents backed by a held flag, in translation-then-rotation order
    pub const HELD: [Intent; 8] = [
        Intent::MoveForward,
        Intent::MoveBackward,
        Intent::MoveLeft,
        Intent::MoveRight,
        Intent::YawLeft,
        Intent::YawRight,
        Intent::PitchUp,
        Intent::PitchDown,
    ];

    pub fn is_toggle(self) -> bool {
        matches!(self, Intent::ToggleFreeze)
    }
}

/// Read access to held intents
pub trait Controller {
    /// Check if an intent is currently held
    fn is_active(&self, intent: Intent) -> bool;

    /// All currently held intents
    fn active_intents(&self) -> Vec<Intent> {
        Intent::HELD
            .into_iter()
            .filter(|&intent| self.is_active(intent))
            .collect()
    }
}

/// The eight held motion flags
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MotionFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
}

impl MotionFlags {
    /// Sets the flag behind `intent`. Toggle intents have no flag and are ignored.
    pub fn set(&mut self, intent: Intent, held: bool) {
        match intent {
            Intent::MoveForward => self.forward = held,
            Intent::MoveBackward => self.backward = held,
            Intent::MoveLeft => self.left = held,
            Intent::MoveRight => self.right = held,
            Intent::YawLeft => self.yaw_left = held,
            Intent::YawRight => self.yaw_right = held,
            Intent::PitchUp => self.pitch_up = held,
            Intent::PitchDown => self.pitch_down = held,
            Intent::ToggleFreeze => {}
        }
    }

    pub fn any_translation(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Controller for MotionFlags {
    fn is_active(&self, intent: Intent) -> bool {
        match intent {
            Intent::MoveForward => self.forward,
            Intent::MoveBackward => self.backward,
            Intent::MoveLeft => self.left,
            Intent::MoveRight => self.right,
            Intent::YawLeft => self.yaw_left,
            Intent::YawRight => self.yaw_right,
            Intent::PitchUp => self.pitch_up,
            Intent::PitchDown => self.pitch_down,
            Intent::ToggleFreeze => false,
        }
    }
}
