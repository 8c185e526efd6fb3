use bevy::prelude::*;

use dance_controller_core::ControlInputs;

/// Which keys produce the three control edges.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanceKeyBindings {
    pub start: KeyCode,
    pub cut: KeyCode,
    pub blend: KeyCode,
}

impl Default for DanceKeyBindings {
    fn default() -> Self {
        Self {
            start: KeyCode::KeyS,
            cut: KeyCode::KeyN,
            blend: KeyCode::KeyT,
        }
    }
}

impl DanceKeyBindings {
    /// Edges pressed this frame.
    pub fn read(&self, keys: &ButtonInput<KeyCode>) -> ControlInputs {
        ControlInputs {
            start: keys.just_pressed(self.start),
            cut: keys.just_pressed(self.cut),
            blend: keys.just_pressed(self.blend),
        }
    }
}
