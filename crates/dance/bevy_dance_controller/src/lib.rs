//! Bevy plugin wrapping the dance controller core.
//!
//! Attach a [`DanceRig`] to a character root; the plugin finds its
//! `AnimationPlayer`, freezes it on the first pose and then steps poses from
//! keyboard edges (see [`DanceKeyBindings`]).

use bevy::prelude::*;

pub mod animator;
pub mod components;
pub mod resources;
pub mod systems;

pub use animator::BevyAnimator;
pub use components::{DanceRig, DanceRigBinding};
pub use resources::DanceKeyBindings;

use dance_controller_core::ControllerEvent;
use systems::{bind_dance_rigs_system, dance_input_system};

/// Controller events re-emitted into the ECS, tagged with the rig entity.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DanceEvent {
    pub rig: Entity,
    pub event: ControllerEvent,
}

pub struct DanceControllerPlugin;

impl Plugin for DanceControllerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DanceKeyBindings>()
            .add_event::<DanceEvent>()
            .add_systems(
                Update,
                (bind_dance_rigs_system, dance_input_system).chain(),
            );
    }
}
