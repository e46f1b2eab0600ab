//! Movement domain: collision probes, the controller state machine and
//! fixed-step velocity integration.

mod components;
mod integrator;
pub(crate) mod probe;
mod state;
mod systems;

pub use components::{
    Character, CollisionState, Facing, GameLayer, PlayerControls, ProbeTag, Suspended,
    is_obstacle,
};
pub use state::ControllerState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{
    advance_controllers, integrate_controllers, read_player_input, update_collision_probes,
};

/// Per-frame ordering of the controller pipeline. Other domains hook their
/// systems into these sets.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    Input,
    Probe,
    StateMachine,
    Combat,
    Presentation,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CollisionState>()
            .configure_sets(
                Update,
                (
                    ControllerSet::Input,
                    ControllerSet::Probe,
                    ControllerSet::StateMachine,
                    ControllerSet::Combat,
                    ControllerSet::Presentation,
                )
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(Update, read_player_input.in_set(ControllerSet::Input))
            .add_systems(Update, update_collision_probes.in_set(ControllerSet::Probe))
            .add_systems(Update, advance_controllers.in_set(ControllerSet::StateMachine))
            .add_systems(
                FixedUpdate,
                integrate_controllers.run_if(in_state(GameState::Run)),
            );
    }
}
