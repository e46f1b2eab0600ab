//! Players domain: per-slot characters, kills and respawning.

mod components;
mod respawn;
mod spawn;
#[cfg(test)]
mod tests;

pub use components::{KillEvent, Respawning, Scoreboard, reset_for_respawn};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::ControllerSet;
use crate::players::respawn::{process_deaths, tick_respawns};
use crate::players::spawn::spawn_players;

pub struct PlayersPlugin;

impl Plugin for PlayersPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<KillEvent>()
            .init_resource::<Scoreboard>()
            .add_systems(OnEnter(GameState::Run), spawn_players)
            .add_systems(
                Update,
                (process_deaths, tick_respawns)
                    .chain()
                    .after(ControllerSet::Combat)
                    .before(ControllerSet::Presentation)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
