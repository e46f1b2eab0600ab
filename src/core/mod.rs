//! Core domain: match state, camera, level geometry and spawn data.

mod resources;
mod state;
mod systems;

pub use resources::{MatchConfig, PIXELS_PER_METER, SpawnPoints, SpawnRng};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{
    arena_spawn_points, finish_boot, seed_spawn_rng, setup_camera, spawn_arena,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<MatchConfig>()
            .insert_resource(SpawnPoints {
                points: arena_spawn_points(),
            })
            .add_systems(Startup, (setup_camera, seed_spawn_rng, finish_boot))
            .add_systems(OnEnter(GameState::Run), spawn_arena);
    }
}
