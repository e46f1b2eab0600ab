//! Debug tooling, compiled with the `dev-tools` feature.
//!
//! - F3: per-player controller overlay (hit points, probes, jumps, tackle)
//! - F4: probe ray gizmos
//! - F5: open every shortcut window

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{
    draw_probe_rays, handle_debug_hotkeys, record_kills, update_debug_info_overlay,
    update_status_message,
};
use crate::movement::ControllerSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (handle_debug_hotkeys, record_kills, update_status_message)
                    .chain()
                    .after(ControllerSet::Presentation),
            )
            .add_systems(
                Update,
                draw_probe_rays
                    .after(ControllerSet::Probe)
                    .run_if(in_state(GameState::Run))
                    .run_if(|state: Res<DebugState>| state.show_probes),
            )
            .add_systems(Update, update_debug_info_overlay);
    }
}
