//! Debug domain: overlay state and the text it shows.

use bevy::prelude::*;

use crate::combat::Health;
use crate::content::PlayerId;
use crate::movement::{CollisionState, ControllerState};
use crate::players::{KillEvent, Scoreboard};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the per-player info overlay is visible
    pub show_info: bool,
    /// Whether probe rays are drawn
    pub show_probes: bool,
    /// Latest kill, shown until replaced
    pub last_kill: Option<KillEvent>,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Count down the status message, dropping it once expired.
    pub fn tick_message(&mut self, dt: f32) {
        if let Some((_, ref mut duration)) = self.status_message {
            *duration -= dt;
            if *duration <= 0.0 {
                self.status_message = None;
            }
        }
    }
}

/// One overlay line for a character.
pub fn player_line(
    player: PlayerId,
    health: &Health,
    state: &ControllerState,
    collision: &CollisionState,
    scoreboard: &Scoreboard,
) -> String {
    format!(
        "{player} HP {}/{} K/D {}/{} | {collision} | jumps {} stuck {} attack {}",
        health.current,
        health.max,
        scoreboard.kills(player),
        scoreboard.deaths(player),
        state.jumps_used(),
        state.is_wall_stuck(),
        state.is_attack_active(),
    )
}

/// Overlay line for the most recent kill.
pub fn kill_line(kill: &KillEvent) -> String {
    match kill.killer {
        Some(killer) => format!("Last kill: {killer} -> {}", kill.victim),
        None => format!("Last kill: {} died", kill.victim),
    }
}
