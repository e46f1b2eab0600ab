//! Players domain: kill reporting and respawn bookkeeping.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::{ContactSet, Health};
use crate::content::PlayerId;
use crate::movement::ControllerState;

/// A player character was killed. `killer` is `None` when the killing entity
/// is not a player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillEvent {
    pub killer: Option<PlayerId>,
    pub victim: PlayerId,
}

impl Message for KillEvent {}

/// Dead character waiting to reappear
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Respawning {
    pub ready_at: f64,
}

impl Respawning {
    pub fn new(now: f64, respawn_duration: f32) -> Self {
        Self {
            ready_at: now + f64::from(respawn_duration),
        }
    }

    pub fn is_ready(&self, now: f64) -> bool {
        now >= self.ready_at
    }
}

/// Running kill tally per player, for the debug overlay and logs.
#[derive(Resource, Debug, Clone, Default)]
pub struct Scoreboard {
    kills: [u32; 4],
    deaths: [u32; 4],
}

impl Scoreboard {
    pub fn record(&mut self, event: &KillEvent) {
        self.deaths[event.victim.index()] += 1;
        // Suicides and environment kills only count as deaths
        if let Some(killer) = event.killer
            && killer != event.victim
        {
            self.kills[killer.index()] += 1;
        }
    }

    pub fn kills(&self, player: PlayerId) -> u32 {
        self.kills[player.index()]
    }

    pub fn deaths(&self, player: PlayerId) -> u32 {
        self.deaths[player.index()]
    }
}

/// Bring a character's gameplay state back to a fresh spawn.
pub fn reset_for_respawn(
    health: &mut Health,
    state: &mut ControllerState,
    contacts: &mut ContactSet,
) {
    health.restore();
    *state = ControllerState::default();
    contacts.clear();
}
