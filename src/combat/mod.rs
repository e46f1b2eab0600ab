//! Combat domain: tackle hit registration, damageable entities and shortcuts.

mod components;
mod contacts;
mod events;
mod shortcut;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{AttackTrigger, ContactSet, DamageOutcome, Damageable, Health};
pub use events::{DamageEvent, DeathEvent};
pub use shortcut::Shortcut;

use bevy::prelude::*;

use crate::combat::shortcut::animate_shortcuts;
use crate::combat::systems::track_attack_overlaps;
use crate::core::GameState;
use crate::movement::ControllerSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_systems(Update, track_attack_overlaps.in_set(ControllerSet::Combat))
            .add_systems(Update, animate_shortcuts.run_if(in_state(GameState::Run)));
    }
}
