//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::DamageOutcome;

/// Emitted for every tackle hit that reached a damageable entity
#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: u32,
    pub outcome: DamageOutcome,
}

impl Message for DamageEvent {}

/// Emitted when a hit brings an entity to zero hit points
#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
    pub killer: Entity,
}

impl Message for DeathEvent {}
