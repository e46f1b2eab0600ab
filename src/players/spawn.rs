//! Players domain: spawning one character per configured player slot.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackTrigger, ContactSet, Health};
use crate::content::{EntityDefs, PlayerSlotDef, PlayerSlots, key_code};
use crate::core::SpawnPoints;
use crate::movement::{
    Character, CollisionState, ControllerState, GameLayer, PlayerControls, ProbeTag,
};
use crate::presentation::DisplayFlags;

pub const CHARACTER_SIZE: Vec2 = Vec2::new(20.0, 32.0);
/// The trigger reaches a little past the body on both sides.
const TRIGGER_MARGIN: f32 = 6.0;

/// Resolve a slot's key names. Validation has already replaced slots with
/// unknown keys, so `None` only happens for hand-built slots.
pub fn controls_for(slot: &PlayerSlotDef) -> Option<PlayerControls> {
    Some(PlayerControls {
        left: key_code(&slot.left)?,
        right: key_code(&slot.right)?,
        jump: key_code(&slot.jump)?,
        attack: key_code(&slot.attack)?,
    })
}

pub(crate) fn spawn_players(
    mut commands: Commands,
    slots: Res<PlayerSlots>,
    entity_defs: Res<EntityDefs>,
    spawn_points: Res<SpawnPoints>,
) {
    let max_hp = entity_defs.hp(EntityDefs::CHARACTER);

    for (n, slot) in slots.slots.iter().enumerate() {
        let Some(controls) = controls_for(slot) else {
            warn!("Skipping player {}: unresolved key bindings", slot.id);
            continue;
        };
        let Some(position) = spawn_points.nth(n) else {
            error!("No spawn point for player {}", slot.id);
            continue;
        };

        let character = commands
            .spawn((
                // Identity & control
                (
                    Character,
                    slot.id,
                    controls,
                    ControllerState::default(),
                    CollisionState::default(),
                    DisplayFlags::default(),
                    ProbeTag::Entity,
                ),
                // Combat
                (Health::new(max_hp), ContactSet::default()),
                // Rendering
                Sprite {
                    color: slot.id.color(),
                    custom_size: Some(CHARACTER_SIZE),
                    ..default()
                },
                Transform::from_translation(position.extend(2.0)),
                Visibility::Visible,
                // Physics
                (
                    RigidBody::Dynamic,
                    Collider::rectangle(CHARACTER_SIZE.x, CHARACTER_SIZE.y),
                    LockedAxes::ROTATION_LOCKED,
                    LinearVelocity::default(),
                    GravityScale(1.0),
                    Mass(1.0),
                    ColliderDensity(0.0),
                    Friction::new(0.0),
                    CollisionLayers::new(
                        GameLayer::Character,
                        [
                            GameLayer::Ground,
                            GameLayer::Character,
                            GameLayer::Prop,
                            GameLayer::AttackTrigger,
                        ],
                    ),
                ),
            ))
            .id();

        commands.entity(character).with_children(|parent| {
            parent.spawn((
                AttackTrigger { owner: character },
                ProbeTag::IgnoreCollision,
                Sensor,
                Collider::rectangle(
                    CHARACTER_SIZE.x + TRIGGER_MARGIN * 2.0,
                    CHARACTER_SIZE.y,
                ),
                ColliderDensity(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::AttackTrigger,
                    [GameLayer::Character, GameLayer::Prop],
                ),
                Transform::default(),
            ));
        });

        info!(
            "Spawned player {}: entity={}, hp={}, position={}",
            slot.id, character, max_hp, position
        );
    }
}
