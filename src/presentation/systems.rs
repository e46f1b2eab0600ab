//! Presentation domain: syncing sprites with controller state.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{DamageEvent, DamageOutcome};
use crate::content::PlayerId;
use crate::movement::{Character, CollisionState, ControllerState, Facing, Suspended};
use crate::presentation::{DisplayFlags, HitFlash, display_flags, tint};

pub(crate) fn sync_display_flags(
    mut query: Query<
        (&ControllerState, &CollisionState, &mut DisplayFlags),
        (With<Character>, Without<Suspended>),
    >,
) {
    for (state, collision, mut flags) in &mut query {
        let next = display_flags(state, collision);
        if *flags != next {
            *flags = next;
        }
    }
}

pub(crate) fn sync_facing(mut query: Query<(&ControllerState, &mut Sprite), With<Character>>) {
    for (state, mut sprite) in &mut query {
        let flip = state.facing() == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

pub(crate) fn start_hit_flash(
    mut commands: Commands,
    mut damage_events: MessageReader<DamageEvent>,
    characters: Query<(), With<Character>>,
) {
    for event in damage_events.read() {
        if !matches!(
            event.outcome,
            DamageOutcome::Hurt { .. } | DamageOutcome::Killed
        ) {
            continue;
        }
        if characters.contains(event.target) {
            trace!(
                "Hit flash: target={}, source={}, amount={}",
                event.target, event.source, event.amount
            );
            commands.entity(event.target).insert(HitFlash::default());
        }
    }
}

pub(crate) fn tick_hit_flash(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut HitFlash)>,
) {
    let dt = time.delta_secs();
    for (entity, mut flash) in &mut query {
        if flash.tick(dt) {
            commands.entity(entity).remove::<HitFlash>();
        }
    }
}

pub(crate) fn tint_characters(
    mut query: Query<(&PlayerId, &DisplayFlags, Option<&HitFlash>, &mut Sprite), With<Character>>,
) {
    for (player, flags, flash, mut sprite) in &mut query {
        sprite.color = if flash.is_some() {
            Color::WHITE
        } else {
            tint(player.color(), *flags)
        };
    }
}
