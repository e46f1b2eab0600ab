//! Combat domain: tackle hit registration from trigger overlaps.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::contacts::{register_overlap_begin, register_overlap_end};
use crate::combat::events::{DamageEvent, DeathEvent};
use crate::combat::{AttackTrigger, ContactSet, DamageOutcome, Damageable, Health, Shortcut};
use crate::content::ControllerConfig;
use crate::movement::{ControllerState, Suspended};

/// Returns (trigger, candidate) when exactly one side of the pair is a tackle
/// trigger.
fn split_pair(
    triggers: &Query<&AttackTrigger>,
    collider1: Entity,
    collider2: Entity,
) -> Option<(AttackTrigger, Entity)> {
    if let Ok(trigger) = triggers.get(collider1) {
        return Some((*trigger, collider2));
    }
    if let Ok(trigger) = triggers.get(collider2) {
        return Some((*trigger, collider1));
    }
    None
}

/// Drop `candidate` from the owner's contact set.
fn release_contact(
    attackers: &mut Query<(&ControllerState, &mut ContactSet), Without<Suspended>>,
    trigger: AttackTrigger,
    candidate: Entity,
) {
    if let Ok((_, mut contacts)) = attackers.get_mut(trigger.owner)
        && register_overlap_end(&mut contacts, candidate)
    {
        trace!("Contact released: source={}, target={}", trigger.owner, candidate);
    }
}

pub(crate) fn track_attack_overlaps(
    mut collision_started: MessageReader<CollisionStart>,
    mut collision_ended: MessageReader<CollisionEnd>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    config: Res<ControllerConfig>,
    triggers: Query<&AttackTrigger>,
    mut attackers: Query<(&ControllerState, &mut ContactSet), Without<Suspended>>,
    mut healths: Query<&mut Health>,
    mut shortcuts: Query<&mut Shortcut>,
) {
    let begins: Vec<(AttackTrigger, Entity)> = collision_started
        .read()
        .filter_map(|event| split_pair(&triggers, event.collider1, event.collider2))
        .filter(|(trigger, candidate)| *candidate != trigger.owner)
        .collect();
    let ends: Vec<(AttackTrigger, Entity)> = collision_ended
        .read()
        .filter_map(|event| split_pair(&triggers, event.collider1, event.collider2))
        .collect();

    // Several physics steps can run per frame. A pair that is already tracked
    // and begins again this frame must have ended first, so its first end goes
    // before the begins. Every other end goes after them, so a contact that
    // starts and stops within the frame still lands its hit.
    let mut ended_before: Vec<(AttackTrigger, Entity)> = Vec::new();
    let mut ended_after: Vec<(AttackTrigger, Entity)> = Vec::new();
    for (trigger, candidate) in ends {
        let tracked = attackers
            .get(trigger.owner)
            .is_ok_and(|(_, contacts)| contacts.contains(candidate));
        let begins_again = begins
            .iter()
            .any(|(other, begun)| other.owner == trigger.owner && *begun == candidate);
        let already_moved = ended_before
            .iter()
            .any(|(other, ended)| other.owner == trigger.owner && *ended == candidate);

        if tracked && begins_again && !already_moved {
            ended_before.push((trigger, candidate));
        } else {
            ended_after.push((trigger, candidate));
        }
    }

    for (trigger, candidate) in ended_before {
        release_contact(&mut attackers, trigger, candidate);
    }

    for (trigger, candidate) in begins {
        let Ok((state, mut contacts)) = attackers.get_mut(trigger.owner) else {
            continue;
        };

        let attack_active = state.is_attack_active();
        let amount = config.damage_tackle;
        let outcome = if let Ok(mut health) = healths.get_mut(candidate) {
            let target: &mut dyn Damageable = &mut *health;
            register_overlap_begin(
                &mut contacts,
                attack_active,
                candidate,
                Some(target),
                amount,
                trigger.owner,
            )
        } else if let Ok(mut shortcut) = shortcuts.get_mut(candidate) {
            let target: &mut dyn Damageable = &mut *shortcut;
            register_overlap_begin(
                &mut contacts,
                attack_active,
                candidate,
                Some(target),
                amount,
                trigger.owner,
            )
        } else {
            None
        };

        let Some(outcome) = outcome else {
            continue;
        };

        debug!(
            "Tackle hit: source={}, target={}, amount={}, outcome={:?}",
            trigger.owner, candidate, amount, outcome
        );

        damage_events.write(DamageEvent {
            source: trigger.owner,
            target: candidate,
            amount,
            outcome,
        });

        if outcome == DamageOutcome::Killed {
            death_events.write(DeathEvent {
                entity: candidate,
                killer: trigger.owner,
            });
        }
    }

    for (trigger, candidate) in ended_after {
        release_contact(&mut attackers, trigger, candidate);
    }
}
