//! Combat domain: hit registration for tackle overlaps.

use bevy::prelude::*;

use crate::combat::{ContactSet, DamageOutcome, Damageable};

/// Handle an overlap-begin between a tackle trigger and `candidate`.
///
/// Damage is applied only while the attack is active, only to damageable
/// candidates, and only if the candidate is not already in the contact set.
/// Returns the damage outcome when a hit landed.
pub fn register_overlap_begin(
    contacts: &mut ContactSet,
    attack_active: bool,
    candidate: Entity,
    target: Option<&mut dyn Damageable>,
    amount: u32,
    source: Entity,
) -> Option<DamageOutcome> {
    if !attack_active {
        return None;
    }
    let target = target?;
    if contacts.contains(candidate) {
        return None;
    }

    let outcome = target.apply_damage(amount, source);
    contacts.insert(candidate);
    Some(outcome)
}

/// Handle an overlap-end. Unknown or already despawned candidates are a no-op.
pub fn register_overlap_end(contacts: &mut ContactSet, candidate: Entity) -> bool {
    contacts.remove(candidate)
}
