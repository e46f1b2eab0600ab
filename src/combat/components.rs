//! Combat domain: damage capability and combat-related components.

use bevy::prelude::*;

/// Result of one `Damageable::apply_damage` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The target took damage and is still alive
    Hurt { remaining: u32 },
    /// This hit brought the target to zero
    Killed,
    /// A switch-like target changed state instead of losing hit points
    Toggled { open: bool },
    /// The target was already dead
    Ignored,
}

/// Anything a tackle can hurt.
pub trait Damageable {
    fn apply_damage(&mut self, amount: u32, source: Entity) -> DamageOutcome;
}

/// Hit points of a character
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }
}

impl Damageable for Health {
    fn apply_damage(&mut self, amount: u32, _source: Entity) -> DamageOutcome {
        if self.is_dead() {
            return DamageOutcome::Ignored;
        }

        self.current = self.current.saturating_sub(amount);
        if self.is_dead() {
            DamageOutcome::Killed
        } else {
            DamageOutcome::Hurt {
                remaining: self.current,
            }
        }
    }
}

/// Tackle trigger volume, a sensor attached to the attacking character
#[derive(Component, Debug, Clone, Copy)]
pub struct AttackTrigger {
    pub owner: Entity,
}

/// Entities the owner's tackle is currently touching and has already hit.
///
/// An entity is listed at most once. It leaves the set when its collider stops
/// overlapping the trigger, which allows one more hit on the next contact.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSet {
    hit: Vec<Entity>,
}

impl ContactSet {
    pub fn contains(&self, entity: Entity) -> bool {
        self.hit.contains(&entity)
    }

    /// Returns false if the entity was already present.
    pub fn insert(&mut self, entity: Entity) -> bool {
        if self.contains(entity) {
            return false;
        }
        self.hit.push(entity);
        true
    }

    /// Returns false if the entity was not present.
    pub fn remove(&mut self, entity: Entity) -> bool {
        let before = self.hit.len();
        self.hit.retain(|&e| e != entity);
        self.hit.len() != before
    }

    pub fn clear(&mut self) {
        self.hit.clear();
    }
}
