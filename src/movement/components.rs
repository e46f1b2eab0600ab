//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for body-to-body collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Level geometry (floors, walls, platforms)
    Ground,
    /// Player characters
    Character,
    /// Damageable props such as shortcuts
    Prop,
    /// Tackle trigger volumes
    AttackTrigger,
}

/// Marker for an entity driven by a character controller
#[derive(Component, Debug)]
pub struct Character;

/// Excludes the entity from input, probing, state updates and integration.
/// Inserted while a character waits to respawn.
#[derive(Component, Debug)]
pub struct Suspended;

/// Capability tag read by the collision probe. Colliders carrying any tag are
/// not obstacles; untagged colliders are.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeTag {
    /// Characters and other damageable entities
    Entity,
    /// Trigger volumes and decoration
    IgnoreCollision,
}

/// Returns true when a collider with this tag should stop a probe ray.
pub fn is_obstacle(tag: Option<&ProbeTag>) -> bool {
    tag.is_none()
}

/// Visual facing, written by the integrator and read by presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Result of the four directional probes, recomputed wholesale every tick
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub struct CollisionState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionState {
    pub fn grounded(&self) -> bool {
        self.down
    }
}

impl std::fmt::Display for CollisionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "^ {} v {} < {} > {}",
            self.up, self.down, self.left, self.right
        )
    }
}

/// Keyboard bindings resolved from a player slot
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerControls {
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub attack: KeyCode,
}
