//! Data definitions for the RON configuration files.
//!
//! These structs mirror the structure in assets/data/*.ron. Every struct has a
//! `Default` matching the shipped data so the game still boots when a file is
//! missing or rejected by validation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Character controller (controller.ron) - Single struct, not a list
// ============================================================================

/// Tuning values for every character controller in the match.
///
/// Lengths and speeds are in world units (pixels), times in seconds.
/// Immutable once the match is running.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct ControllerConfig {
    /// Horizontal run speed at full input.
    pub speed: f32,
    /// Upward force applied for one fixed step when jumping.
    pub jump_force: f32,
    /// Signed vertical velocity while wall-stuck (negative slides down).
    pub sliding_down_speed: f32,
    /// Damage dealt to each entity hit by a tackle.
    pub damage_tackle: u32,
    pub damage_projectile: u32,
    pub cadence_projectile: f32,
    pub max_projectiles_carried: u32,
    /// Seconds a dead character waits before respawning.
    pub respawn_duration: f32,
    /// Jumps allowed before touching ground or a wall again.
    pub max_jumps_count: u32,
    /// Length of the tackle window in seconds.
    pub tackle_duration: f32,
    /// How far past the collider bounds the probes reach.
    pub raycast_distance: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            speed: 96.0,
            jump_force: 16000.0,
            sliding_down_speed: -48.0,
            damage_tackle: 3,
            damage_projectile: 2,
            cadence_projectile: 2.0,
            max_projectiles_carried: 2,
            respawn_duration: 1.5,
            max_jumps_count: 2,
            tackle_duration: 1.1 / 2.0,
            raycast_distance: 3.2,
        }
    }
}

// ============================================================================
// Entities (entities.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct EntityDef {
    pub id: String,
    pub hp: u32,
}

/// Hit points per entity kind, keyed by `EntityDef::id`.
#[derive(Resource, Debug, Clone)]
pub struct EntityDefs {
    pub defs: Vec<EntityDef>,
}

impl EntityDefs {
    pub const CHARACTER: &'static str = "character";
    const FALLBACK_HP: u32 = 10;

    pub fn hp(&self, id: &str) -> u32 {
        self.defs
            .iter()
            .find(|def| def.id == id)
            .map(|def| def.hp)
            .unwrap_or(Self::FALLBACK_HP)
    }
}

impl Default for EntityDefs {
    fn default() -> Self {
        Self {
            defs: vec![EntityDef {
                id: Self::CHARACTER.to_string(),
                hp: Self::FALLBACK_HP,
            }],
        }
    }
}

// ============================================================================
// Player slots (players.ron)
// ============================================================================

/// Local player slot. Each slot owns a colour and a set of key bindings.
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect,
)]
pub enum PlayerId {
    One,
    Two,
    Three,
    Four,
}

impl PlayerId {
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
            PlayerId::Three => 2,
            PlayerId::Four => 3,
        }
    }

    pub fn color(self) -> Color {
        match self {
            PlayerId::One => Color::srgb(0.95, 0.35, 0.3),
            PlayerId::Two => Color::srgb(0.3, 0.55, 0.95),
            PlayerId::Three => Color::srgb(0.35, 0.85, 0.4),
            PlayerId::Four => Color::srgb(0.95, 0.85, 0.3),
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.index() + 1)
    }
}

/// Key names are bevy `KeyCode` variant names, e.g. "KeyA" or "ArrowLeft".
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct PlayerSlotDef {
    pub id: PlayerId,
    pub left: String,
    pub right: String,
    pub jump: String,
    pub attack: String,
}

#[derive(Resource, Debug, Clone)]
pub struct PlayerSlots {
    pub slots: Vec<PlayerSlotDef>,
}

impl Default for PlayerSlots {
    fn default() -> Self {
        Self {
            slots: vec![
                PlayerSlotDef {
                    id: PlayerId::One,
                    left: "KeyA".to_string(),
                    right: "KeyD".to_string(),
                    jump: "Space".to_string(),
                    attack: "KeyF".to_string(),
                },
                PlayerSlotDef {
                    id: PlayerId::Two,
                    left: "ArrowLeft".to_string(),
                    right: "ArrowRight".to_string(),
                    jump: "Enter".to_string(),
                    attack: "ShiftRight".to_string(),
                },
            ],
        }
    }
}

/// Resolve a key name from the data files.
pub fn key_code(name: &str) -> Option<KeyCode> {
    let code = match name {
        "KeyA" => KeyCode::KeyA,
        "KeyB" => KeyCode::KeyB,
        "KeyC" => KeyCode::KeyC,
        "KeyD" => KeyCode::KeyD,
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyG" => KeyCode::KeyG,
        "KeyH" => KeyCode::KeyH,
        "KeyI" => KeyCode::KeyI,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyM" => KeyCode::KeyM,
        "KeyN" => KeyCode::KeyN,
        "KeyO" => KeyCode::KeyO,
        "KeyP" => KeyCode::KeyP,
        "KeyQ" => KeyCode::KeyQ,
        "KeyR" => KeyCode::KeyR,
        "KeyS" => KeyCode::KeyS,
        "KeyT" => KeyCode::KeyT,
        "KeyU" => KeyCode::KeyU,
        "KeyV" => KeyCode::KeyV,
        "KeyW" => KeyCode::KeyW,
        "KeyX" => KeyCode::KeyX,
        "KeyY" => KeyCode::KeyY,
        "KeyZ" => KeyCode::KeyZ,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "Numpad0" => KeyCode::Numpad0,
        "Numpad1" => KeyCode::Numpad1,
        "Numpad4" => KeyCode::Numpad4,
        "Numpad6" => KeyCode::Numpad6,
        "Numpad8" => KeyCode::Numpad8,
        _ => return None,
    };
    Some(code)
}
