//! Presentation domain: what the renderer shows for a character.

use bevy::prelude::*;

use crate::movement::{CollisionState, ControllerState};

/// Seconds a damaged character stays flashed.
pub const HIT_FLASH_DURATION: f32 = 0.12;

/// Animation flags derived from the controller once per tick
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct DisplayFlags {
    pub wall_sliding: bool,
    pub running: bool,
    pub jumping: bool,
    pub tackling: bool,
}

/// Map controller state to display flags.
///
/// `running` follows raw input, not velocity, so pushing into a wall still
/// reads as running. `jumping` is simply "not grounded" and covers falls.
pub fn display_flags(state: &ControllerState, collision: &CollisionState) -> DisplayFlags {
    DisplayFlags {
        wall_sliding: state.is_wall_stuck(),
        running: state.horizontal_input() != 0.0,
        jumping: !collision.grounded(),
        tackling: state.is_attack_active(),
    }
}

/// Sprite colour for a character with the given flags.
pub fn tint(base: Color, flags: DisplayFlags) -> Color {
    if flags.tackling {
        base.lighter(0.25)
    } else if flags.wall_sliding {
        base.darker(0.2)
    } else {
        base
    }
}

/// Short white flash after taking damage
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct HitFlash {
    remaining: f32,
}

impl Default for HitFlash {
    fn default() -> Self {
        Self {
            remaining: HIT_FLASH_DURATION,
        }
    }
}

impl HitFlash {
    /// Advance the flash; returns true once it has run out.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining = (self.remaining - dt).max(0.0);
        self.remaining <= 0.0
    }
}
