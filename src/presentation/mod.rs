//! Presentation domain: display flags, facing and hit feedback.

mod components;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{DisplayFlags, HitFlash, display_flags, tint};

use bevy::prelude::*;

use crate::movement::ControllerSet;
use crate::presentation::systems::{
    start_hit_flash, sync_display_flags, sync_facing, tick_hit_flash, tint_characters,
};

pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<DisplayFlags>().add_systems(
            Update,
            (
                sync_display_flags,
                sync_facing,
                start_hit_flash,
                tick_hit_flash,
                tint_characters,
            )
                .chain()
                .in_set(ControllerSet::Presentation),
        );
    }
}
