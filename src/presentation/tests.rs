use bevy::prelude::*;

use super::components::HIT_FLASH_DURATION;
use super::{DisplayFlags, HitFlash, display_flags, tint};
use crate::content::ControllerConfig;
use crate::movement::{CollisionState, ControllerState};

fn airborne() -> CollisionState {
    CollisionState::default()
}

fn grounded() -> CollisionState {
    CollisionState {
        down: true,
        ..default()
    }
}

#[test]
fn test_idle_on_ground_has_no_flags() {
    let state = ControllerState::default();
    assert_eq!(display_flags(&state, &grounded()), DisplayFlags::default());
}

#[test]
fn test_running_follows_input_not_velocity() {
    let config = ControllerConfig::default();
    let mut state = ControllerState::default();
    let blocked = CollisionState {
        down: true,
        right: true,
        ..default()
    };

    state.set_horizontal_input(1.0);
    state.advance(&blocked, &config, 0.0);

    let flags = display_flags(&state, &blocked);
    assert!(flags.running);
    assert!(!flags.jumping);
    assert!(!flags.wall_sliding);
}

#[test]
fn test_airborne_reads_as_jumping() {
    let state = ControllerState::default();
    assert!(display_flags(&state, &airborne()).jumping);
}

#[test]
fn test_wall_slide_and_tackle_flags() {
    let config = ControllerConfig::default();
    let against_wall = CollisionState {
        left: true,
        ..default()
    };

    let mut sliding = ControllerState::default();
    sliding.set_horizontal_input(-1.0);
    sliding.advance(&against_wall, &config, 0.0);
    sliding.advance(&against_wall, &config, 0.02);
    let flags = display_flags(&sliding, &against_wall);
    assert!(flags.wall_sliding);
    assert!(flags.jumping);

    let mut tackling = ControllerState::default();
    tackling.activate_attack(0.0, config.tackle_duration);
    tackling.advance(&grounded(), &config, 0.1);
    assert!(display_flags(&tackling, &grounded()).tackling);
}

#[test]
fn test_tint_only_changes_for_highlighted_states() {
    let base = Color::srgb(0.5, 0.5, 0.5);

    assert_eq!(tint(base, DisplayFlags::default()), base);
    assert_ne!(
        tint(
            base,
            DisplayFlags {
                tackling: true,
                ..default()
            }
        ),
        base
    );
    assert_ne!(
        tint(
            base,
            DisplayFlags {
                wall_sliding: true,
                ..default()
            }
        ),
        base
    );
}

#[test]
fn test_hit_flash_runs_out() {
    let mut flash = HitFlash::default();

    assert!(!flash.tick(HIT_FLASH_DURATION / 2.0));
    assert!(flash.tick(HIT_FLASH_DURATION));
}
