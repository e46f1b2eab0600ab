use bevy::prelude::*;

use super::spawn::controls_for;
use super::{KillEvent, Respawning, Scoreboard, reset_for_respawn};
use crate::combat::{ContactSet, Damageable, Health};
use crate::content::{ControllerConfig, PlayerId, PlayerSlots};
use crate::movement::{CollisionState, ControllerState};

#[test]
fn test_respawn_waits_for_full_duration() {
    let respawning = Respawning::new(10.0, 1.5);

    assert!(!respawning.is_ready(10.0));
    assert!(!respawning.is_ready(11.4));
    assert!(respawning.is_ready(11.5));
    assert!(respawning.is_ready(20.0));
}

#[test]
fn test_reset_restores_fresh_character() {
    let mut world = World::new();
    let attacker = world.spawn_empty().id();
    let target = world.spawn_empty().id();

    let config = ControllerConfig::default();
    let mut health = Health::new(10);
    let mut state = ControllerState::default();
    let mut contacts = ContactSet::default();

    health.apply_damage(10, attacker);
    state.set_horizontal_input(-1.0);
    state.activate_attack(0.0, config.tackle_duration);
    state.advance(&CollisionState::default(), &config, 0.1);
    contacts.insert(target);

    reset_for_respawn(&mut health, &mut state, &mut contacts);

    assert_eq!(health.current, 10);
    assert_eq!(state, ControllerState::default());
    assert_eq!(contacts, ContactSet::default());
}

#[test]
fn test_scoreboard_counts_kills_and_deaths() {
    let mut scoreboard = Scoreboard::default();

    scoreboard.record(&KillEvent {
        killer: Some(PlayerId::One),
        victim: PlayerId::Two,
    });
    scoreboard.record(&KillEvent {
        killer: Some(PlayerId::One),
        victim: PlayerId::Two,
    });

    assert_eq!(scoreboard.kills(PlayerId::One), 2);
    assert_eq!(scoreboard.deaths(PlayerId::Two), 2);
    assert_eq!(scoreboard.deaths(PlayerId::One), 0);
}

#[test]
fn test_environment_and_self_kills_only_count_deaths() {
    let mut scoreboard = Scoreboard::default();

    scoreboard.record(&KillEvent {
        killer: None,
        victim: PlayerId::Three,
    });
    scoreboard.record(&KillEvent {
        killer: Some(PlayerId::Three),
        victim: PlayerId::Three,
    });

    assert_eq!(scoreboard.kills(PlayerId::Three), 0);
    assert_eq!(scoreboard.deaths(PlayerId::Three), 2);
}

#[test]
fn test_default_slots_resolve_controls() {
    let slots = PlayerSlots::default();

    let one = controls_for(&slots.slots[0]).unwrap();
    assert_eq!(one.left, KeyCode::KeyA);
    assert_eq!(one.jump, KeyCode::Space);

    let two = controls_for(&slots.slots[1]).unwrap();
    assert_eq!(two.right, KeyCode::ArrowRight);
    assert_eq!(two.attack, KeyCode::ShiftRight);
}

#[test]
fn test_unknown_key_yields_no_controls() {
    let mut slots = PlayerSlots::default();
    slots.slots[0].left = "Joystick".to_string();

    assert!(controls_for(&slots.slots[0]).is_none());
}
