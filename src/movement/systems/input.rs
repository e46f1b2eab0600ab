//! Movement domain: input sampling for locomotion and tackles.

use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::{ControllerState, PlayerControls, Suspended};

pub(crate) fn read_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<ControllerConfig>,
    mut query: Query<(Entity, &PlayerControls, &mut ControllerState), Without<Suspended>>,
) {
    let now = time.elapsed_secs_f64();

    for (entity, controls, mut state) in &mut query {
        let mut x = 0.0;
        if keyboard.pressed(controls.left) {
            x -= 1.0;
        }
        if keyboard.pressed(controls.right) {
            x += 1.0;
        }
        state.set_horizontal_input(x);

        if keyboard.just_pressed(controls.jump) {
            state.request_jump();
        }

        if keyboard.just_pressed(controls.attack)
            && state.activate_attack(now, config.tackle_duration)
        {
            debug!(
                "Tackle started: entity={}, direction={}, ends_at={:?}",
                entity,
                state.horizontal_velocity_sign(),
                state.attack_expires_at()
            );
        }
    }
}
