//! Movement domain: state machine and fixed-step integration systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::integrator::integrate;
use crate::movement::{Character, CollisionState, ControllerState, Suspended};

pub(crate) fn advance_controllers(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    mut query: Query<
        (Entity, &CollisionState, &mut ControllerState),
        (With<Character>, Without<Suspended>),
    >,
) {
    let now = time.elapsed_secs_f64();

    for (entity, collision, mut state) in &mut query {
        let report = state.advance(collision, &config, now);

        if report.attack_ended {
            debug!("Tackle ended: entity={}", entity);
        }
        if report.stuck_entered {
            debug!(
                "Wall-stick entered: entity={}, {}, jump_latched={}",
                entity,
                collision,
                state.jump_requested()
            );
        } else if report.stuck_exited {
            debug!("Wall-stick exited: entity={}", entity);
        }
        if report.jumped {
            debug!(
                "Jump: entity={}, jumps_used={}/{}",
                entity,
                state.jumps_used(),
                config.max_jumps_count
            );
        }
    }
}

pub(crate) fn integrate_controllers(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    mut query: Query<
        (
            &CollisionState,
            &mut ControllerState,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
        ),
        (With<Character>, Without<Suspended>),
    >,
) {
    let dt = time.delta_secs();

    for (collision, mut state, mut velocity, mut gravity, mass) in &mut query {
        let command = integrate(
            &mut state,
            collision,
            &config,
            velocity.0,
            mass.value(),
            dt,
        );

        velocity.0 = command.velocity;
        if gravity.0 != command.gravity_scale {
            gravity.0 = command.gravity_scale;
        }
    }
}
