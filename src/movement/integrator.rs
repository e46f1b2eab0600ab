//! Movement domain: fixed-step velocity and gravity targets.

use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::{CollisionState, ControllerState};

/// What the integrator wants written to the rigid body this step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyCommand {
    pub velocity: Vec2,
    pub gravity_scale: f32,
}

/// Velocity change from holding `force` for one step of length `dt` on a body
/// of the given mass.
pub fn impulse_velocity(force: f32, mass: f32, dt: f32) -> f32 {
    debug_assert!(mass > 0.0, "controlled body must have positive mass");
    force * dt / mass
}

/// Translate the controller state into a body command for one fixed step.
///
/// Consumes the pending jump impulse and turns the visual facing towards the
/// movement sign. While wall-stuck both axes are overwritten, so momentum
/// carried into the wall never leaks into the slide.
pub fn integrate(
    state: &mut ControllerState,
    collision: &CollisionState,
    config: &ControllerConfig,
    velocity: Vec2,
    mass: f32,
    dt: f32,
) -> BodyCommand {
    let mut velocity = velocity;
    let sign = state.horizontal_velocity_sign();
    let into_wall = (sign < 0.0 && collision.left) || (sign > 0.0 && collision.right);
    velocity.x = if state.is_wall_stuck() && into_wall {
        0.0
    } else {
        config.speed * sign
    };

    let gravity_scale = if state.is_wall_stuck() {
        velocity.y = config.sliding_down_speed;
        0.0
    } else {
        if state.take_jump_impulse() {
            velocity.y = impulse_velocity(config.jump_force, mass, dt);
        }
        1.0
    };

    state.face_towards(sign);

    BodyCommand {
        velocity,
        gravity_scale,
    }
}
