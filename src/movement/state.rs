//! Movement domain: the controller state machine.
//!
//! `ControllerState` is the single owned record of a character's movement and
//! attack state. Input handling only sets latches through the setters below;
//! `advance` is the only place the derived state changes, once per frame.

use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::{CollisionState, Facing};

#[derive(Component, Debug, Clone, PartialEq)]
pub struct ControllerState {
    horizontal_input: f32,
    jump_requested: bool,
    /// Absolute time at which the running attack ends; `None` when idle.
    attack_expires_at: Option<f64>,
    is_wall_stuck: bool,
    was_wall_stuck: bool,
    jumps_used: u32,
    horizontal_velocity_sign: f32,
    pending_jump: bool,
    facing: Facing,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            horizontal_input: 0.0,
            jump_requested: false,
            attack_expires_at: None,
            is_wall_stuck: false,
            was_wall_stuck: false,
            jumps_used: 0,
            horizontal_velocity_sign: 0.0,
            pending_jump: false,
            facing: Facing::Right,
        }
    }
}

/// Transitions that happened during one `advance`, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub jumped: bool,
    pub attack_ended: bool,
    pub stuck_entered: bool,
    pub stuck_exited: bool,
}

impl ControllerState {
    pub fn horizontal_input(&self) -> f32 {
        self.horizontal_input
    }

    pub fn jump_requested(&self) -> bool {
        self.jump_requested
    }

    pub fn is_attack_active(&self) -> bool {
        self.attack_expires_at.is_some()
    }

    pub fn attack_expires_at(&self) -> Option<f64> {
        self.attack_expires_at
    }

    pub fn is_wall_stuck(&self) -> bool {
        self.is_wall_stuck
    }

    pub fn jumps_used(&self) -> u32 {
        self.jumps_used
    }

    pub fn horizontal_velocity_sign(&self) -> f32 {
        self.horizontal_velocity_sign
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Set the horizontal axis, clamped to [-1, 1].
    pub fn set_horizontal_input(&mut self, value: f32) {
        self.horizontal_input = if value.is_nan() {
            0.0
        } else {
            value.clamp(-1.0, 1.0)
        };
    }

    /// Latch a jump. Repeated requests before the latch is consumed collapse
    /// into one jump.
    pub fn request_jump(&mut self) {
        self.jump_requested = true;
    }

    /// Start a tackle. The dash direction locks to the current facing and the
    /// attack ends on its own `tackle_duration` seconds after `now`.
    ///
    /// Returns false (and changes nothing) while an attack is still running;
    /// spamming the trigger never extends the window. A deadline that has
    /// passed but not yet been cleared by `advance` does not block.
    pub fn activate_attack(&mut self, now: f64, tackle_duration: f32) -> bool {
        if self.attack_expires_at.is_some_and(|deadline| now < deadline) {
            return false;
        }

        self.horizontal_velocity_sign = self.facing.sign();
        self.attack_expires_at = Some(now + f64::from(tackle_duration));
        true
    }

    /// Run the per-frame state rules against the latest probe results.
    pub fn advance(
        &mut self,
        collision: &CollisionState,
        config: &ControllerConfig,
        now: f64,
    ) -> StepReport {
        let mut report = StepReport::default();

        if self.attack_expires_at.is_some_and(|deadline| now >= deadline) {
            self.attack_expires_at = None;
            report.attack_ended = true;
        }

        // Wall-stick, re-evaluated every tick
        let sign = self.horizontal_velocity_sign;
        let grounded = collision.grounded();
        self.was_wall_stuck = self.is_wall_stuck;
        self.is_wall_stuck =
            !grounded && ((sign < 0.0 && collision.left) || (sign > 0.0 && collision.right));

        // An impulse not yet applied by the integrator is dropped on entry:
        // the slide overrides it and the budget resets below.
        if self.is_wall_stuck && !self.was_wall_stuck {
            self.pending_jump = false;
            report.stuck_entered = true;
        } else if !self.is_wall_stuck {
            report.stuck_exited = self.was_wall_stuck;
        }

        if grounded || self.is_wall_stuck {
            self.jumps_used = 0;
        }

        // The latch waits out a wall-stick: the slide overrides any impulse.
        if self.jump_requested
            && !self.is_attack_active()
            && !self.is_wall_stuck
            && self.jumps_used < config.max_jumps_count
        {
            self.jump_requested = false;
            self.jumps_used += 1;
            self.pending_jump = true;
            report.jumped = true;
        }

        if !self.is_attack_active() {
            self.horizontal_velocity_sign = self.horizontal_input;
        }

        report
    }

    /// Consume the jump impulse emitted by `advance`.
    pub(crate) fn take_jump_impulse(&mut self) -> bool {
        std::mem::take(&mut self.pending_jump)
    }

    /// Turn the visual facing towards `sign`; zero keeps the current facing.
    pub(crate) fn face_towards(&mut self, sign: f32) {
        if sign < 0.0 {
            self.facing = Facing::Left;
        } else if sign > 0.0 {
            self.facing = Facing::Right;
        }
    }
}
