//! Combat domain: shortcut switches that open or close a window when hit.

use bevy::prelude::*;

use crate::combat::{DamageOutcome, Damageable};

/// Seconds an open/close animation takes.
pub const TRANSITION_DURATION: f32 = 0.1;

/// A damageable switch. Every hit flips its window between open and closed.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Shortcut {
    /// The window sprite driven by this switch
    pub window: Entity,
    /// Window position relative to the switch when fully open
    pub window_offset: Vec2,
    is_open: bool,
    /// 0..=1 progress of the current open/close animation
    progress: f32,
}

impl Shortcut {
    pub fn new(window: Entity, window_offset: Vec2, close_on_start: bool) -> Self {
        Self {
            window,
            window_offset,
            is_open: !close_on_start,
            progress: 1.0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_animating(&self) -> bool {
        self.progress < 1.0
    }

    /// Open the window unless it already is.
    #[cfg_attr(not(feature = "dev-tools"), allow(dead_code))]
    pub fn open_window(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.switch_window_state();
        true
    }

    fn switch_window_state(&mut self) {
        self.is_open = !self.is_open;
        self.progress = 0.0;
    }

    /// Advance the animation and return the window's scale factor, 0 when
    /// closed and 1 when open.
    pub fn tick(&mut self, dt: f32) -> f32 {
        self.progress = (self.progress + dt / TRANSITION_DURATION).min(1.0);
        self.openness()
    }

    pub fn openness(&self) -> f32 {
        if self.is_open {
            self.progress
        } else {
            1.0 - self.progress
        }
    }
}

impl Damageable for Shortcut {
    fn apply_damage(&mut self, _amount: u32, _source: Entity) -> DamageOutcome {
        self.switch_window_state();
        DamageOutcome::Toggled {
            open: self.is_open,
        }
    }
}

pub(crate) fn animate_shortcuts(
    time: Res<Time>,
    mut shortcuts: Query<(&mut Shortcut, &Transform)>,
    mut windows: Query<(&mut Transform, &mut Sprite), Without<Shortcut>>,
) {
    let dt = time.delta_secs();

    for (mut shortcut, shortcut_transform) in &mut shortcuts {
        if !shortcut.is_animating() {
            continue;
        }

        let t = shortcut.tick(dt);
        let Ok((mut window_transform, mut sprite)) = windows.get_mut(shortcut.window) else {
            continue;
        };

        window_transform.scale = Vec3::splat(t);
        window_transform.translation = (shortcut_transform.translation.truncate()
            + shortcut.window_offset * t)
            .extend(window_transform.translation.z);
        sprite.color.set_alpha(t);

        if !shortcut.is_animating() {
            trace!(
                "Shortcut window {}: open={}",
                shortcut.window,
                shortcut.is_open()
            );
        }
    }
}
