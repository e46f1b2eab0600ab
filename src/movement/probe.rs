//! Movement domain: four-way collision probe.

use bevy::prelude::*;

use crate::movement::CollisionState;

/// Cast one ray per cardinal direction from the box centre.
///
/// Each ray reaches `half_extents` on its axis plus `distance`. `cast` answers
/// whether a ray from `origin` along a direction hits an obstacle within the
/// given length.
pub fn probe_directions(
    center: Vec2,
    half_extents: Vec2,
    distance: f32,
    mut cast: impl FnMut(Vec2, Dir2, f32) -> bool,
) -> CollisionState {
    let reach_y = half_extents.y + distance;
    let reach_x = half_extents.x + distance;

    CollisionState {
        up: cast(center, Dir2::Y, reach_y),
        down: cast(center, Dir2::NEG_Y, reach_y),
        left: cast(center, Dir2::NEG_X, reach_x),
        right: cast(center, Dir2::X, reach_x),
    }
}
