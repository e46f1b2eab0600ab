//! Movement domain: system modules for controller updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::update_collision_probes;
pub(crate) use input::read_player_input;
pub(crate) use movement::{advance_controllers, integrate_controllers};
