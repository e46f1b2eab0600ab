mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod players;
mod presentation;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::PIXELS_PER_METER;

/// Rate of the fixed step that drives velocity integration.
const FIXED_HZ: f64 = 50.0;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Stick Wars".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default().with_length_unit(PIXELS_PER_METER))
    .insert_resource(Gravity(Vec2::NEG_Y * 9.81 * PIXELS_PER_METER))
    .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        players::PlayersPlugin,
        presentation::PresentationPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
