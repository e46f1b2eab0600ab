//! Core domain: boot flow, camera and arena setup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::Shortcut;
use crate::core::resources::{MatchConfig, SpawnRng};
use crate::core::state::GameState;
use crate::movement::{GameLayer, ProbeTag};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn seed_spawn_rng(mut commands: Commands, match_config: Res<MatchConfig>) {
    info!("Starting match with seed: {}", match_config.seed);
    commands.insert_resource(SpawnRng::from_seed(match_config.seed));
}

/// Configuration is in place once Startup has run; start the match.
pub(crate) fn finish_boot(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Run);
}

/// Spawn positions matching the arena layout below.
pub(crate) fn arena_spawn_points() -> Vec<Vec2> {
    vec![
        Vec2::new(-300.0, -150.0),
        Vec2::new(300.0, -150.0),
        Vec2::new(-250.0, 0.0),
        Vec2::new(250.0, 90.0),
    ]
}

fn spawn_block(commands: &mut Commands, center: Vec2, size: Vec2, color: Color) {
    commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        Friction::new(0.0),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Character]),
    ));
}

pub(crate) fn spawn_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Ground and outer walls
    spawn_block(
        &mut commands,
        Vec2::new(0.0, -200.0),
        Vec2::new(800.0, 40.0),
        ground_color,
    );
    spawn_block(
        &mut commands,
        Vec2::new(-420.0, 50.0),
        Vec2::new(40.0, 500.0),
        wall_color,
    );
    spawn_block(
        &mut commands,
        Vec2::new(420.0, 50.0),
        Vec2::new(40.0, 500.0),
        wall_color,
    );

    // Platforms
    spawn_block(
        &mut commands,
        Vec2::new(-250.0, -50.0),
        Vec2::new(150.0, 20.0),
        platform_color,
    );
    spawn_block(
        &mut commands,
        Vec2::new(250.0, 50.0),
        Vec2::new(150.0, 20.0),
        platform_color,
    );
    spawn_block(
        &mut commands,
        Vec2::new(0.0, 150.0),
        Vec2::new(120.0, 20.0),
        platform_color,
    );

    // Pillar for wall sliding
    spawn_block(
        &mut commands,
        Vec2::new(-100.0, -80.0),
        Vec2::new(30.0, 200.0),
        wall_color,
    );

    // Shortcut switch with its window
    let shortcut_position = Vec2::new(100.0, -165.0);
    let window_offset = Vec2::new(0.0, 60.0);
    let window = commands
        .spawn((
            Sprite {
                color: Color::srgb(0.85, 0.85, 0.95),
                custom_size: Some(Vec2::new(60.0, 40.0)),
                ..default()
            },
            Transform::from_translation(shortcut_position.extend(1.0)).with_scale(Vec3::ZERO),
        ))
        .id();

    commands.spawn((
        Shortcut::new(window, window_offset, true),
        ProbeTag::Entity,
        Sprite {
            color: Color::srgb(0.8, 0.75, 0.2),
            custom_size: Some(Vec2::new(16.0, 16.0)),
            ..default()
        },
        Transform::from_translation(shortcut_position.extend(0.5)),
        RigidBody::Static,
        Collider::rectangle(16.0, 16.0),
        CollisionLayers::new(GameLayer::Prop, [GameLayer::AttackTrigger]),
    ));

    info!("Arena spawned");
}
