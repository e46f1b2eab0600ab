//! Debug domain: hotkeys, probe gizmos and the info overlay.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{Health, Shortcut};
use crate::content::{ControllerConfig, PlayerId};
use crate::core::MatchConfig;
use crate::debug::state::{DebugState, kill_line, player_line};
use crate::movement::probe::probe_directions;
use crate::movement::{Character, CollisionState, ControllerState, Suspended};
use crate::players::{KillEvent, Scoreboard};

/// Marker for the debug info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// F3 toggles the info overlay, F4 the probe rays, F5 opens every shortcut.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut shortcuts: Query<&mut Shortcut>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        let msg = if debug_state.show_info {
            "Debug Info ON"
        } else {
            "Debug Info OFF"
        };
        debug_state.set_message(msg, 2.0);
        info!("[DEBUG] {}", msg);
    }

    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_probes = !debug_state.show_probes;
        let msg = if debug_state.show_probes {
            "Probe rays ON"
        } else {
            "Probe rays OFF"
        };
        debug_state.set_message(msg, 2.0);
        info!("[DEBUG] {}", msg);
    }

    if keyboard.just_pressed(KeyCode::F5) {
        let opened = shortcuts
            .iter_mut()
            .map(|mut shortcut| shortcut.open_window())
            .filter(|&opened| opened)
            .count();
        debug_state.set_message(format!("Opened {} shortcut(s)", opened), 2.0);
        info!("[DEBUG] Opened {} shortcut(s)", opened);
    }
}

pub(crate) fn record_kills(
    mut kills: MessageReader<KillEvent>,
    mut debug_state: ResMut<DebugState>,
) {
    if let Some(kill) = kills.read().last() {
        debug_state.last_kill = Some(*kill);
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}

/// Draw the four probe rays per character; red where the probe hits.
pub(crate) fn draw_probe_rays(
    mut gizmos: Gizmos,
    config: Res<ControllerConfig>,
    query: Query<(&Transform, &Collider, &CollisionState), (With<Character>, Without<Suspended>)>,
) {
    for (transform, collider, collision) in &query {
        let Some(cuboid) = collider.shape_scaled().as_cuboid() else {
            continue;
        };
        let half_extents = Vec2::new(cuboid.half_extents.x, cuboid.half_extents.y);
        let center = transform.translation.truncate();

        let mut rays = Vec::with_capacity(4);
        probe_directions(
            center,
            half_extents,
            config.raycast_distance,
            |origin, direction, length| {
                rays.push((origin, direction, length));
                false
            },
        );

        let hits = [collision.up, collision.down, collision.left, collision.right];
        for ((origin, direction, length), hit) in rays.into_iter().zip(hits) {
            let color = if hit {
                Color::srgb(0.95, 0.2, 0.2)
            } else {
                Color::srgb(0.3, 0.9, 0.4)
            };
            gizmos.line_2d(origin, origin + *direction * length, color);
        }
    }
}

/// Update the debug info overlay with per-player controller state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    match_config: Res<MatchConfig>,
    scoreboard: Res<Scoreboard>,
    players: Query<(&PlayerId, &Health, &ControllerState, &CollisionState), With<Character>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let mut rows: Vec<_> = players.iter().collect();
    rows.sort_by_key(|(player, ..)| player.index());

    let mut lines = vec![format!("Seed: {}", match_config.seed)];
    lines.extend(rows.into_iter().map(|(player, health, state, collision)| {
        player_line(*player, health, state, collision, &scoreboard)
    }));
    if let Some(kill) = &debug_state.last_kill {
        lines.push(kill_line(kill));
    }
    if let Some((message, _)) = &debug_state.status_message {
        lines.push(message.clone());
    }

    **text = lines.join("\n");
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
