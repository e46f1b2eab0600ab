//! Players domain: death handling and timed respawn.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{ContactSet, DeathEvent, Health};
use crate::content::{ControllerConfig, PlayerId};
use crate::core::{SpawnPoints, SpawnRng};
use crate::movement::{Character, ControllerState, Suspended};
use crate::players::{KillEvent, Respawning, Scoreboard, reset_for_respawn};

/// Take killed characters out of play and report the kill.
pub(crate) fn process_deaths(
    mut commands: Commands,
    mut deaths: MessageReader<DeathEvent>,
    mut kills: MessageWriter<KillEvent>,
    mut scoreboard: ResMut<Scoreboard>,
    time: Res<Time>,
    config: Res<ControllerConfig>,
    players: Query<&PlayerId>,
    mut victims: Query<&mut LinearVelocity, (With<Character>, Without<Respawning>)>,
) {
    let now = time.elapsed_secs_f64();

    for death in deaths.read() {
        let Ok(victim) = players.get(death.entity) else {
            continue;
        };
        let Ok(mut velocity) = victims.get_mut(death.entity) else {
            // Already out of play
            continue;
        };

        let event = KillEvent {
            killer: players.get(death.killer).ok().copied(),
            victim: *victim,
        };
        scoreboard.record(&event);
        kills.write(event);

        match event.killer {
            Some(killer) => info!("{} killed {}", killer, event.victim),
            None => info!("{} died", event.victim),
        }

        velocity.0 = Vec2::ZERO;
        commands.entity(death.entity).insert((
            Suspended,
            Respawning::new(now, config.respawn_duration),
            Visibility::Hidden,
            RigidBodyDisabled,
            ColliderDisabled,
        ));
    }
}

/// Bring characters whose respawn delay ran out back at a random spawn point.
pub(crate) fn tick_respawns(
    mut commands: Commands,
    time: Res<Time>,
    spawn_points: Res<SpawnPoints>,
    mut rng: ResMut<SpawnRng>,
    mut query: Query<(
        Entity,
        &PlayerId,
        &Respawning,
        &mut Transform,
        &mut LinearVelocity,
        &mut Health,
        &mut ControllerState,
        &mut ContactSet,
    )>,
) {
    let now = time.elapsed_secs_f64();

    for (
        entity,
        player,
        respawning,
        mut transform,
        mut velocity,
        mut health,
        mut state,
        mut contacts,
    ) in &mut query
    {
        if !respawning.is_ready(now) {
            continue;
        }
        let Some(point) = spawn_points.random(&mut rng) else {
            error!("No spawn point to respawn {}", player);
            continue;
        };

        transform.translation.x = point.x;
        transform.translation.y = point.y;
        velocity.0 = Vec2::ZERO;
        reset_for_respawn(&mut health, &mut state, &mut contacts);

        commands
            .entity(entity)
            .remove::<(Suspended, Respawning, RigidBodyDisabled, ColliderDisabled)>()
            .insert(Visibility::Visible);

        info!("Respawned {} at {}", player, point);
    }
}
