//! Movement domain: collision probing against level geometry.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::probe::probe_directions;
use crate::movement::{Character, CollisionState, ProbeTag, Suspended, is_obstacle};

pub(crate) fn update_collision_probes(
    spatial_query: SpatialQuery,
    config: Res<ControllerConfig>,
    tags: Query<&ProbeTag>,
    mut query: Query<
        (Entity, &Transform, &Collider, &mut CollisionState),
        (With<Character>, Without<Suspended>),
    >,
) {
    let filter = SpatialQueryFilter::default();
    let predicate = |hit: Entity| is_obstacle(tags.get(hit).ok());

    for (entity, transform, collider, mut collision) in &mut query {
        let Some(cuboid) = collider.shape_scaled().as_cuboid() else {
            panic!("character {entity} must use a rectangle collider for probing");
        };
        let half_extents = Vec2::new(cuboid.half_extents.x, cuboid.half_extents.y);

        let probed = probe_directions(
            transform.translation.truncate(),
            half_extents,
            config.raycast_distance,
            |origin, direction, max_distance| {
                spatial_query
                    .cast_ray_predicate(origin, direction, max_distance, true, &filter, &predicate)
                    .is_some()
            },
        );

        if *collision != probed {
            trace!("Probe {}: {}", entity, probed);
            *collision = probed;
        }
    }
}
