//! Movement domain: ground probing and collide-and-slide.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, GroundHit, GroundProbe, MotionRequest, Player, PlayerController, Pose, ProbeShape,
};

/// Casts after the first hit before the rest of the move is dropped.
const MAX_SLIDES: usize = 4;

/// Gap kept between the controller and what it hits.
const CONTACT_SKIN: f32 = 0.01;

pub(crate) fn probe_ground(
    spatial_query: SpatialQuery,
    bodies: Query<&Transform, Without<Player>>,
    mut players: Query<
        (Entity, &Transform, &ProbeShape, &PlayerController, &mut GroundProbe),
        With<Player>,
    >,
) {
    for (entity, transform, probe, controller, mut result) in &mut players {
        let filter = SpatialQueryFilter::from_mask(controller.settings().ground_mask)
            .with_excluded_entities([entity]);
        let center = probe.center(transform.translation, transform.rotation);

        // Overlap order is backend-defined; the first body with a pose wins.
        let hit = spatial_query
            .shape_intersections(probe.collider(), center, transform.rotation, &filter)
            .into_iter()
            .find_map(|body| {
                bodies.get(body).ok().map(|body_transform| GroundHit {
                    body,
                    pose: Pose::from(body_transform),
                })
            });

        let tracked = controller
            .state()
            .ground_body
            .and_then(|body| bodies.get(body).ok())
            .map(Pose::from);

        *result = GroundProbe { hit, tracked };
    }
}

/// Move each controller by its requested displacement, sliding along ground
/// and walls instead of passing through them.
pub(crate) fn apply_motion(
    spatial_query: SpatialQuery,
    mut players: Query<(Entity, &Collider, &mut Transform, &mut MotionRequest), With<Player>>,
) {
    let blockers = [GameLayer::Ground, GameLayer::Wall];

    for (entity, collider, mut transform, mut request) in &mut players {
        let filter = SpatialQueryFilter::from_mask(blockers).with_excluded_entities([entity]);
        let start = transform.translation;
        let mut position = start;
        let mut remaining = request.displacement;

        for _ in 0..MAX_SLIDES {
            let Ok((direction, distance)) = Dir3::new_and_length(remaining) else {
                break;
            };

            let config = ShapeCastConfig {
                max_distance: distance + CONTACT_SKIN,
                ignore_origin_penetration: true,
                ..default()
            };
            let Some(hit) = spatial_query.cast_shape(
                collider,
                position,
                transform.rotation,
                direction,
                &config,
                &filter,
            ) else {
                position += remaining;
                remaining = Vec3::ZERO;
                break;
            };

            let travel = (hit.distance - CONTACT_SKIN).clamp(0.0, distance);
            position += direction * travel;

            let leftover = remaining - direction * travel;
            let normal = hit.normal1.normalize_or_zero();
            let into_surface = leftover.dot(normal);
            remaining = if into_surface < 0.0 {
                leftover - normal * into_surface
            } else {
                leftover
            };
        }

        if remaining.length_squared() > 0.0 {
            trace!("Dropped {} of motion after {} slides", remaining, MAX_SLIDES);
        }

        transform.translation = position;
        request.applied = position - start;
        request.displacement = Vec3::ZERO;
    }
}
