//! Movement domain: ground probe and trigger overlap systems.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::ease_fov;
use crate::movement::systems::camera::{fov_degrees, set_fov_degrees};
use crate::movement::{
    BASE_FOV, ControllerRefs, GameLayer, GroundCheck, MovementState, MovementTuning, Player,
    PlayerCamera, TriggerTag, match_block_pair,
};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    probes: Query<&GlobalTransform, With<GroundCheck>>,
    mut query: Query<(Entity, &ControllerRefs, &mut MovementState), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not triggers or the player)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let probe_shape = Collider::sphere(tuning.ground_distance);

    for (entity, refs, mut state) in &mut query {
        let Ok(probe) = probes.get(refs.ground_check) else {
            panic!(
                "player {entity} ground check {} is missing or not tagged GroundCheck",
                refs.ground_check
            );
        };

        let was_grounded = state.grounded;
        let hits = spatial_query.shape_intersections(
            &probe_shape,
            probe.translation(),
            Quat::IDENTITY,
            &ground_filter,
        );

        state.grounded = !hits.is_empty();

        if state.grounded && !was_grounded {
            debug!("Landed: crouching={}", state.crouching);
        } else if !state.grounded && was_grounded {
            debug!("Left ground: speed={:.2}", state.current_speed);
        }
    }
}

/// Overlap-enter with a Block trigger cancels sprint and eases the view
/// back one step.
pub(crate) fn handle_block_triggers(
    time: Res<Time>,
    mut collision_events: MessageReader<CollisionStart>,
    tags: Query<&TriggerTag>,
    mut players: Query<(&ControllerRefs, &mut MovementState), With<Player>>,
    mut cameras: Query<&mut Projection, With<PlayerCamera>>,
) {
    for event in collision_events.read() {
        let Some((player_entity, other)) = match_block_pair(
            event.collider1,
            event.collider2,
            |entity| players.contains(entity),
            |entity| tags.get(entity).ok().copied(),
        ) else {
            continue;
        };

        let Ok((refs, mut state)) = players.get_mut(player_entity) else {
            continue;
        };

        if !state.on_block_enter() {
            continue;
        }

        let Ok(mut projection) = cameras.get_mut(refs.camera) else {
            panic!(
                "player {player_entity} camera {} is missing or not tagged PlayerCamera",
                refs.camera
            );
        };

        if let Some(fov) = fov_degrees(&projection) {
            set_fov_degrees(&mut projection, ease_fov(fov, BASE_FOV, time.delta_secs()));
        }

        debug!("Sprint cancelled by Block trigger {other}");
    }
}
