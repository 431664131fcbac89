//! Boost domain: overlap handling for speed boost volumes.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::boost::{SpeedBoostVolume, boost_velocity_change};
use crate::movement::{MovementState, TriggerTag, match_block_pair};

pub(crate) fn apply_speed_boosts(
    fixed_time: Res<Time<Fixed>>,
    mut collision_events: MessageReader<CollisionStart>,
    volumes: Query<&SpeedBoostVolume>,
    tags: Query<&TriggerTag>,
    frames: Query<&GlobalTransform>,
    mut targets: Query<(&MovementState, &mut LinearVelocity)>,
) {
    let tick = fixed_time.timestep().as_secs_f32();

    for event in collision_events.read() {
        let Some((volume_entity, other)) = match_block_pair(
            event.collider1,
            event.collider2,
            |entity| volumes.contains(entity),
            |entity| tags.get(entity).ok().copied(),
        ) else {
            continue;
        };

        let Ok(volume) = volumes.get(volume_entity) else {
            continue;
        };

        let Ok((state, mut velocity)) = targets.get_mut(volume.target) else {
            panic!(
                "boost volume {volume_entity} target {} has no MovementState or body",
                volume.target
            );
        };

        let Ok(frame) = frames.get(volume.orientation) else {
            panic!(
                "boost volume {volume_entity} orientation {} has no transform",
                volume.orientation
            );
        };

        let Some(delta) = boost_velocity_change(state, *frame.forward(), volume.strength, tick)
        else {
            continue;
        };

        velocity.0 += delta;
        info!(
            "Speed boost from {other}: +{:.2} m/s (speed now {:.2})",
            delta.length(),
            velocity.length()
        );
    }
}
