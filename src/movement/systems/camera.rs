//! Movement domain: mouse look and sprint field of view.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::movement::controller::ease_fov;
use crate::movement::{
    ControllerRefs, MovementState, MovementTuning, Orientation, Player, PlayerCamera,
};

const PITCH_LIMIT: f32 = 89.0_f32 * std::f32::consts::PI / 180.0;

/// Vertical field of view in degrees, `None` for orthographic cameras.
pub(crate) fn fov_degrees(projection: &Projection) -> Option<f32> {
    match projection {
        Projection::Perspective(perspective) => Some(perspective.fov.to_degrees()),
        _ => None,
    }
}

pub(crate) fn set_fov_degrees(projection: &mut Projection, degrees: f32) {
    if let Projection::Perspective(perspective) = projection {
        perspective.fov = degrees.to_radians();
    }
}

pub(crate) fn apply_look(
    mouse_motion: Res<AccumulatedMouseMotion>,
    tuning: Res<MovementTuning>,
    mut orientations: Query<(&mut Orientation, &mut Transform)>,
    mut cameras: Query<&mut PlayerCamera>,
) {
    let delta = mouse_motion.delta;
    if delta == Vec2::ZERO {
        return;
    }

    for (mut orientation, mut transform) in &mut orientations {
        orientation.yaw -= delta.x * tuning.look_sensitivity;
        transform.rotation = Quat::from_rotation_y(orientation.yaw);
    }

    for mut camera in &mut cameras {
        camera.pitch =
            (camera.pitch - delta.y * tuning.look_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

/// Keep the camera at eye height above the player, looking along the
/// orientation yaw and the camera's own pitch.
///
/// The camera is not parented to the player so crouch scaling moves the
/// eye down without squashing the view.
pub(crate) fn follow_player(
    players: Query<(Entity, &Transform, &ControllerRefs), With<Player>>,
    orientations: Query<&Orientation>,
    mut cameras: Query<(&PlayerCamera, &mut Transform), Without<Player>>,
) {
    for (entity, player_transform, refs) in &players {
        let Ok(orientation) = orientations.get(refs.orientation) else {
            panic!(
                "player {entity} orientation {} is missing or not tagged Orientation",
                refs.orientation
            );
        };
        let Ok((camera, mut transform)) = cameras.get_mut(refs.camera) else {
            panic!(
                "player {entity} camera {} is missing or not tagged PlayerCamera",
                refs.camera
            );
        };

        transform.translation =
            player_transform.translation + Vec3::Y * camera.eye_height * player_transform.scale.y;
        transform.rotation =
            Quat::from_rotation_y(orientation.yaw) * Quat::from_rotation_x(camera.pitch);
    }
}

/// Ease the camera toward the sprint field of view, or back to baseline.
pub(crate) fn update_camera_fov(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    players: Query<(Entity, &ControllerRefs, &MovementState), With<Player>>,
    mut cameras: Query<&mut Projection, With<PlayerCamera>>,
) {
    for (entity, refs, state) in &players {
        let Ok(mut projection) = cameras.get_mut(refs.camera) else {
            panic!(
                "player {entity} camera {} is missing or not tagged PlayerCamera",
                refs.camera
            );
        };

        let Some(fov) = fov_degrees(&projection) else {
            continue;
        };

        let eased = ease_fov(fov, state.fov_target(&tuning), time.delta_secs());
        set_fov_degrees(&mut projection, eased);
    }
}
