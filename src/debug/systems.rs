//! Debug domain: hotkeys and overlay refresh.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::{DebugState, info_text, snapshot};
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{ControllerRefs, MovementState, MovementTuning, Player, PlayerCamera};

/// Toggle the movement readout with F1 or backtick key
pub(crate) fn toggle_info_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);
    if !toggle {
        return;
    }

    debug_state.show_info = !debug_state.show_info;

    if debug_state.show_info {
        spawn_debug_info_overlay(&mut commands);
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
    info!("[DEBUG] Movement overlay {}", if debug_state.show_info { "ON" } else { "OFF" });
}

pub(crate) fn update_info_overlay(
    players: Query<(&MovementState, &LinearVelocity, &ControllerRefs), With<Player>>,
    cameras: Query<&Projection, With<PlayerCamera>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let Some((state, velocity, refs)) = players.iter().next() else {
        return;
    };

    let fov = match cameras.get(refs.camera) {
        Ok(Projection::Perspective(perspective)) => Some(perspective.fov.to_degrees()),
        _ => None,
    };

    for mut text in &mut overlay_query {
        **text = info_text(state, velocity.0, fov);
    }
}

/// Log a JSON snapshot of every player with F2
pub(crate) fn dump_snapshot(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<MovementTuning>,
    mut debug_state: ResMut<DebugState>,
    players: Query<(Entity, &MovementState, &LinearVelocity), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }

    for (entity, state, velocity) in &players {
        debug_state.snapshots += 1;
        info!(
            "[DEBUG] snapshot #{} for {}: {}",
            debug_state.snapshots,
            entity,
            snapshot(state, &tuning, velocity.0)
        );
    }
}
