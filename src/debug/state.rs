//! Debug domain: overlay state and snapshot formatting.

use bevy::prelude::*;
use serde_json::{Value, json};

use crate::movement::{MovementState, MovementTuning};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the movement readout is visible
    pub show_info: bool,
    /// Number of snapshots logged this session
    pub snapshots: u32,
}

/// Multi-line readout shown in the overlay.
pub(crate) fn info_text(state: &MovementState, velocity: Vec3, fov: Option<f32>) -> String {
    let horizontal = Vec3::new(velocity.x, 0.0, velocity.z).length();
    let fov = fov.map_or_else(|| "-".to_string(), |f| format!("{f:.1}"));

    format!(
        "grounded: {}\nmoving: {}\nsprinting: {}\ncrouching: {}\nspeed: {:.2}\nvelocity: {:.2} (h {:.2})\nfov: {}",
        state.grounded,
        state.moving,
        state.sprinting,
        state.crouching,
        state.current_speed,
        velocity.length(),
        horizontal,
        fov
    )
}

/// JSON snapshot of the controller for bug reports.
pub(crate) fn snapshot(state: &MovementState, tuning: &MovementTuning, velocity: Vec3) -> Value {
    json!({
        "state": {
            "grounded": state.grounded,
            "moving": state.moving,
            "sprinting": state.sprinting,
            "crouching": state.crouching,
            "current_speed": state.current_speed,
            "move_direction": [state.move_direction.x, state.move_direction.y, state.move_direction.z],
            "next_jump_time": state.next_jump_time,
        },
        "velocity": [velocity.x, velocity.y, velocity.z],
        "tuning": {
            "walk_speed": tuning.walk_speed,
            "sprint_speed": tuning.sprint_speed,
            "crouch_speed": tuning.crouch_speed,
            "acceleration": tuning.acceleration,
            "jump_rate": tuning.jump_rate,
            "sprint_fov": tuning.sprint_fov,
        },
    })
}
