//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

/// Vertical scale restored on uncrouch. Fixed, it does not track the
/// scale the body had before crouching.
pub const UNCROUCH_SCALE: f32 = 0.9;

/// Capsule radius of the player body; `player_height` must be at least
/// twice this
pub const PLAYER_RADIUS: f32 = 0.5;

/// Field of view (degrees) the camera eases back to when not sprinting
pub const BASE_FOV: f32 = 90.0;

/// Exponential easing rate for the camera field of view, per second
pub const FOV_EASE_RATE: f32 = 8.0;

/// Read-only movement tunables, inserted once when the app is built.
///
/// Missing fields in `movement.ron` keep these defaults.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub crouch_speed: f32,
    /// Speed blend rate used by every speed resolver
    pub acceleration: f32,
    /// Force scale while airborne (< 1 reduces air control)
    pub air_multiplier: f32,
    pub movement_multiplier: f32,
    pub jump_force: f32,
    /// Jump attempts per second while the key is held
    pub jump_rate: f32,
    pub crouch_scale: f32,
    pub ground_drag: f32,
    pub air_drag: f32,
    /// Radius of the ground probe sphere
    pub ground_distance: f32,
    /// Field of view (degrees) while sprinting
    pub sprint_fov: f32,
    pub initial_speed: f32,
    pub player_mass: f32,
    pub player_height: f32,
    /// Radians per pixel of mouse motion
    pub look_sensitivity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 4.0,
            sprint_speed: 6.0,
            crouch_speed: 1.0,
            acceleration: 10.0,
            air_multiplier: 0.4,
            movement_multiplier: 10.0,
            jump_force: 5.0,
            jump_rate: 15.0,
            crouch_scale: 0.75,
            ground_drag: 6.0,
            air_drag: 2.0,
            ground_distance: 0.2,
            sprint_fov: 100.0,
            initial_speed: 6.0,
            player_mass: 1.0,
            player_height: 2.0,
            look_sensitivity: 0.002,
        }
    }
}

impl MovementTuning {
    /// Minimum time between two jump attempts while the key is held.
    pub fn jump_interval(&self) -> f32 {
        1.0 / self.jump_rate
    }
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub jump: KeyCode,
    pub sprint: KeyCode,
    pub crouch: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            jump: KeyCode::Space,
            sprint: KeyCode::ControlLeft,
            crouch: KeyCode::ShiftLeft,
        }
    }
}

/// Input snapshot sampled once per frame.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct MovementInput {
    /// Raw axes: x = horizontal (right positive), y = vertical (forward positive)
    pub axis: Vec2,
    pub jump_held: bool,
    pub sprint_held: bool,
    pub crouch_held: bool,
    pub crouch_just_pressed: bool,
    pub crouch_just_released: bool,
}
