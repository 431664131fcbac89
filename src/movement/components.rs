//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces, the only layer the ground probe hits
    Ground,
    /// Player body
    Player,
    /// Triggers (boost pads, markers) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-frame locomotion state owned by the controller systems.
///
/// `moving` always mirrors `move_direction != Vec3::ZERO`. Crouching and
/// jumping are independent: a crouched, grounded player can still jump.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementState {
    pub grounded: bool,
    pub moving: bool,
    pub sprinting: bool,
    pub crouching: bool,
    pub current_speed: f32,
    pub move_direction: Vec3,
    /// Elapsed-time stamp before which a held jump key is ignored
    pub next_jump_time: f32,
}

impl MovementState {
    pub fn new(initial_speed: f32) -> Self {
        Self {
            grounded: false,
            moving: false,
            sprinting: false,
            crouching: false,
            current_speed: initial_speed,
            move_direction: Vec3::ZERO,
            next_jump_time: 0.0,
        }
    }
}

/// Scene references the controller resolves every frame.
///
/// Injected once at spawn. A reference that no longer resolves is a scene
/// setup error and the movement systems panic on it.
#[derive(Component, Debug, Clone, Copy)]
pub struct ControllerRefs {
    /// Yaw-only frame giving forward/right for input projection
    pub orientation: Entity,
    /// Point at the player's feet where the ground probe is centered
    pub ground_check: Entity,
    /// Camera whose field of view follows sprinting
    pub camera: Entity,
}

/// Yaw-only reference frame for projecting input onto the ground plane
#[derive(Component, Debug, Default)]
pub struct Orientation {
    pub yaw: f32,
}

/// Marker for the ground probe point
#[derive(Component, Debug)]
pub struct GroundCheck;

/// First-person camera. Pitch is stored here so look input can clamp it.
#[derive(Component, Debug)]
pub struct PlayerCamera {
    pub pitch: f32,
    /// Eye offset above the body origin at unit vertical scale
    pub eye_height: f32,
}

/// Category tag carried by trigger colliders.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerTag {
    /// Environment marker: cancels sprint and fires boost volumes
    Block,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
