//! Movement domain: first-person controller plugin wiring and public exports.

mod components;
mod controller;
mod resources;
mod speed;
mod systems;


pub use components::{
    ControllerRefs, GameLayer, Ground, GroundCheck, MovementState, Orientation, Player,
    PlayerCamera, TriggerTag,
};
pub use controller::{ForceMode, match_block_pair, velocity_change};
pub use resources::{
    BASE_FOV, FOV_EASE_RATE, KeyBindings, MovementInput, MovementTuning, PLAYER_RADIUS,
    UNCROUCH_SCALE,
};

use bevy::prelude::*;

use crate::movement::systems::{
    apply_fixed_step, apply_look, detect_ground, follow_player, handle_block_triggers,
    read_input, update_camera_fov, update_controller,
};

/// Physics tick rate for the fixed-step movement force
pub const FIXED_TIMESTEP_HZ: f64 = 50.0;

/// Per-frame controller systems. Readers of `MovementState` in `Update`
/// order themselves after this set to see the current frame's state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSystems;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<KeyBindings>()
            .init_resource::<MovementInput>()
            .insert_resource(Time::<Fixed>::from_hz(FIXED_TIMESTEP_HZ))
            .add_systems(
                Update,
                (
                    read_input,
                    apply_look,
                    detect_ground,
                    update_controller,
                    handle_block_triggers,
                    update_camera_fov,
                    follow_player,
                )
                    .chain()
                    .in_set(MovementSystems),
            )
            .add_systems(FixedUpdate, apply_fixed_step);
    }
}
