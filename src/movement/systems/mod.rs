//! Movement domain: system modules for locomotion updates.

pub(crate) mod camera;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use camera::{apply_look, follow_player, update_camera_fov};
pub(crate) use collisions::{detect_ground, handle_block_triggers};
pub(crate) use input::read_input;
pub(crate) use movement::{apply_fixed_step, update_controller};
