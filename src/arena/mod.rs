//! Arena domain: demo scene that exercises the movement controller.

mod spawn;

use bevy::prelude::*;

use crate::arena::spawn::{spawn_arena, spawn_player};

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_arena, spawn_player));
    }
}
