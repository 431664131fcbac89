//! Debug overlay for tuning movement feel (dev-tools only).
//!
//! Features:
//! - F1 toggles a live readout of the player's `MovementState`
//! - F2 logs a JSON snapshot of the state and tuning

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::systems::{dump_snapshot, toggle_info_overlay, update_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_info_overlay, dump_snapshot))
            .add_systems(
                Update,
                update_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            );
    }
}
