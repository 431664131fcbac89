//! Content domain: startup loading of movement tunables.

mod loader;
mod validation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::PathBuf;

use loader::load_movement_tuning;
use validation::validate_tuning;

use crate::movement::MovementTuning;

/// Inserts `MovementTuning` from `data_dir/movement.ron` when the app is
/// built, so the values are fixed before any system runs.
pub struct ContentPlugin {
    pub data_dir: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = match load_movement_tuning(&self.data_dir) {
            Ok(Some(tuning)) => {
                info!("Loaded movement tuning from {}", self.data_dir.display());
                tuning
            }
            Ok(None) => {
                warn!(
                    "No movement config in {}, using default tuning",
                    self.data_dir.display()
                );
                MovementTuning::default()
            }
            Err(e) => {
                error!("{}", e);
                panic!("movement config is unreadable: {e}");
            }
        };

        let errors = validate_tuning(&tuning);
        if !errors.is_empty() {
            for e in &errors {
                error!("{}", e);
            }
            panic!("movement config has {} invalid value(s)", errors.len());
        }

        debug!("{:?}", tuning);
        app.insert_resource(tuning);
    }
}
