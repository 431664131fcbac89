//! Boost domain: trigger volumes that push the player forward.

mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::boost::systems::apply_speed_boosts;
use crate::movement::{ForceMode, MovementState, MovementSystems, velocity_change};

/// Acceleration applied for one physics tick on a qualifying overlap
pub const DEFAULT_BOOST_STRENGTH: f32 = 80.0;

/// Pushes `target` along `orientation`'s forward direction when this
/// collider starts overlapping a Block trigger.
///
/// Both references are injected at scene setup and never re-resolved by name.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpeedBoostVolume {
    /// Player entity carrying `MovementState` and the rigid body
    pub target: Entity,
    /// Reference frame giving the push direction
    pub orientation: Entity,
    pub strength: f32,
}

impl SpeedBoostVolume {
    pub fn new(target: Entity, orientation: Entity) -> Self {
        Self {
            target,
            orientation,
            strength: DEFAULT_BOOST_STRENGTH,
        }
    }
}

/// Velocity change for a boost, or `None` if the target does not qualify.
///
/// Only a moving, standing controller is boosted.
pub fn boost_velocity_change(
    state: &MovementState,
    forward: Vec3,
    strength: f32,
    tick: f32,
) -> Option<Vec3> {
    if !state.moving || state.crouching {
        return None;
    }

    Some(velocity_change(
        forward.normalize_or_zero() * strength,
        ForceMode::Acceleration,
        1.0,
        tick,
    ))
}

pub struct BoostPlugin;

impl Plugin for BoostPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_speed_boosts.after(MovementSystems));
    }
}
