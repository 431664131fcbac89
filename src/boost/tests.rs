//! Boost domain: tests for boost eligibility and push size.

use bevy::prelude::*;

use super::{DEFAULT_BOOST_STRENGTH, SpeedBoostVolume, boost_velocity_change};
use crate::movement::MovementState;

const TICK: f32 = 1.0 / 50.0;

fn moving_state() -> MovementState {
    let mut state = MovementState::new(6.0);
    state.moving = true;
    state.move_direction = Vec3::NEG_Z;
    state
}

#[test]
fn test_new_volume_uses_default_strength() {
    let volume = SpeedBoostVolume::new(Entity::PLACEHOLDER, Entity::PLACEHOLDER);
    assert_eq!(volume.strength, 80.0);
    assert_eq!(volume.strength, DEFAULT_BOOST_STRENGTH);
}

#[test]
fn test_moving_standing_player_is_boosted_forward() {
    let delta = boost_velocity_change(&moving_state(), Vec3::NEG_Z, DEFAULT_BOOST_STRENGTH, TICK)
        .expect("moving, standing player should be boosted");

    assert!(delta.abs_diff_eq(Vec3::NEG_Z * 80.0 * TICK, 1e-6));
}

#[test]
fn test_boost_direction_is_normalized() {
    let delta =
        boost_velocity_change(&moving_state(), Vec3::new(0.0, 0.0, -3.0), 80.0, TICK).unwrap();

    assert!((delta.length() - 80.0 * TICK).abs() < 1e-5);
}

#[test]
fn test_crouching_player_never_boosted() {
    let mut state = moving_state();
    state.crouching = true;
    assert!(boost_velocity_change(&state, Vec3::NEG_Z, 80.0, TICK).is_none());

    state.moving = false;
    state.move_direction = Vec3::ZERO;
    assert!(boost_velocity_change(&state, Vec3::NEG_Z, 80.0, TICK).is_none());
}

#[test]
fn test_idle_player_not_boosted() {
    let state = MovementState::new(6.0);
    assert!(boost_velocity_change(&state, Vec3::NEG_Z, 80.0, TICK).is_none());
}

#[test]
fn test_sprint_state_does_not_matter() {
    let mut state = moving_state();
    state.sprinting = false;
    let walking = boost_velocity_change(&state, Vec3::X, 80.0, TICK);

    state.sprinting = true;
    let sprinting = boost_velocity_change(&state, Vec3::X, 80.0, TICK);

    assert!(walking.is_some());
    assert_eq!(walking, sprinting);
}
