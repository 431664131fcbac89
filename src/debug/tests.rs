//! Debug domain: tests for readout and snapshot formatting.

use bevy::prelude::Vec3;

use super::state::{info_text, snapshot};
use crate::movement::{MovementState, MovementTuning};

#[test]
fn test_info_text_reports_flags_and_speed() {
    let mut state = MovementState::new(6.0);
    state.grounded = true;
    state.sprinting = true;

    let text = info_text(&state, Vec3::new(3.0, 4.0, 0.0), Some(95.04));

    assert!(text.contains("grounded: true"));
    assert!(text.contains("sprinting: true"));
    assert!(text.contains("crouching: false"));
    assert!(text.contains("speed: 6.00"));
    assert!(text.contains("velocity: 5.00 (h 3.00)"));
    assert!(text.contains("fov: 95.0"));
}

#[test]
fn test_info_text_without_perspective_camera() {
    let text = info_text(&MovementState::new(0.0), Vec3::ZERO, None);
    assert!(text.ends_with("fov: -"));
}

#[test]
fn test_snapshot_contains_state_and_tuning() {
    let mut state = MovementState::new(4.0);
    state.crouching = true;
    let tuning = MovementTuning::default();

    let value = snapshot(&state, &tuning, Vec3::new(1.0, 0.0, 0.0));

    assert_eq!(value["state"]["crouching"], true);
    assert_eq!(value["state"]["current_speed"], 4.0);
    assert_eq!(value["velocity"][0], 1.0);
    assert_eq!(value["tuning"]["jump_rate"], 15.0);
}
