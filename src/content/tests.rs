//! Content domain: tests for tunable parsing and validation.

use std::path::Path;

use super::loader::{load_movement_tuning, parse_single};
use super::validation::validate_tuning;
use crate::movement::MovementTuning;

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_partial_file_keeps_defaults() {
    let tuning: MovementTuning =
        parse_single("movement.ron", "(sprint_speed: 9.0, jump_rate: 4.0)").unwrap();

    assert_eq!(tuning.sprint_speed, 9.0);
    assert_eq!(tuning.jump_rate, 4.0);
    assert_eq!(tuning.walk_speed, MovementTuning::default().walk_speed);
    assert_eq!(tuning.crouch_scale, 0.75);
}

#[test]
fn test_empty_struct_is_default() {
    let tuning: MovementTuning = parse_single("movement.ron", "()").unwrap();
    assert_eq!(tuning, MovementTuning::default());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_single::<MovementTuning>("movement.ron", "(walk_speed: \"fast\")").unwrap_err();

    assert_eq!(err.file, "movement.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("movement.ron"));
}

#[test]
fn test_missing_directory_yields_none() {
    let result = load_movement_tuning(Path::new("definitely/not/a/data/dir")).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_shipped_config_is_valid() {
    let tuning = load_movement_tuning(&Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data"))
        .unwrap()
        .expect("assets/data/movement.ron should ship with the crate");

    assert!(validate_tuning(&tuning).is_empty());
    assert_eq!(tuning, MovementTuning::default());
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&MovementTuning::default()).is_empty());
}

#[test]
fn test_zero_jump_rate_rejected() {
    let tuning = MovementTuning {
        jump_rate: 0.0,
        ..Default::default()
    };

    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "jump_rate");
}

#[test]
fn test_every_bad_field_reported() {
    let tuning = MovementTuning {
        air_multiplier: 1.5,
        crouch_scale: 0.0,
        ground_distance: -0.1,
        player_mass: f32::NAN,
        ..Default::default()
    };

    let fields: Vec<_> = validate_tuning(&tuning).iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec!["air_multiplier", "crouch_scale", "ground_distance", "player_mass"]
    );
}

#[test]
fn test_player_height_must_fit_capsule() {
    let short = MovementTuning {
        player_height: 0.8,
        ..MovementTuning::default()
    };
    let errors = validate_tuning(&short);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "player_height");

    let minimal = MovementTuning {
        player_height: 1.0,
        ..MovementTuning::default()
    };
    assert!(validate_tuning(&minimal).is_empty());
}

#[test]
fn test_validation_error_display() {
    let tuning = MovementTuning {
        sprint_fov: 200.0,
        ..Default::default()
    };

    let errors = validate_tuning(&tuning);
    assert_eq!(
        errors[0].to_string(),
        "MovementTuning.sprint_fov = 200 is out of range (expected 0 < x < 180)"
    );
}
