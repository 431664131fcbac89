//! Range checks for loaded tunables.

use crate::movement::{MovementTuning, PLAYER_RADIUS};

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MovementTuning.{} = {} is out of range (expected {})",
            self.field, self.value, self.expected
        )
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking a field against a predicate
macro_rules! check_range {
    ($errors:expr, $tuning:expr, $field:ident, $expected:expr, |$v:ident| $cond:expr) => {
        let $v = $tuning.$field;
        if !($cond) {
            $errors.push(ValidationError {
                field: stringify!($field),
                value: $v,
                expected: $expected,
            });
        }
    };
}

/// Validate every tunable.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_range!(errors, tuning, walk_speed, ">= 0", |v| v >= 0.0);
    check_range!(errors, tuning, sprint_speed, ">= 0", |v| v >= 0.0);
    check_range!(errors, tuning, crouch_speed, ">= 0", |v| v >= 0.0);
    check_range!(errors, tuning, initial_speed, ">= 0", |v| v >= 0.0);
    check_range!(errors, tuning, acceleration, ">= 0", |v| v >= 0.0);
    check_range!(errors, tuning, movement_multiplier, ">= 0", |v| v >= 0.0);
    check_range!(errors, tuning, air_multiplier, "0..=1", |v| v >= 0.0 && v <= 1.0);
    check_range!(errors, tuning, jump_force, ">= 0", |v| v >= 0.0);
    // Divides the jump cooldown
    check_range!(errors, tuning, jump_rate, "> 0", |v| v > 0.0);
    check_range!(errors, tuning, crouch_scale, "0 < x <= 1", |v| v > 0.0 && v <= 1.0);
    check_range!(errors, tuning, ground_drag, ">= 0", |v| v >= 0.0);
    check_range!(errors, tuning, air_drag, ">= 0", |v| v >= 0.0);
    check_range!(errors, tuning, ground_distance, "> 0", |v| v > 0.0);
    check_range!(errors, tuning, sprint_fov, "0 < x < 180", |v| v > 0.0 && v < 180.0);
    check_range!(errors, tuning, player_mass, "> 0", |v| v > 0.0);
    // Capsule segment and ground-check point need the full diameter
    check_range!(errors, tuning, player_height, ">= 1", |v| v >= 2.0 * PLAYER_RADIUS);
    check_range!(errors, tuning, look_sensitivity, ">= 0", |v| v >= 0.0);

    errors
}
