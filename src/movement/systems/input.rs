//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{KeyBindings, MovementInput};

/// Build the per-frame input snapshot from raw key state.
///
/// Axes are raw: each is -1, 0 or 1 and opposing keys cancel out.
pub fn sample_input(keyboard: &ButtonInput<KeyCode>, bindings: &KeyBindings) -> MovementInput {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (forward/back)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    MovementInput {
        axis: Vec2::new(x, y),
        jump_held: keyboard.pressed(bindings.jump),
        sprint_held: keyboard.pressed(bindings.sprint),
        crouch_held: keyboard.pressed(bindings.crouch),
        crouch_just_pressed: keyboard.just_pressed(bindings.crouch),
        crouch_just_released: keyboard.just_released(bindings.crouch),
    }
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<MovementInput>,
) {
    *input = sample_input(&keyboard, &bindings);
}
