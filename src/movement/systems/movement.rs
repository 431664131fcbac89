//! Movement domain: controller state updates and force application.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::{ForceMode, FrameContext, jump_velocity, velocity_change};
use crate::movement::{
    ControllerRefs, MovementInput, MovementState, MovementTuning, Orientation, Player,
};

/// Per-frame hook: project input, jump, crouch and blend speed.
pub(crate) fn update_controller(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    orientations: Query<&GlobalTransform, With<Orientation>>,
    mut query: Query<
        (
            Entity,
            &ControllerRefs,
            &mut MovementState,
            &mut LinearVelocity,
            &Mass,
            &mut Transform,
        ),
        With<Player>,
    >,
) {
    for (entity, refs, mut state, mut velocity, mass, mut transform) in &mut query {
        let Ok(orientation) = orientations.get(refs.orientation) else {
            panic!(
                "player {entity} orientation {} is missing or not tagged Orientation",
                refs.orientation
            );
        };

        let ctx = FrameContext {
            dt: time.delta_secs(),
            now: time.elapsed_secs(),
            grounded: state.grounded,
            forward: *orientation.forward(),
            right: *orientation.right(),
        };

        let was_sprinting = state.sprinting;
        let outcome = state.update_frame(&tuning, &input, &ctx);

        if outcome.jump {
            velocity.0 = jump_velocity(velocity.0, tuning.jump_force, mass.0);
            debug!("Jump: crouching={}, next at {:.3}s", state.crouching, state.next_jump_time);
        }

        if let Some(scale_y) = outcome.scale_y {
            transform.scale.y = scale_y;
            debug!("Crouch: crouching={}, scale_y={}", state.crouching, scale_y);
        }

        if state.sprinting != was_sprinting {
            debug!("Sprinting: {}", state.sprinting);
        }
    }
}

/// Fixed-rate hook: drag and movement force.
pub(crate) fn apply_fixed_step(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (&MovementState, &Mass, &mut LinearVelocity, &mut LinearDamping),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (state, mass, mut velocity, mut damping) in &mut query {
        let step = state.fixed_step(&tuning);

        damping.0 = step.damping;
        velocity.0 += velocity_change(step.force, ForceMode::Acceleration, mass.0, dt);
    }
}
