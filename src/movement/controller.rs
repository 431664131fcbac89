//! Movement domain: per-frame and fixed-step controller rules.
//!
//! Everything here is plain state math with no ECS access, so the systems
//! in `systems::movement` stay thin and the rules can be tested directly.

use bevy::prelude::*;

use crate::movement::speed::{SpeedContext, approach, blend_speed};
use crate::movement::{
    BASE_FOV, FOV_EASE_RATE, MovementInput, MovementState, MovementTuning, TriggerTag,
    UNCROUCH_SCALE,
};

/// How a force turns into a change of velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceMode {
    /// Mass-independent, scaled by the tick length (sustained movement)
    Acceleration,
    /// One-shot, divided by mass, independent of tick length (jumps)
    Impulse,
}

/// Velocity change from applying `force` to a body of `mass` for `dt`.
pub fn velocity_change(force: Vec3, mode: ForceMode, mass: f32, dt: f32) -> Vec3 {
    match mode {
        ForceMode::Acceleration => force * dt,
        ForceMode::Impulse => force / mass,
    }
}

/// Velocity after a jump: vertical component cleared, then the upward
/// impulse for a body of `mass`.
pub fn jump_velocity(velocity: Vec3, jump_force: f32, mass: f32) -> Vec3 {
    Vec3::new(velocity.x, 0.0, velocity.z)
        + velocity_change(Vec3::Y * jump_force, ForceMode::Impulse, mass, 0.0)
}

/// Match one overlap-enter pair against a Block trigger.
///
/// Returns `(source, trigger)` for the first ordering where `is_source`
/// accepts one collider and the other is tagged `TriggerTag::Block`, so a
/// single event never matches twice.
pub fn match_block_pair(
    collider1: Entity,
    collider2: Entity,
    is_source: impl Fn(Entity) -> bool,
    tag_of: impl Fn(Entity) -> Option<TriggerTag>,
) -> Option<(Entity, Entity)> {
    [(collider1, collider2), (collider2, collider1)]
        .into_iter()
        .find(|&(source, other)| is_source(source) && tag_of(other) == Some(TriggerTag::Block))
}

/// World data the frame update needs besides the input snapshot.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub dt: f32,
    /// Seconds since startup
    pub now: f32,
    /// Result of this frame's ground probe
    pub grounded: bool,
    pub forward: Vec3,
    pub right: Vec3,
}

/// Side effects the frame update asks the body to perform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameOutcome {
    /// Zero vertical velocity and apply the jump impulse
    pub jump: bool,
    /// New vertical scale of the body
    pub scale_y: Option<f32>,
}

/// Drag and force for one physics tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepOutcome {
    pub damping: f32,
    /// Acceleration-mode force along the move direction
    pub force: Vec3,
}

impl MovementState {
    /// Per-frame update: direction, jump timing, crouch edges, speed blend.
    pub fn update_frame(
        &mut self,
        tuning: &MovementTuning,
        input: &MovementInput,
        ctx: &FrameContext,
    ) -> FrameOutcome {
        self.grounded = ctx.grounded;

        self.move_direction = (ctx.forward * input.axis.y + ctx.right * input.axis.x)
            .normalize_or_zero();
        self.moving = self.move_direction != Vec3::ZERO;

        let jump = self.try_jump(tuning, input.jump_held, ctx.now);
        let scale_y = self.update_crouch(tuning, input);

        let blend = blend_speed(
            self.current_speed,
            tuning,
            &SpeedContext {
                moving: self.moving,
                sprint_held: input.sprint_held,
                crouch_held: input.crouch_held,
            },
            ctx.dt,
        );
        self.current_speed = blend.speed;
        self.sprinting = blend.sprinting;

        FrameOutcome { jump, scale_y }
    }

    /// Rate-limited autorepeat jump.
    ///
    /// The cooldown is consumed by every attempt, grounded or not, so an
    /// airborne press still delays the next jump by one interval.
    pub fn try_jump(&mut self, tuning: &MovementTuning, jump_held: bool, now: f32) -> bool {
        if !jump_held || now < self.next_jump_time {
            return false;
        }

        self.next_jump_time = now + tuning.jump_interval();
        self.grounded
    }

    /// Apply crouch key edges. Returns the new vertical scale, if any.
    ///
    /// Both edges are checked in order, so a press and release landing on
    /// the same frame leave the body standing at `UNCROUCH_SCALE`.
    pub fn update_crouch(&mut self, tuning: &MovementTuning, input: &MovementInput) -> Option<f32> {
        let mut scale_y = None;

        if input.crouch_just_pressed && !self.crouching {
            self.crouching = true;
            scale_y = Some(tuning.crouch_scale);
        }

        if input.crouch_just_released && self.crouching {
            self.crouching = false;
            scale_y = Some(UNCROUCH_SCALE);
        }

        scale_y
    }

    /// Drag and movement force for one physics tick.
    pub fn fixed_step(&self, tuning: &MovementTuning) -> FixedStepOutcome {
        let base = self.move_direction.normalize_or_zero()
            * self.current_speed
            * tuning.movement_multiplier;

        // Grounded and airborne cover every state; crouching has no force
        // branch of its own and only acts through `current_speed`.
        if self.grounded {
            FixedStepOutcome {
                damping: tuning.ground_drag,
                force: base,
            }
        } else {
            FixedStepOutcome {
                damping: tuning.air_drag,
                force: base * tuning.air_multiplier,
            }
        }
    }

    /// Overlap with a Block trigger. Returns true when sprint was cancelled.
    pub fn on_block_enter(&mut self) -> bool {
        if !self.sprinting {
            return false;
        }
        self.sprinting = false;
        true
    }

    pub fn fov_target(&self, tuning: &MovementTuning) -> f32 {
        if self.sprinting && self.moving {
            tuning.sprint_fov
        } else {
            BASE_FOV
        }
    }
}

/// One easing step of the camera field of view (degrees).
pub fn ease_fov(current: f32, target: f32, dt: f32) -> f32 {
    approach(current, target, FOV_EASE_RATE * dt)
}
