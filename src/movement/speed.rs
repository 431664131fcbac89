//! Movement domain: ordered speed-target resolvers.
//!
//! Every resolver in `SPEED_PIPELINE` may claim a target speed for the
//! frame. Resolvers are listed lowest priority first and the last claim
//! wins, so crouch overrides sprint and sprint overrides walk. The speed
//! is then eased toward that single target.

use crate::movement::MovementTuning;

/// Inputs the resolvers look at.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedContext {
    pub moving: bool,
    pub sprint_held: bool,
    pub crouch_held: bool,
}

pub struct SpeedResolver {
    pub name: &'static str,
    claim: fn(&MovementTuning, &SpeedContext) -> Option<f32>,
}

impl SpeedResolver {
    pub fn claim(&self, tuning: &MovementTuning, ctx: &SpeedContext) -> Option<f32> {
        (self.claim)(tuning, ctx)
    }
}

/// Priority order, lowest first.
pub const SPEED_PIPELINE: [SpeedResolver; 3] = [
    SpeedResolver {
        name: "walk",
        claim: walk_claim,
    },
    SpeedResolver {
        name: "sprint",
        claim: sprint_claim,
    },
    SpeedResolver {
        name: "crouch",
        claim: crouch_claim,
    },
];

fn walk_claim(tuning: &MovementTuning, _ctx: &SpeedContext) -> Option<f32> {
    Some(tuning.walk_speed)
}

fn sprint_claim(tuning: &MovementTuning, ctx: &SpeedContext) -> Option<f32> {
    is_sprinting(ctx).then_some(tuning.sprint_speed)
}

fn crouch_claim(tuning: &MovementTuning, ctx: &SpeedContext) -> Option<f32> {
    ctx.crouch_held.then_some(tuning.crouch_speed)
}

/// Sprinting only needs the key and some movement; a held crouch key
/// lowers the speed but does not clear the flag.
pub fn is_sprinting(ctx: &SpeedContext) -> bool {
    ctx.sprint_held && ctx.moving
}

/// The winning resolver and its target for this frame.
pub fn resolve_target(tuning: &MovementTuning, ctx: &SpeedContext) -> (&'static str, f32) {
    SPEED_PIPELINE
        .iter()
        .filter_map(|resolver| resolver.claim(tuning, ctx).map(|speed| (resolver.name, speed)))
        .last()
        .unwrap_or(("walk", tuning.walk_speed))
}

/// Linear interpolation with `t` clamped to [0, 1], so a large frame time
/// lands on the target instead of overshooting it.
pub fn approach(current: f32, target: f32, t: f32) -> f32 {
    current + (target - current) * t.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendResult {
    pub speed: f32,
    pub sprinting: bool,
}

/// Ease `current` toward the resolved target for a frame of length `dt`.
pub fn blend_speed(
    current: f32,
    tuning: &MovementTuning,
    ctx: &SpeedContext,
    dt: f32,
) -> BlendResult {
    let (_, target) = resolve_target(tuning, ctx);

    BlendResult {
        speed: approach(current, target, tuning.acceleration * dt),
        sprinting: is_sprinting(ctx),
    }
}
