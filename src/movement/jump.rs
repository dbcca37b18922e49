//! Movement domain: single and double jump arbitration.

use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::body::PhysicsBody;
use crate::movement::components::MovementState;

/// Vertical speed below which a grounded body counts as settled.
pub const SETTLED_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Jump from the ground or within the coyote window
    Jumped,
    /// Second jump in the air; the double jump is spent until landing
    DoubleJumped,
    /// Outside the coyote window with no double jump to spend
    Rejected,
}

/// Decide what a jump request does and update the counters accordingly.
/// The counter increment sticks even when the request is rejected.
pub(crate) fn arbitrate(state: &mut MovementState, config: &ControllerConfig) -> JumpOutcome {
    state.jump_counter += 1;

    if config.allow_double_jump && state.double_jump_available && state.jump_counter == 2 {
        state.double_jump_available = false;
        state.jump_counter = 0;
        return JumpOutcome::DoubleJumped;
    }

    if !state.coyote.is_open() {
        return JumpOutcome::Rejected;
    }

    JumpOutcome::Jumped
}

/// Zero the vertical velocity, then push straight up.
pub(crate) fn launch<B: PhysicsBody>(body: &mut B, jump_speed: f32) {
    let velocity = body.velocity();
    body.set_velocity(Vec2::new(velocity.x, 0.0));
    body.apply_impulse(Vec2::Y * jump_speed);
}

/// The counter only resets once the body has settled on the ground, so a
/// bounce that touches the ground mid-jump does not refund a jump.
pub(crate) fn reset_counter_if_settled(state: &mut MovementState, vertical_velocity: f32) {
    if state.is_grounded && vertical_velocity.abs() <= SETTLED_EPSILON {
        state.jump_counter = 0;
    }
}
