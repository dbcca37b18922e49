//! Movement domain: dash execution and cooldown.

use bevy::prelude::*;

use crate::movement::body::PhysicsBody;
use crate::movement::components::MovementState;
use crate::movement::tasks::{TaskContext, TaskPoll};

/// Why a dash request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashRejection {
    CoolingDown,
    NoDirection,
    AlreadyDashing,
}

pub(crate) fn check_dash(state: &MovementState) -> Result<(), DashRejection> {
    if !state.dash_available {
        return Err(DashRejection::CoolingDown);
    }
    if state.movement_direction == 0.0 {
        return Err(DashRejection::NoDirection);
    }
    if state.is_dashing {
        return Err(DashRejection::AlreadyDashing);
    }
    Ok(())
}

/// An accepted dash, running until the body has covered the dash distance.
#[derive(Debug, Clone, PartialEq)]
pub struct DashTask {
    start: Vec2,
    impulse: Vec2,
    restore_gravity: f32,
}

impl DashTask {
    /// Launch the dash: impulse along the movement direction, vertical
    /// velocity passed through, gravity suspended until termination.
    pub(crate) fn launch<B: PhysicsBody>(
        body: &mut B,
        state: &mut MovementState,
        dash_speed: f32,
    ) -> Self {
        let start = body.position();
        let impulse = Vec2::new(state.movement_direction * dash_speed, body.velocity().y);

        body.apply_impulse(impulse);
        state.is_dashing = true;
        let restore_gravity = body.gravity_scale();
        body.set_gravity_scale(0.0);

        Self {
            start,
            impulse,
            restore_gravity,
        }
    }

    pub fn impulse(&self) -> Vec2 {
        self.impulse
    }

    pub(crate) fn poll<B: PhysicsBody>(&mut self, ctx: &mut TaskContext<'_, B>) -> TaskPoll {
        let travelled = self.start.distance(ctx.body.position());
        if travelled < ctx.config.dash_distance {
            return TaskPoll::Pending;
        }

        ctx.state.is_dashing = false;
        ctx.body.set_gravity_scale(self.restore_gravity);
        // Removes exactly the dash impulse; velocity gained from other forces stays.
        ctx.body.apply_impulse(-self.impulse);
        debug!("Dash finished after {:.2} units", travelled);
        TaskPoll::Ready
    }
}

/// Keeps the dash unavailable for a fixed time from the moment of the request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashCooldown {
    remaining: f32,
}

impl DashCooldown {
    pub(crate) fn start(state: &mut MovementState, duration: f32) -> Self {
        state.dash_available = false;
        Self {
            remaining: duration,
        }
    }

    pub(crate) fn poll<B: PhysicsBody>(&mut self, ctx: &mut TaskContext<'_, B>) -> TaskPoll {
        self.remaining -= ctx.elapsed;
        if self.remaining > 0.0 {
            return TaskPoll::Pending;
        }

        ctx.state.dash_available = true;
        TaskPoll::Ready
    }
}
