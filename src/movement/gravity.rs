//! Movement domain: post-apex gravity modulation for a snappier fall.

use crate::movement::body::PhysicsBody;
use crate::movement::tasks::{TaskContext, TaskPoll};

/// Spawned per successful jump. Raises gravity once the body starts falling
/// and restores the default on landing or when it rises again.
///
/// An active dash owns the gravity scale: the modulator does not advance until
/// the dash has ended and restored the value it captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GravityModulator {
    #[default]
    AwaitingApex,
    Falling,
}

impl GravityModulator {
    pub(crate) fn poll<B: PhysicsBody>(&mut self, ctx: &mut TaskContext<'_, B>) -> TaskPoll {
        if ctx.state.is_dashing {
            return TaskPoll::Pending;
        }

        let vertical = ctx.body.velocity().y;
        match self {
            GravityModulator::AwaitingApex => {
                if vertical < 0.0 {
                    ctx.body.set_gravity_scale(ctx.config.jump_gravity_scale);
                    *self = GravityModulator::Falling;
                }
                TaskPoll::Pending
            }
            GravityModulator::Falling => {
                if ctx.state.is_grounded || vertical >= 0.0 {
                    ctx.body.set_gravity_scale(ctx.state.default_gravity_scale);
                    TaskPoll::Ready
                } else {
                    TaskPoll::Pending
                }
            }
        }
    }
}
