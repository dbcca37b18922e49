//! Movement domain: cooperative ability tasks polled once per tick.
//!
//! Each task is a small state machine standing in for a "wait for seconds" or
//! "wait until" routine. Tasks are tagged with the generation of the character
//! that spawned them; a task whose owner is gone is dropped without running.

use crate::content::ControllerConfig;
use crate::movement::body::PhysicsBody;
use crate::movement::components::MovementState;
use crate::movement::dash::{DashCooldown, DashTask};
use crate::movement::gravity::GravityModulator;

/// Identifies one lifetime of a character's ability state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation(u32);

impl Generation {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TaskPoll {
    Pending,
    Ready,
}

/// State a task may read and mutate during its poll.
pub(crate) struct TaskContext<'a, B: PhysicsBody> {
    pub body: &'a mut B,
    pub state: &'a mut MovementState,
    pub config: &'a ControllerConfig,
    /// Scaled seconds since the previous tick
    pub elapsed: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AbilityTask {
    JumpGravity(GravityModulator),
    Dash(DashTask),
    DashCooldown(DashCooldown),
    /// Restores the double jump once the character is grounded again
    DoubleJumpRecharge,
}

impl AbilityTask {
    fn poll<B: PhysicsBody>(&mut self, ctx: &mut TaskContext<'_, B>) -> TaskPoll {
        match self {
            AbilityTask::JumpGravity(modulator) => modulator.poll(ctx),
            AbilityTask::Dash(dash) => dash.poll(ctx),
            AbilityTask::DashCooldown(cooldown) => cooldown.poll(ctx),
            AbilityTask::DoubleJumpRecharge => {
                if ctx.state.is_grounded {
                    ctx.state.double_jump_available = true;
                    TaskPoll::Ready
                } else {
                    TaskPoll::Pending
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ScheduledTask {
    owner: Generation,
    task: AbilityTask,
}

/// In-flight tasks of one character, polled in spawn order.
#[derive(Debug, Clone, Default)]
pub(crate) struct TaskSet {
    tasks: Vec<ScheduledTask>,
}

impl TaskSet {
    pub fn spawn(&mut self, owner: Generation, task: AbilityTask) {
        self.tasks.push(ScheduledTask { owner, task });
    }

    /// Poll every live task once, dropping finished and orphaned ones.
    pub fn poll<B: PhysicsBody>(&mut self, current: Generation, ctx: &mut TaskContext<'_, B>) {
        self.tasks.retain_mut(|scheduled| {
            scheduled.owner == current && scheduled.task.poll(ctx) == TaskPoll::Pending
        });
    }

    pub fn discard_stale(&mut self, current: Generation) {
        self.tasks.retain(|scheduled| scheduled.owner == current);
    }

    pub fn live_count(&self, current: Generation) -> usize {
        self.tasks.iter().filter(|s| s.owner == current).count()
    }
}
