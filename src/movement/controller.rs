//! Movement domain: per-character ability controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::body::PhysicsBody;
use crate::movement::components::MovementState;
use crate::movement::dash::{self, DashCooldown, DashRejection, DashTask};
use crate::movement::ground::{GroundProbe, GroundSensor};
use crate::movement::gravity::GravityModulator;
use crate::movement::input::InputSample;
use crate::movement::jump::{self, JumpOutcome};
use crate::movement::tasks::{AbilityTask, Generation, TaskContext, TaskSet};

/// A required collaborator missing from a character at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerSetupError {
    MissingRigidBody,
    MissingCollider,
    /// The ground sensor needs a circle collider for its probe spacing
    UnsupportedCollider,
    MissingVelocity,
    MissingGravityScale,
}

impl std::fmt::Display for ControllerSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            ControllerSetupError::MissingRigidBody => "no rigid body",
            ControllerSetupError::MissingCollider => "no collider",
            ControllerSetupError::UnsupportedCollider => "collider is not a circle",
            ControllerSetupError::MissingVelocity => "no linear velocity",
            ControllerSetupError::MissingGravityScale => "no gravity scale",
        };
        write!(f, "cannot attach ability controller: {}", reason)
    }
}

/// Owns the ability state of one character and drives it once per tick.
#[derive(Component, Debug)]
pub struct AbilityController {
    pub(crate) config: ControllerConfig,
    pub(crate) sensor: GroundSensor,
    pub(crate) state: MovementState,
    pub(crate) tasks: TaskSet,
    generation: Generation,
    retired: bool,
}

impl AbilityController {
    pub fn new(config: ControllerConfig, half_width: f32, default_gravity_scale: f32) -> Self {
        let sensor = GroundSensor::new(half_width, config.grounded_ray_distance);
        let state = MovementState::new(&config, default_gravity_scale);
        Self {
            config,
            sensor,
            state,
            tasks: TaskSet::default(),
            generation: Generation::default(),
            retired: false,
        }
    }

    /// Build a controller for a spawned character, checking its collaborators.
    pub fn for_body(
        config: &ControllerConfig,
        has_rigid_body: bool,
        collider: Option<&Collider>,
        has_velocity: bool,
        gravity_scale: Option<&GravityScale>,
    ) -> Result<Self, ControllerSetupError> {
        if !has_rigid_body {
            return Err(ControllerSetupError::MissingRigidBody);
        }
        let collider = collider.ok_or(ControllerSetupError::MissingCollider)?;
        let radius = collider
            .shape_scaled()
            .as_ball()
            .map(|ball| ball.radius)
            .ok_or(ControllerSetupError::UnsupportedCollider)?;
        if !has_velocity {
            return Err(ControllerSetupError::MissingVelocity);
        }
        let gravity_scale = gravity_scale.ok_or(ControllerSetupError::MissingGravityScale)?;

        Ok(Self::new(config.clone(), radius, gravity_scale.0))
    }

    pub fn movement_direction(&self) -> f32 {
        self.state.movement_direction
    }

    pub fn move_speed(&self) -> f32 {
        self.config.move_speed
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn sensor(&self) -> &GroundSensor {
        &self.sensor
    }

    pub fn is_retired(&self) -> bool {
        self.retired
    }

    pub fn active_tasks(&self) -> usize {
        self.tasks.live_count(self.generation)
    }

    /// End this character's lifetime. In-flight tasks become inert and later
    /// ticks leave the body untouched.
    pub fn retire(&mut self) {
        self.generation = self.generation.next();
        self.retired = true;
    }

    /// Advance one simulation tick.
    ///
    /// Order: ground sensing, coyote clock, jump counter reset, task polls,
    /// ground movement, then the requests carried by `input`. Tasks spawned by
    /// this tick's requests are first polled on the next tick.
    pub fn tick<B: PhysicsBody, P: GroundProbe>(
        &mut self,
        body: &mut B,
        probe: &P,
        input: InputSample,
        elapsed: f32,
    ) {
        if self.retired {
            self.tasks.discard_stale(self.generation);
            return;
        }

        self.state.movement_direction = input.axis;

        let was_grounded = self.state.is_grounded;
        self.state.is_grounded = self.sensor.is_grounded(body.position(), probe);
        if self.state.is_grounded != was_grounded {
            debug!(
                "{}: jump_counter={}, coyote={:.3}",
                if self.state.is_grounded {
                    "Landed"
                } else {
                    "Left ground"
                },
                self.state.jump_counter,
                self.state.coyote.remaining()
            );
        }

        self.state
            .coyote
            .tick(self.state.is_grounded, self.config.coyote_time, elapsed);
        jump::reset_counter_if_settled(&mut self.state, body.velocity().y);

        let mut ctx = TaskContext {
            body: &mut *body,
            state: &mut self.state,
            config: &self.config,
            elapsed,
        };
        self.tasks.poll(self.generation, &mut ctx);

        self.apply_ground_movement(body);

        if input.jump {
            self.request_jump(body);
        }
        if input.dash {
            let _ = self.request_dash(body);
        }
    }

    /// Horizontal control only applies while grounded and not dashing.
    fn apply_ground_movement<B: PhysicsBody>(&mut self, body: &mut B) {
        if !self.state.is_grounded || self.state.is_dashing {
            return;
        }

        let velocity = body.velocity();
        body.set_velocity(Vec2::new(
            self.state.movement_direction * self.config.move_speed,
            velocity.y,
        ));
    }

    pub fn request_jump<B: PhysicsBody>(&mut self, body: &mut B) -> JumpOutcome {
        let outcome = jump::arbitrate(&mut self.state, &self.config);
        match outcome {
            JumpOutcome::Rejected => {
                debug!(
                    "Jump ignored: coyote={:.3}, jump_counter={}",
                    self.state.coyote.remaining(),
                    self.state.jump_counter
                );
                return outcome;
            }
            JumpOutcome::DoubleJumped => {
                self.tasks
                    .spawn(self.generation, AbilityTask::DoubleJumpRecharge);
                debug!("Double jump");
            }
            JumpOutcome::Jumped => {
                debug!("Jump: coyote={:.3}", self.state.coyote.remaining());
            }
        }

        jump::launch(body, self.config.jump_speed);
        self.tasks.spawn(
            self.generation,
            AbilityTask::JumpGravity(GravityModulator::default()),
        );
        outcome
    }

    pub fn request_dash<B: PhysicsBody>(&mut self, body: &mut B) -> Result<(), DashRejection> {
        if let Err(reason) = dash::check_dash(&self.state) {
            debug!("Dash ignored: {:?}", reason);
            return Err(reason);
        }

        let task = DashTask::launch(body, &mut self.state, self.config.dash_speed);
        debug!("Dash: impulse={:?}", task.impulse());
        let cooldown = DashCooldown::start(&mut self.state, self.config.dash_cooldown);

        self.tasks.spawn(self.generation, AbilityTask::Dash(task));
        self.tasks
            .spawn(self.generation, AbilityTask::DashCooldown(cooldown));
        Ok(())
    }
}
