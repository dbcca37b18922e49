//! Movement domain: the physics body seen by the ability controller.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Rigid body operations the abilities need. Velocity and gravity scale are
/// the only state shared between concurrently running ability tasks.
pub trait PhysicsBody {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
    /// Instantaneous change of momentum.
    fn apply_impulse(&mut self, impulse: Vec2);
}

/// Avian rigid body borrowed from the ECS for one controller tick.
pub struct AvianBody<'a> {
    pub position: Vec2,
    pub velocity: &'a mut LinearVelocity,
    pub gravity_scale: &'a mut GravityScale,
    pub inverse_mass: f32,
}

impl<'a> AvianBody<'a> {
    pub fn new(
        position: &Position,
        velocity: &'a mut LinearVelocity,
        gravity_scale: &'a mut GravityScale,
        mass: &ComputedMass,
    ) -> Self {
        Self {
            position: position.0,
            velocity,
            gravity_scale,
            inverse_mass: mass.inverse(),
        }
    }
}

impl PhysicsBody for AvianBody<'_> {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        // Impulse = mass * delta_v
        if !self.inverse_mass.is_finite() {
            return;
        }
        self.velocity.0 += impulse * self.inverse_mass;
    }
}
