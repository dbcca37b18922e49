//! Content domain: data-driven controller tuning.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

/// Tuning for the ability controller, loaded once at startup and never mutated.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Horizontal speed while grounded
    pub move_speed: f32,
    /// Upward impulse applied by a jump
    pub jump_speed: f32,
    /// Gravity multiplier used while falling after a jump apex
    pub jump_gravity_scale: f32,
    pub allow_double_jump: bool,
    /// Length of each downward ground probe, measured from the body center
    pub grounded_ray_distance: f32,
    /// Physics layer bits the ground probes hit
    pub ground_layer: u32,
    /// Seconds after leaving ground during which a jump still registers
    pub coyote_time: f32,
    pub dash_speed: f32,
    pub dash_distance: f32,
    pub dash_cooldown: f32,
    /// Real-time seconds the world stays frozen before the level reloads
    pub respawn_timer: f32,
    /// Sample polled keys every frame instead of consuming bound actions
    pub legacy_input: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 300.0,
            jump_speed: 560.0,
            jump_gravity_scale: 3.0,
            allow_double_jump: true,
            grounded_ray_distance: 20.0,
            ground_layer: GameLayer::Ground.to_bits(),
            coyote_time: 0.07,
            dash_speed: 900.0,
            dash_distance: 160.0,
            dash_cooldown: 0.8,
            respawn_timer: 0.5,
            legacy_input: false,
        }
    }
}

impl ControllerConfig {
    /// Maximum height of a single jump from rest, for level layout.
    /// Uses h = v^2 / (2g) with the impulse applied to a unit mass.
    pub fn single_jump_height(&self, gravity: f32) -> f32 {
        if gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_speed * self.jump_speed / (2.0 * gravity)
    }
}
