//! Movement domain: components, physics layers and per-character state.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::coyote::CoyoteTimer;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Enemy bodies (kill on contact)
    Enemy,
    /// Trigger volumes such as death zones - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Category of a contact reported by the physics substrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Ground,
    Enemy,
    DeathZone,
}

impl ContactKind {
    pub fn is_fatal(self) -> bool {
        match self {
            ContactKind::Ground => false,
            ContactKind::Enemy | ContactKind::DeathZone => true,
        }
    }
}

/// Tags a collider with the contact category it reports.
#[derive(Component, Debug, Clone, Copy)]
pub struct ContactTag(pub ContactKind);

/// Marks a character whose controller setup failed; it is never retried.
#[derive(Component, Debug)]
pub struct SetupFailed;

/// Mutable ability state of one character.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    /// Last movement axis sample, in [-1, 1]
    pub movement_direction: f32,
    pub is_grounded: bool,
    pub coyote: CoyoteTimer,
    pub jump_counter: u32,
    /// False while a double jump is spent, until the character lands
    pub double_jump_available: bool,
    pub is_dashing: bool,
    /// False only while the dash cooldown runs
    pub dash_available: bool,
    /// Gravity scale of the body at spawn; target of every gravity restore
    pub default_gravity_scale: f32,
}

impl MovementState {
    pub fn new(config: &ControllerConfig, default_gravity_scale: f32) -> Self {
        Self {
            movement_direction: 0.0,
            is_grounded: true,
            coyote: CoyoteTimer::default(),
            jump_counter: 0,
            double_jump_available: config.allow_double_jump,
            is_dashing: false,
            dash_available: true,
            default_gravity_scale,
        }
    }
}
