//! Level domain: the playable test level and its reload primitive.

mod spawn;
mod systems;

#[cfg(test)]
mod tests;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::spawn::setup_level;
use crate::level::systems::reload_level;

/// Downward acceleration in pixels per second squared.
pub const GRAVITY: f32 = 980.0;

/// Marks everything a level reload despawns.
#[derive(Component, Debug)]
pub struct LevelEntity;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
            .add_systems(Startup, setup_level)
            .add_systems(PostUpdate, reload_level);
    }
}
