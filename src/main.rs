mod content;
mod core;
mod level;
mod movement;
mod respawn;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(core::primary_window()),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            respawn::RespawnPlugin,
            level::LevelPlugin,
        ))
        .run();
}
