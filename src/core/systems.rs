//! Core domain: startup systems.

use bevy::prelude::*;

/// The game window, in logical pixels.
pub fn primary_window() -> Window {
    Window {
        title: "Skyhop".to_string(),
        resolution: (1280, 720).into(),
        resizable: true,
        ..default()
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
