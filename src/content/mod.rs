//! Content domain: data-driven controller configuration.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::ControllerConfig;

use bevy::prelude::*;

use crate::content::loader::load_controller_config;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_controller_config);
    }
}
