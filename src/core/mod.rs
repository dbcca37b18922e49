//! Core domain: shared clock control, lifecycle events and setup.

mod clock;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use clock::TimeControl;
pub use events::{PlayerDiedEvent, ReloadLevelEvent};
pub use resources::DeathCount;
pub use systems::primary_window;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DeathCount>()
            .add_message::<PlayerDiedEvent>()
            .add_message::<ReloadLevelEvent>()
            .add_systems(Startup, setup_camera);
    }
}
