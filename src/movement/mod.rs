//! Movement domain: ability controller plugin wiring and public exports.

mod body;
mod components;
mod controller;
mod coyote;
mod dash;
mod gravity;
mod ground;
mod input;
mod jump;
mod systems;
mod tasks;


pub use components::{ContactKind, ContactTag, GameLayer, Player, SetupFailed};
pub use controller::AbilityController;

use bevy::prelude::*;

use crate::movement::input::{PlayerAction, bound_input_enabled, legacy_input_enabled};

#[cfg(feature = "dev-tools")]
use crate::movement::systems::draw_ground_probes;
use crate::movement::systems::{
    bind_keyboard_actions, collect_bound_actions, discard_requests_on_reload,
    dispatch_player_contacts, init_ability_controllers, init_input_source, poll_legacy_keys,
    tick_ability_controllers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayerAction>()
            .add_systems(Startup, init_input_source)
            .add_systems(PreUpdate, init_ability_controllers)
            .add_systems(
                Update,
                (bind_keyboard_actions, collect_bound_actions)
                    .chain()
                    .run_if(bound_input_enabled),
            )
            .add_systems(
                FixedUpdate,
                tick_ability_controllers.run_if(bound_input_enabled),
            )
            .add_systems(
                Update,
                (poll_legacy_keys, tick_ability_controllers)
                    .chain()
                    .run_if(legacy_input_enabled),
            )
            .add_systems(Update, dispatch_player_contacts)
            .add_systems(PostUpdate, discard_requests_on_reload);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, draw_ground_probes);
    }
}
