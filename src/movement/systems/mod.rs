//! Movement domain: system modules for ability updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

#[cfg(feature = "dev-tools")]
pub(crate) use collisions::draw_ground_probes;
pub(crate) use collisions::dispatch_player_contacts;
pub(crate) use input::{
    bind_keyboard_actions, collect_bound_actions, discard_requests_on_reload, init_input_source,
    poll_legacy_keys,
};
pub(crate) use movement::{init_ability_controllers, tick_ability_controllers};
