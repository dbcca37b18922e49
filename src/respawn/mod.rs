//! Respawn domain: death handling and level reload sequencing.

mod sequencer;
mod systems;

#[cfg(test)]
mod tests;

pub use sequencer::{RespawnPhase, RespawnSequencer};

use bevy::prelude::*;

use crate::respawn::systems::{
    advance_respawn, init_respawn_sequencer, rearm_on_player_spawn, start_respawn,
};

pub struct RespawnPlugin;

impl Plugin for RespawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_respawn_sequencer).add_systems(
            Update,
            // Advance before starting so the trigger frame does not count
            (rearm_on_player_spawn, advance_respawn, start_respawn).chain(),
        );
    }
}
