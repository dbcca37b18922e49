//! Respawn domain: systems driving the sequencer.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::core::{DeathCount, PlayerDiedEvent, ReloadLevelEvent, TimeControl};
use crate::movement::{AbilityController, Player};
use crate::respawn::{RespawnPhase, RespawnSequencer};

pub(crate) fn init_respawn_sequencer(mut commands: Commands, config: Res<ControllerConfig>) {
    commands.insert_resource(RespawnSequencer::new(config.respawn_timer));
}

/// Start the sequence on a fatal contact and retire the dead character so none
/// of its ability tasks run again.
pub(crate) fn start_respawn(
    mut death_events: MessageReader<PlayerDiedEvent>,
    mut sequencer: ResMut<RespawnSequencer>,
    mut virtual_time: ResMut<Time<Virtual>>,
    mut death_count: ResMut<DeathCount>,
    mut controllers: Query<&mut AbilityController>,
) {
    for event in death_events.read() {
        if !event.cause.is_fatal() {
            continue;
        }
        if let Ok(mut controller) = controllers.get_mut(event.player) {
            debug!("Retiring controller with {} live tasks", controller.active_tasks());
            controller.retire();
        }

        if !sequencer.trigger(&mut *virtual_time) {
            continue;
        }

        death_count.0 += 1;
        info!(
            "Player died ({:?}), deaths={}, time scale {}, respawning",
            event.cause,
            death_count.0,
            virtual_time.time_scale()
        );
    }
}

/// Counts down on the real clock, unaffected by the frozen time scale.
pub(crate) fn advance_respawn(
    real_time: Res<Time<Real>>,
    mut sequencer: ResMut<RespawnSequencer>,
    mut virtual_time: ResMut<Time<Virtual>>,
    mut reload_events: MessageWriter<ReloadLevelEvent>,
) {
    if sequencer.advance(real_time.delta_secs(), &mut *virtual_time) {
        info!("Respawn timer elapsed, reloading level");
        reload_events.write(ReloadLevelEvent);
    }
}

pub(crate) fn rearm_on_player_spawn(
    new_players: Query<(), Added<Player>>,
    mut sequencer: ResMut<RespawnSequencer>,
) {
    if new_players.is_empty() {
        return;
    }
    if sequencer.phase() == RespawnPhase::Reloading {
        info!("Player respawned");
    }
    sequencer.rearm();
}
