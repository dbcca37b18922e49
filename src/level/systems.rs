//! Level domain: reload handling.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::core::ReloadLevelEvent;
use crate::level::LevelEntity;
use crate::level::spawn::spawn_level;

/// Tear down every level entity and rebuild the level from scratch. The dead
/// character and its controller go with it.
pub(crate) fn reload_level(
    mut commands: Commands,
    mut reload_events: MessageReader<ReloadLevelEvent>,
    level_query: Query<Entity, With<LevelEntity>>,
    config: Res<ControllerConfig>,
) {
    // Several requests in one frame still mean one reload
    if reload_events.read().count() == 0 {
        return;
    }

    let mut despawned = 0;
    for entity in &level_query {
        commands.entity(entity).despawn();
        despawned += 1;
    }

    spawn_level(&mut commands, &config);
    info!("Level reloaded ({} entities replaced)", despawned);
}
