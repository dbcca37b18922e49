//! Movement domain: keyboard sampling for both input sources.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::core::ReloadLevelEvent;
use crate::movement::input::{PlayerAction, PlayerInputSource};

fn horizontal_axis(keyboard: &ButtonInput<KeyCode>) -> f32 {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    x
}

pub(crate) fn init_input_source(mut commands: Commands, config: Res<ControllerConfig>) {
    let source = PlayerInputSource::from_config(&config);
    info!(
        "Input source: {}",
        match source {
            PlayerInputSource::Actions(_) => "bound actions",
            PlayerInputSource::Polled(_) => "polled keys (legacy)",
        }
    );
    commands.insert_resource(source);
}

/// Binding layer: turns key edges into `PlayerAction` messages.
pub(crate) fn bind_keyboard_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut actions: MessageWriter<PlayerAction>,
    mut last_axis: Local<f32>,
) {
    let axis = horizontal_axis(&keyboard);
    if axis != *last_axis {
        *last_axis = axis;
        actions.write(PlayerAction::Move(axis));
    }

    if keyboard.just_pressed(KeyCode::Space) {
        actions.write(PlayerAction::Jump);
    }
    if keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ) {
        actions.write(PlayerAction::Dash);
    }
}

pub(crate) fn collect_bound_actions(
    mut actions: MessageReader<PlayerAction>,
    source: Option<ResMut<PlayerInputSource>>,
) {
    let Some(mut source) = source else {
        // Consume actions sent before the source exists
        for _ in actions.read() {}
        return;
    };

    let PlayerInputSource::Actions(queue) = &mut *source else {
        for _ in actions.read() {}
        return;
    };

    for action in actions.read() {
        queue.push(*action);
    }
}

pub(crate) fn poll_legacy_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    source: Option<ResMut<PlayerInputSource>>,
) {
    let Some(mut source) = source else {
        return;
    };

    if let PlayerInputSource::Polled(keys) = &mut *source {
        keys.capture(
            horizontal_axis(&keyboard),
            keyboard.just_pressed(KeyCode::Space),
            keyboard.just_pressed(KeyCode::KeyJ),
        );
    }
}

/// Presses made while the world was frozen for a respawn must not reach the
/// new character. Runs in the frame the reload is issued, before the next
/// fixed tick.
pub(crate) fn discard_requests_on_reload(
    mut reload_events: MessageReader<ReloadLevelEvent>,
    source: Option<ResMut<PlayerInputSource>>,
) {
    if reload_events.read().count() == 0 {
        return;
    }

    if let Some(mut source) = source {
        source.discard_requests();
        debug!("Discarded input requests latched before reload");
    }
}
