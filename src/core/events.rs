//! Core domain: events for character death and level reload.

use bevy::ecs::message::Message;
use bevy::prelude::Entity;

use crate::movement::ContactKind;

/// Event fired when a character touches something fatal
#[derive(Debug, Clone, Copy)]
pub struct PlayerDiedEvent {
    pub player: Entity,
    pub cause: ContactKind,
}

impl Message for PlayerDiedEvent {}

/// Event fired when the current level must be rebuilt from its initial state
#[derive(Debug, Clone, Copy)]
pub struct ReloadLevelEvent;

impl Message for ReloadLevelEvent {}
