//! Core domain: resources that outlive a level reload.

use bevy::prelude::*;

/// Number of fatal contacts since the game started.
#[derive(Resource, Debug, Default)]
pub struct DeathCount(pub u32);
