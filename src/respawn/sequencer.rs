//! Respawn domain: freeze, wait on real time, reload.

use bevy::prelude::*;

use crate::core::TimeControl;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum RespawnPhase {
    #[default]
    Alive,
    /// Simulation frozen; counts down unscaled seconds
    Frozen { remaining: f32 },
    /// Reload issued; waits for the next character to spawn
    Reloading,
}

/// Sequences one death: time scale to 0, `respawn_timer` real seconds, time
/// scale back to 1, then a single level reload.
#[derive(Resource, Debug, Clone, Default)]
pub struct RespawnSequencer {
    phase: RespawnPhase,
    respawn_timer: f32,
}

impl RespawnSequencer {
    pub fn new(respawn_timer: f32) -> Self {
        Self {
            phase: RespawnPhase::Alive,
            respawn_timer,
        }
    }

    pub fn phase(&self) -> RespawnPhase {
        self.phase
    }

    /// Start the sequence. Returns false if one is already running.
    pub fn trigger(&mut self, clock: &mut impl TimeControl) -> bool {
        if self.phase != RespawnPhase::Alive {
            return false;
        }

        clock.set_time_scale(0.0);
        self.phase = RespawnPhase::Frozen {
            remaining: self.respawn_timer,
        };
        true
    }

    /// Advance by unscaled seconds. Returns true exactly once per sequence,
    /// on the call that unfreezes time and the level must reload.
    pub fn advance(&mut self, real_elapsed: f32, clock: &mut impl TimeControl) -> bool {
        let RespawnPhase::Frozen { remaining } = &mut self.phase else {
            return false;
        };

        *remaining -= real_elapsed;
        if *remaining > 0.0 {
            return false;
        }

        clock.set_time_scale(1.0);
        self.phase = RespawnPhase::Reloading;
        true
    }

    /// Accept new deaths once the reloaded character exists.
    pub fn rearm(&mut self) {
        if self.phase == RespawnPhase::Reloading {
            self.phase = RespawnPhase::Alive;
        }
    }
}
