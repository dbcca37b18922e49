//! Movement domain: input sources feeding the ability controller.
//!
//! Two interchangeable sources produce the same per-tick `InputSample`:
//! bound actions delivered as messages, and keys polled every frame. The
//! `legacy_input` config flag picks one at startup.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::content::ControllerConfig;

/// Input consumed by one controller tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Signed horizontal axis, in [-1, 1]
    pub axis: f32,
    pub jump: bool,
    pub dash: bool,
}

pub trait InputSource {
    /// Take the current sample. Discrete requests are consumed by the call.
    fn sample(&mut self) -> InputSample;
}

/// An action delivered by the binding layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    Move(f32),
    Jump,
    Dash,
}

impl Message for PlayerAction {}

/// Accumulates bound actions between ticks. Requests latch until sampled so
/// a press between two fixed steps is not lost.
#[derive(Debug, Default)]
pub struct ActionQueue {
    axis: f32,
    jump: bool,
    dash: bool,
}

impl ActionQueue {
    pub fn push(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::Move(axis) => self.axis = axis.clamp(-1.0, 1.0),
            PlayerAction::Jump => self.jump = true,
            PlayerAction::Dash => self.dash = true,
        }
    }

    /// Drop latched jump and dash requests. The held axis is kept.
    pub fn discard_requests(&mut self) {
        self.jump = false;
        self.dash = false;
    }
}

impl InputSource for ActionQueue {
    fn sample(&mut self) -> InputSample {
        InputSample {
            axis: self.axis,
            jump: std::mem::take(&mut self.jump),
            dash: std::mem::take(&mut self.dash),
        }
    }
}

/// Key state captured once per frame.
#[derive(Debug, Default)]
pub struct PolledKeys {
    axis: f32,
    jump_pressed: bool,
    dash_pressed: bool,
}

impl PolledKeys {
    pub fn capture(&mut self, axis: f32, jump_pressed: bool, dash_pressed: bool) {
        self.axis = axis;
        self.jump_pressed = jump_pressed;
        self.dash_pressed = dash_pressed;
    }

    pub fn discard_requests(&mut self) {
        self.jump_pressed = false;
        self.dash_pressed = false;
    }
}

impl InputSource for PolledKeys {
    fn sample(&mut self) -> InputSample {
        InputSample {
            axis: self.axis,
            jump: std::mem::take(&mut self.jump_pressed),
            dash: std::mem::take(&mut self.dash_pressed),
        }
    }
}

/// The input source selected for the player.
#[derive(Resource, Debug)]
pub enum PlayerInputSource {
    Actions(ActionQueue),
    Polled(PolledKeys),
}

impl PlayerInputSource {
    pub fn from_config(config: &ControllerConfig) -> Self {
        if config.legacy_input {
            PlayerInputSource::Polled(PolledKeys::default())
        } else {
            PlayerInputSource::Actions(ActionQueue::default())
        }
    }
}

impl PlayerInputSource {
    pub fn discard_requests(&mut self) {
        match self {
            PlayerInputSource::Actions(queue) => queue.discard_requests(),
            PlayerInputSource::Polled(keys) => keys.discard_requests(),
        }
    }
}

impl InputSource for PlayerInputSource {
    fn sample(&mut self) -> InputSample {
        match self {
            PlayerInputSource::Actions(queue) => queue.sample(),
            PlayerInputSource::Polled(keys) => keys.sample(),
        }
    }
}

/// Run condition: polled keys, dispatched once per frame.
pub fn legacy_input_enabled(config: Option<Res<ControllerConfig>>) -> bool {
    config.is_some_and(|config| config.legacy_input)
}

/// Run condition: bound actions, dispatched on the fixed physics tick.
pub fn bound_input_enabled(config: Option<Res<ControllerConfig>>) -> bool {
    config.is_some_and(|config| !config.legacy_input)
}
