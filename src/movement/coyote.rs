//! Movement domain: coyote-time grace window.

/// Grace clock that lets a jump register briefly after leaving the ground.
///
/// Reset to the full window every grounded tick and drained by elapsed time
/// otherwise. There is no floor: only the sign of the remaining time matters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoyoteTimer {
    remaining: f32,
}

impl CoyoteTimer {
    pub fn tick(&mut self, grounded: bool, coyote_time: f32, elapsed: f32) -> f32 {
        self.remaining = if grounded {
            coyote_time
        } else {
            self.remaining - elapsed
        };
        self.remaining
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// True while a jump still counts as grounded.
    pub fn is_open(&self) -> bool {
        self.remaining >= 0.0
    }
}
