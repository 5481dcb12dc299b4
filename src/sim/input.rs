//! Per-frame input snapshots
//!
//! The host polls five held keys each frame; the simulation also needs the
//! press and release edges of the fire key, which are derived here.

use serde::{Deserialize, Serialize};

/// Held state of the five logical inputs, as polled from the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire is held this frame
    pub fire_held: bool,
    /// Fire went down this frame
    pub fire_pressed: bool,
    /// Fire went up this frame
    pub fire_released: bool,
}

impl TickInput {
    /// Movement only, fire untouched
    pub fn movement(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
            ..Default::default()
        }
    }
}

/// Remembers last frame's fire state to produce edges
#[derive(Debug, Clone, Copy, Default)]
pub struct FireTracker {
    was_held: bool,
}

impl FireTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build this frame's tick input and remember the fire state for the next one
    pub fn next(&mut self, keys: Keys) -> TickInput {
        let input = TickInput {
            up: keys.up,
            down: keys.down,
            left: keys.left,
            right: keys.right,
            fire_held: keys.fire,
            fire_pressed: keys.fire && !self.was_held,
            fire_released: !keys.fire && self.was_held,
        };
        self.was_held = keys.fire;
        input
    }
}
