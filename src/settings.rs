//! Run settings
//!
//! Everything here is compiled in; `Settings::default()` is what the binary runs with.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Playfield, SimState, SpawnPolicy};

/// Telemetry file name, relative to the working directory
pub const ANIM_LOG_FILE: &str = "CoolMovie.anim";

/// Movie settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Playfield (and window) size in pixels
    pub width: u32,
    pub height: u32,
    /// Fixed frames per second
    pub frame_rate: u32,
    /// Run length in seconds
    pub duration_secs: u64,
    /// Where frame summaries are appended
    pub anim_log: PathBuf,
    /// When holding fire creates bubbles
    pub spawn_policy: SpawnPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Cool Movie".to_string(),
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            frame_rate: FRAME_RATE,
            duration_secs: MOVIE_DURATION_SECS,
            anim_log: PathBuf::from(ANIM_LOG_FILE),
            spawn_policy: SpawnPolicy::default(),
        }
    }
}

impl Settings {
    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.width, self.height)
    }

    /// Length of one frame (a zero frame rate is treated as 1 fps)
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    /// Fresh simulation state for these settings
    pub fn initial_state(&self) -> SimState {
        SimState::new(self.playfield(), self.spawn_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_defaults_match_movie() {
        let settings = Settings::default();
        assert_eq!(settings.title, "Cool Movie");
        assert_eq!((settings.width, settings.height), (800, 600));
        assert_eq!(settings.duration(), Duration::from_secs(30));
        assert_eq!(settings.spawn_policy, SpawnPolicy::PressEdge);
        assert_eq!(settings.anim_log, PathBuf::from("CoolMovie.anim"));
    }

    #[test]
    fn test_frame_time() {
        let settings = Settings::default();
        assert_eq!(settings.frame_time(), Duration::from_nanos(16_666_666));

        let stopped = Settings {
            frame_rate: 0,
            ..Settings::default()
        };
        assert_eq!(stopped.frame_time(), Duration::from_secs(1));
    }

    #[test]
    fn test_initial_state_uses_playfield() {
        let settings = Settings {
            width: 200,
            height: 100,
            ..Settings::default()
        };
        let state = settings.initial_state();
        assert_eq!(state.character.pos, IVec2::new(100, 50));
        assert_eq!(state.playfield, Playfield::new(200, 100));
    }
}
