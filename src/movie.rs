//! The per-frame driver
//!
//! A frame is: derive tick input from the held keys, advance the simulation,
//! draw the scene, append the frame summary to the log. [`FrameClock`] decides
//! when frames are due and when the run is over.

use std::time::{Duration, Instant};

use crate::renderer::{Canvas, draw_scene};
use crate::settings::Settings;
use crate::sim::{FireTracker, Keys, SimState, tick};
use crate::telemetry::{FrameLog, FrameSummary};

/// Simulation, input edges and frame log for one run
pub struct Movie {
    state: SimState,
    fire: FireTracker,
    log: FrameLog,
    frames: u64,
}

impl Movie {
    pub fn new(settings: &Settings) -> Self {
        Self::with_log(settings, FrameLog::new(settings.anim_log.clone()))
    }

    pub fn with_log(settings: &Settings, log: FrameLog) -> Self {
        Self {
            state: settings.initial_state(),
            fire: FireTracker::new(),
            log,
            frames: 0,
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn log(&self) -> &FrameLog {
        &self.log
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame: simulate, render, log
    pub fn frame(&mut self, keys: Keys, canvas: &mut dyn Canvas) -> FrameSummary {
        let input = self.fire.next(keys);
        tick(&mut self.state, &input);

        draw_scene(&self.state, canvas);

        let summary = FrameSummary::capture(self.frames, &self.state);
        self.log.record(&summary);
        log::trace!("{}", summary);
        self.frames += 1;
        summary
    }
}

/// Fixed-rate frame pacing over a bounded run
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start: Instant,
    frame_time: Duration,
    duration: Duration,
    next_frame: Instant,
}

impl FrameClock {
    /// First frame is due immediately
    pub fn new(start: Instant, frame_time: Duration, duration: Duration) -> Self {
        Self {
            start,
            frame_time,
            duration,
            next_frame: start,
        }
    }

    pub fn from_settings(start: Instant, settings: &Settings) -> Self {
        Self::new(start, settings.frame_time(), settings.duration())
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    pub fn frame_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// When to wake up next
    pub fn next_deadline(&self) -> Instant {
        self.next_frame
    }

    /// Schedule the frame after the one run at `now`. Late frames are not
    /// caught up: the schedule restarts one frame period from `now`.
    pub fn advance(&mut self, now: Instant) {
        self.next_frame += self.frame_time;
        if self.next_frame <= now {
            self.next_frame = now + self.frame_time;
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }
}
