//! Cool Movie - a character, a bubble blaster and a frame log
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (character movement, bubble charge/launch/flight)
//! - `renderer`: Shape recording, tessellation and the WebGPU triangle pipeline
//! - `platform`: Native window, keyboard mapping and frame pacing
//! - `telemetry`: Append-only frame log
//! - `movie`: One frame of poll, simulate, render, log

pub mod movie;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod telemetry;

pub use movie::{FrameClock, Movie};
pub use settings::Settings;

/// Compiled-in constants. Distances are playfield pixels, rates are per frame.
pub mod consts {
    use glam::Vec2;

    /// Frames per second of the fixed timestep
    pub const FRAME_RATE: u32 = 60;
    /// Wall-clock length of a run
    pub const MOVIE_DURATION_SECS: u64 = 30;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: u32 = 800;
    pub const PLAYFIELD_HEIGHT: u32 = 600;

    /// Character movement per frame for each held direction
    pub const CHARACTER_SPEED: i32 = 5;
    pub const CHARACTER_RADIUS: f32 = 30.0;

    /// Bubble spawn point relative to the character
    pub const BUBBLE_ANCHOR: Vec2 = Vec2::new(-10.0, -5.0);
    /// Bubbles are drawn in a square box of this side, anchored at their top-left
    pub const BUBBLE_SIZE: f32 = 20.0;

    /// Charge gained per frame while fire is held
    pub const PULL_RATE: f32 = 2.0;
    pub const MAX_PULL_DISTANCE: f32 = 60.0;
    /// Horizontal launch speed at full charge
    pub const MAX_LAUNCH_SPEED: f32 = 12.0;
    /// Vertical launch velocity (negative is toward the top edge)
    pub const LAUNCH_VY: f32 = -4.0;
    /// Drag applied to the vertical velocity while rising
    pub const RISE_DAMPING: f32 = 0.1;
    /// Vertical velocity change per frame once the rise has stalled
    pub const FALL_RATE: f32 = 0.25;

    /// Decoration offsets relative to the character
    pub const FLAG_OFFSET: Vec2 = Vec2::new(30.0, -50.0);
    pub const BLASTER_OFFSET: Vec2 = Vec2::new(-35.0, 0.0);
}
