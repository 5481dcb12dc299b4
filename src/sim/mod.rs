//! Deterministic simulation module
//!
//! All movie logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod input;
pub mod state;
pub mod tick;

pub use input::{FireTracker, Keys, TickInput};
pub use state::{Bubble, Character, Playfield, SimState, SpawnPolicy};
pub use tick::tick;
