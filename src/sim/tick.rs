//! Fixed timestep simulation tick
//!
//! Advances the movie by exactly one frame.

use glam::IVec2;

use super::input::TickInput;
use super::state::{SimState, SpawnPolicy};

/// Advance the simulation state by one fixed timestep
pub fn tick(state: &mut SimState, input: &TickInput) {
    state.time_ticks += 1;

    // Unnormalized: diagonals cover more ground than a single axis
    let mut delta = IVec2::ZERO;
    if input.up {
        delta.y -= 1;
    }
    if input.down {
        delta.y += 1;
    }
    if input.left {
        delta.x -= 1;
    }
    if input.right {
        delta.x += 1;
    }
    state.character.pos += delta * state.character.speed;

    let spawn = match state.spawn_policy {
        SpawnPolicy::PressEdge => input.fire_pressed,
        SpawnPolicy::EveryHeldFrame => input.fire_held,
    };
    if spawn {
        let id = state.spawn_bubble();
        log::debug!("tick {}: bubble {} charging", state.time_ticks, id);
    }

    let anchor = state.character.bubble_anchor();
    let playfield = state.playfield;
    for bubble in state.bubbles.iter_mut().filter(|b| b.active) {
        if bubble.pulling_back {
            bubble.charge(anchor);
        } else {
            bubble.fly();
        }

        if !playfield.contains(bubble.pos) {
            bubble.active = false;
            log::trace!("bubble {} left the playfield at {}", bubble.id, bubble.pos);
        }
    }

    if input.fire_released {
        for bubble in state
            .bubbles
            .iter_mut()
            .filter(|b| b.active && b.pulling_back)
        {
            bubble.launch();
            log::debug!(
                "tick {}: bubble {} launched at {:.0}% charge, vel {}",
                state.time_ticks,
                bubble.id,
                bubble.charge_fraction() * 100.0,
                bubble.vel
            );
        }
    }

    state.compact();
}
