//! Simulation state and entity types
//!
//! Everything the movie needs to advance a frame lives in [`SimState`].

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// When holding fire creates bubbles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// One bubble per press; holding only charges it
    #[default]
    PressEdge,
    /// A new bubble on every frame fire is held
    EveryHeldFrame,
}

/// Rectangle (0, 0)-(width, height) in which entities stay in play
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH as f32,
            height: PLAYFIELD_HEIGHT as f32,
        }
    }
}

impl Playfield {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new((self.width / 2.0) as i32, (self.height / 2.0) as i32)
    }

    /// Edges are inclusive
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }
}

/// The player character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub pos: IVec2,
    pub speed: i32,
}

impl Character {
    pub fn new(pos: IVec2) -> Self {
        Self {
            pos,
            speed: CHARACTER_SPEED,
        }
    }

    /// Where a fresh bubble appears
    pub fn bubble_anchor(&self) -> Vec2 {
        self.pos.as_vec2() + BUBBLE_ANCHOR
    }
}

/// A bubble projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub id: u32,
    /// Top-left corner of the bubble's box
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
    /// Charging: trails the anchor, velocity not yet set
    pub pulling_back: bool,
    pub pull_distance: f32,
    pub max_pull_distance: f32,
    /// Latched once the rise has stalled after launch
    pub falling: bool,
}

impl Bubble {
    pub fn new(id: u32, anchor: Vec2) -> Self {
        Self {
            id,
            pos: anchor,
            vel: Vec2::ZERO,
            active: true,
            pulling_back: true,
            pull_distance: 0.0,
            max_pull_distance: MAX_PULL_DISTANCE,
            falling: false,
        }
    }

    /// Accumulate one tick of charge and follow the anchor
    pub fn charge(&mut self, anchor: Vec2) {
        if !self.pulling_back {
            return;
        }
        self.pull_distance = (self.pull_distance + PULL_RATE).clamp(0.0, self.max_pull_distance);
        self.pos = anchor - Vec2::new(self.pull_distance, 0.0);
    }

    /// Fraction of full charge, in [0, 1]
    pub fn charge_fraction(&self) -> f32 {
        if self.max_pull_distance <= 0.0 {
            return 0.0;
        }
        (self.pull_distance / self.max_pull_distance).clamp(0.0, 1.0)
    }

    /// Release the charge. Velocity is set here and nowhere else.
    pub fn launch(&mut self) {
        if !self.pulling_back {
            return;
        }
        self.pulling_back = false;
        self.vel = Vec2::new(MAX_LAUNCH_SPEED * self.charge_fraction(), LAUNCH_VY);
        self.falling = self.vel.y >= 0.0;
    }

    /// Integrate one frame of flight (float-then-fall)
    pub fn fly(&mut self) {
        if self.pulling_back {
            return;
        }
        self.pos += self.vel;

        if self.falling {
            self.vel.y -= FALL_RATE;
        } else {
            self.vel.y = (self.vel.y + RISE_DAMPING).min(0.0);
            if self.vel.y >= 0.0 {
                self.falling = true;
            }
        }
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Ticks advanced so far
    pub time_ticks: u64,
    pub playfield: Playfield,
    pub spawn_policy: SpawnPolicy,
    pub character: Character,
    /// Bubbles in creation order (sorted by id)
    pub bubbles: Vec<Bubble>,
    /// Next entity ID
    next_id: u32,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(Playfield::default(), SpawnPolicy::default())
    }
}

impl SimState {
    /// Character at the playfield center, no bubbles
    pub fn new(playfield: Playfield, spawn_policy: SpawnPolicy) -> Self {
        Self {
            time_ticks: 0,
            playfield,
            spawn_policy,
            character: Character::new(playfield.center()),
            bubbles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a charging bubble at the character's anchor
    pub fn spawn_bubble(&mut self) -> u32 {
        let id = self.next_entity_id();
        let bubble = Bubble::new(id, self.character.bubble_anchor());
        self.bubbles.push(bubble);
        id
    }

    pub fn active_bubbles(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter().filter(|b| b.active)
    }

    pub fn active_count(&self) -> usize {
        self.active_bubbles().count()
    }

    /// Drop inactive bubbles, keeping creation order
    pub fn compact(&mut self) {
        self.bubbles.retain(|b| b.active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_centers_character() {
        let state = SimState::default();
        assert_eq!(state.character.pos, IVec2::new(400, 300));
        assert!(state.bubbles.is_empty());
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_spawned_bubble_is_charging() {
        let mut state = SimState::default();
        let id = state.spawn_bubble();

        let bubble = &state.bubbles[0];
        assert_eq!(bubble.id, id);
        assert!(bubble.active);
        assert!(bubble.pulling_back);
        assert_eq!(bubble.pull_distance, 0.0);
        assert_eq!(bubble.max_pull_distance, MAX_PULL_DISTANCE);
        assert_eq!(bubble.pos, Vec2::new(390.0, 295.0));
        assert_eq!(bubble.vel, Vec2::ZERO);
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = SimState::default();
        let a = state.spawn_bubble();
        let b = state.spawn_bubble();
        assert!(b > a);
    }

    #[test]
    fn test_charge_clamps_and_trails_anchor() {
        let anchor = Vec2::new(100.0, 50.0);
        let mut bubble = Bubble::new(1, anchor);
        for _ in 0..100 {
            bubble.charge(anchor);
        }
        assert_eq!(bubble.pull_distance, MAX_PULL_DISTANCE);
        assert_eq!(bubble.pos, Vec2::new(100.0 - MAX_PULL_DISTANCE, 50.0));
    }

    #[test]
    fn test_launch_sets_velocity_once() {
        let anchor = Vec2::new(200.0, 200.0);
        let mut bubble = Bubble::new(1, anchor);
        for _ in 0..15 {
            bubble.charge(anchor);
        }
        bubble.launch();
        let launched = bubble.vel;
        assert_eq!(launched, Vec2::new(MAX_LAUNCH_SPEED * 0.5, LAUNCH_VY));

        // A second release is ignored
        bubble.pull_distance = MAX_PULL_DISTANCE;
        bubble.launch();
        assert_eq!(bubble.vel, launched);
    }

    #[test]
    fn test_launch_without_charge_has_no_horizontal_speed() {
        let mut bubble = Bubble::new(1, Vec2::new(10.0, 10.0));
        bubble.launch();
        assert_eq!(bubble.vel.x, 0.0);
        assert!(!bubble.pulling_back);
    }

    #[test]
    fn test_fly_rise_stalls_then_falls() {
        let mut bubble = Bubble::new(1, Vec2::new(400.0, 300.0));
        bubble.launch();

        let mut crossed = false;
        for _ in 0..200 {
            let before = bubble.vel.y;
            bubble.fly();
            if crossed {
                assert!(bubble.falling);
                assert!(bubble.vel.y < before);
            } else if bubble.falling {
                assert_eq!(bubble.vel.y, 0.0);
                crossed = true;
            } else {
                assert!(bubble.vel.y >= before);
            }
        }
        assert!(crossed);
    }

    #[test]
    fn test_charging_bubble_does_not_fly() {
        let mut bubble = Bubble::new(1, Vec2::new(50.0, 50.0));
        bubble.vel = Vec2::new(5.0, 5.0);
        bubble.fly();
        assert_eq!(bubble.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_playfield_contains_edges() {
        let field = Playfield::new(800, 600);
        assert!(field.contains(Vec2::new(0.0, 0.0)));
        assert!(field.contains(Vec2::new(800.0, 600.0)));
        assert!(!field.contains(Vec2::new(-0.5, 10.0)));
        assert!(!field.contains(Vec2::new(10.0, 600.5)));
        assert!(!field.contains(Vec2::new(800.5, 10.0)));
        assert!(!field.contains(Vec2::new(10.0, -0.5)));
    }

    #[test]
    fn test_compact_keeps_order() {
        let mut state = SimState::default();
        for _ in 0..4 {
            state.spawn_bubble();
        }
        state.bubbles[1].active = false;
        state.bubbles[3].active = false;
        state.compact();
        let ids: Vec<u32> = state.bubbles.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(state.active_count(), 2);
    }
}
