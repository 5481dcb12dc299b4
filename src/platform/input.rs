//! Keyboard state polled by the movie each frame

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::sim::Keys;

/// A logical input of the movie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

/// WASD or arrows to move, space to fire
pub fn map_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Action::Up),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Action::Down),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(Action::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(Action::Right),
        KeyCode::Space => Some(Action::Fire),
        _ => None,
    }
}

/// Held keys, updated from window events and snapshotted once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    keys: Keys,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for keys the movie does not use
    pub fn handle(&mut self, code: KeyCode, state: ElementState) -> bool {
        let Some(action) = map_key(code) else {
            return false;
        };
        let held = state.is_pressed();
        match action {
            Action::Up => self.keys.up = held,
            Action::Down => self.keys.down = held,
            Action::Left => self.keys.left = held,
            Action::Right => self.keys.right = held,
            Action::Fire => self.keys.fire = held,
        }
        true
    }

    /// Release everything (focus lost)
    pub fn clear(&mut self) {
        self.keys = Keys::default();
    }

    pub fn snapshot(&self) -> Keys {
        self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_map_alike() {
        assert_eq!(map_key(KeyCode::KeyW), map_key(KeyCode::ArrowUp));
        assert_eq!(map_key(KeyCode::KeyD), Some(Action::Right));
        assert_eq!(map_key(KeyCode::Space), Some(Action::Fire));
        assert_eq!(map_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyState::new();
        assert!(keys.handle(KeyCode::Space, ElementState::Pressed));
        assert!(keys.handle(KeyCode::KeyA, ElementState::Pressed));
        assert!(!keys.handle(KeyCode::KeyQ, ElementState::Pressed));

        let held = keys.snapshot();
        assert!(held.fire && held.left && !held.right);

        keys.handle(KeyCode::Space, ElementState::Released);
        assert!(!keys.snapshot().fire);

        keys.clear();
        assert_eq!(keys.snapshot(), Keys::default());
    }
}
