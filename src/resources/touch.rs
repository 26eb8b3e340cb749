//! Touch input resource.
//!
//! Filled each frame by [`update_touch_state`](crate::systems::input::update_touch_state)
//! from raylib, or by the replay runner from a recorded script. Positions are
//! in scene coordinates.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct TouchState {
    /// A finger (or the left mouse button) is down.
    pub down: bool,
    /// The touch started this frame.
    pub began: bool,
    /// The touch was already down and moved this frame.
    pub moved: bool,
    pub position: Vector2,
}

impl TouchState {
    /// Fold this frame's raw contact into the state.
    pub fn update(&mut self, contact: Option<Vector2>) {
        match contact {
            Some(pos) => {
                self.began = !self.down;
                self.moved = self.down && (pos.x != self.position.x || pos.y != self.position.y);
                self.down = true;
                self.position = pos;
            }
            None => {
                self.began = false;
                self.moved = false;
                self.down = false;
            }
        }
    }

    /// Force a steering sample at `pos` for this frame.
    pub fn inject(&mut self, sample: Option<Vector2>) {
        match sample {
            Some(pos) => {
                self.moved = self.down;
                self.began = !self.down;
                self.down = true;
                self.position = pos;
            }
            None => {
                self.began = false;
                self.moved = false;
            }
        }
    }

    /// The point to steer toward this frame, if the touch began or moved.
    pub fn sample(&self) -> Option<Vector2> {
        if self.began || self.moved {
            Some(self.position)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_hold_move_release() {
        let mut t = TouchState::default();
        t.update(Some(Vector2::new(10.0, 10.0)));
        assert!(t.began && !t.moved);
        assert!(t.sample().is_some());

        t.update(Some(Vector2::new(10.0, 10.0)));
        assert!(!t.began && !t.moved);
        assert!(t.sample().is_none());

        t.update(Some(Vector2::new(12.0, 10.0)));
        assert!(t.moved);
        assert_eq!(t.sample().map(|p| p.x), Some(12.0));

        t.update(None);
        assert!(!t.down && t.sample().is_none());
    }

    #[test]
    fn test_inject_always_samples() {
        let mut t = TouchState::default();
        t.inject(Some(Vector2::new(1.0, 2.0)));
        assert!(t.sample().is_some());
        t.inject(Some(Vector2::new(1.0, 2.0)));
        assert!(t.sample().is_some());
        t.inject(None);
        assert!(t.sample().is_none());
    }
}
