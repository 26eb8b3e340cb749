//! Invincibility blink.
//!
//! While a [`Blink`] is attached the sprite flickers `times` times over
//! `duration` seconds. The blink system removes it when the window ends and
//! clears the session's invincibility flag.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug)]
pub struct Blink {
    pub duration: f32,
    pub times: u32,
    pub elapsed: f32,
}

impl Blink {
    pub fn new(duration: f32, times: u32) -> Self {
        Self {
            duration,
            times: times.max(1),
            elapsed: 0.0,
        }
    }

    /// Length of one on/off cycle.
    pub fn slice(&self) -> f32 {
        self.duration / self.times as f32
    }

    /// Visible during the first half of every slice.
    pub fn is_visible(&self) -> bool {
        let slice = self.slice();
        if slice <= 0.0 {
            return true;
        }
        (self.elapsed % slice) <= slice * 0.5
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_alternates_within_slice() {
        let mut b = Blink::new(3.0, 10);
        assert!(b.is_visible());
        b.elapsed = 0.1;
        assert!(b.is_visible());
        b.elapsed = 0.2;
        assert!(!b.is_visible());
        b.elapsed = 0.31;
        assert!(b.is_visible());
    }

    #[test]
    fn test_finished_after_duration() {
        let mut b = Blink::new(3.0, 10);
        b.elapsed = 2.99;
        assert!(!b.finished());
        b.elapsed = 3.0;
        assert!(b.finished());
    }

    #[test]
    fn test_zero_times_clamped() {
        let b = Blink::new(1.0, 0);
        assert_eq!(b.times, 1);
    }
}
