// Counts a number of seconds and then sends an event.
use bevy_ecs::prelude::Component;

/// Countdown that triggers a [`TimerEvent`](crate::events::timer::TimerEvent)
/// carrying `signal` each time `duration` elapses.
///
/// Repeating timers keep the remainder after firing; one-shot timers remove
/// themselves after the first event.
#[derive(Component, Debug, Clone)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
    pub signal: String,
    pub repeating: bool,
}
impl Timer {
    pub fn new(duration: f32, signal: impl Into<String>) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            signal: signal.into(),
            repeating: true,
        }
    }

    /// Fire once and then remove the timer.
    pub fn once(mut self) -> Self {
        self.repeating = false;
        self
    }

    /// Fire on the very first tick, then every `duration`.
    pub fn primed(mut self) -> Self {
        self.elapsed = self.duration;
        self
    }

    pub fn is_due(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_repeating_and_not_due() {
        let t = Timer::new(2.0, "spawn_enemy");
        assert!(t.repeating);
        assert!(!t.is_due());
        assert_eq!(t.signal, "spawn_enemy");
    }

    #[test]
    fn test_primed_is_due_immediately() {
        let t = Timer::new(1.0, "spawn_cat").primed();
        assert!(t.is_due());
    }

    #[test]
    fn test_once_is_not_repeating() {
        let t = Timer::new(3.0, "restart_game").once();
        assert!(!t.repeating);
        assert!(!t.is_due());
    }
}
