//! Kinematic body component.
//!
//! The zombie is the only entity moved by velocity; cats and enemies are
//! moved by [`Action`](super::action::Action) scripts instead.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing the current velocity in layer units per second.
///
/// Written by the steering system, reflected by the bounds system and
/// consumed by the movement system to update
/// [`MapPosition`](super::mapposition::MapPosition).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    pub velocity: Vector2,
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the body is standing still.
    pub fn is_idle(&self) -> bool {
        self.velocity.x == 0.0 && self.velocity.y == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_idle() {
        assert!(RigidBody::new().is_idle());
    }

    #[test]
    fn test_moving_body_not_idle() {
        let rb = RigidBody {
            velocity: Vector2 { x: 0.0, y: -3.0 },
        };
        assert!(!rb.is_idle());
    }
}
