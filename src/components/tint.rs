//! Color tint component for rendering sprites.
//!
//! The [`Tint`] component replaces `Color::WHITE` in sprite draw calls. Cats
//! that join the train are tinted green.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }

    /// Full green colorization.
    pub fn green() -> Self {
        Self::new(0, 255, 0, 255)
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        let t = Tint::default();
        assert_eq!(t.color.r, 255);
        assert_eq!(t.color.g, 255);
        assert_eq!(t.color.b, 255);
        assert_eq!(t.color.a, 255);
    }

    #[test]
    fn test_green() {
        let t = Tint::green();
        assert_eq!((t.color.r, t.color.g, t.color.b), (0, 255, 0));
    }
}
