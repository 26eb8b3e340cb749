use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Position of an entity inside the scrolling layer.
///
/// Add the current [`ScrollLayer`](crate::resources::scrolllayer::ScrollLayer)
/// offset to get the scene (screen) position.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }
}
