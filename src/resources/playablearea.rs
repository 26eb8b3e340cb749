//! Playable rectangle.
//!
//! The scene is authored for a 4:3 screen but must stay playable on devices
//! up to 16:9, so only a full-width horizontal band of the scene is used:
//! `height = width / max_aspect`, centered vertically.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

pub const DEFAULT_MAX_ASPECT: f32 = 16.0 / 9.0;

#[derive(Resource, Clone, Copy, Debug)]
pub struct PlayableArea {
    pub rect: Rectangle,
}

impl PlayableArea {
    pub fn from_scene_size(width: f32, height: f32, max_aspect: f32) -> Self {
        let playable_height = width / max_aspect;
        let margin = (height - playable_height) / 2.0;
        Self {
            rect: Rectangle {
                x: 0.0,
                y: margin,
                width,
                height: playable_height,
            },
        }
    }

    pub fn min(&self) -> Vector2 {
        Vector2::new(self.rect.x, self.rect.y)
    }

    pub fn max(&self) -> Vector2 {
        Vector2::new(self.rect.x + self.rect.width, self.rect.y + self.rect.height)
    }
}
