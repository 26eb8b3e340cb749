use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key and its size in world units.
/// The origin selects the pivot point (in pixels) relative to the texture's top-left
/// used for placement/rotation/scaling when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
}

impl Sprite {
    /// Sprite pivoted on its center.
    pub fn centered(tex_key: impl Into<String>, size: Vector2) -> Self {
        Self {
            tex_key: tex_key.into(),
            width: size.x,
            height: size.y,
            origin: Vector2 {
                x: size.x * 0.5,
                y: size.y * 0.5,
            },
        }
    }

    /// Sprite pivoted on its top-left corner.
    pub fn top_left(tex_key: impl Into<String>, size: Vector2) -> Self {
        Self {
            tex_key: tex_key.into(),
            width: size.x,
            height: size.y,
            origin: Vector2::zero(),
        }
    }

    pub fn size(&self) -> Vector2 {
        Vector2 {
            x: self.width,
            y: self.height,
        }
    }
}
