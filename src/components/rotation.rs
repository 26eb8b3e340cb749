use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }
}

/// Marker: keep [`Rotation`] aligned with the entity's velocity heading.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct FaceVelocity;
