use bevy_ecs::prelude::Component;

/// One tile of the scrolling background strip.
///
/// Tiles are laid side by side and recycled to the right end of the strip
/// once they scroll fully past the left edge of the view.
#[derive(Component, Clone, Copy, Debug)]
pub struct BackgroundTile {
    pub width: f32,
}
