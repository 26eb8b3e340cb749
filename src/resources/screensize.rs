//! Screen size resource.
//!
//! Stores the scene resolution in pixels: the fixed-size space the game is
//! simulated and drawn in, independent of the OS window.

use bevy_ecs::prelude::Resource;

/// Scene size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
