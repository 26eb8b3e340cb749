//! Animation resource registry.
//!
//! This module provides a minimal store for animation definitions that can be
//! reused by multiple entities. Systems can look up an animation by a string
//! key and drive playback based on the immutable parameters stored here.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

pub const ZOMBIE_WALK: &str = "zombie_walk";

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Debug, Clone)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

/// Immutable data describing a frame-list animation.
///
/// Each frame is a whole texture key in
/// [`crate::resources::texturestore::TextureStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    pub frames: Vec<String>,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl Default for AnimationStore {
    fn default() -> Self {
        let mut animations = FxHashMap::default();
        // walk cycle plays forward then back without repeating the end frames
        animations.insert(
            ZOMBIE_WALK.to_string(),
            AnimationResource {
                frames: ["zombie1", "zombie2", "zombie3", "zombie4", "zombie3", "zombie2"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                fps: 10.0,
                looped: true,
            },
        );
        Self { animations }
    }
}
