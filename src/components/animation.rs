use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Playback state of a frame-list animation.
///
/// The definition (frames, fps, looping) lives in
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore) under
/// `animation_key`.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
    /// Pause playback while the entity's rigid body is at rest.
    pub pause_when_idle: bool,
}
impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            pause_when_idle: false,
        }
    }

    pub fn paused_when_idle(mut self) -> Self {
        self.pause_when_idle = true;
        self
    }
}
