use bevy_ecs::prelude::Resource;

/// Frame clock.
///
/// The host passes an absolute timestamp every frame; `delta` is derived
/// from the previous one and is zero on the first frame.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
    pub last_timestamp: Option<f64>,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
            last_timestamp: None,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Zero the current frame's delta so a freshly entered scene starts
    /// from rest. The next frame measures from the current timestamp.
    pub fn restart_frame(&mut self) {
        self.delta = 0.0;
    }
}
