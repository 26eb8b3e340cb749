//! Window size resource.
//!
//! Tracks the OS window dimensions, which differ from the scene resolution.
//! The scene is letterboxed into the window, and touch positions are mapped
//! back through the same transform.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Destination rectangle of the scene inside the window.
    ///
    /// Preserves the scene aspect ratio and centers it, leaving bars on the
    /// sides (wide window) or top and bottom (tall window).
    pub fn calculate_letterbox(&self, scene_width: u32, scene_height: u32) -> Rectangle {
        let scene_w = scene_width as f32;
        let scene_h = scene_height as f32;
        let window_w = self.w as f32;
        let window_h = self.h as f32;

        let scale = (window_w / scene_w).min(window_h / scene_h);
        let width = scene_w * scale;
        let height = scene_h * scale;
        Rectangle {
            x: (window_w - width) / 2.0,
            y: (window_h - height) / 2.0,
            width,
            height,
        }
    }

    /// Map a window-space position into scene space.
    ///
    /// Positions inside the bars are clamped to the scene edges.
    pub fn window_to_game_pos(
        &self,
        window_pos: Vector2,
        scene_width: u32,
        scene_height: u32,
    ) -> Vector2 {
        let letterbox = self.calculate_letterbox(scene_width, scene_height);
        let scene_w = scene_width as f32;
        let scene_h = scene_height as f32;

        let x = (window_pos.x - letterbox.x) * scene_w / letterbox.width;
        let y = (window_pos.y - letterbox.y) * scene_h / letterbox.height;
        Vector2 {
            x: x.clamp(0.0, scene_w),
            y: y.clamp(0.0, scene_h),
        }
    }
}
