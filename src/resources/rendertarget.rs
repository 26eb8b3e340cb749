//! Render target resource for fixed-resolution rendering.
//!
//! The scene is drawn into a framebuffer texture at the scene resolution and
//! then scaled into the window with letterboxing.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Framebuffer at the scene resolution.
///
/// This is a NonSend resource because `RenderTexture2D` holds GPU handles
/// that must stay on the main thread.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
}

impl RenderTarget {
    /// Create the framebuffer with bilinear filtering; the artwork is
    /// high-resolution and is usually scaled down.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;
        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_BILINEAR as i32,
            );
        }
        Ok(Self {
            texture,
            game_width: width,
            game_height: height,
        })
    }

    /// Source rectangle for drawing this texture.
    ///
    /// Negative height flips the Y axis to undo OpenGL's texture orientation.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }
}
