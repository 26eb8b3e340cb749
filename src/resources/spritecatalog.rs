//! Sprite sizes keyed by texture.
//!
//! Spawning needs sprite sizes for placement and colliders even when no
//! texture is loaded (headless runs and tests), so the catalog starts with
//! the sizes of the stock artwork and is overwritten with real texture
//! dimensions during setup.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

const FALLBACK_SIZES: &[(&str, f32, f32)] = &[
    ("zombie1", 157.0, 108.0),
    ("zombie2", 157.0, 108.0),
    ("zombie3", 157.0, 108.0),
    ("zombie4", 157.0, 108.0),
    ("cat", 72.0, 100.0),
    ("enemy", 173.0, 192.0),
    ("background1", 2048.0, 1536.0),
    ("background2", 2048.0, 1536.0),
    ("MainMenu", 2048.0, 1536.0),
    ("YouWin", 2048.0, 1536.0),
    ("YouLose", 2048.0, 1536.0),
];

#[derive(Resource, Debug, Clone)]
pub struct SpriteCatalog {
    sizes: FxHashMap<String, Vector2>,
}

impl Default for SpriteCatalog {
    fn default() -> Self {
        let mut sizes = FxHashMap::default();
        for (key, w, h) in FALLBACK_SIZES {
            sizes.insert((*key).to_string(), Vector2::new(*w, *h));
        }
        Self { sizes }
    }
}

impl SpriteCatalog {
    pub fn insert(&mut self, key: impl Into<String>, size: Vector2) {
        self.sizes.insert(key.into(), size);
    }

    /// Size of the sprite for `key`; zero if unknown.
    pub fn size(&self, key: &str) -> Vector2 {
        self.sizes.get(key).copied().unwrap_or_else(Vector2::zero)
    }
}
