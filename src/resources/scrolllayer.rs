use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Position of the scrolling world layer in scene coordinates.
///
/// Everything in the layer (background tiles, zombie, cats, enemies) stores
/// a layer-local [`MapPosition`](crate::components::mapposition::MapPosition).
/// The layer drifts left, so `offset.x` only decreases during play.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScrollLayer {
    pub offset: Vector2,
}

impl Default for ScrollLayer {
    fn default() -> Self {
        Self {
            offset: Vector2::zero(),
        }
    }
}

impl ScrollLayer {
    pub fn scene_to_layer(&self, scene: Vector2) -> Vector2 {
        scene - self.offset
    }

    pub fn reset(&mut self) {
        self.offset = Vector2::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_to_layer_subtracts_offset() {
        let layer = ScrollLayer {
            offset: Vector2::new(-350.0, 0.0),
        };
        let local = layer.scene_to_layer(Vector2::new(100.0, 400.0));
        assert_eq!(local.x, 450.0);
        assert_eq!(local.y, 400.0);
    }
}
