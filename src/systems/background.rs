use bevy_ecs::prelude::*;

use crate::components::background::BackgroundTile;
use crate::components::mapposition::MapPosition;
use crate::resources::gameconfig::GameConfig;
use crate::resources::scrolllayer::ScrollLayer;
use crate::resources::worldtime::WorldTime;

/// Layer-local x of a tile after recycling.
///
/// A tile whose right edge has reached the left edge of the view jumps
/// ahead by the length of the whole strip (`tile_width * tile_count`),
/// landing just after the last tile.
pub fn wrapped_tile_x(tile_x: f32, layer_x: f32, tile_width: f32, tile_count: usize) -> f32 {
    if tile_x + layer_x <= -tile_width {
        tile_x + tile_width * tile_count as f32
    } else {
        tile_x
    }
}

/// Slide the layer left and recycle tiles that scrolled out of view.
pub fn background_scroll_system(
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut layer: ResMut<ScrollLayer>,
    mut tiles: Query<(&mut MapPosition, &BackgroundTile)>,
) {
    layer.offset.x -= config.gameplay.background_speed * time.delta;

    let count = config.gameplay.background_tiles;
    for (mut position, tile) in tiles.iter_mut() {
        position.pos.x = wrapped_tile_x(position.pos.x, layer.offset.x, tile.width, count);
    }
}
