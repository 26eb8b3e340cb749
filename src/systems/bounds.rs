//! Keep the zombie inside the playable area.
//!
//! The horizontal bounds are the visible screen, which slides over the
//! scrolling layer; the vertical bounds are the playable band. On contact
//! with an edge the position is clamped and the matching velocity component
//! flips sign, so the zombie bounces off.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::playablearea::PlayableArea;
use crate::resources::screensize::ScreenSize;
use crate::resources::scrolllayer::ScrollLayer;

/// Clamp `pos` to `[min, max]` and reflect the velocity on every touched edge.
///
/// Each axis is handled independently; touching an edge exactly counts as
/// contact. Inside the rectangle this is the identity.
pub fn reflect_in_bounds(
    pos: Vector2,
    vel: Vector2,
    min: Vector2,
    max: Vector2,
) -> (Vector2, Vector2) {
    let mut pos = pos;
    let mut vel = vel;

    if pos.x <= min.x {
        pos.x = min.x;
        vel.x = -vel.x;
    }
    if pos.x >= max.x {
        pos.x = max.x;
        vel.x = -vel.x;
    }
    if pos.y <= min.y {
        pos.y = min.y;
        vel.y = -vel.y;
    }
    if pos.y >= max.y {
        pos.y = max.y;
        vel.y = -vel.y;
    }
    (pos, vel)
}

/// Current bounds in layer-local coordinates.
pub fn layer_bounds(
    layer: &ScrollLayer,
    area: &PlayableArea,
    screen: &ScreenSize,
) -> (Vector2, Vector2) {
    let min = Vector2::new(-layer.offset.x, area.min().y);
    let max = Vector2::new(screen.w as f32 - layer.offset.x, area.max().y);
    (min, max)
}

pub fn bounds_system(
    layer: Res<ScrollLayer>,
    area: Res<PlayableArea>,
    screen: Res<ScreenSize>,
    mut query: Query<(&mut MapPosition, &mut RigidBody), With<Player>>,
) {
    let (min, max) = layer_bounds(&layer, &area, &screen);
    for (mut position, mut body) in query.iter_mut() {
        let (pos, vel) = reflect_in_bounds(position.pos, body.velocity, min, max);
        position.pos = pos;
        body.velocity = vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> (Vector2, Vector2) {
        (Vector2::new(0.0, 192.0), Vector2::new(2048.0, 1344.0))
    }

    #[test]
    fn test_inside_is_identity() {
        let (min, max) = rect();
        let (p, v) = reflect_in_bounds(Vector2::new(500.0, 500.0), Vector2::new(3.0, -4.0), min, max);
        assert_eq!((p.x, p.y, v.x, v.y), (500.0, 500.0, 3.0, -4.0));
    }

    #[test]
    fn test_left_edge_reflects_x_only() {
        let (min, max) = rect();
        let (p, v) = reflect_in_bounds(Vector2::new(-5.0, 500.0), Vector2::new(-100.0, 50.0), min, max);
        assert_eq!((p.x, p.y), (0.0, 500.0));
        assert_eq!((v.x, v.y), (100.0, 50.0));
    }

    #[test]
    fn test_bottom_edge_reflects_y_only() {
        let (min, max) = rect();
        let (p, v) = reflect_in_bounds(Vector2::new(700.0, 1400.0), Vector2::new(10.0, 80.0), min, max);
        assert_eq!((p.x, p.y), (700.0, 1344.0));
        assert_eq!((v.x, v.y), (10.0, -80.0));
    }

    #[test]
    fn test_corner_reflects_both() {
        let (min, max) = rect();
        let (p, v) = reflect_in_bounds(Vector2::new(2100.0, 100.0), Vector2::new(30.0, -40.0), min, max);
        assert_eq!((p.x, p.y), (2048.0, 192.0));
        assert_eq!((v.x, v.y), (-30.0, 40.0));
    }

    #[test]
    fn test_exact_edge_counts_as_contact() {
        let (min, max) = rect();
        let (_, v) = reflect_in_bounds(Vector2::new(0.0, 500.0), Vector2::new(-1.0, 0.0), min, max);
        assert_eq!(v.x, 1.0);
    }

    #[test]
    fn test_layer_bounds_follow_scroll() {
        let layer = ScrollLayer {
            offset: Vector2::new(-300.0, 0.0),
        };
        let area = PlayableArea::from_scene_size(2048.0, 1536.0, 16.0 / 9.0);
        let screen = ScreenSize { w: 2048, h: 1536 };
        let (min, max) = layer_bounds(&layer, &area, &screen);
        assert_eq!(min.x, 300.0);
        assert_eq!(max.x, 2348.0);
        assert!((min.y - 192.0).abs() < 1e-3);
    }
}
