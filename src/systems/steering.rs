//! Touch steering.
//!
//! Every touch sample re-aims the zombie: its velocity becomes the unit
//! vector toward the touch point times the configured speed.

use bevy_ecs::prelude::*;
use log::{debug, warn};
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::scrolllayer::ScrollLayer;
use crate::resources::session::GameSession;
use crate::resources::touch::TouchState;

/// Velocity of magnitude `max_speed` pointing from `from` to `to`.
///
/// The direction is not guarded: when `to == from` the division by a zero
/// length yields NaN components.
pub fn steer_toward(from: Vector2, to: Vector2, max_speed: f32) -> Vector2 {
    let offset = to - from;
    let length = offset.length();
    Vector2::new(offset.x / length * max_speed, offset.y / length * max_speed)
}

pub fn touch_steering_system(
    touch: Res<TouchState>,
    layer: Res<ScrollLayer>,
    config: Res<GameConfig>,
    mut session: ResMut<GameSession>,
    mut query: Query<(&MapPosition, &mut RigidBody), With<Player>>,
) {
    let Some(scene_point) = touch.sample() else {
        return;
    };
    let target = layer.scene_to_layer(scene_point);
    session.last_touch = Some(target);

    for (position, mut body) in query.iter_mut() {
        let velocity = steer_toward(position.pos, target, config.gameplay.zombie_speed);
        if velocity.x.is_nan() || velocity.y.is_nan() {
            warn!(
                "Touch at the zombie's own position ({:.1}, {:.1}); velocity is undefined",
                target.x, target.y
            );
        } else {
            debug!("Steering toward ({:.1}, {:.1})", target.x, target.y);
        }
        body.velocity = velocity;
    }
}
