//! Conga line following.
//!
//! Each frame the train is walked in join order. The first member chases
//! the zombie, every other member chases the member in front of it. A
//! member only receives a new hop when it is idle (no running
//! [`Action`]), so hops chain smoothly without piling up.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::action::{Action, Step};
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, TrainCar};
use crate::components::rotation::Rotation;
use crate::resources::gameconfig::GameConfig;
use crate::resources::train::Train;
use crate::systems::movement::heading_degrees;

/// One follow hop: the displacement to cover in `duration` seconds at
/// `speed` toward `target`, and the heading in degrees.
///
/// `None` when the member already sits on its target.
pub fn follow_step(
    target: Vector2,
    position: Vector2,
    speed: f32,
    duration: f32,
) -> Option<(Vector2, f32)> {
    let offset = target - position;
    let length = offset.length();
    if length == 0.0 {
        return None;
    }
    let direction = Vector2::new(offset.x / length, offset.y / length);
    let amount = direction.scale_by(speed * duration);
    Some((amount, heading_degrees(direction)))
}

pub fn train_follow_system(
    mut commands: Commands,
    train: Res<Train>,
    config: Res<GameConfig>,
    zombie: Query<&MapPosition, (With<Player>, Without<TrainCar>)>,
    mut cars: Query<(&MapPosition, &mut Rotation, Has<Action>), With<TrainCar>>,
) {
    let Ok(zombie_pos) = zombie.single() else {
        return;
    };
    let speed = config.gameplay.cat_speed;
    let duration = config.gameplay.train_move_duration;

    let mut target = zombie_pos.pos;
    for &member in &train.members {
        let Ok((position, mut rotation, busy)) = cars.get_mut(member) else {
            continue;
        };
        if !busy {
            if let Some((amount, degrees)) = follow_step(target, position.pos, speed, duration) {
                rotation.degrees = degrees;
                commands
                    .entity(member)
                    .insert(Action::new(Step::move_by(amount, duration)));
            }
        }
        target = position.pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_step_length_is_speed_times_duration() {
        let (amount, degrees) =
            follow_step(Vector2::new(100.0, 0.0), Vector2::new(0.0, 0.0), 480.0, 0.3)
                .expect("not on target");
        assert!((amount.x - 144.0).abs() < 1e-3);
        assert!(amount.y.abs() < 1e-6);
        assert!(degrees.abs() < 1e-6);
    }

    #[test]
    fn test_follow_step_heading() {
        let (_, degrees) =
            follow_step(Vector2::new(0.0, 10.0), Vector2::new(0.0, 0.0), 480.0, 0.3)
                .expect("not on target");
        assert!((degrees - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_follow_step_on_target_is_none() {
        assert!(follow_step(Vector2::new(3.0, 3.0), Vector2::new(3.0, 3.0), 480.0, 0.3).is_none());
    }
}
