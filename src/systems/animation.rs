//! Animation system.
//!
//! Animations are frame lists from
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore); each
//! frame is a whole texture key, so advancing a frame swaps
//! [`Sprite::tex_key`](crate::components::sprite::Sprite).

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::worldtime::WorldTime;

/// Advance `state` by `dt` seconds. Returns the frame index to show.
pub fn advance(state: &mut Animation, resource: &AnimationResource, dt: f32) -> usize {
    let count = resource.frames.len();
    if count == 0 || resource.fps <= 0.0 {
        return 0;
    }
    state.elapsed_time += dt;
    let frame_duration = 1.0 / resource.fps;
    while state.elapsed_time >= frame_duration {
        state.elapsed_time -= frame_duration;
        if state.frame_index + 1 < count {
            state.frame_index += 1;
        } else if resource.looped {
            state.frame_index = 0;
        } else {
            state.elapsed_time = 0.0;
            break;
        }
    }
    state.frame_index.min(count - 1)
}

/// Advance animation playback and update the sprite texture.
///
/// Entities marked `pause_when_idle` hold their frame while their rigid body
/// is at rest.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite, Option<&RigidBody>)>,
    store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut state, mut sprite, body) in query.iter_mut() {
        let Some(resource) = store.animations.get(&state.animation_key) else {
            continue;
        };
        if state.pause_when_idle && body.is_none_or(RigidBody::is_idle) {
            continue;
        }
        let frame = advance(&mut state, resource, time.delta);
        if let Some(key) = resource.frames.get(frame) {
            if sprite.tex_key != *key {
                sprite.tex_key.clone_from(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::animationstore::ZOMBIE_WALK;

    fn walk() -> AnimationResource {
        AnimationStore::default().animations[ZOMBIE_WALK].clone()
    }

    #[test]
    fn test_advance_wraps_looped() {
        let res = walk();
        let mut state = Animation::new(ZOMBIE_WALK);
        // 6 frames at 10 fps: 0.65 s lands back on frame 0
        let frame = advance(&mut state, &res, 0.65);
        assert_eq!(frame, 0);
        assert_eq!(res.frames[advance(&mut state, &res, 0.1)], "zombie2");
    }

    #[test]
    fn test_advance_stops_on_last_frame() {
        let res = AnimationResource {
            frames: vec!["a".into(), "b".into()],
            fps: 10.0,
            looped: false,
        };
        let mut state = Animation::new("x");
        assert_eq!(advance(&mut state, &res, 1.0), 1);
        assert_eq!(advance(&mut state, &res, 1.0), 1);
    }

    #[test]
    fn test_idle_zombie_holds_frame() {
        let mut world = World::new();
        world.insert_resource(AnimationStore::default());
        world.insert_resource(WorldTime {
            delta: 0.25,
            ..Default::default()
        });
        let sprite = Sprite::centered("zombie1", raylib::prelude::Vector2::new(10.0, 10.0));
        let idle = world
            .spawn((
                Animation::new(ZOMBIE_WALK).paused_when_idle(),
                sprite.clone(),
                RigidBody::default(),
            ))
            .id();
        let walking = world
            .spawn((
                Animation::new(ZOMBIE_WALK).paused_when_idle(),
                sprite,
                RigidBody {
                    velocity: raylib::prelude::Vector2::new(1.0, 0.0),
                },
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(animation);
        schedule.run(&mut world);

        assert_eq!(world.get::<Sprite>(idle).unwrap().tex_key, "zombie1");
        assert_eq!(world.get::<Sprite>(walking).unwrap().tex_key, "zombie3");
    }
}
