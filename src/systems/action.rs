//! Action script evaluation.
//!
//! [`action_system`] advances every [`Action`] by the frame delta and writes
//! the sampled pose back to [`MapPosition`], [`Scale`] and [`Rotation`].
//! Only the channels the script touches are written, so a move script never
//! fights the train system over rotation.
//!
//! Sampling is a pure function of the script, the elapsed time and the pose
//! captured on the script's first tick (see [`sample`]).

use bevy_ecs::prelude::*;
use raylib::math::Vector2;

use crate::components::action::{Action, OnComplete, Pose, Step};
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::resources::worldtime::WorldTime;

/// Linearly interpolate between two 2D vectors.
pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Completed fraction of a leaf step. Zero-length steps complete instantly.
fn fraction(t: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        1.0
    } else {
        (t / duration).clamp(0.0, 1.0)
    }
}

/// Pose reached by running `step` for `t` seconds from `start`.
pub fn sample(step: &Step, t: f32, start: Pose) -> Pose {
    match step {
        Step::MoveBy { delta, duration } => Pose {
            position: start.position + delta.scale_by(fraction(t, *duration)),
            ..start
        },
        Step::MoveTo { to, duration } => Pose {
            position: lerp_v2(start.position, *to, fraction(t, *duration)),
            ..start
        },
        Step::ScaleTo { to, duration } => Pose {
            scale: lerp_v2(start.scale, Vector2::new(*to, *to), fraction(t, *duration)),
            ..start
        },
        Step::ScaleBy { factor, duration } => Pose {
            scale: start
                .scale
                .scale_by(lerp_f32(1.0, *factor, fraction(t, *duration))),
            ..start
        },
        Step::RotateBy { degrees, duration } => Pose {
            rotation: start.rotation + degrees * fraction(t, *duration),
            ..start
        },
        Step::Sequence(steps) => {
            let mut pose = start;
            let mut remaining = t;
            for child in steps {
                let d = child.duration();
                if remaining >= d {
                    pose = sample(child, d, pose);
                    remaining -= d;
                } else {
                    pose = sample(child, remaining, pose);
                    break;
                }
            }
            pose
        }
        Step::Group(steps) => {
            let mut pose = start;
            for child in steps {
                let p = sample(child, t.min(child.duration()), start);
                let channels = child.channels();
                if channels.position {
                    pose.position = p.position;
                }
                if channels.scale {
                    pose.scale = p.scale;
                }
                if channels.rotation {
                    pose.rotation = p.rotation;
                }
            }
            pose
        }
        Step::Repeat { step, count } => {
            let d = step.duration();
            let mut pose = start;
            if d <= 0.0 {
                for _ in 0..*count {
                    pose = sample(step, 0.0, pose);
                }
                return pose;
            }
            let full = ((t / d).floor().max(0.0) as u32).min(*count);
            for _ in 0..full {
                pose = sample(step, d, pose);
            }
            if full < *count {
                pose = sample(step, t - full as f32 * d, pose);
            }
            pose
        }
    }
}

/// Advance running scripts and finish completed ones.
pub fn action_system(
    time: Res<WorldTime>,
    mut commands: Commands,
    mut query: Query<(
        Entity,
        &mut Action,
        &mut MapPosition,
        Option<&mut Scale>,
        Option<&mut Rotation>,
    )>,
) {
    for (entity, mut action, mut position, scale, rotation) in query.iter_mut() {
        let origin = match action.origin {
            Some(origin) => origin,
            None => {
                let origin = Pose {
                    position: position.pos,
                    scale: scale
                        .as_ref()
                        .map(|s| s.scale)
                        .unwrap_or(Vector2 { x: 1.0, y: 1.0 }),
                    rotation: rotation.as_ref().map(|r| r.degrees).unwrap_or(0.0),
                };
                action.origin = Some(origin);
                origin
            }
        };

        action.elapsed += time.delta;
        let duration = action.script.duration();
        let pose = sample(&action.script, action.elapsed.min(duration), origin);
        let channels = action.script.channels();

        if channels.position {
            position.pos = pose.position;
        }
        if channels.scale {
            if let Some(mut scale) = scale {
                scale.scale = pose.scale;
            }
        }
        if channels.rotation {
            if let Some(mut rotation) = rotation {
                rotation.degrees = pose.rotation;
            }
        }

        if action.is_finished() {
            match action.on_complete {
                OnComplete::Remove => {
                    commands.entity(entity).try_remove::<Action>();
                }
                OnComplete::Despawn => {
                    commands.entity(entity).try_despawn();
                }
            }
        }
    }
}
