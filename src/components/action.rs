//! Declarative action scripts.
//!
//! An [`Action`] component holds a tree of [`Step`]s (moves, scales and
//! rotations) composed with sequences, groups and repeats. The
//! [`action_system`](crate::systems::action::action_system) advances the
//! script with the frame delta and writes the resulting position, scale and
//! rotation back onto the entity. While the component is present the entity
//! counts as busy; it is removed (or the entity despawned) when the script
//! completes.
//!
//! Scripts are stateless: every frame the pose is re-derived from the pose
//! captured on the first tick and the total elapsed time.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// One node of an action script.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Translate by `delta` over `duration` seconds.
    MoveBy { delta: Vector2, duration: f32 },
    /// Translate to an absolute layer position.
    MoveTo { to: Vector2, duration: f32 },
    /// Scale uniformly to `to`.
    ScaleTo { to: f32, duration: f32 },
    /// Multiply the current scale by `factor`.
    ScaleBy { factor: f32, duration: f32 },
    /// Rotate by `degrees`.
    RotateBy { degrees: f32, duration: f32 },
    /// Run children one after another.
    Sequence(Vec<Step>),
    /// Run children together; lasts as long as the longest child.
    Group(Vec<Step>),
    /// Run `step` `count` times back to back.
    Repeat { step: Box<Step>, count: u32 },
}

/// Which transform channels a script writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Channels {
    pub position: bool,
    pub scale: bool,
    pub rotation: bool,
}

impl Channels {
    pub fn union(self, other: Channels) -> Channels {
        Channels {
            position: self.position || other.position,
            scale: self.scale || other.scale,
            rotation: self.rotation || other.rotation,
        }
    }
}

/// Transform snapshot an action script operates on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vector2,
    pub scale: Vector2,
    /// Degrees.
    pub rotation: f32,
}

impl Step {
    pub fn move_by(delta: Vector2, duration: f32) -> Step {
        Step::MoveBy { delta, duration }
    }

    pub fn move_to(to: Vector2, duration: f32) -> Step {
        Step::MoveTo { to, duration }
    }

    pub fn scale_to(to: f32, duration: f32) -> Step {
        Step::ScaleTo { to, duration }
    }

    pub fn scale_by(factor: f32, duration: f32) -> Step {
        Step::ScaleBy { factor, duration }
    }

    pub fn rotate_by(degrees: f32, duration: f32) -> Step {
        Step::RotateBy { degrees, duration }
    }

    pub fn repeat(self, count: u32) -> Step {
        Step::Repeat {
            step: Box::new(self),
            count,
        }
    }

    /// Total running time in seconds.
    pub fn duration(&self) -> f32 {
        match self {
            Step::MoveBy { duration, .. }
            | Step::MoveTo { duration, .. }
            | Step::ScaleTo { duration, .. }
            | Step::ScaleBy { duration, .. }
            | Step::RotateBy { duration, .. } => duration.max(0.0),
            Step::Sequence(steps) => steps.iter().map(Step::duration).sum(),
            Step::Group(steps) => steps.iter().map(Step::duration).fold(0.0, f32::max),
            Step::Repeat { step, count } => step.duration() * *count as f32,
        }
    }

    /// The step that undoes this one.
    ///
    /// Relative steps invert; absolute steps (`MoveTo`, `ScaleTo`)
    /// reverse to themselves.
    pub fn reversed(&self) -> Step {
        match self {
            Step::MoveBy { delta, duration } => Step::MoveBy {
                delta: Vector2::new(-delta.x, -delta.y),
                duration: *duration,
            },
            Step::ScaleBy { factor, duration } => Step::ScaleBy {
                factor: if *factor != 0.0 { 1.0 / factor } else { 0.0 },
                duration: *duration,
            },
            Step::RotateBy { degrees, duration } => Step::RotateBy {
                degrees: -degrees,
                duration: *duration,
            },
            Step::MoveTo { .. } | Step::ScaleTo { .. } => self.clone(),
            Step::Sequence(steps) => Step::Sequence(steps.iter().rev().map(Step::reversed).collect()),
            Step::Group(steps) => Step::Group(steps.iter().map(Step::reversed).collect()),
            Step::Repeat { step, count } => Step::Repeat {
                step: Box::new(step.reversed()),
                count: *count,
            },
        }
    }

    pub fn channels(&self) -> Channels {
        match self {
            Step::MoveBy { .. } | Step::MoveTo { .. } => Channels {
                position: true,
                ..Channels::default()
            },
            Step::ScaleTo { .. } | Step::ScaleBy { .. } => Channels {
                scale: true,
                ..Channels::default()
            },
            Step::RotateBy { .. } => Channels {
                rotation: true,
                ..Channels::default()
            },
            Step::Sequence(steps) | Step::Group(steps) => steps
                .iter()
                .fold(Channels::default(), |acc, s| acc.union(s.channels())),
            Step::Repeat { step, .. } => step.channels(),
        }
    }
}

/// What happens to the entity once its script completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnComplete {
    /// Remove the [`Action`] component, leaving the entity idle.
    #[default]
    Remove,
    /// Despawn the entity.
    Despawn,
}

/// Running action script attached to an entity.
#[derive(Component, Clone, Debug)]
pub struct Action {
    pub script: Step,
    pub elapsed: f32,
    /// Pose captured on the first tick; `None` until then.
    pub origin: Option<Pose>,
    pub on_complete: OnComplete,
}

impl Action {
    pub fn new(script: Step) -> Self {
        Self {
            script,
            elapsed: 0.0,
            origin: None,
            on_complete: OnComplete::Remove,
        }
    }

    pub fn then_despawn(mut self) -> Self {
        self.on_complete = OnComplete::Despawn;
        self
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.script.duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_sequence_duration_sums() {
        let s = Step::Sequence(vec![Step::scale_by(1.2, 0.5), Step::scale_to(1.0, 0.25)]);
        assert!(approx_eq(s.duration(), 0.75));
    }

    #[test]
    fn test_group_duration_is_longest() {
        let g = Step::Group(vec![Step::scale_by(1.2, 0.5), Step::rotate_by(10.0, 1.5)]);
        assert!(approx_eq(g.duration(), 1.5));
    }

    #[test]
    fn test_repeat_duration_multiplies() {
        let r = Step::rotate_by(22.5, 0.5).repeat(10);
        assert!(approx_eq(r.duration(), 5.0));
    }

    #[test]
    fn test_negative_duration_clamped() {
        assert!(approx_eq(Step::rotate_by(10.0, -1.0).duration(), 0.0));
    }

    #[test]
    fn test_reversed_relative_steps() {
        match Step::move_by(Vector2::new(3.0, -4.0), 1.0).reversed() {
            Step::MoveBy { delta, .. } => {
                assert!(approx_eq(delta.x, -3.0) && approx_eq(delta.y, 4.0))
            }
            other => panic!("unexpected {:?}", other),
        }
        match Step::scale_by(1.25, 0.25).reversed() {
            Step::ScaleBy { factor, .. } => assert!(approx_eq(factor, 0.8)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_reversed_sequence_reverses_order() {
        let s = Step::Sequence(vec![Step::scale_to(1.0, 1.0), Step::rotate_by(90.0, 2.0)]);
        match s.reversed() {
            Step::Sequence(steps) => {
                assert_eq!(steps[0], Step::rotate_by(-90.0, 2.0));
                assert_eq!(steps[1], Step::scale_to(1.0, 1.0));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_channels_union_over_group() {
        let g = Step::Group(vec![
            Step::scale_by(1.2, 0.25),
            Step::Sequence(vec![Step::rotate_by(10.0, 0.5)]),
        ]);
        let c = g.channels();
        assert!(c.scale && c.rotation && !c.position);
    }

    #[test]
    fn test_action_finished_only_after_duration() {
        let mut a = Action::new(Step::rotate_by(90.0, 1.0)).then_despawn();
        assert_eq!(a.on_complete, OnComplete::Despawn);
        a.elapsed = 0.5;
        assert!(!a.is_finished());
        a.elapsed = 1.0;
        assert!(a.is_finished());
    }
}
