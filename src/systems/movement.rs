use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::{FaceVelocity, Rotation};
use crate::resources::worldtime::WorldTime;

/// Explicit Euler step. No clamping; bounds are handled separately.
pub fn integrate(position: Vector2, velocity: Vector2, dt: f32) -> Vector2 {
    position + velocity.scale_by(dt)
}

/// Heading of `velocity` in degrees, measured from +x toward +y.
pub fn heading_degrees(velocity: Vector2) -> f32 {
    velocity.y.atan2(velocity.x).to_degrees()
}

pub fn movement_system(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        position.pos = integrate(position.pos, rigidbody.velocity, time.delta);
    }
}

/// Turn velocity-driven entities to face where they are going.
pub fn face_velocity_system(mut query: Query<(&mut Rotation, &RigidBody), With<FaceVelocity>>) {
    for (mut rotation, rigidbody) in query.iter_mut() {
        rotation.degrees = heading_degrees(rigidbody.velocity);
    }
}
