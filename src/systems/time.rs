//! Time update and timer systems.
//!
//! The host calls [`update_world_clock`] once per frame with an absolute
//! timestamp; the clock derives the frame delta and stores it on
//! [`WorldTime`](crate::resources::worldtime::WorldTime). [`update_timers`]
//! then advances every [`Timer`] component with that delta.
use bevy_ecs::prelude::*;

use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

/// Seconds between two host timestamps.
///
/// Zero when there is no previous timestamp or when the clock went backwards.
pub fn frame_delta(last: Option<f64>, now: f64) -> f32 {
    match last {
        Some(prev) => (now - prev).max(0.0) as f32,
        None => 0.0,
    }
}

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Advance the clock to the host timestamp `now` (seconds).
pub fn update_world_clock(world: &mut World, now: f64) {
    let dt = {
        let mut wt = world.resource_mut::<WorldTime>();
        let dt = frame_delta(wt.last_timestamp, now);
        wt.last_timestamp = Some(now);
        dt
    };
    update_world_time(world, dt);
}

/// Advance all timers and trigger a [`TimerEvent`] for each expiry.
///
/// A repeating timer whose period fits several times into one frame fires
/// once per period. One-shot timers remove themselves after firing.
pub fn update_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        timer.elapsed += world_time.delta;
        while timer.is_due() {
            commands.trigger(TimerEvent {
                entity,
                signal: timer.signal.clone(),
            });
            if !timer.repeating || timer.duration <= 0.0 {
                commands.entity(entity).remove::<Timer>();
                break;
            }
            timer.elapsed -= timer.duration;
        }
    }
}
