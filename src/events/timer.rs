//! Timer expiration events.
//!
//! When a [`Timer`](crate::components::timer::Timer) component reaches its
//! duration, a [`TimerEvent`] is triggered. The spawn observer in
//! [`crate::systems::spawner`] dispatches on the signal name.

use bevy_ecs::prelude::*;

pub const SIGNAL_SPAWN_ENEMY: &str = "spawn_enemy";
pub const SIGNAL_SPAWN_CAT: &str = "spawn_cat";
pub const SIGNAL_RESTART_GAME: &str = "restart_game";

/// Event emitted when a timer expires.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity whose timer expired.
    pub entity: Entity,
    /// The signal name configured on the timer.
    pub signal: String,
}
