//! Contact events raised by the collision system.
//!
//! [`collision_system`](crate::systems::collision::collision_system) only
//! detects overlaps; the responses live in the observers
//! [`on_cat_caught`](crate::systems::collision::on_cat_caught) and
//! [`on_zombie_hit`](crate::systems::collision::on_zombie_hit).
use bevy_ecs::prelude::*;

/// The zombie touched a free cat.
#[derive(Event, Debug, Clone, Copy)]
pub struct CatCaughtEvent {
    pub cat: Entity,
}

/// An enemy's inset box touched the zombie.
#[derive(Event, Debug, Clone, Copy)]
pub struct ZombieHitEvent {
    pub enemy: Entity,
}
