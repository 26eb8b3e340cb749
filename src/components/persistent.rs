//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component will not be despawned when
//! switching scenes. Observers and registered scene systems carry it.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across scene changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
