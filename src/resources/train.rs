use bevy_ecs::prelude::*;

/// Conga line behind the zombie, in join order.
#[derive(Resource, Debug, Clone, Default)]
pub struct Train {
    pub members: Vec<Entity>,
}

impl Train {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn push(&mut self, entity: Entity) {
        self.members.push(entity);
    }

    /// Detach the last member, the one farthest from the zombie.
    pub fn pop_tail(&mut self) -> Option<Entity> {
        self.members.pop()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}
