//! Named groups used to classify entities.
//!
//! Collision resolution and scene cleanup key off the group name: `"zombie"`,
//! `"cat"`, `"train"`, `"leaving"`, `"enemy"`, `"background"`, `"backdrop"`
//! and `"timer"`.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);

impl Group {
    pub const fn new(name: &'static str) -> Self {
        Group(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }

    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}
