//! State of the game in progress.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    pub fn won(&self) -> bool {
        matches!(self, Outcome::Won)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct GameSession {
    pub lives: i32,
    /// Set on an enemy hit; cleared when the blink window ends.
    pub invincible: bool,
    /// Latched the first time a win or loss is detected.
    pub game_over: bool,
    pub outcome: Option<Outcome>,
    /// Last steering target, layer-local.
    pub last_touch: Option<Vector2>,
}

impl GameSession {
    pub fn new(lives: i32) -> Self {
        Self {
            lives,
            invincible: false,
            game_over: false,
            outcome: None,
            last_touch: None,
        }
    }

    pub fn reset(&mut self, lives: i32) {
        *self = Self::new(lives);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(5)
    }
}
