//! Title screen input.

use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::touch::TouchState;

/// A touch anywhere on the title screen starts a game.
pub fn menu_touch_system(touch: Res<TouchState>, mut next_state: ResMut<NextGameState>) {
    if touch.began {
        info!("Starting a new game");
        next_state.set(GameStates::Playing);
    }
}
