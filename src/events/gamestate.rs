//! Game state transition event and observer.
//!
//! Systems can request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the enter/exit systems stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! Scene hooks are looked up under well-known keys:
//!
//! | state      | enter             | exit          |
//! |------------|-------------------|---------------|
//! | `Setup`    | `setup`           |               |
//! | `Menu`     | `enter_menu`      | `clean_scene` |
//! | `Playing`  | `enter_play`      | `clean_scene` |
//! | `GameOver` | `enter_game_over` | `clean_scene` |
//! | `Quitting` | `quit_game`       |               |
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Exit hooks of the old state are queued before enter hooks of the new one,
/// so the old scene is cleared before the new scene spawns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: ResMut<NextGameState>,
    mut game_state: ResMut<GameState>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    match next_game_state.get().clone() {
        Pending(new_state) => {
            let old_state = game_state.get().clone();
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state.clone());
            next_game_state.reset();
            on_state_exit(&old_state, &mut commands, &systems_store);
            on_state_enter(&new_state, &mut commands, &systems_store);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

fn run_hook(key: &str, commands: &mut Commands, systems_store: &SystemsStore) {
    match systems_store.get(key) {
        Some(id) => commands.run_system(*id),
        None => warn!("Scene hook '{}' not found in SystemsStore", key),
    }
}

/// Internal: run state-specific "enter" systems for the given state.
fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    match state {
        GameStates::None => debug!("Entered None state"),
        GameStates::Setup => run_hook("setup", commands, systems_store),
        GameStates::Menu => run_hook("enter_menu", commands, systems_store),
        GameStates::Playing => run_hook("enter_play", commands, systems_store),
        GameStates::GameOver => run_hook("enter_game_over", commands, systems_store),
        GameStates::Quitting => run_hook("quit_game", commands, systems_store),
    }
}

/// Internal: run state-specific "exit" systems for the given state.
fn on_state_exit(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    match state {
        GameStates::Menu | GameStates::Playing | GameStates::GameOver => {
            run_hook("clean_scene", commands, systems_store)
        }
        other => debug!("Exited {:?} state", other),
    }
}
