//! Input systems.
//!
//! [`update_touch_state`] reads the first touch point (or the left mouse
//! button on desktop) from Raylib each frame, maps it from window to scene
//! coordinates and folds it into [`TouchState`]. F11 toggles debug mode via
//! [`SwitchDebugEvent`]; Escape quits.
use bevy_ecs::prelude::*;
use raylib::ffi::{KeyboardKey, MouseButton};
use raylib::prelude::Vector2;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::screensize::ScreenSize;
use crate::resources::touch::TouchState;
use crate::resources::windowsize::WindowSize;

fn raw_contact(rl: &raylib::RaylibHandle) -> Option<Vector2> {
    if rl.get_touch_point_count() > 0 {
        Some(rl.get_touch_position(0))
    } else if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
        Some(rl.get_mouse_position())
    } else {
        None
    }
}

/// Poll Raylib for touch input and update the [`TouchState`] resource.
pub fn update_touch_state(
    mut touch: ResMut<TouchState>,
    rl: NonSend<raylib::RaylibHandle>,
    window: Res<WindowSize>,
    screen: Res<ScreenSize>,
    mut next_state: ResMut<NextGameState>,
    mut commands: Commands,
) {
    let contact = raw_contact(&rl)
        .map(|pos| window.window_to_game_pos(pos, screen.w as u32, screen.h as u32));
    touch.update(contact);

    if rl.is_key_pressed(KeyboardKey::KEY_F11) {
        commands.trigger(SwitchDebugEvent {});
    }
    if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
        next_state.set(GameStates::Quitting);
    }
}
