//! Win and loss detection.

use bevy_ecs::prelude::*;
use log::info;

use crate::events::audio::{AudioCmd, MUSIC_BACKGROUND};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::session::{GameSession, Outcome};
use crate::resources::train::Train;

/// Decide whether the game has ended. A long enough train wins even when
/// the last life went in the same frame.
pub fn evaluate_outcome(lives: i32, train_len: usize, win_len: usize) -> Option<Outcome> {
    if train_len >= win_len {
        Some(Outcome::Won)
    } else if lives <= 0 {
        Some(Outcome::Lost)
    } else {
        None
    }
}

/// Latch the outcome once and move to the end screen.
pub fn game_over_check_system(
    config: Res<GameConfig>,
    train: Res<Train>,
    mut session: ResMut<GameSession>,
    mut next_state: ResMut<NextGameState>,
    mut audio: MessageWriter<AudioCmd>,
) {
    if session.game_over {
        return;
    }
    let Some(outcome) =
        evaluate_outcome(session.lives, train.len(), config.gameplay.win_train_length)
    else {
        return;
    };
    session.game_over = true;
    session.outcome = Some(outcome);
    audio.write(AudioCmd::StopMusic {
        id: MUSIC_BACKGROUND.to_string(),
    });
    next_state.set(GameStates::GameOver);
    info!(
        "Game over: {:?} with {} lives and {} cats",
        outcome,
        session.lives,
        train.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_outcome() {
        assert_eq!(evaluate_outcome(5, 0, 30), None);
        assert_eq!(evaluate_outcome(0, 3, 30), Some(Outcome::Lost));
        assert_eq!(evaluate_outcome(-1, 0, 30), Some(Outcome::Lost));
        assert_eq!(evaluate_outcome(2, 30, 30), Some(Outcome::Won));
    }

    #[test]
    fn test_win_checked_before_loss() {
        assert_eq!(evaluate_outcome(0, 31, 30), Some(Outcome::Won));
    }
}
