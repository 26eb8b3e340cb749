//! Replay integration tests: recording a session and playing it back
//! headless must give the same game.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use zombieconga::game::{GameplaySet, build_world, gameplay_schedule};
use zombieconga::replay::{
    FrameSample, ReplayError, ReplayRecorder, ReplayScript, record_frame, run_headless,
};
use zombieconga::resources::gameconfig::GameConfig;
use zombieconga::resources::gamestate::{GameStates, NextGameState};
use zombieconga::resources::session::GameSession;
use zombieconga::resources::touch::TouchState;
use zombieconga::resources::train::Train;
use zombieconga::systems::gamestate::state_is_playing;
use zombieconga::systems::time::update_world_clock;

const FRAME: f64 = 1.0 / 60.0;

/// A finger circling the middle of the screen, lifted every other second.
fn touch_at(frame: usize) -> Option<[f32; 2]> {
    let t = frame as f32 * FRAME as f32;
    if (t as u32) % 2 == 1 {
        return None;
    }
    Some([1024.0 + 500.0 * t.cos(), 768.0 + 400.0 * t.sin()])
}

fn circling_script(seed: u64, frames: usize) -> ReplayScript {
    ReplayScript {
        seed,
        frames: (0..frames)
            .map(|i| FrameSample {
                timestamp: 10.0 + i as f64 * FRAME,
                touch: touch_at(i),
            })
            .collect(),
    }
}

#[test]
fn test_same_script_same_result() {
    let script = circling_script(1234, 900);
    let first = run_headless(GameConfig::new(), &script).expect("valid script");
    let second = run_headless(GameConfig::new(), &script).expect("valid script");
    assert_eq!(first, second);
    assert!(first.frames > 0 && first.frames <= 900);
}

#[test]
fn test_elapsed_follows_timestamps() {
    let script = circling_script(5, 120);
    let report = run_headless(GameConfig::new(), &script).expect("valid script");
    if report.outcome.is_none() {
        assert_eq!(report.frames, 120);
        let expected = (119.0 * FRAME) as f32;
        assert!((report.elapsed - expected).abs() < 1e-3);
    }
}

#[test]
fn test_empty_script_rejected() {
    let script = ReplayScript {
        seed: 1,
        frames: Vec::new(),
    };
    assert!(matches!(
        run_headless(GameConfig::new(), &script),
        Err(ReplayError::Empty)
    ));
}

#[test]
fn test_recorded_session_replays_identically() {
    let seed = 77;
    let mut world = build_world(GameConfig::new(), seed);
    world.insert_resource(ReplayRecorder::new("unused.json", seed));
    let mut schedule = gameplay_schedule();
    schedule.add_systems(record_frame.run_if(state_is_playing).after(GameplaySet));
    world.resource_mut::<NextGameState>().set(GameStates::Playing);

    for i in 0..600 {
        update_world_clock(&mut world, 3.0 + i as f64 * FRAME);
        let touch = touch_at(i).map(|[x, y]| Vector2::new(x, y));
        world.resource_mut::<TouchState>().inject(touch);
        schedule.run(&mut world);
        if world.resource::<GameSession>().game_over {
            break;
        }
    }

    let script = world.resource::<ReplayRecorder>().script.clone();
    assert_eq!(script.seed, seed);
    assert!(!script.frames.is_empty());

    let report = run_headless(GameConfig::new(), &script).expect("recorded script is valid");
    let session = world.resource::<GameSession>();
    assert_eq!(report.frames, script.frames.len());
    assert_eq!(report.lives, session.lives);
    assert_eq!(report.outcome, session.outcome);
    assert_eq!(report.train_length, world.resource::<Train>().len());
}
