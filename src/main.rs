//! Zombie Conga main entry point.
//!
//! A 2D arcade game written in Rust using:
//! - **raylib** for windowing, graphics, input, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Steer the zombie by touching (or clicking) where it should go. Free cats
//! join its conga line; enemies cost a life and the last cats of the line.
//! Thirty cats win, running out of lives loses.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (sprites, bodies, colliders, actions, etc.)
//! - [`events`] – Event and message types (collisions, timers, audio, state)
//! - [`game`] – Scene hooks and world/schedule assembly
//! - [`replay`] – Recording and headless playback of sessions
//! - [`resources`] – ECS resources (session, train, scroll layer, config, etc.)
//! - [`systems`] – ECS systems (steering, movement, collision, rendering, etc.)
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, build the ECS world, start audio
//! 2. Enter the Setup state, which loads textures and sounds
//! 3. Each frame: feed the host clock, read touch input, run gameplay,
//!    forward audio commands, render
//! 4. Save the recording (if any) and stop the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run --release -- --record session.json
//! cargo run --release -- --replay session.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod replay;
mod resources;
mod systems;

use crate::events::gamestate::GameStateChangedEvent;
use crate::game::{GameplaySet, build_world, gameplay_schedule, register_hook};
use crate::replay::{ReplayRecorder, ReplayScript, record_frame, run_headless};
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::gameconfig::{ConfigError, GameConfig};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::rendertarget::RenderTarget;
use crate::resources::windowsize::WindowSize;
use crate::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_messages,
};
use crate::systems::gamestate::state_is_playing;
use crate::systems::input::update_touch_state;
use crate::systems::render::render_system;
use crate::systems::time::update_world_clock;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::{Path, PathBuf};

/// Zombie Conga
#[derive(Parser)]
#[command(version, about = "Lead a conga line of cats, dodge the cat ladies.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "config.ini")]
    config: PathBuf,

    /// Seed for enemy and cat placement; random when not set here or in the config.
    #[arg(long)]
    seed: Option<u64>,

    /// Play a recorded session without a window, print the result and exit.
    #[arg(long, value_name = "PATH")]
    replay: Option<PathBuf>,

    /// Record the first game to PATH when the window closes.
    #[arg(long, value_name = "PATH")]
    record: Option<PathBuf>,
}

fn load_config(path: PathBuf) -> GameConfig {
    let mut config = GameConfig::with_path(path);
    match config.load_from_file() {
        Ok(()) => {}
        Err(ConfigError::Load(e)) => {
            info!("No usable config file ({}), using defaults", e);
            if !config.config_path.exists() {
                if let Err(e) = config.save_to_file() {
                    warn!("{}", e);
                }
            }
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
    config
}

fn replay(config: GameConfig, path: &Path) {
    let report = ReplayScript::load(path).and_then(|script| run_headless(config, &script));
    match report {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => error!("Failed to print report: {}", e),
        },
        Err(e) => {
            error!("Replay of {} failed: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config);

    if let Some(path) = cli.replay {
        replay(config, &path);
        return;
    }

    let seed = cli
        .seed
        .or(config.gameplay.seed)
        .unwrap_or_else(|| fastrand::u64(..));

    // --------------- Raylib window & render target ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Zombie Conga");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled as a state change
    rl.set_exit_key(None);
    if config.fullscreen {
        rl.toggle_fullscreen();
    }

    let render_target =
        match RenderTarget::new(&mut rl, &thread, config.render_width, config.render_height) {
            Ok(target) => target,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        };

    // --------------- ECS world + resources ---------------
    let mut world = build_world(config, seed);
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_non_send_resource(render_target);

    // must go before setup queues the sound loads
    setup_audio(&mut world);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    register_hook(&mut world, "setup", game::setup);

    if let Some(path) = cli.record {
        world.insert_resource(ReplayRecorder::new(path, seed));
    }

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});
    world.flush();

    let mut update = gameplay_schedule();
    update.add_systems(update_touch_state.before(GameplaySet));
    update.add_systems(
        // audio systems must be together
        (
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain()
            .after(GameplaySet),
    );
    update.add_systems(
        record_frame
            .run_if(resource_exists::<ReplayRecorder>)
            .run_if(state_is_playing)
            .after(GameplaySet),
    );
    update.add_systems(render_system.after(GameplaySet));

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !matches!(world.resource::<GameState>().get(), GameStates::Quitting)
    {
        let now = world.non_send_resource::<raylib::RaylibHandle>().get_time();
        update_world_clock(&mut world, now);

        update.run(&mut world);

        world.clear_trackers();

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }

    if let Some(recorder) = world.get_resource::<ReplayRecorder>() {
        if let Err(e) = recorder.save() {
            error!("Failed to save recording: {}", e);
        }
    }
    shutdown_audio(&mut world);
}
