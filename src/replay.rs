//! Recorded sessions.
//!
//! A [`ReplayScript`] holds the RNG seed and, for every frame of one game,
//! the host timestamp and the steering sample the touch system produced.
//! Running it through [`run_headless`] reproduces the game exactly: the
//! world is rebuilt with the same seed and fed the same clock and touches.

use std::fs;
use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::{build_world, gameplay_schedule};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::session::{GameSession, Outcome};
use crate::resources::touch::TouchState;
use crate::resources::train::Train;
use crate::resources::worldtime::WorldTime;
use crate::systems::time::update_world_clock;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("replay file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("replay file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("replay has no frames")]
    Empty,
    #[error("replay timestamp goes backwards at frame {index}")]
    NonMonotonic { index: usize },
}

/// One recorded frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSample {
    /// Host clock in seconds.
    pub timestamp: f64,
    /// Steering sample in scene coordinates, if the touch began or moved.
    #[serde(default)]
    pub touch: Option<[f32; 2]>,
}

impl FrameSample {
    pub fn touch_point(&self) -> Option<Vector2> {
        self.touch.map(|[x, y]| Vector2::new(x, y))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    pub seed: u64,
    pub frames: Vec<FrameSample>,
}

impl ReplayScript {
    pub fn from_json(text: &str) -> Result<Self, ReplayError> {
        let script: ReplayScript = serde_json::from_str(text)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ReplayError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// At least one frame, timestamps never decreasing.
    pub fn validate(&self) -> Result<(), ReplayError> {
        if self.frames.is_empty() {
            return Err(ReplayError::Empty);
        }
        for (index, pair) in self.frames.windows(2).enumerate() {
            if pair[1].timestamp < pair[0].timestamp {
                return Err(ReplayError::NonMonotonic { index: index + 1 });
            }
        }
        Ok(())
    }
}

/// Result of a headless run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Frames simulated; fewer than recorded when the game ended early.
    pub frames: usize,
    /// Simulated seconds.
    pub elapsed: f32,
    pub outcome: Option<Outcome>,
    pub lives: i32,
    pub train_length: usize,
}

/// Play `script` without a window and report how the game ended.
pub fn run_headless(config: GameConfig, script: &ReplayScript) -> Result<ReplayReport, ReplayError> {
    script.validate()?;
    let mut world = build_world(config, script.seed);
    let mut schedule = gameplay_schedule();
    world.resource_mut::<NextGameState>().set(GameStates::Playing);

    let mut frames = 0;
    for sample in &script.frames {
        update_world_clock(&mut world, sample.timestamp);
        world
            .resource_mut::<TouchState>()
            .inject(sample.touch_point());
        schedule.run(&mut world);
        frames += 1;
        if world.resource::<GameSession>().game_over {
            break;
        }
    }

    let session = world.resource::<GameSession>();
    let report = ReplayReport {
        frames,
        elapsed: world.resource::<WorldTime>().elapsed,
        outcome: session.outcome,
        lives: session.lives,
        train_length: world.resource::<Train>().len(),
    };
    info!("Replay finished: {:?}", report);
    Ok(report)
}

/// Collects frames of the first game played in the interactive loop.
#[derive(Resource, Debug)]
pub struct ReplayRecorder {
    pub path: PathBuf,
    pub script: ReplayScript,
    pub finished: bool,
}

impl ReplayRecorder {
    pub fn new(path: impl Into<PathBuf>, seed: u64) -> Self {
        Self {
            path: path.into(),
            script: ReplayScript {
                seed,
                frames: Vec::new(),
            },
            finished: false,
        }
    }

    pub fn save(&self) -> Result<(), ReplayError> {
        self.script.save(&self.path)?;
        info!(
            "Recorded {} frames to {}",
            self.script.frames.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Append this frame's clock and steering sample. Runs after gameplay while
/// a game is in progress.
pub fn record_frame(
    time: Res<WorldTime>,
    touch: Res<TouchState>,
    session: Res<GameSession>,
    mut recorder: ResMut<ReplayRecorder>,
) {
    if recorder.finished {
        return;
    }
    let Some(timestamp) = time.last_timestamp else {
        warn!("Frame without timestamp, not recorded");
        return;
    };
    recorder.script.frames.push(FrameSample {
        timestamp,
        touch: touch.sample().map(|p| [p.x, p.y]),
    });
    if session.game_over {
        recorder.finished = true;
    }
}
