//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 2048
//! height = 1536
//!
//! [window]
//! width = 1024
//! height = 768
//! fullscreen = false
//! vsync = true
//! target_fps = 60
//!
//! [gameplay]
//! zombie_speed = 480
//! cat_speed = 480
//! background_speed = 200
//! lives = 5
//! win_train_length = 30
//! seed = 1234
//! ```
//!
//! Every `[gameplay]` key is optional; see [`GameplayConfig`] for the full
//! list and defaults.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 2048;
const DEFAULT_RENDER_HEIGHT: u32 = 1536;
const DEFAULT_WINDOW_WIDTH: u32 = 1024;
const DEFAULT_WINDOW_HEIGHT: u32 = 768;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Most cats that can leave the train on a single hit.
pub const MAX_CATS_LOST_PER_HIT: usize = 8;

/// Errors raised while loading or saving the configuration file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or parsed as INI.
    #[error("failed to load config file: {0}")]
    Load(String),
    /// The file could not be written.
    #[error("failed to save config file: {0}")]
    Save(String),
    /// A value parsed but is out of range.
    #[error("invalid value for [{section}] {key}: {reason}")]
    Invalid {
        section: &'static str,
        key: &'static str,
        reason: &'static str,
    },
}

/// Gameplay tuning.
///
/// Speeds are in scene pixels per second, durations and intervals in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct GameplayConfig {
    pub zombie_speed: f32,
    pub cat_speed: f32,
    /// Length of each follow hop issued to an idle train member.
    pub train_move_duration: f32,
    pub background_speed: f32,
    pub enemy_interval: f32,
    /// Time an enemy takes to cross the screen.
    pub enemy_travel_time: f32,
    pub cat_interval: f32,
    /// Shrink applied to each side of an enemy's box before testing a hit.
    pub enemy_inset: f32,
    pub invincible_duration: f32,
    pub blink_count: u32,
    pub lives: i32,
    pub win_train_length: usize,
    pub cats_lost_per_hit: usize,
    /// Half-width of the square a detached cat scatters into.
    pub scatter_distance: f32,
    pub scatter_duration: f32,
    pub background_tiles: usize,
    /// Fixed RNG seed; random when absent.
    pub seed: Option<u64>,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            zombie_speed: 480.0,
            cat_speed: 480.0,
            train_move_duration: 0.3,
            background_speed: 200.0,
            enemy_interval: 2.0,
            enemy_travel_time: 2.0,
            cat_interval: 1.0,
            enemy_inset: 20.0,
            invincible_duration: 3.0,
            blink_count: 10,
            lives: 5,
            win_train_length: 30,
            cats_lost_per_hit: 2,
            scatter_distance: 100.0,
            scatter_duration: 1.0,
            background_tiles: 2,
            seed: None,
        }
    }
}

impl GameplayConfig {
    /// Reject values the game loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("enemy_interval", self.enemy_interval),
            ("cat_interval", self.cat_interval),
            ("enemy_travel_time", self.enemy_travel_time),
            ("train_move_duration", self.train_move_duration),
        ];
        for (key, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid {
                    section: "gameplay",
                    key,
                    reason: "must be greater than zero",
                });
            }
        }
        if self.background_tiles == 0 {
            return Err(ConfigError::Invalid {
                section: "gameplay",
                key: "background_tiles",
                reason: "at least one tile is required",
            });
        }
        if self.cats_lost_per_hit > MAX_CATS_LOST_PER_HIT {
            return Err(ConfigError::Invalid {
                section: "gameplay",
                key: "cats_lost_per_hit",
                reason: "at most 8 cats can leave the train per hit",
            });
        }
        if self.win_train_length == 0 {
            return Err(ConfigError::Invalid {
                section: "gameplay",
                key: "win_train_length",
                reason: "must be at least one",
            });
        }
        Ok(())
    }
}

/// Game configuration resource.
///
/// Stores render resolution, window settings, and gameplay tuning.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Scene width in pixels.
    pub render_width: u32,
    /// Scene height in pixels.
    pub render_height: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    pub gameplay: GameplayConfig,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            gameplay: GameplayConfig::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting gameplay values are unusable.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let text = std::fs::read_to_string(&self.config_path)
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        self.load_from_str(&text)?;

        info!(
            "Loaded config: {}x{} render, {}x{} window, fps={}, vsync={}, fullscreen={}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fullscreen
        );
        Ok(())
    }

    /// Parse INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.read(text.to_string()).map_err(ConfigError::Load)?;
        self.apply_ini(&config);
        self.gameplay.validate()
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [render] section
        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [gameplay] section
        let g = &mut self.gameplay;
        let float = |key: &str| config.getfloat("gameplay", key).ok().flatten().map(|v| v as f32);
        let uint = |key: &str| config.getuint("gameplay", key).ok().flatten();

        if let Some(v) = float("zombie_speed") {
            g.zombie_speed = v;
        }
        if let Some(v) = float("cat_speed") {
            g.cat_speed = v;
        }
        if let Some(v) = float("train_move_duration") {
            g.train_move_duration = v;
        }
        if let Some(v) = float("background_speed") {
            g.background_speed = v;
        }
        if let Some(v) = float("enemy_interval") {
            g.enemy_interval = v;
        }
        if let Some(v) = float("enemy_travel_time") {
            g.enemy_travel_time = v;
        }
        if let Some(v) = float("cat_interval") {
            g.cat_interval = v;
        }
        if let Some(v) = float("enemy_inset") {
            g.enemy_inset = v;
        }
        if let Some(v) = float("invincible_duration") {
            g.invincible_duration = v;
        }
        if let Some(v) = uint("blink_count") {
            g.blink_count = v as u32;
        }
        if let Some(v) = config.getint("gameplay", "lives").ok().flatten() {
            g.lives = v as i32;
        }
        if let Some(v) = uint("win_train_length") {
            g.win_train_length = v as usize;
        }
        if let Some(v) = uint("cats_lost_per_hit") {
            g.cats_lost_per_hit = v as usize;
        }
        if let Some(v) = float("scatter_distance") {
            g.scatter_distance = v;
        }
        if let Some(v) = float("scatter_duration") {
            g.scatter_duration = v;
        }
        if let Some(v) = uint("background_tiles") {
            g.background_tiles = v as usize;
        }
        if let Some(v) = uint("seed") {
            g.seed = Some(v);
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        // [render] section
        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        // [gameplay] section
        let g = &self.gameplay;
        let entries = [
            ("zombie_speed", g.zombie_speed.to_string()),
            ("cat_speed", g.cat_speed.to_string()),
            ("train_move_duration", g.train_move_duration.to_string()),
            ("background_speed", g.background_speed.to_string()),
            ("enemy_interval", g.enemy_interval.to_string()),
            ("enemy_travel_time", g.enemy_travel_time.to_string()),
            ("cat_interval", g.cat_interval.to_string()),
            ("enemy_inset", g.enemy_inset.to_string()),
            ("invincible_duration", g.invincible_duration.to_string()),
            ("blink_count", g.blink_count.to_string()),
            ("lives", g.lives.to_string()),
            ("win_train_length", g.win_train_length.to_string()),
            ("cats_lost_per_hit", g.cats_lost_per_hit.to_string()),
            ("scatter_distance", g.scatter_distance.to_string()),
            ("scatter_duration", g.scatter_duration.to_string()),
            ("background_tiles", g.background_tiles.to_string()),
        ];
        for (key, value) in entries {
            config.set("gameplay", key, Some(value));
        }
        if let Some(seed) = g.seed {
            config.set("gameplay", "seed", Some(seed.to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| ConfigError::Save(e.to_string()))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Get the scene size as floats.
    pub fn scene_size(&self) -> (f32, f32) {
        (self.render_width as f32, self.render_height as f32)
    }
}
