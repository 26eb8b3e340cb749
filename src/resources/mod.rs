//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: session state, timing, input,
//! rendering handles, asset stores, and utilities. Each submodule documents
//! the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `animationstore` – frame-list definitions for sprite animations
//! - `audio` – bridge and channels for the background audio thread
//! - `debugmode` – presence toggles optional debug overlays and logs
//! - `gameconfig` – INI-backed window, render and gameplay tuning
//! - `gamestate` – authoritative and pending high-level game state
//! - `playablearea` – the 16:9 band of the scene the zombie may roam
//! - `rendertarget` – fixed-resolution framebuffer scaled into the window
//! - `rng` – seeded random source for spawns and scatter
//! - `screensize` – the scene (render) resolution in pixels
//! - `scrolllayer` – offset of the scrolling world layer
//! - `session` – lives, invincibility and outcome of the current game
//! - `spritecatalog` – sprite sizes by texture key
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `touch` – latest touch sample in scene coordinates
//! - `train` – conga line members in join order
//! - `windowsize` – OS window size and letterbox math
//! - `worldtime` – frame clock and delta
pub mod animationstore;
pub mod audio;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod playablearea;
pub mod rendertarget;
pub mod rng;
pub mod screensize;
pub mod scrolllayer;
pub mod session;
pub mod spritecatalog;
pub mod systemsstore;
pub mod texturestore;
pub mod touch;
pub mod train;
pub mod windowsize;
pub mod worldtime;
