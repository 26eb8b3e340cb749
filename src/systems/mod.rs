//! Game systems.
//!
//! This module groups all ECS systems that advance the simulation, read
//! input and draw the scene.
//!
//! Submodules overview
//! - [`action`] – run scripted move/scale/rotate animations
//! - [`animation`] – advance frame-list sprite animations
//! - [`audio`] – bridge with the audio thread (forward commands, poll replies)
//! - [`background`] – scroll the world layer and recycle background tiles
//! - [`blink`] – run the invincibility blink window
//! - [`bounds`] – keep the zombie inside the playable area
//! - [`collision`] – zombie contacts with cats and enemies, and their outcome
//! - [`gameover`] – detect a win or a loss
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read touch/mouse input into [`crate::resources::touch::TouchState`]
//! - [`menu`] – title screen input
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`render`] – draw the scene, the HUD and debug overlays using Raylib
//! - [`spawner`] – spawn enemies and cats on timer signals
//! - [`steering`] – point the zombie at the latest touch
//! - [`time`] – update simulation time and delta, process timers
//! - [`train`] – make the conga line follow the zombie

pub mod action;
pub mod animation;
pub mod audio;
pub mod background;
pub mod blink;
pub mod bounds;
pub mod collision;
pub mod gameover;
pub mod gamestate;
pub mod input;
pub mod menu;
pub mod movement;
pub mod render;
pub mod spawner;
pub mod steering;
pub mod time;
pub mod train;
