//! Event types and observers.
//!
//! Events let systems hand work to observers without direct dependencies:
//! timers announce expiry, the collision system announces captures and hits,
//! and the state machine announces transitions.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`collision`] – zombie/cat and zombie/enemy contact notifications
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`switchdebug`] – toggle debug rendering and diagnostics on/off
//! - [`timer`] – timer expiry notifications
pub mod audio;
pub mod collision;
pub mod gamestate;
pub mod switchdebug;
pub mod timer;
