//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world: placement, motion, rendering, collision, and the
//! declarative actions that drive cats and enemies.
//!
//! Submodules overview:
//! - [`action`] – declarative move/scale/rotate scripts advanced over time
//! - [`animation`] – playback state for frame-list sprite animations
//! - [`background`] – tiles of the scrolling background layer
//! - [`blink`] – timed visibility toggle used while the zombie is invincible
//! - [`boxcollider`] – axis-aligned rectangular collider for collision detection
//! - [`group`] – tag component for grouping entities by name
//! - [`mapposition`] – layer-space position (pivot) for an entity
//! - [`persistent`] – marker for entities that persist across scene changes
//! - [`player`] – markers for the zombie and the members of its train
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – 2D scale factor for sprites
//! - [`sprite`] – 2D sprite rendering component
//! - [`timer`] – countdown timer that emits events when finished
//! - [`tint`] – color modulation for sprites
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod action;
pub mod animation;
pub mod background;
pub mod blink;
pub mod boxcollider;
pub mod group;
pub mod mapposition;
pub mod persistent;
pub mod player;
pub mod rigidbody;
pub mod rotation;
pub mod scale;
pub mod sprite;
pub mod timer;
pub mod tint;
pub mod zindex;
