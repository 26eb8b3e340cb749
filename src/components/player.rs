use bevy_ecs::prelude::Component;

/// The zombie steered by touch input.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

/// A cat that joined the conga line.
///
/// Join order lives in the [`Train`](crate::resources::train::Train)
/// resource; this marker only tags membership.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct TrainCar;
