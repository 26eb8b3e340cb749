//! Enemy and cat spawning.
//!
//! Spawning is driven by repeating [`Timer`](crate::components::timer::Timer)
//! entities created when play starts. [`spawn_timer_observer`] receives their
//! [`TimerEvent`]s and dispatches on the signal name; it also handles the
//! one-shot restart timer of the end screen.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};
use raylib::prelude::Vector2;

use crate::components::action::{Action, Step};
use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::timer::{
    SIGNAL_RESTART_GAME, SIGNAL_SPAWN_CAT, SIGNAL_SPAWN_ENEMY, TimerEvent,
};
use crate::resources::gameconfig::GameplayConfig;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::playablearea::PlayableArea;
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::scrolllayer::ScrollLayer;
use crate::resources::spritecatalog::SpriteCatalog;

/// Shared read-only context for spawning.
pub struct SpawnContext<'a> {
    pub layer: &'a ScrollLayer,
    pub area: &'a PlayableArea,
    pub screen: &'a ScreenSize,
    pub catalog: &'a SpriteCatalog,
    pub gameplay: &'a GameplayConfig,
}

/// Life of a free cat: pop in, wiggle for a while, shrink away.
pub fn cat_lifecycle() -> Step {
    let pulse = Step::scale_by(1.2, 0.25);
    let pulses = Step::Sequence(vec![
        pulse.clone(),
        pulse.reversed(),
        pulse.clone(),
        pulse.reversed(),
    ]);
    let wiggle = Step::rotate_by(22.5, 0.5);
    let wiggles = Step::Sequence(vec![wiggle.clone(), wiggle.reversed()]);
    Step::Sequence(vec![
        Step::scale_to(1.0, 0.5),
        Step::Group(vec![pulses, wiggles]).repeat(10),
        Step::scale_to(0.0, 0.5),
    ])
}

/// Spawn an enemy just off the right edge of the screen at a random height
/// and send it across to just off the left edge.
pub fn spawn_enemy(commands: &mut Commands, rng: &mut GameRng, ctx: &SpawnContext) -> Entity {
    let size = ctx.catalog.size("enemy");
    let screen_w = ctx.screen.w as f32;
    let y = rng.range(
        ctx.area.min().y + size.y / 2.0,
        ctx.area.max().y - size.y / 2.0,
    );
    let scene = Vector2::new(screen_w + size.x / 2.0, y);
    let local = ctx.layer.scene_to_layer(scene);
    let travel = Step::move_by(
        Vector2::new(-(screen_w + size.x), 0.0),
        ctx.gameplay.enemy_travel_time,
    );

    let entity = commands
        .spawn((
            Group::new("enemy"),
            MapPosition::from_vec(local),
            Sprite::centered("enemy", size),
            ZIndex::ACTORS,
            BoxCollider::centered(size.x, size.y),
            Action::new(travel).then_despawn(),
        ))
        .id();
    debug!("Enemy {:?} spawned at ({:.1}, {:.1})", entity, local.x, local.y);
    entity
}

/// Spawn a cat at a random point of the playable area.
pub fn spawn_cat(commands: &mut Commands, rng: &mut GameRng, ctx: &SpawnContext) -> Entity {
    let size = ctx.catalog.size("cat");
    let scene = Vector2::new(
        rng.range(ctx.area.min().x, ctx.area.max().x),
        rng.range(ctx.area.min().y, ctx.area.max().y),
    );
    let local = ctx.layer.scene_to_layer(scene);

    let entity = commands
        .spawn((
            Group::new("cat"),
            MapPosition::from_vec(local),
            Scale::uniform(0.0),
            Rotation::default(),
            Sprite::centered("cat", size),
            ZIndex::ACTORS,
            BoxCollider::centered(size.x, size.y),
            Action::new(cat_lifecycle()).then_despawn(),
        ))
        .id();
    debug!("Cat {:?} spawned at ({:.1}, {:.1})", entity, local.x, local.y);
    entity
}

#[allow(clippy::too_many_arguments)]
pub fn spawn_timer_observer(
    trigger: On<TimerEvent>,
    mut commands: Commands,
    mut rng: ResMut<GameRng>,
    mut next_state: ResMut<NextGameState>,
    config: Res<GameConfig>,
    layer: Res<ScrollLayer>,
    area: Res<PlayableArea>,
    screen: Res<ScreenSize>,
    catalog: Res<SpriteCatalog>,
) {
    let ctx = SpawnContext {
        layer: &layer,
        area: &area,
        screen: &screen,
        catalog: &catalog,
        gameplay: &config.gameplay,
    };
    match trigger.event().signal.as_str() {
        SIGNAL_SPAWN_ENEMY => {
            spawn_enemy(&mut commands, &mut rng, &ctx);
        }
        SIGNAL_SPAWN_CAT => {
            spawn_cat(&mut commands, &mut rng, &ctx);
        }
        SIGNAL_RESTART_GAME => {
            next_state.set(GameStates::Playing);
        }
        other => warn!("Unhandled timer signal '{}'", other),
    }
}
