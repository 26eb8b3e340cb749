//! Scenes and world assembly.
//!
//! Every scene is built by an enter hook registered in
//! [`SystemsStore`] and torn down by [`clean_scene`], which despawns every
//! grouped entity not marked [`Persistent`]. [`build_world`] and
//! [`gameplay_schedule`] assemble everything that does not need a window, so
//! the same world runs interactively, in replays and in tests.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::background::BackgroundTile;
use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::{FaceVelocity, Rotation};
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::timer::Timer;
use crate::components::zindex::ZIndex;
use crate::events::audio::{
    AudioCmd, FX_HIT_CAT, FX_HIT_CAT_LADY, FX_LOSE, FX_WIN, MUSIC_BACKGROUND,
};
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::switchdebug::switch_debug_observer;
use crate::events::timer::{SIGNAL_RESTART_GAME, SIGNAL_SPAWN_CAT, SIGNAL_SPAWN_ENEMY};
use crate::resources::animationstore::{AnimationStore, ZOMBIE_WALK};
use crate::resources::audio::init_audio_messages;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::playablearea::{DEFAULT_MAX_ASPECT, PlayableArea};
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::scrolllayer::ScrollLayer;
use crate::resources::session::GameSession;
use crate::resources::spritecatalog::SpriteCatalog;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::touch::TouchState;
use crate::resources::train::Train;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::action::action_system;
use crate::systems::animation::animation;
use crate::systems::audio::update_bevy_audio_cmds;
use crate::systems::background::background_scroll_system;
use crate::systems::blink::blink_system;
use crate::systems::bounds::bounds_system;
use crate::systems::collision::{collision_system, on_cat_caught, on_zombie_hit};
use crate::systems::gameover::game_over_check_system;
use crate::systems::gamestate::{check_pending_state, state_is_menu, state_is_playing};
use crate::systems::menu::menu_touch_system;
use crate::systems::movement::{face_velocity_system, movement_system};
use crate::systems::spawner::spawn_timer_observer;
use crate::systems::steering::touch_steering_system;
use crate::systems::time::update_timers;
use crate::systems::train::train_follow_system;

/// Where the zombie starts each game, scene coordinates.
pub const ZOMBIE_START: Vector2 = Vector2 { x: 400.0, y: 400.0 };
/// Seconds the end screen stays up before a new game starts.
pub const RESTART_DELAY: f32 = 3.0;

const TEXTURE_KEYS: &[&str] = &[
    "zombie1",
    "zombie2",
    "zombie3",
    "zombie4",
    "cat",
    "enemy",
    "background1",
    "background2",
    "MainMenu",
    "YouWin",
    "YouLose",
];

const SOUND_FILES: &[(&str, &str)] = &[
    (FX_HIT_CAT, "hitCat.wav"),
    (FX_HIT_CAT_LADY, "hitCatLady.wav"),
    (FX_WIN, "win.wav"),
    (FX_LOSE, "lose.wav"),
];

/// Every system of a frame that does not touch the window.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameplaySet;

/// Load textures and queue sound loading, then show the title screen.
///
/// Missing files are reported and the game continues without them.
pub fn setup(
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut textures: ResMut<TextureStore>,
    mut catalog: ResMut<SpriteCatalog>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    for key in TEXTURE_KEYS {
        let path = format!("./assets/textures/{}.png", key);
        match rl.load_texture(&th, &path) {
            Ok(texture) => {
                catalog.insert(
                    *key,
                    Vector2::new(texture.width as f32, texture.height as f32),
                );
                textures.insert(*key, texture);
            }
            Err(e) => warn!("Texture '{}' not loaded: {}", path, e),
        }
    }

    for (id, file) in SOUND_FILES {
        audio_cmd_writer.write(AudioCmd::LoadFx {
            id: (*id).to_string(),
            path: format!("./assets/sounds/{}", file),
        });
    }
    audio_cmd_writer.write(AudioCmd::LoadMusic {
        id: MUSIC_BACKGROUND.to_string(),
        path: "./assets/sounds/backgroundMusic.mp3".to_string(),
    });

    next_state.set(GameStates::Menu);
    info!("Setup done, {} textures loaded", textures.map.len());
}

fn spawn_backdrop(commands: &mut Commands, catalog: &SpriteCatalog, key: &'static str) {
    commands.spawn((
        Group::new("backdrop"),
        MapPosition::new(0.0, 0.0),
        Sprite::top_left(key, catalog.size(key)),
        ZIndex::BACKGROUND,
    ));
}

pub fn enter_menu(
    mut commands: Commands,
    mut layer: ResMut<ScrollLayer>,
    catalog: Res<SpriteCatalog>,
) {
    layer.reset();
    spawn_backdrop(&mut commands, &catalog, "MainMenu");
}

/// Start a fresh game.
#[allow(clippy::too_many_arguments)]
pub fn enter_play(
    mut commands: Commands,
    config: Res<GameConfig>,
    catalog: Res<SpriteCatalog>,
    mut session: ResMut<GameSession>,
    mut train: ResMut<Train>,
    mut layer: ResMut<ScrollLayer>,
    mut time: ResMut<WorldTime>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let gameplay = &config.gameplay;
    session.reset(gameplay.lives);
    train.clear();
    layer.reset();
    time.restart_frame();

    let tile_width = catalog.size("background1").x;
    for i in 0..gameplay.background_tiles {
        let key = if i % 2 == 0 { "background1" } else { "background2" };
        commands.spawn((
            Group::new("background"),
            MapPosition::new(i as f32 * tile_width, 0.0),
            Sprite::top_left(key, catalog.size(key)),
            BackgroundTile { width: tile_width },
            ZIndex::BACKGROUND,
        ));
    }

    let zombie_size = catalog.size("zombie1");
    commands.spawn((
        Group::new("zombie"),
        Player,
        MapPosition::from_vec(ZOMBIE_START),
        RigidBody::new(),
        Rotation::default(),
        FaceVelocity,
        Scale::default(),
        Sprite::centered("zombie1", zombie_size),
        Animation::new(ZOMBIE_WALK).paused_when_idle(),
        BoxCollider::centered(zombie_size.x, zombie_size.y),
        ZIndex::ZOMBIE,
    ));

    commands.spawn((
        Group::new("timer"),
        Timer::new(gameplay.enemy_interval, SIGNAL_SPAWN_ENEMY).primed(),
    ));
    commands.spawn((
        Group::new("timer"),
        Timer::new(gameplay.cat_interval, SIGNAL_SPAWN_CAT).primed(),
    ));

    audio_cmd_writer.write(AudioCmd::PlayMusic {
        id: MUSIC_BACKGROUND.to_string(),
        looped: true,
    });
    info!("New game: {} lives", session.lives);
}

/// Show the result and schedule the next game.
pub fn enter_game_over(
    mut commands: Commands,
    session: Res<GameSession>,
    catalog: Res<SpriteCatalog>,
    mut layer: ResMut<ScrollLayer>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    layer.reset();
    let won = session.outcome.is_some_and(|o| o.won());
    let (key, fx) = if won {
        ("YouWin", FX_WIN)
    } else {
        ("YouLose", FX_LOSE)
    };
    spawn_backdrop(&mut commands, &catalog, key);
    audio_cmd_writer.write(AudioCmd::play_fx(fx));
    commands.spawn((
        Group::new("timer"),
        Timer::new(RESTART_DELAY, SIGNAL_RESTART_GAME).once(),
    ));
}

/// Despawn every grouped entity of the scene being left.
pub fn clean_scene(
    mut commands: Commands,
    query: Query<Entity, (With<Group>, Without<Persistent>)>,
) {
    let mut count = 0;
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
        count += 1;
    }
    info!("Scene cleaned, {} entities despawned", count);
}

pub fn quit_game() {
    info!("Quitting");
}

/// The per-frame gameplay systems, in order.
pub fn gameplay_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            update_bevy_audio_cmds,
            check_pending_state,
            update_timers,
            (
                touch_steering_system,
                movement_system,
                bounds_system,
                face_velocity_system,
                train_follow_system,
                game_over_check_system,
                background_scroll_system,
                action_system,
                blink_system,
                collision_system,
                animation,
            )
                .chain()
                .run_if(state_is_playing),
            menu_touch_system.run_if(state_is_menu),
        )
            .chain()
            .in_set(GameplaySet),
    );
    schedule
}

/// Insert every resource the gameplay schedule reads.
pub fn insert_core_resources(world: &mut World, config: GameConfig, seed: u64) {
    let (scene_w, scene_h) = config.scene_size();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: config.render_width as i32,
        h: config.render_height as i32,
    });
    world.insert_resource(WindowSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(PlayableArea::from_scene_size(
        scene_w,
        scene_h,
        DEFAULT_MAX_ASPECT,
    ));
    world.insert_resource(ScrollLayer::default());
    world.insert_resource(GameSession::new(config.gameplay.lives));
    world.insert_resource(Train::default());
    world.insert_resource(GameRng::with_seed(seed));
    world.insert_resource(TouchState::default());
    world.insert_resource(SpriteCatalog::default());
    world.insert_resource(AnimationStore::default());
    world.insert_resource(TextureStore::new());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(config);
    init_audio_messages(world);
}

pub fn register_observers(world: &mut World) {
    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    world.spawn((Observer::new(spawn_timer_observer), Persistent));
    world.spawn((Observer::new(on_cat_caught), Persistent));
    world.spawn((Observer::new(on_zombie_hit), Persistent));
    world.flush();
}

/// Register `system` as the scene hook `key`.
///
/// Registered systems live on entities, so they are marked [`Persistent`]
/// to survive scene cleanup.
pub fn register_hook<M>(world: &mut World, key: &str, system: impl IntoSystem<(), (), M> + 'static) {
    let id = world.register_system(system);
    world.entity_mut(id.entity()).insert(Persistent);
    world.get_resource_or_init::<SystemsStore>().insert(key, id);
}

/// Register the scene hooks that need no window.
pub fn register_scene_systems(world: &mut World) {
    register_hook(world, "enter_menu", enter_menu);
    register_hook(world, "enter_play", enter_play);
    register_hook(world, "enter_game_over", enter_game_over);
    register_hook(world, "clean_scene", clean_scene);
    register_hook(world, "quit_game", quit_game);
}

/// A world ready to run [`gameplay_schedule`], still in [`GameStates::None`].
pub fn build_world(config: GameConfig, seed: u64) -> World {
    let mut world = World::new();
    insert_core_resources(&mut world, config, seed);
    register_observers(&mut world);
    register_scene_systems(&mut world);
    world.flush();
    info!("World built with seed {}", seed);
    world
}
