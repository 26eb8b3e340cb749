//! Gameplay integration tests: a headless world driven frame by frame
//! through the real gameplay schedule.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use zombieconga::components::action::Action;
use zombieconga::components::background::BackgroundTile;
use zombieconga::components::blink::Blink;
use zombieconga::components::boxcollider::BoxCollider;
use zombieconga::components::group::Group;
use zombieconga::components::mapposition::MapPosition;
use zombieconga::components::player::{Player, TrainCar};
use zombieconga::components::rigidbody::RigidBody;
use zombieconga::components::rotation::Rotation;
use zombieconga::components::scale::Scale;
use zombieconga::components::tint::Tint;
use zombieconga::events::audio::{AudioCmd, FX_HIT_CAT, FX_HIT_CAT_LADY, FX_LOSE};
use zombieconga::events::timer::{SIGNAL_SPAWN_CAT, SIGNAL_SPAWN_ENEMY, TimerEvent};
use zombieconga::game::{GameplaySet, build_world, gameplay_schedule};
use zombieconga::resources::gameconfig::{GameConfig, MAX_CATS_LOST_PER_HIT};
use zombieconga::resources::gamestate::{GameState, GameStates, NextGameState};
use zombieconga::resources::scrolllayer::ScrollLayer;
use zombieconga::resources::session::{GameSession, Outcome};
use zombieconga::resources::touch::TouchState;
use zombieconga::resources::train::Train;
use zombieconga::systems::time::update_world_clock;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Resource, Default)]
struct AudioLog(Vec<AudioCmd>);

fn record_audio(mut reader: MessageReader<AudioCmd>, mut log: ResMut<AudioLog>) {
    log.0.extend(reader.read().cloned());
}

fn still_config() -> GameConfig {
    let mut config = GameConfig::new();
    config.gameplay.background_speed = 0.0;
    config
}

struct Harness {
    world: World,
    schedule: Schedule,
    clock: f64,
}

impl Harness {
    /// A game in its first frame with the spawn timers and their first
    /// spawns removed, so nothing random happens.
    fn new(config: GameConfig) -> Self {
        let mut harness = Self::with_spawns(config);
        harness.clear_spawns();
        harness
    }

    fn with_spawns(config: GameConfig) -> Self {
        let mut world = build_world(config, 7);
        world.insert_resource(AudioLog::default());
        let mut schedule = gameplay_schedule();
        schedule.add_systems(record_audio.after(GameplaySet));
        world.resource_mut::<NextGameState>().set(GameStates::Playing);
        let mut harness = Self {
            world,
            schedule,
            clock: 0.0,
        };
        harness.frame_at(0.0, None);
        harness
    }

    fn frame_at(&mut self, timestamp: f64, touch: Option<Vector2>) {
        update_world_clock(&mut self.world, timestamp);
        self.world.resource_mut::<TouchState>().inject(touch);
        self.schedule.run(&mut self.world);
    }

    fn step(&mut self, dt: f64) {
        self.step_touch(dt, None);
    }

    fn step_touch(&mut self, dt: f64, touch: Option<Vector2>) {
        self.clock += dt;
        let now = self.clock;
        self.frame_at(now, touch);
    }

    fn clear_spawns(&mut self) {
        let doomed: Vec<Entity> = self
            .world
            .query::<(Entity, &Group)>()
            .iter(&self.world)
            .filter(|(_, g)| matches!(g.name(), "timer" | "cat" | "enemy"))
            .map(|(e, _)| e)
            .collect();
        for entity in doomed {
            self.world.despawn(entity);
        }
    }

    /// Run the spawn observer as if a timer with `signal` expired.
    fn fire(&mut self, signal: &str) {
        self.world.trigger(TimerEvent {
            entity: Entity::PLACEHOLDER,
            signal: signal.to_string(),
        });
        self.world.flush();
    }

    fn members(&mut self, group: &str) -> Vec<Entity> {
        self.world
            .query::<(Entity, &Group)>()
            .iter(&self.world)
            .filter(|(_, g)| g.name() == group)
            .map(|(e, _)| e)
            .collect()
    }

    /// Scroll the layer and take the zombie out of collision checks.
    fn scrolled_without_contacts(offset_x: f32) -> Self {
        let mut harness = Self::new(still_config());
        harness.world.resource_mut::<ScrollLayer>().offset = Vector2::new(offset_x, 0.0);
        let zombie = harness.zombie();
        harness.world.entity_mut(zombie).remove::<BoxCollider>();
        harness
    }

    fn zombie(&mut self) -> Entity {
        self.world
            .query_filtered::<Entity, With<Player>>()
            .single(&self.world)
            .expect("one zombie")
    }

    fn zombie_pos(&mut self) -> Vector2 {
        let zombie = self.zombie();
        self.world.get::<MapPosition>(zombie).expect("zombie position").pos
    }

    fn spawn_cat(&mut self, pos: Vector2) -> Entity {
        self.world
            .spawn((
                Group::new("cat"),
                MapPosition::from_vec(pos),
                Scale::uniform(1.0),
                Rotation::default(),
                BoxCollider::centered(72.0, 100.0),
            ))
            .id()
    }

    fn spawn_enemy(&mut self, pos: Vector2) -> Entity {
        self.world
            .spawn((
                Group::new("enemy"),
                MapPosition::from_vec(pos),
                BoxCollider::centered(173.0, 192.0),
            ))
            .id()
    }

    fn session(&self) -> &GameSession {
        self.world.resource::<GameSession>()
    }

    fn state(&self) -> GameStates {
        self.world.resource::<GameState>().get().clone()
    }

    fn fx_count(&self, id: &str) -> usize {
        self.world
            .resource::<AudioLog>()
            .0
            .iter()
            .filter(|cmd| matches!(cmd, AudioCmd::PlayFx { id: fx } if fx == id))
            .count()
    }
}

#[test]
fn test_enter_play_builds_scene() {
    let mut h = Harness::with_spawns(GameConfig::new());
    assert_eq!(h.state(), GameStates::Playing);
    assert_eq!(h.session().lives, 5);
    let pos = h.zombie_pos();
    assert_eq!((pos.x, pos.y), (400.0, 400.0));

    let mut groups: Vec<&str> = h
        .world
        .query::<&Group>()
        .iter(&h.world)
        .map(|g| g.name())
        .collect();
    groups.sort();
    // primed timers spawn one enemy and one cat on the first frame
    assert_eq!(groups.iter().filter(|g| **g == "background").count(), 2);
    assert_eq!(groups.iter().filter(|g| **g == "timer").count(), 2);
    assert_eq!(groups.iter().filter(|g| **g == "enemy").count(), 1);
    assert_eq!(groups.iter().filter(|g| **g == "cat").count(), 1);
}

#[test]
fn test_touch_steers_zombie() {
    let mut h = Harness::new(still_config());
    h.step_touch(0.1, Some(Vector2::new(800.0, 400.0)));

    let zombie = h.zombie();
    let velocity = h.world.get::<RigidBody>(zombie).expect("body").velocity;
    assert!(approx_eq(velocity.x, 480.0) && approx_eq(velocity.y, 0.0));
    let pos = h.zombie_pos();
    assert!(approx_eq(pos.x, 448.0), "x = {}", pos.x);
    assert!(approx_eq(pos.y, 400.0));
    assert!(approx_eq(h.world.get::<Rotation>(zombie).expect("rotation").degrees, 0.0));

    // no new sample: the zombie keeps going
    h.step(0.1);
    assert!(approx_eq(h.zombie_pos().x, 496.0));
}

#[test]
fn test_touch_is_converted_to_layer_coordinates() {
    let mut h = Harness::new(still_config());
    h.world.resource_mut::<ScrollLayer>().offset.x = -1000.0;
    h.step_touch(0.0, Some(Vector2::new(100.0, 400.0)));
    let target = h.session().last_touch.expect("touch recorded");
    assert!(approx_eq(target.x, 1100.0));
}

#[test]
fn test_zombie_reflects_off_playable_top() {
    let mut h = Harness::new(still_config());
    let zombie = h.zombie();
    h.world.get_mut::<MapPosition>(zombie).expect("pos").pos = Vector2::new(400.0, 200.0);
    h.world.get_mut::<RigidBody>(zombie).expect("body").velocity = Vector2::new(0.0, -480.0);

    h.step(0.1);

    let pos = h.zombie_pos();
    assert!(approx_eq(pos.y, 192.0), "clamped to the playable top, y = {}", pos.y);
    let velocity = h.world.get::<RigidBody>(zombie).expect("body").velocity;
    assert!(approx_eq(velocity.y, 480.0));
    assert!(approx_eq(velocity.x, 0.0));
}

#[test]
fn test_cat_joins_train() {
    let mut h = Harness::new(still_config());
    let cat = h.spawn_cat(Vector2::new(420.0, 400.0));
    h.world.get_mut::<Scale>(cat).expect("scale").scale = Vector2::new(1.3, 1.3);

    h.step(0.0);

    assert_eq!(h.world.resource::<Train>().members, vec![cat]);
    assert_eq!(h.world.get::<Group>(cat).expect("group").name(), "train");
    assert!(h.world.get::<TrainCar>(cat).is_some());
    let tint = h.world.get::<Tint>(cat).expect("tinted").color;
    assert_eq!((tint.r, tint.g, tint.b), (0, 255, 0));
    assert!(approx_eq(h.world.get::<Scale>(cat).expect("scale").scale.x, 1.0));
    assert_eq!(h.fx_count(FX_HIT_CAT), 1);
}

#[test]
fn test_train_convoy_step() {
    let mut h = Harness::new(still_config());
    let first = h.spawn_cat(Vector2::new(350.0, 400.0));
    let second = h.spawn_cat(Vector2::new(330.0, 400.0));
    h.step(0.0);
    assert_eq!(h.world.resource::<Train>().members, vec![first, second]);

    h.step(0.1);

    // both idle members got a 0.3 s hop of 480 * 0.3 toward their target
    assert!(h.world.get::<Action>(first).is_some());
    assert!(h.world.get::<Action>(second).is_some());
    let p1 = h.world.get::<MapPosition>(first).expect("pos").pos;
    let p2 = h.world.get::<MapPosition>(second).expect("pos").pos;
    assert!(approx_eq(p1.x, 398.0), "first x = {}", p1.x);
    assert!(approx_eq(p2.x, 378.0), "second x = {}", p2.x);

    // busy members are not given a new hop
    h.step(0.1);
    let p1 = h.world.get::<MapPosition>(first).expect("pos").pos;
    assert!(approx_eq(p1.x, 446.0), "first x = {}", p1.x);
}

#[test]
fn test_member_on_target_stays_idle() {
    let mut h = Harness::new(still_config());
    let cat = h.spawn_cat(Vector2::new(400.0, 400.0));
    h.step(0.0);
    h.step(0.1);
    assert!(h.world.get::<Action>(cat).is_none());
}

#[test]
fn test_background_tile_wraps_two_widths() {
    let mut h = Harness::new(GameConfig::new());
    h.world.resource_mut::<ScrollLayer>().offset.x = -2047.0;
    h.step(0.01);

    let mut tiles: Vec<f32> = h
        .world
        .query::<(&MapPosition, &BackgroundTile)>()
        .iter(&h.world)
        .map(|(p, _)| p.pos.x)
        .collect();
    tiles.sort_by(f32::total_cmp);
    assert_eq!(tiles, vec![2048.0, 4096.0]);
}

#[test]
fn test_inset_box_prevents_hit() {
    let mut h = Harness::new(still_config());
    // raw boxes overlap by 8.5 px, well inside the 20 px inset
    let enemy_pos = Vector2::new(470.0 + 86.5, 400.0);
    h.spawn_enemy(enemy_pos);
    let zombie_box = BoxCollider::centered(157.0, 108.0);
    let enemy_box = BoxCollider::centered(173.0, 192.0);
    assert!(zombie_box.overlaps(h.zombie_pos(), &enemy_box, enemy_pos));

    h.step(0.1);
    assert_eq!(h.session().lives, 5);
    assert!(!h.session().invincible);
}

#[test]
fn test_hit_costs_life_and_two_cats() {
    let mut h = Harness::new(still_config());
    let cats: Vec<Entity> = (0..3)
        .map(|i| h.spawn_cat(Vector2::new(380.0 - i as f32, 400.0)))
        .collect();
    h.step(0.0);
    assert_eq!(h.world.resource::<Train>().len(), 3);

    h.spawn_enemy(Vector2::new(400.0, 400.0));
    h.spawn_enemy(Vector2::new(410.0, 400.0));
    h.step(0.0);

    // two enemies in one frame cost a single life
    assert_eq!(h.session().lives, 4);
    assert!(h.session().invincible);
    let zombie = h.zombie();
    assert!(h.world.get::<Blink>(zombie).is_some());
    assert_eq!(h.world.resource::<Train>().members, vec![cats[0]]);
    for cat in &cats[1..] {
        assert_eq!(h.world.get::<Group>(*cat).expect("group").name(), "leaving");
        assert!(h.world.get::<TrainCar>(*cat).is_none());
    }
    assert_eq!(h.fx_count(FX_HIT_CAT_LADY), 1);

    // scattered cats are gone once their 1 s script ends
    for _ in 0..11 {
        h.step(0.1);
    }
    assert!(h.world.get_entity(cats[1]).is_err());
    assert!(h.world.get_entity(cats[2]).is_err());
}

#[test]
fn test_invincibility_wears_off() {
    let mut h = Harness::new(still_config());
    let enemy = h.spawn_enemy(Vector2::new(400.0, 400.0));
    h.step(0.0);
    assert_eq!(h.session().lives, 4);
    h.world.despawn(enemy);

    for _ in 0..29 {
        h.step(0.1);
    }
    assert!(h.session().invincible);
    h.step(0.2);
    assert!(!h.session().invincible);
    let zombie = h.zombie();
    assert!(h.world.get::<Blink>(zombie).is_none());
}

#[test]
fn test_five_hits_lose_the_game() {
    let mut h = Harness::new(still_config());
    h.spawn_enemy(Vector2::new(400.0, 400.0));

    let mut frames = 0;
    while !h.session().game_over && frames < 200 {
        h.step(0.5);
        frames += 1;
    }

    assert!(h.session().game_over);
    assert_eq!(h.session().outcome, Some(Outcome::Lost));
    assert_eq!(h.session().lives, 0);
    assert_eq!(h.fx_count(FX_HIT_CAT_LADY), 5);
    assert!(h.world.resource::<AudioLog>().0.contains(&AudioCmd::StopMusic {
        id: "background".to_string()
    }));

    // the end screen follows on the next frame
    h.step(0.1);
    assert_eq!(h.state(), GameStates::GameOver);
    assert_eq!(h.fx_count(FX_LOSE), 1);
    assert_eq!(
        h.world.query_filtered::<Entity, With<Player>>().iter(&h.world).count(),
        0
    );
}

#[test]
fn test_thirty_cats_win_the_game() {
    let mut h = Harness::new(still_config());
    for _ in 0..30 {
        let pos = h.zombie_pos();
        h.spawn_cat(Vector2::new(pos.x + 10.0, pos.y));
        h.step(0.1);
        assert!(!h.session().game_over);
    }
    assert_eq!(h.world.resource::<Train>().len(), 30);

    h.step(0.1);
    assert!(h.session().game_over);
    assert_eq!(h.session().outcome, Some(Outcome::Won));
    assert_eq!(h.world.resource::<Train>().len(), 30);
}

#[test]
fn test_end_screen_restarts_after_delay() {
    let mut h = Harness::new(still_config());
    h.world.resource_mut::<GameSession>().lives = 0;
    h.step(0.1);
    h.step(0.1);
    assert_eq!(h.state(), GameStates::GameOver);

    for _ in 0..30 {
        h.step(0.1);
    }
    // the restart timer fired; the next frame enters play again
    h.step(0.1);
    h.step(0.1);
    assert_eq!(h.state(), GameStates::Playing);
    assert_eq!(h.session().lives, 5);
    assert!(!h.session().game_over);
    assert_eq!(
        h.world.query_filtered::<Entity, With<Player>>().iter(&h.world).count(),
        1
    );
}

#[test]
fn test_enemy_spawns_off_right_edge_in_layer_coordinates() {
    let mut h = Harness::scrolled_without_contacts(-300.0);
    for _ in 0..40 {
        h.fire(SIGNAL_SPAWN_ENEMY);
    }
    let enemies = h.members("enemy");
    assert_eq!(enemies.len(), 40);

    // scene x = 2048 + 173 / 2, y within the band inset by half the height
    for enemy in &enemies {
        let pos = h.world.get::<MapPosition>(*enemy).expect("position").pos;
        assert!(approx_eq(pos.x, 2048.0 + 86.5 + 300.0), "x = {}", pos.x);
        assert!(pos.y >= 192.0 + 96.0 && pos.y <= 1344.0 - 96.0, "y = {}", pos.y);
    }

    h.step(1.0);
    let pos = h.world.get::<MapPosition>(enemies[0]).expect("position").pos;
    assert!(approx_eq(pos.x, 2434.5 - (2048.0 + 173.0) / 2.0), "x = {}", pos.x);

    h.step(1.0);
    for enemy in &enemies {
        assert!(h.world.get_entity(*enemy).is_err());
    }
}

#[test]
fn test_cat_spawns_inside_playable_area_and_expires() {
    let mut h = Harness::scrolled_without_contacts(-300.0);
    for _ in 0..40 {
        h.fire(SIGNAL_SPAWN_CAT);
    }
    let cats = h.members("cat");
    assert_eq!(cats.len(), 40);
    for cat in &cats {
        let pos = h.world.get::<MapPosition>(*cat).expect("position").pos;
        let scene_x = pos.x - 300.0;
        assert!((0.0..=2048.0).contains(&scene_x), "x = {}", scene_x);
        assert!((192.0..=1344.0).contains(&pos.y), "y = {}", pos.y);
        assert!(approx_eq(h.world.get::<Scale>(*cat).expect("scale").scale.x, 0.0));
    }

    // popped in after half a second
    h.step(0.5);
    assert!(approx_eq(h.world.get::<Scale>(cats[0]).expect("scale").scale.x, 1.0));

    for _ in 0..20 {
        h.step(0.5);
    }
    assert!(cats.iter().all(|cat| h.world.get_entity(*cat).is_ok()));
    h.step(0.5);
    assert!(cats.iter().all(|cat| h.world.get_entity(*cat).is_err()));
}

#[test]
fn test_hit_detaches_configured_number_of_cats() {
    let mut config = still_config();
    config.gameplay.cats_lost_per_hit = MAX_CATS_LOST_PER_HIT;
    let mut h = Harness::new(config);
    for i in 0..10 {
        h.spawn_cat(Vector2::new(380.0 - i as f32, 400.0));
    }
    h.step(0.0);
    assert_eq!(h.world.resource::<Train>().len(), 10);

    h.spawn_enemy(Vector2::new(400.0, 400.0));
    h.step(0.0);
    assert_eq!(h.world.resource::<Train>().len(), 2);
    assert_eq!(h.members("leaving").len(), 8);
}
