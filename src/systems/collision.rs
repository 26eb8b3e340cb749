//! Zombie collisions.
//!
//! [`collision_system`] runs after the action system each frame, so it sees
//! positions and scales after this frame's animations. It only detects
//! contacts and triggers events; the observers in this module apply the
//! consequences.
//!
//! Boxes are axis-aligned and scaled with the entity; rotation is ignored.

use arrayvec::ArrayVec;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector2;
use smallvec::SmallVec;

use crate::components::action::{Action, Step};
use crate::components::blink::Blink;
use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, TrainCar};
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::tint::Tint;
use crate::events::audio::{AudioCmd, FX_HIT_CAT, FX_HIT_CAT_LADY};
use crate::events::collision::{CatCaughtEvent, ZombieHitEvent};
use crate::resources::gameconfig::{GameConfig, MAX_CATS_LOST_PER_HIT};
use crate::resources::rng::GameRng;
use crate::resources::session::GameSession;
use crate::resources::train::Train;

fn scaled(collider: &BoxCollider, scale: Option<&Scale>) -> BoxCollider {
    match scale {
        Some(s) => collider.scaled(s.scale),
        None => *collider,
    }
}

/// Test the zombie against free cats and, unless shielded, enemies.
pub fn collision_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    session: Res<GameSession>,
    zombie: Query<(&MapPosition, &BoxCollider, Option<&Scale>), With<Player>>,
    others: Query<(Entity, &Group, &MapPosition, &BoxCollider, Option<&Scale>), Without<Player>>,
) {
    let Ok((zombie_pos, zombie_box, zombie_scale)) = zombie.single() else {
        return;
    };
    let zombie_box = scaled(zombie_box, zombie_scale);

    let mut caught: SmallVec<[Entity; 4]> = SmallVec::new();
    let mut hits: SmallVec<[Entity; 4]> = SmallVec::new();

    for (entity, group, position, collider, scale) in others.iter() {
        let collider = scaled(collider, scale);
        match group.name() {
            "cat" => {
                if zombie_box.overlaps(zombie_pos.pos, &collider, position.pos) {
                    caught.push(entity);
                }
            }
            "enemy" if !session.invincible => {
                let shrunk = collider.inset(config.gameplay.enemy_inset);
                if zombie_box.overlaps(zombie_pos.pos, &shrunk, position.pos) {
                    hits.push(entity);
                }
            }
            _ => {}
        }
    }

    for cat in caught {
        commands.trigger(CatCaughtEvent { cat });
    }
    for enemy in hits {
        commands.trigger(ZombieHitEvent { enemy });
    }
}

/// A free cat joins the end of the train.
pub fn on_cat_caught(
    trigger: On<CatCaughtEvent>,
    mut commands: Commands,
    mut train: ResMut<Train>,
    mut cats: Query<(&mut Scale, &mut Rotation, &mut Group)>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let cat = trigger.event().cat;
    let Ok((mut scale, mut rotation, mut group)) = cats.get_mut(cat) else {
        return;
    };
    if !group.is("cat") {
        return;
    }
    *group = Group::new("train");
    scale.scale = Vector2 { x: 1.0, y: 1.0 };
    rotation.degrees = 0.0;
    commands
        .entity(cat)
        .remove::<Action>()
        .insert((TrainCar, Tint::green()));
    train.push(cat);
    audio.write(AudioCmd::play_fx(FX_HIT_CAT));
    debug!("Cat {:?} joined the train ({} long)", cat, train.len());
}

/// Scatter script for a cat leaving the train.
pub fn scatter_script(from: Vector2, rng: &mut GameRng, distance: f32, duration: f32) -> Step {
    let target = Vector2::new(
        from.x + rng.range(-distance, distance),
        from.y + rng.range(-distance, distance),
    );
    Step::Group(vec![
        Step::rotate_by(720.0, duration),
        Step::move_to(target, duration),
        Step::scale_to(0.0, duration),
    ])
}

/// An enemy struck the zombie: costs a life and the tail of the train.
pub fn on_zombie_hit(
    trigger: On<ZombieHitEvent>,
    mut commands: Commands,
    config: Res<GameConfig>,
    mut session: ResMut<GameSession>,
    mut train: ResMut<Train>,
    mut rng: ResMut<GameRng>,
    zombie: Query<Entity, With<Player>>,
    cars: Query<&MapPosition, With<TrainCar>>,
    mut audio: MessageWriter<AudioCmd>,
) {
    if session.invincible || session.game_over {
        return;
    }
    let gameplay = &config.gameplay;
    session.invincible = true;
    if let Ok(zombie) = zombie.single() {
        commands
            .entity(zombie)
            .insert(Blink::new(gameplay.invincible_duration, gameplay.blink_count));
    }
    audio.write(AudioCmd::play_fx(FX_HIT_CAT_LADY));

    let mut lost: ArrayVec<Entity, MAX_CATS_LOST_PER_HIT> = ArrayVec::new();
    while lost.len() < gameplay.cats_lost_per_hit.min(MAX_CATS_LOST_PER_HIT) {
        match train.pop_tail() {
            Some(cat) => lost.push(cat),
            None => break,
        }
    }
    for cat in lost.iter().copied() {
        let Ok(position) = cars.get(cat) else {
            continue;
        };
        let script = scatter_script(
            position.pos,
            &mut rng,
            gameplay.scatter_distance,
            gameplay.scatter_duration,
        );
        commands
            .entity(cat)
            .remove::<TrainCar>()
            .insert((Group::new("leaving"), Action::new(script).then_despawn()));
    }

    session.lives -= 1;
    info!(
        "Zombie hit by {:?}: {} lives left, {} cats lost",
        trigger.event().enemy,
        session.lives,
        lost.len()
    );
}
