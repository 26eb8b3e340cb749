//! Rendering.
//!
//! The scene is drawn into the fixed-resolution [`RenderTarget`], then the
//! target is letterboxed into the window. Layer entities are drawn through a
//! 2D camera whose offset is the scroll offset, so `MapPosition` stays
//! layer-local everywhere else.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::blink::Blink;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::playablearea::PlayableArea;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::scrolllayer::ScrollLayer;
use crate::resources::session::GameSession;
use crate::resources::texturestore::TextureStore;
use crate::resources::train::Train;
use crate::resources::windowsize::WindowSize;

const HUD_FONT_SIZE: i32 = 48;

struct DrawItem<'a> {
    sprite: &'a Sprite,
    position: Vector2,
    scale: Vector2,
    rotation: f32,
    tint: Color,
    z: ZIndex,
}

/// Camera that maps layer-local coordinates to scene coordinates.
pub fn layer_camera(layer: &ScrollLayer) -> Camera2D {
    Camera2D {
        offset: layer.offset,
        target: Vector2::zero(),
        rotation: 0.0,
        zoom: 1.0,
    }
}

type SpriteQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static Sprite,
        &'static MapPosition,
        &'static ZIndex,
        Option<&'static Scale>,
        Option<&'static Rotation>,
        Option<&'static Tint>,
        Option<&'static Blink>,
    ),
>;

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut render_target: NonSendMut<RenderTarget>,
    textures: Res<TextureStore>,
    layer: Res<ScrollLayer>,
    window: Res<WindowSize>,
    area: Res<PlayableArea>,
    state: Res<GameState>,
    session: Res<GameSession>,
    train: Res<Train>,
    debug: Option<Res<DebugMode>>,
    sprites: SpriteQuery,
    colliders: Query<(&BoxCollider, &MapPosition, Option<&Scale>)>,
) {
    let mut to_draw: Vec<DrawItem> = sprites
        .iter()
        .filter(|(.., blink)| blink.is_none_or(|b| b.is_visible()))
        .map(|(sprite, pos, z, scale, rotation, tint, _)| DrawItem {
            sprite,
            position: pos.pos,
            scale: scale.map_or(Vector2::one(), |s| s.scale),
            rotation: rotation.map_or(0.0, |r| r.degrees),
            tint: tint.map_or(Color::WHITE, |t| t.color),
            z: *z,
        })
        .collect();
    // stable sort keeps spawn order within a layer
    to_draw.sort_by_key(|item| item.z);

    let target = &mut *render_target;
    let game_width = target.game_width;
    let game_height = target.game_height;
    let source = target.source_rect();
    let letterbox = window.calculate_letterbox(game_width, game_height);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);
    {
        let mut t = d.begin_texture_mode(&th, &mut target.texture);
        t.clear_background(Color::BLACK);
        {
            let mut m = t.begin_mode2D(layer_camera(&layer));
            for item in &to_draw {
                let Some(tex) = textures.get(&item.sprite.tex_key) else {
                    continue;
                };
                let src = Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: tex.width as f32,
                    height: tex.height as f32,
                };
                let dest = Rectangle {
                    x: item.position.x,
                    y: item.position.y,
                    width: item.sprite.width * item.scale.x,
                    height: item.sprite.height * item.scale.y,
                };
                let origin = Vector2 {
                    x: item.sprite.origin.x * item.scale.x,
                    y: item.sprite.origin.y * item.scale.y,
                };
                m.draw_texture_pro(tex, src, dest, origin, item.rotation, item.tint);
            }

            if debug.is_some() {
                for (collider, position, scale) in colliders.iter() {
                    let collider = match scale {
                        Some(s) => collider.scaled(s.scale),
                        None => *collider,
                    };
                    let (x, y, w, h) = collider.get_aabb(position.pos);
                    m.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
                }
            }
        }

        if debug.is_some() {
            let rect = area.rect;
            t.draw_rectangle_lines(
                rect.x as i32,
                rect.y as i32,
                rect.width as i32,
                rect.height as i32,
                Color::RED,
            );
        }

        if matches!(state.get(), GameStates::Playing) {
            t.draw_text(
                &format!("Lives: {}", session.lives.max(0)),
                24,
                24,
                HUD_FONT_SIZE,
                Color::WHITE,
            );
            t.draw_text(
                &format!("Cats: {}", train.len()),
                24,
                24 + HUD_FONT_SIZE + 8,
                HUD_FONT_SIZE,
                Color::WHITE,
            );
        }
    }

    d.draw_texture_pro(
        &target.texture,
        source,
        letterbox,
        Vector2::zero(),
        0.0,
        Color::WHITE,
    );

    if debug.is_some() {
        let fps = d.get_fps();
        d.draw_text(
            &format!("DEBUG MODE (F11) | FPS: {}", fps),
            10,
            10,
            10,
            Color::YELLOW,
        );
    }
}
