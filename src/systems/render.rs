//! Render system.
//!
//! Draws the whole frame inside a 2D camera scope that fits the fixed play
//! field into the window. Everything below the camera is in field pixels with
//! Y pointing down; world positions are Y-up and flipped here.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rect::Rect;
use crate::components::sprite::Sprite;
use crate::components::wall::Wall;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::{DebugMode, DebugOverlay};
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::playfield::Playfield;
use crate::resources::score::Score;
use crate::resources::spriterenderer::SpriteRenderer;
use crate::resources::spritesheet::Transform2D;

/// Sheet key of the wall tiles.
pub const WALL_SHEET: &str = "resistor";

const SKY: Color = Color::new(135, 205, 234, 255);
const HUD_FONT_SIZE: i32 = 32;
const OVERLAY_FONT_SIZE: i32 = 20;

fn draw_centered_text<D: RaylibDraw>(d: &mut D, text: &str, field: &Playfield, y: i32, size: i32) {
    let x = (field.w as i32 - raylib::text::measure_text(text, size)) / 2;
    d.draw_text(text, x, y, size, Color::BLACK);
}

fn outline<D: RaylibDraw>(d: &mut D, rect: &Rect, field: &Playfield, color: Color) {
    d.draw_rectangle_lines(
        rect.left() as i32,
        field.to_screen_y(rect.top()) as i32,
        rect.width() as i32,
        rect.height() as i32,
        color,
    );
}

struct DrawItem {
    z: i32,
    entity: Entity,
    sheet: &'static str,
    frame: usize,
    transform: Transform2D,
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut renderer: NonSendMut<SpriteRenderer>,
    camera: Res<Camera2DRes>,
    field: Res<Playfield>,
    state: Res<GameState>,
    score: Res<Score>,
    overlay: Res<DebugOverlay>,
    debug: Option<Res<DebugMode>>,
    sprites: Query<(Entity, &Sprite, &MapPosition, &ZIndex)>,
    walls: Query<(Entity, &Wall, &MapPosition, &ZIndex)>,
    players: Query<&Player>,
    colliders: Query<(&BoxCollider, &MapPosition)>,
) {
    // Collect, sort by z (ties by spawn order), then draw.
    let mut to_draw: Vec<DrawItem> = Vec::new();
    for (entity, sprite, position, z) in sprites.iter() {
        to_draw.push(DrawItem {
            z: z.0,
            entity,
            sheet: sprite.sheet,
            frame: sprite.frame,
            transform: Transform2D::at(position.pos.x, position.pos.y),
        });
    }
    for (entity, wall, position, z) in walls.iter() {
        for tile in wall.tiles(position.pos, field.h) {
            to_draw.push(DrawItem {
                z: z.0,
                entity,
                sheet: WALL_SHEET,
                frame: tile.frame,
                transform: Transform2D::at(tile.x, tile.y),
            });
        }
    }
    to_draw.sort_by_key(|item| (item.z, item.entity));

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);
    {
        let mut d2 = d.begin_mode2D(camera.0);
        d2.draw_rectangle(0, 0, field.w as i32, field.h as i32, SKY);

        for item in to_draw.iter() {
            if !renderer.draw_frame(&mut d2, item.sheet, item.frame, &item.transform, &field) {
                log::warn!("Sprite sheet '{}' is not loaded", item.sheet);
            }
        }

        if debug.is_some() {
            for (collider, position) in colliders.iter() {
                outline(&mut d2, &collider.aabb(position.pos), &field, Color::RED);
            }
            for (_, wall, position, _) in walls.iter() {
                for rect in wall.bounds(position.pos) {
                    outline(&mut d2, &rect, &field, Color::RED);
                }
            }
        }

        // HUD
        match state.get() {
            GameStates::Splash => {
                draw_centered_text(&mut d2, "FlappyDisk", &field, field.h as i32 / 3, 48);
                draw_centered_text(
                    &mut d2,
                    "Press jump to start",
                    &field,
                    field.h as i32 / 3 + 64,
                    20,
                );
            }
            _ => {
                let text = score.0.to_string();
                draw_centered_text(&mut d2, &text, &field, 10, HUD_FONT_SIZE);
            }
        }
        if players.iter().any(|player| !player.is_alive()) {
            draw_centered_text(&mut d2, "You Died!", &field, field.h as i32 / 2 - 20, 40);
        }
        if !overlay.text.is_empty() {
            d2.draw_text(&overlay.text, 10, 10, OVERLAY_FONT_SIZE, Color::BLACK);
        }
    }
}
