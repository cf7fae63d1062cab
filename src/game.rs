//! Game setup: resources, observers, actors and the update schedule.
//!
//! Everything here except [`load_sprites`] works without a window, so the
//! integration tests build the same world and schedule the binary runs.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::background::Background;
use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::player::{PLAYER_SIZE, Player};
use crate::components::rect::ShapeError;
use crate::components::sprite::Sprite;
use crate::components::wall::{GAP_SIZE, WALL_WIDTH, Wall};
use crate::components::zindex::ZIndex;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::deathrules::DeathRules;
use crate::resources::debugmode::{CheatMode, DebugMode, DebugOverlay};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::playfield::Playfield;
use crate::resources::score::Score;
use crate::resources::splash::SplashTimer;
use crate::resources::spriterenderer::SpriteRenderer;
use crate::resources::spritesheet::{AssetError, SpriteSheet};
use crate::resources::wallrng::WallRng;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::{collision_detector, collision_observer};
use crate::systems::debugoverlay::debug_overlay_system;
use crate::systems::gamestate::{
    check_game_over, check_pending_state, splash_system, state_is_running, state_is_splash,
};
use crate::systems::input::input_observer;
use crate::systems::player::player_update;
use crate::systems::render::WALL_SHEET;
use crate::systems::score::score_system;
use crate::systems::wall::wall_update;

pub const PLAYER_SHEET: &str = "floppy";
pub const BACKGROUND_SHEET: &str = "mountains";

const FLOPPY_PNG: &[u8] = include_bytes!("../assets/floppy.png");
const RESISTOR_PNG: &[u8] = include_bytes!("../assets/resistor.png");
const MOUNTAINS_PNG: &[u8] = include_bytes!("../assets/mountains.png");

/// Where the player starts, bottom-left corner in world units.
pub const PLAYER_START: (f32, f32) = (320.0, 240.0);
/// Height of the first wall's gap centre.
pub const INITIAL_GAP: f32 = 240.0;

/// Run-time switches taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOptions {
    /// Player death does not end the game; the overlay is shown.
    pub cheat: bool,
    /// Start straight in `Running`.
    pub skip_splash: bool,
    /// Fixed seed for wall gaps.
    pub seed: Option<u64>,
}

/// Entities created by [`spawn_actors`].
#[derive(Debug, Clone, Copy)]
pub struct Actors {
    pub background: Entity,
    pub wall: Entity,
    pub player: Entity,
}

/// Insert every resource the simulation systems need.
pub fn insert_resources(world: &mut World, options: &GameOptions) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(Playfield::default());
    world.insert_resource(Score::default());
    world.insert_resource(DeathRules::default());
    world.insert_resource(DebugOverlay::default());
    world.insert_resource(SplashTimer::default());
    world.insert_resource(match options.seed {
        Some(seed) => WallRng::with_seed(seed),
        None => WallRng::default(),
    });

    let initial = if options.skip_splash {
        GameStates::Running
    } else {
        GameStates::Splash
    };
    world.insert_resource(GameState::new(initial));
    world.insert_resource(NextGameState::new());

    if options.cheat {
        info!("Cheat mode enabled");
        world.insert_resource(CheatMode {});
        world.insert_resource(DebugMode {});
    }
}

/// Register the global observers. Must run before the first schedule run.
pub fn register_observers(world: &mut World) {
    world.add_observer(observe_gamestate_change_event);
    world.add_observer(collision_observer);
    world.add_observer(input_observer);
    world.add_observer(switch_debug_observer);
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();
}

/// Spawn the background, one wall and the player, back to front.
pub fn spawn_actors(world: &mut World, field: &Playfield) -> Result<Actors, ShapeError> {
    let background = world
        .spawn((
            Background,
            Group::new("background"),
            Sprite::new(BACKGROUND_SHEET),
            MapPosition::new(0.0, 0.0),
            ZIndex(0),
        ))
        .id();

    let wall = world
        .spawn((
            Wall::new(GAP_SIZE, field.h)?,
            Group::new("walls"),
            MapPosition::new(field.w - WALL_WIDTH, INITIAL_GAP),
            ZIndex(1),
        ))
        .id();

    let player = world
        .spawn((
            Player::new(),
            Group::new("player"),
            BoxCollider::new(PLAYER_SIZE, PLAYER_SIZE)?,
            Sprite::new(PLAYER_SHEET),
            MapPosition::new(PLAYER_START.0, PLAYER_START.1),
            ZIndex(2),
        ))
        .id();

    info!("Spawned player, wall and background");
    Ok(Actors {
        background,
        wall,
        player,
    })
}

/// Simulation schedule, in fixed tick order.
///
/// The binary adds input polling before and rendering after it.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            (
                player_update,
                wall_update,
                collision_detector,
                score_system,
                check_game_over,
                debug_overlay_system,
            )
                .chain()
                .run_if(state_is_running),
            splash_system.run_if(state_is_splash),
            check_pending_state,
        )
            .chain(),
    );
    update
}

/// Compile the sprite shader and upload every embedded sheet.
pub fn load_sprites(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
) -> Result<SpriteRenderer, AssetError> {
    let mut renderer = SpriteRenderer::bind(rl, thread);
    renderer.add_sheet(
        PLAYER_SHEET,
        SpriteSheet::load(rl, thread, PLAYER_SHEET, FLOPPY_PNG, 1)?,
    );
    renderer.add_sheet(
        WALL_SHEET,
        SpriteSheet::load(rl, thread, WALL_SHEET, RESISTOR_PNG, 32)?,
    );
    renderer.add_sheet(
        BACKGROUND_SHEET,
        SpriteSheet::load(rl, thread, BACKGROUND_SHEET, MOUNTAINS_PNG, 1)?,
    );
    Ok(renderer)
}
