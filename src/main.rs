//! FlappyDisk main entry point.
//!
//! A tiny side-scroller written in Rust using:
//! - **raylib** for windowing, graphics, and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Parse flags, load or create the config file
//! 2. Initialize the raylib window and upload the sprite sheets
//! 3. Insert resources, register observers, spawn actors
//! 4. Run the schedule once per tick until the game is over, the player
//!    quits, or the window closes:
//!    - Poll input, move the player and the walls
//!    - Sweep for collisions, update score and game state
//!    - Render world and HUD through the fitted camera
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --nosplash
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use flappydisk::events::gamestate::GameStateChangedEvent;
use flappydisk::game::{self, GameOptions};
use flappydisk::resources::camera2d::Camera2DRes;
use flappydisk::resources::gameconfig::{GameConfig, default_config_path};
use flappydisk::resources::gamestate::{GameState, GameStates, NextGameState};
use flappydisk::resources::input::InputState;
use flappydisk::resources::playfield::Playfield;
use flappydisk::resources::score::Score;
use flappydisk::resources::windowsize::WindowSize;
use flappydisk::systems::gamestate::{check_pending_state, splash_system};
use flappydisk::systems::input::update_input_state;
use flappydisk::systems::player::player_update;
use flappydisk::systems::render::render_system;
use flappydisk::systems::time::update_world_time;

const PROJECT_URL: &str = "https://github.com/hurricanerix/FlappyDisk";
/// Exit code for window, asset and schedule failures.
const EXIT_INIT_FAILURE: i32 = 4;

/// FlappyDisk: keep the floppy flying between the resistors.
#[derive(Parser)]
#[command(name = "flappydisk", author = "Richard Hawkins")]
struct Cli {
    /// Reset config to default before running.
    #[arg(long)]
    reset_conf: bool,

    /// Print version and build info, then exit.
    #[arg(long)]
    version: bool,

    /// Dying does not end the game; shows the developer overlay.
    #[arg(long)]
    cheat: bool,

    /// Skip the title screen.
    #[arg(long)]
    nosplash: bool,

    /// Use this config file instead of the per-user one.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the wall gaps, for reproducible runs.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn version_text() -> String {
    let date = option_env!("FLAPPYDISK_BUILD_DATE").unwrap_or("unknown");
    let hash = option_env!("FLAPPYDISK_BUILD_HASH").unwrap_or("unknown");
    format!(
        "FlappyDisk Copyright 2015 Richard Hawkins\n\
         Licensed under the Apache License, Version 2.0\n\
         Project code can be found at: {url}\n\
         Build Info:\n  \
         {version}\n  \
         built on {date}\n  \
         built from {url}/commit/{hash}",
        url = PROJECT_URL,
        version = env!("CARGO_PKG_VERSION"),
    )
}

fn fail(message: &str, code: i32) -> ! {
    error!("{}", message);
    eprintln!("Error: {}", message);
    std::process::exit(code);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: print build info and quit (no window needed)
    if cli.version {
        println!("{}", version_text());
        return;
    }

    // --------------- Config ---------------
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = match GameConfig::load_or_create(&config_path, cli.reset_conf) {
        Ok(config) => config,
        Err(e) => fail(&e.to_string(), e.exit_code()),
    };

    // --------------- Raylib window & assets ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .title("FlappyDisk");
    if config.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Quitting goes through the configured quit key, not raylib's exit key
    rl.set_exit_key(None);
    info!(
        "Window ready: {}x{}, fullscreen={}",
        rl.get_screen_width(),
        rl.get_screen_height(),
        config.fullscreen
    );

    let renderer = match game::load_sprites(&mut rl, &thread) {
        Ok(renderer) => renderer,
        Err(e) => fail(&e.to_string(), EXIT_INIT_FAILURE),
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    let options = GameOptions {
        cheat: cli.cheat,
        skip_splash: cli.nosplash,
        seed: cli.seed,
    };
    game::insert_resources(&mut world, &options);

    let field = *world.resource::<Playfield>();
    let window = WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    world.insert_resource(Camera2DRes(window.fit_camera(&field)));
    world.insert_resource(window);
    world.insert_resource(InputState::from_bindings(&config.keys));
    world.insert_resource(config);
    world.insert_non_send_resource(renderer);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::register_observers(&mut world);
    if let Err(e) = game::spawn_actors(&mut world, &field) {
        fail(&e.to_string(), EXIT_INIT_FAILURE);
    }

    let mut update = game::build_update_schedule();
    update.add_systems(
        update_input_state
            .before(player_update)
            .before(splash_system)
            .before(check_pending_state),
    );
    update.add_systems(render_system.after(check_pending_state));

    if let Err(e) = update.initialize(&mut world) {
        fail(&format!("Failed to initialize schedule: {}", e), EXIT_INIT_FAILURE);
    }

    // --------------- Main loop ---------------
    loop {
        let (should_close, dt) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.window_should_close(), rl.get_frame_time())
        };
        if should_close {
            world
                .resource_mut::<NextGameState>()
                .set(GameStates::Quitting);
            world.trigger(GameStateChangedEvent {});
        }
        if world.resource::<GameState>().get().is_terminal() {
            break;
        }

        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Refit the camera each frame (window may change, e.g. fullscreen)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        let window = WindowSize { w: new_w, h: new_h };
        world.resource_mut::<Camera2DRes>().0 = window.fit_camera(&field);
        world.insert_resource(window);
    }

    info!(
        "Final state {:?}, score {}",
        world.resource::<GameState>().get(),
        world.resource::<Score>().0
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_text_has_licence_and_url() {
        let text = version_text();
        assert!(text.starts_with("FlappyDisk Copyright 2015 Richard Hawkins"));
        assert!(text.contains("Apache License, Version 2.0"));
        assert!(text.contains(PROJECT_URL));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_cli_flags_parse() {
        let cli = Cli::parse_from(["flappydisk", "--cheat", "--nosplash", "--reset-conf"]);
        assert!(cli.cheat);
        assert!(cli.nosplash);
        assert!(cli.reset_conf);
        assert!(!cli.version);
        assert!(cli.config.is_none());
    }
}
