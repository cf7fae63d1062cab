//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, configuration,
//! rendering handles and the rules of the game. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `camera2d` – camera fitting the play field into the window
//! - `deathrules` – which of the two death checks are active
//! - `debugmode` – debug, cheat and overlay toggles
//! - `gameconfig` – INI-backed window and key settings
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard state of the keys the game uses
//! - `playfield` – fixed logical size of the world
//! - `score` – walls passed so far
//! - `splash` – remaining time of the title screen
//! - `spriterenderer` / `spritesheet` – textures, frame math and sprite shader
//! - `wallrng` – random source for wall gaps
//! - `windowsize` – current window dimensions in pixels
//! - `worldtime` – simulation time and delta
pub mod camera2d;
pub mod deathrules;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod playfield;
pub mod score;
pub mod splash;
pub mod spriterenderer;
pub mod spritesheet;
pub mod wallrng;
pub mod windowsize;
pub mod worldtime;
