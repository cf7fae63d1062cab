//! Game systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering. The simulation systems need no window and run headless in
//! tests; `input` and `render` talk to Raylib.
//!
//! Submodules overview
//! - [`collision`] – player-versus-actor overlap sweep and death response
//! - [`debugoverlay`] – refresh the developer overlay text
//! - [`gamestate`] – pending transitions, game over and the splash countdown
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`player`] – gravity, jump and field edges for the player
//! - [`render`] – draw world, HUD and debug overlays using Raylib
//! - [`score`] – count passed walls
//! - [`time`] – update simulation time and delta
//! - [`wall`] – scroll and recycle walls

pub mod collision;
pub mod debugoverlay;
pub mod gamestate;
pub mod input;
pub mod player;
pub mod render;
pub mod score;
pub mod time;
pub mod wall;
