//! Debug and cheat toggle resources.
//!
//! The mere presence of [`DebugMode`] enables collider outlines and the
//! overlay text. [`CheatMode`] suppresses the game-over transition so a dead
//! player can be inspected. `--cheat` inserts both.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, systems may draw overlays or print extra logs.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}

/// Marker resource: when present, player death does not end the game.
#[derive(Resource, Clone, Copy, Debug)]
pub struct CheatMode {}

/// Text of the developer overlay, refreshed every tick while cheating.
#[derive(Resource, Clone, Debug, Default)]
pub struct DebugOverlay {
    pub text: String,
}
