//! Rules deciding what kills the player.
//!
//! Leaving the field through the bottom and touching an obstacle are two
//! separate rules so either can be switched off on its own.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeathRules {
    /// Falling out through the bottom of the field kills.
    pub out_of_field_kills: bool,
    /// Overlapping another actor's bounds kills.
    pub collision_kills: bool,
}

impl Default for DeathRules {
    fn default() -> Self {
        Self {
            out_of_field_kills: true,
            collision_kills: true,
        }
    }
}
