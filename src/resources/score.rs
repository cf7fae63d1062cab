use bevy_ecs::prelude::Resource;

/// Number of walls the player has passed this session.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score(pub u32);
