use bevy_ecs::prelude::Component;

/// Marker for static scenery drawn behind every other actor.
///
/// Backgrounds never move and have no collision bounds.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Background;
