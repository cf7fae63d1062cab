use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position of an entity (Y-up, origin at the field's bottom-left).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
