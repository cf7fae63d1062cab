use bevy_ecs::prelude::Component;

/// Sprite is identified by a sheet key and the frame to show from that sheet.
///
/// It carries no placement: the render system builds a transform from the
/// entity's [`MapPosition`](super::mapposition::MapPosition) at draw time.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub sheet: &'static str,
    pub frame: usize,
}

impl Sprite {
    pub fn new(sheet: &'static str) -> Self {
        Self { sheet, frame: 0 }
    }
}
