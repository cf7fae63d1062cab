//! Play field size resource.
//!
//! The field is the fixed-size world the game simulates in, independent of
//! the window. World coordinates are Y-up with the origin at the bottom-left
//! corner; [`Playfield::to_screen_y`] converts to raylib's Y-down space.

use bevy_ecs::prelude::Resource;

pub const DEFAULT_FIELD_WIDTH: f32 = 640.0;
pub const DEFAULT_FIELD_HEIGHT: f32 = 480.0;

/// Size of the play field in world units.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    pub w: f32,
    pub h: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            w: DEFAULT_FIELD_WIDTH,
            h: DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl Playfield {
    /// Screen-space Y of the upper edge of something whose world-space top is `world_top`.
    pub fn to_screen_y(&self, world_top: f32) -> f32 {
        self.h - world_top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_640x480() {
        let f = Playfield::default();
        assert_eq!((f.w, f.h), (640.0, 480.0));
    }

    #[test]
    fn test_to_screen_y_flips_axis() {
        let f = Playfield::default();
        assert_eq!(f.to_screen_y(480.0), 0.0);
        assert_eq!(f.to_screen_y(0.0), 480.0);
        assert_eq!(f.to_screen_y(272.0), 208.0);
    }
}
