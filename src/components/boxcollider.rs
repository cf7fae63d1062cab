use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::rect::{Rect, ShapeError};

/// Rectangular collision bounds attached to an entity.
///
/// The collider keeps its size as a [`Rect`] anchored at the origin and is
/// placed in the world by adding the entity's [`MapPosition`] and `offset`.
///
/// [`MapPosition`]: crate::components::mapposition::MapPosition
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    shape: Rect,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size. Fails on non-positive dimensions.
    pub fn new(width: f32, height: f32) -> Result<Self, ShapeError> {
        Ok(Self {
            shape: Rect::new(0.0, 0.0, width, height)?,
            offset: Vector2::zero(),
        })
    }

    /// Modify BoxCollider with given offset
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    pub fn width(&self) -> f32 {
        self.shape.width()
    }

    pub fn height(&self) -> f32 {
        self.shape.height()
    }

    /// World-space rectangle for a given entity position.
    pub fn aabb(&self, position: Vector2) -> Rect {
        let mut rect = self.shape;
        rect.x = position.x + self.offset.x;
        rect.y = position.y + self.offset.y;
        rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_size() {
        assert!(BoxCollider::new(0.0, 5.0).is_err());
        assert!(BoxCollider::new(5.0, -5.0).is_err());
    }

    #[test]
    fn test_aabb_follows_position_and_offset() {
        let c = BoxCollider::new(32.0, 16.0)
            .unwrap()
            .with_offset(Vector2::new(2.0, 3.0));
        let rect = c.aabb(Vector2::new(10.0, 20.0));
        assert_eq!(rect.left(), 12.0);
        assert_eq!(rect.bottom(), 23.0);
        assert_eq!(rect.right(), 44.0);
        assert_eq!(rect.top(), 39.0);
    }
}
