//! Scrolling wall obstacle.
//!
//! A wall is a pair of columns (a "resistor" hanging from the top and one
//! standing on the bottom) separated by a gap. The entity's
//! [`MapPosition`](super::mapposition::MapPosition) holds the left edge in
//! `x` and the centre of the gap in `y`. Walls are recycled, never despawned:
//! once a wall leaves the field on the left it is moved back past the right
//! edge with a freshly randomised gap.

use bevy_ecs::prelude::Component;
use fastrand::Rng;
use raylib::prelude::Vector2;

use crate::components::rect::{Rect, ShapeError};

/// Horizontal scroll speed in world units per second.
pub const WALL_SPEED: f32 = -250.0;
/// Width of a wall: two columns of tiles.
pub const WALL_WIDTH: f32 = 64.0;
/// Side length of one tile of the wall sheet.
pub const TILE_SIZE: f32 = 32.0;
/// Default vertical gap between the two columns.
pub const GAP_SIZE: f32 = 80.0;

// Frames of the resistor sheet.
const TOP_CAP_LEFT: [usize; 4] = [3, 2, 1, 0];
const TOP_CAP_RIGHT: [usize; 4] = [4, 8, 8, 8];
const BOTTOM_CAP_LEFT: [usize; 4] = [5, 0, 1, 2];
const BOTTOM_CAP_RIGHT: [usize; 4] = [6, 8, 8, 8];
const BODY_LEFT: usize = 7;
const BODY_RIGHT: usize = 8;

/// One tile to draw: sheet frame plus bottom-left corner in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallTile {
    pub frame: usize,
    pub x: f32,
    pub y: f32,
}

#[derive(Component, Debug, Clone)]
pub struct Wall {
    pub velocity_x: f32,
    gap_size: f32,
    /// Collision shape of a single column, anchored at the origin.
    column: Rect,
    /// Set once the player has passed this wall since it was last recycled.
    pub scored: bool,
}

impl Wall {
    /// Create a wall whose columns are as tall as the field.
    pub fn new(gap_size: f32, field_height: f32) -> Result<Self, ShapeError> {
        if !(gap_size > 0.0) {
            return Err(ShapeError::InvalidHeight(gap_size));
        }
        Ok(Self {
            velocity_x: WALL_SPEED,
            gap_size,
            column: Rect::new(0.0, 0.0, WALL_WIDTH, field_height)?,
            scored: false,
        })
    }

    pub fn width(&self) -> f32 {
        self.column.width()
    }

    pub fn gap_size(&self) -> f32 {
        self.gap_size
    }

    pub fn gap_top(&self, position: Vector2) -> f32 {
        position.y + self.gap_size / 2.0
    }

    pub fn gap_bottom(&self, position: Vector2) -> f32 {
        position.y - self.gap_size / 2.0
    }

    /// Collision rectangles: the top column then the bottom column.
    pub fn bounds(&self, position: Vector2) -> [Rect; 2] {
        let mut top = self.column;
        top.x = position.x;
        top.y = self.gap_top(position);

        let mut bottom = self.column;
        bottom.x = position.x;
        bottom.y = self.gap_bottom(position) - bottom.height();

        [top, bottom]
    }

    /// True once the whole wall has scrolled past the left edge.
    pub fn is_off_screen(&self, position: Vector2) -> bool {
        position.x + self.width() < 0.0
    }

    /// Half-open range of gap centres a recycle may pick.
    pub fn gap_range(&self, field_height: f32) -> std::ops::Range<i32> {
        let min = self.gap_size as i32;
        let max = field_height as i32 - self.gap_size as i32;
        min..max
    }

    /// Move the wall just past the right edge with a new random gap.
    pub fn recycle(
        &mut self,
        position: &mut Vector2,
        field_width: f32,
        field_height: f32,
        rng: &mut Rng,
    ) {
        let range = self.gap_range(field_height);
        position.y = if range.is_empty() {
            field_height / 2.0
        } else {
            rng.i32(range) as f32
        };
        position.x = field_width + 1.0;
        self.scored = false;
    }

    /// Tiles that make up both columns, from the gap outwards to the field edges.
    pub fn tiles(&self, position: Vector2, field_height: f32) -> Vec<WallTile> {
        let left = position.x;
        let right = position.x + TILE_SIZE;
        let mut tiles = Vec::new();
        let mut push_row = |y: f32, l: usize, r: usize| {
            tiles.push(WallTile { frame: l, x: left, y });
            tiles.push(WallTile { frame: r, x: right, y });
        };

        let gap_top = self.gap_top(position);
        for (i, (l, r)) in TOP_CAP_LEFT.iter().zip(TOP_CAP_RIGHT.iter()).enumerate() {
            push_row(gap_top + i as f32 * TILE_SIZE, *l, *r);
        }
        let mut y = gap_top + TOP_CAP_LEFT.len() as f32 * TILE_SIZE;
        while y < field_height {
            push_row(y, BODY_LEFT, BODY_RIGHT);
            y += TILE_SIZE;
        }

        let gap_bottom = self.gap_bottom(position);
        for (i, (l, r)) in BOTTOM_CAP_LEFT
            .iter()
            .zip(BOTTOM_CAP_RIGHT.iter())
            .enumerate()
        {
            push_row(gap_bottom - (i + 1) as f32 * TILE_SIZE, *l, *r);
        }
        let mut y = gap_bottom - (BOTTOM_CAP_LEFT.len() + 1) as f32 * TILE_SIZE;
        while y + TILE_SIZE > 0.0 {
            push_row(y, BODY_LEFT, BODY_RIGHT);
            y -= TILE_SIZE;
        }

        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD_W: f32 = 640.0;
    const FIELD_H: f32 = 480.0;

    fn wall() -> Wall {
        Wall::new(GAP_SIZE, FIELD_H).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        assert!(Wall::new(0.0, FIELD_H).is_err());
        assert!(Wall::new(GAP_SIZE, 0.0).is_err());
    }

    #[test]
    fn test_bounds_leave_the_gap_open() {
        let w = wall();
        let pos = Vector2::new(100.0, 240.0);
        let [top, bottom] = w.bounds(pos);
        assert_eq!(top.bottom(), 280.0);
        assert_eq!(bottom.top(), 200.0);
        assert_eq!(top.left(), 100.0);
        assert_eq!(bottom.right(), 164.0);
        assert!(top.top() >= FIELD_H);
        assert!(bottom.bottom() <= 0.0);
    }

    #[test]
    fn test_off_screen_only_when_fully_left() {
        let w = wall();
        assert!(!w.is_off_screen(Vector2::new(-63.0, 240.0)));
        assert!(!w.is_off_screen(Vector2::new(-64.0, 240.0)));
        assert!(w.is_off_screen(Vector2::new(-64.5, 240.0)));
    }

    #[test]
    fn test_recycle_moves_right_and_randomises_gap() {
        let mut w = wall();
        w.scored = true;
        let mut rng = Rng::with_seed(7);
        for _ in 0..200 {
            let mut pos = Vector2::new(-100.0, 240.0);
            w.recycle(&mut pos, FIELD_W, FIELD_H, &mut rng);
            assert!(pos.x > FIELD_W);
            assert!(pos.y >= GAP_SIZE && pos.y <= FIELD_H - GAP_SIZE);
            assert!(!w.scored);
        }
    }

    #[test]
    fn test_recycle_with_degenerate_range_centres_gap() {
        let mut w = Wall::new(300.0, FIELD_H).unwrap();
        let mut rng = Rng::with_seed(1);
        let mut pos = Vector2::new(-100.0, 0.0);
        w.recycle(&mut pos, FIELD_W, FIELD_H, &mut rng);
        assert_eq!(pos.y, FIELD_H / 2.0);
    }

    #[test]
    fn test_tiles_stay_out_of_gap_and_reach_edges() {
        let w = wall();
        for gap_y in [80.0, 150.0, 240.0, 400.0] {
            let pos = Vector2::new(200.0, gap_y);
            let tiles = w.tiles(pos, FIELD_H);
            let gap_top = w.gap_top(pos);
            let gap_bottom = w.gap_bottom(pos);

            for t in &tiles {
                assert!(
                    t.y >= gap_top || t.y + TILE_SIZE <= gap_bottom,
                    "tile {:?} intrudes into gap",
                    t
                );
                assert!(t.x == 200.0 || t.x == 232.0);
            }
            let highest = tiles.iter().map(|t| t.y + TILE_SIZE).fold(f32::MIN, f32::max);
            let lowest = tiles.iter().map(|t| t.y).fold(f32::MAX, f32::min);
            assert!(highest >= FIELD_H);
            assert!(lowest <= 0.0);
        }
    }

    #[test]
    fn test_tiles_use_cap_frames_next_to_gap() {
        let w = wall();
        let pos = Vector2::new(0.0, 240.0);
        let tiles = w.tiles(pos, FIELD_H);
        let at = |x: f32, y: f32| tiles.iter().find(|t| t.x == x && t.y == y).map(|t| t.frame);
        assert_eq!(at(0.0, 280.0), Some(3));
        assert_eq!(at(32.0, 280.0), Some(4));
        assert_eq!(at(0.0, 168.0), Some(5));
        assert_eq!(at(32.0, 168.0), Some(6));
        assert_eq!(at(0.0, 408.0), Some(BODY_LEFT));
    }
}
