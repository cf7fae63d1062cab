//! Axis-aligned rectangle used for placement and collision.
//!
//! World space is Y-up: `(x, y)` is the bottom-left corner, so
//! `bottom = y` and `top = y + height`. Rendering flips to screen space.

use std::fmt;

/// Error returned when a rectangle would have a non-positive dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    InvalidWidth(f32),
    InvalidHeight(f32),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidWidth(w) => write!(f, "rect width must be positive, got {}", w),
            ShapeError::InvalidHeight(h) => {
                write!(f, "rect height must be positive, got {}", h)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Create a rectangle. Fails if `width` or `height` is not strictly positive.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, ShapeError> {
        // NaN fails both comparisons, so it is rejected too
        if !(width > 0.0) {
            return Err(ShapeError::InvalidWidth(width));
        }
        if !(height > 0.0) {
            return Err(ShapeError::InvalidHeight(height));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Strict AABB intersection. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.bottom() < other.top()
            && self.top() > other.bottom()
    }
}

/// Returns true if `rect` overlaps any rectangle in `others`.
pub fn rect_hits_any<'a>(rect: &Rect, others: impl IntoIterator<Item = &'a Rect>) -> bool {
    others.into_iter().any(|o| rect.overlaps(o))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h).unwrap()
    }

    #[test]
    fn test_new_rejects_non_positive_sizes() {
        assert_eq!(
            Rect::new(0.0, 0.0, 0.0, 10.0),
            Err(ShapeError::InvalidWidth(0.0))
        );
        assert_eq!(
            Rect::new(0.0, 0.0, 10.0, -1.0),
            Err(ShapeError::InvalidHeight(-1.0))
        );
        assert!(Rect::new(0.0, 0.0, f32::NAN, 1.0).is_err());
    }

    #[test]
    fn test_edges_are_y_up() {
        let rect = r(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 20.0);
        assert_eq!(rect.top(), 60.0);
    }

    #[test]
    fn test_overlap_basic() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&r(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&r(2.0, 2.0, 2.0, 2.0)));
        assert!(!a.overlaps(&r(20.0, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&r(0.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&r(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&r(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let rects = [
            r(0.0, 0.0, 10.0, 10.0),
            r(5.0, 5.0, 10.0, 10.0),
            r(10.0, 0.0, 1.0, 1.0),
            r(-3.0, 4.0, 2.0, 50.0),
            r(2.0, 2.0, 2.0, 2.0),
            r(100.0, 100.0, 1.0, 1.0),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(a.overlaps(b), b.overlaps(a), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_rect_hits_any() {
        let player = r(0.0, 0.0, 10.0, 10.0);
        let far = [r(50.0, 50.0, 1.0, 1.0), r(-50.0, 0.0, 1.0, 1.0)];
        assert!(!rect_hits_any(&player, far.iter()));
        let near = [r(50.0, 50.0, 1.0, 1.0), r(9.0, 9.0, 5.0, 5.0)];
        assert!(rect_hits_any(&player, near.iter()));
        assert!(!rect_hits_any(&player, std::iter::empty()));
    }
}
