//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels, which may differ from the
//! play field. Updated each frame and used to fit the field into the window.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

use crate::resources::playfield::Playfield;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Calculate the destination rectangle for letterboxed rendering.
    ///
    /// Given the field size, returns a rectangle that:
    /// - Preserves the field's aspect ratio
    /// - Fits within the window bounds
    /// - Centers the content (letterbox/pillarbox as needed)
    pub fn calculate_letterbox(&self, field: &Playfield) -> Rectangle {
        let window_w = self.w as f32;
        let window_h = self.h as f32;

        let field_aspect = field.w / field.h;
        let window_aspect = window_w / window_h;

        if window_aspect > field_aspect {
            // Window is wider than the field - pillarbox (bars on sides)
            let scale = window_h / field.h;
            let scaled_w = field.w * scale;
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            // Window is taller than the field - letterbox (bars top/bottom)
            let scale = window_w / field.w;
            let scaled_h = field.h * scale;
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }

    /// Camera that maps the whole field onto the letterboxed window area.
    ///
    /// This is the projection/view pair of the renderer: raylib folds it into
    /// the `mvp` uniform of every sprite draw.
    pub fn fit_camera(&self, field: &Playfield) -> Camera2D {
        let letterbox = self.calculate_letterbox(field);
        Camera2D {
            offset: Vector2 {
                x: letterbox.x,
                y: letterbox.y,
            },
            target: Vector2 { x: 0.0, y: 0.0 },
            rotation: 0.0,
            zoom: letterbox.width / field.w,
        }
    }
}
