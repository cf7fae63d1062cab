//! Sprite sheets and the frame-selection math.
//!
//! A sheet is a single texture holding `frame_count` equally wide frames laid
//! out left to right. Drawing a frame maps the unit quad's UVs through a
//! [`FrameMatrix`] that picks the horizontal slice of that frame. The same
//! matrix drives both the shader uniform and the CPU source-rectangle
//! fallback, so the two paths select identical texels.

use std::fmt;

use raylib::prelude::*;

/// Failure to turn embedded image bytes into a usable sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    /// The bytes are not a decodable image.
    Decode { asset: String, message: String },
    /// The image decoded but could not be uploaded to the GPU.
    Upload { asset: String, message: String },
    /// A sheet needs at least one frame.
    InvalidFrameCount { asset: String, frame_count: usize },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Decode { asset, message } => {
                write!(f, "could not decode {}: {}", asset, message)
            }
            AssetError::Upload { asset, message } => {
                write!(f, "could not upload {}: {}", asset, message)
            }
            AssetError::InvalidFrameCount { asset, frame_count } => {
                write!(f, "{} needs at least one frame, got {}", asset, frame_count)
            }
        }
    }
}

impl std::error::Error for AssetError {}

/// Geometry of a sheet: how many frames and how big each one is in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLayout {
    pub frame_count: usize,
    pub frame_width: f32,
    pub frame_height: f32,
}

impl FrameLayout {
    /// Split a `texture_width × texture_height` image into `frame_count` columns.
    pub fn new(texture_width: f32, texture_height: f32, frame_count: usize) -> Option<Self> {
        if frame_count == 0 {
            return None;
        }
        Some(Self {
            frame_count,
            frame_width: texture_width / frame_count as f32,
            frame_height: texture_height,
        })
    }

    /// UV transform selecting `frame`. Indices wrap around the frame count.
    pub fn frame_matrix(&self, frame: usize) -> FrameMatrix {
        let scale_u = 1.0 / self.frame_count as f32;
        let index = frame % self.frame_count;
        FrameMatrix {
            scale_u,
            translate_u: index as f32 * scale_u,
            scale_v: 1.0,
            translate_v: 0.0,
        }
    }
}

/// 2D affine UV transform: `u' = u * scale_u + translate_u`, same for `v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrix {
    pub scale_u: f32,
    pub translate_u: f32,
    pub scale_v: f32,
    pub translate_v: f32,
}

impl FrameMatrix {
    pub fn apply(&self, u: f32, v: f32) -> (f32, f32) {
        (
            u * self.scale_u + self.translate_u,
            v * self.scale_v + self.translate_v,
        )
    }

    /// Column-major 4×4 form, as uploaded to the `frameMatrix` uniform.
    pub fn to_matrix(&self) -> Matrix {
        Matrix {
            m0: self.scale_u,
            m4: 0.0,
            m8: 0.0,
            m12: self.translate_u,
            m1: 0.0,
            m5: self.scale_v,
            m9: 0.0,
            m13: self.translate_v,
            m2: 0.0,
            m6: 0.0,
            m10: 1.0,
            m14: 0.0,
            m3: 0.0,
            m7: 0.0,
            m11: 0.0,
            m15: 1.0,
        }
    }

    /// Pixel rectangle of the slice inside a `texture_width × texture_height` texture.
    pub fn source_rect(&self, texture_width: f32, texture_height: f32) -> Rectangle {
        let (u0, v0) = self.apply(0.0, 0.0);
        let (u1, v1) = self.apply(1.0, 1.0);
        Rectangle {
            x: u0 * texture_width,
            y: v0 * texture_height,
            width: (u1 - u0) * texture_width,
            height: (v1 - v0) * texture_height,
        }
    }
}

/// Placement of one draw: world position of the bottom-left corner, rotation
/// in degrees around the tile centre, and a uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub position: Vector2,
    pub rotation: f32,
    pub scale: f32,
}

impl Transform2D {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vector2 { x, y },
            rotation: 0.0,
            scale: 1.0,
        }
    }

    /// Screen-space destination and rotation origin for a `width × height` tile.
    ///
    /// The world is Y-up, the screen Y-down; the destination is anchored at the
    /// tile centre so rotation spins in place.
    pub fn dest_rect(&self, width: f32, height: f32, field_height: f32) -> (Rectangle, Vector2) {
        let w = width * self.scale;
        let h = height * self.scale;
        let dest = Rectangle {
            x: self.position.x + w / 2.0,
            y: field_height - (self.position.y + h) + h / 2.0,
            width: w,
            height: h,
        };
        (dest, Vector2 { x: w / 2.0, y: h / 2.0 })
    }
}

/// A loaded texture plus its frame layout.
pub struct SpriteSheet {
    pub texture: Texture2D,
    pub layout: FrameLayout,
}

impl SpriteSheet {
    /// Decode PNG `bytes` and upload them as a texture of `frame_count` frames.
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        asset: &str,
        bytes: &[u8],
        frame_count: usize,
    ) -> Result<Self, AssetError> {
        if frame_count == 0 {
            return Err(AssetError::InvalidFrameCount {
                asset: asset.to_string(),
                frame_count,
            });
        }
        let image = Image::load_image_from_mem(".png", bytes).map_err(|e| AssetError::Decode {
            asset: asset.to_string(),
            message: e.to_string(),
        })?;
        let texture =
            rl.load_texture_from_image(thread, &image)
                .map_err(|e| AssetError::Upload {
                    asset: asset.to_string(),
                    message: e.to_string(),
                })?;
        let layout = FrameLayout::new(texture.width as f32, texture.height as f32, frame_count)
            .ok_or_else(|| AssetError::InvalidFrameCount {
                asset: asset.to_string(),
                frame_count,
            })?;
        log::info!(
            "Loaded sprite sheet '{}' ({}x{}, {} frames)",
            asset,
            texture.width,
            texture.height,
            frame_count
        );
        Ok(Self { texture, layout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resistor() -> FrameLayout {
        FrameLayout::new(1024.0, 32.0, 32).unwrap()
    }

    #[test]
    fn test_layout_splits_width() {
        let layout = resistor();
        assert_eq!(layout.frame_width, 32.0);
        assert_eq!(layout.frame_height, 32.0);
        assert!(FrameLayout::new(32.0, 32.0, 0).is_none());
    }

    #[test]
    fn test_frame_matrix_selects_slice() {
        let m = resistor().frame_matrix(4);
        assert_eq!(m.scale_u, 1.0 / 32.0);
        assert_eq!(m.translate_u, 4.0 / 32.0);
        assert_eq!(m.apply(0.0, 0.0), (0.125, 0.0));
        assert_eq!(m.apply(1.0, 1.0), (0.15625, 1.0));
    }

    #[test]
    fn test_frame_index_wraps() {
        let layout = resistor();
        assert_eq!(layout.frame_matrix(33), layout.frame_matrix(1));
    }

    #[test]
    fn test_single_frame_is_identity() {
        let m = FrameLayout::new(32.0, 32.0, 1).unwrap().frame_matrix(0);
        assert_eq!(m.apply(0.25, 0.75), (0.25, 0.75));
    }

    #[test]
    fn test_matrix_is_column_major() {
        let m = resistor().frame_matrix(2).to_matrix();
        assert_eq!(m.m0, 1.0 / 32.0);
        assert_eq!(m.m12, 2.0 / 32.0);
        assert_eq!(m.m5, 1.0);
        assert_eq!(m.m13, 0.0);
        assert_eq!(m.m15, 1.0);
    }

    #[test]
    fn test_source_rect_matches_frame() {
        let src = resistor().frame_matrix(3).source_rect(1024.0, 32.0);
        assert_eq!(src.x, 96.0);
        assert_eq!(src.y, 0.0);
        assert_eq!(src.width, 32.0);
        assert_eq!(src.height, 32.0);
    }

    #[test]
    fn test_dest_rect_flips_y_and_centres_origin() {
        let t = Transform2D::at(320.0, 240.0);
        let (dest, origin) = t.dest_rect(32.0, 32.0, 480.0);
        // top edge of the tile sits at screen y = 480 - 272 = 208
        assert_eq!(dest.y - origin.y, 208.0);
        assert_eq!(dest.x - origin.x, 320.0);
        assert_eq!(dest.width, 32.0);

        let scaled = Transform2D {
            scale: 2.0,
            ..Transform2D::at(0.0, 0.0)
        };
        let (dest, origin) = scaled.dest_rect(32.0, 32.0, 480.0);
        assert_eq!(dest.width, 64.0);
        assert_eq!(dest.y - origin.y, 416.0);
    }
}
