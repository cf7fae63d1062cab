//! Shader-backed sprite drawing.
//!
//! [`SpriteRenderer`] is a non-send resource: it owns GPU handles that belong
//! to the thread that created the window. It holds the sprite shader and every
//! loaded [`SpriteSheet`], and draws one frame per call.

use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::resources::playfield::Playfield;
use crate::resources::spritesheet::{SpriteSheet, Transform2D};

/// Uniform carrying the frame-selection matrix.
pub const FRAME_MATRIX_UNIFORM: &str = "frameMatrix";

const SPRITE_VS: &str = r#"#version 330
in vec3 vertexPosition;
in vec2 vertexTexCoord;
in vec4 vertexColor;

uniform mat4 mvp;
uniform mat4 frameMatrix;

out vec2 fragTexCoord;
out vec4 fragColor;

void main()
{
    fragTexCoord = (frameMatrix * vec4(vertexTexCoord, 0.0, 1.0)).xy;
    fragColor = vertexColor;
    gl_Position = mvp * vec4(vertexPosition, 1.0);
}
"#;

const SPRITE_FS: &str = r#"#version 330
in vec2 fragTexCoord;
in vec4 fragColor;

uniform sampler2D texture0;
uniform vec4 colDiffuse;

out vec4 finalColor;

void main()
{
    finalColor = texture(texture0, fragTexCoord) * colDiffuse * fragColor;
}
"#;

pub struct SpriteRenderer {
    shader: Shader,
    /// `None` when the shader lacks the uniform; frames are then cut on the CPU.
    frame_location: Option<i32>,
    sheets: FxHashMap<&'static str, SpriteSheet>,
}

impl SpriteRenderer {
    /// Compile the sprite shader and look up its frame uniform.
    ///
    /// A missing uniform is not an error: drawing falls back to slicing the
    /// source rectangle.
    pub fn bind(rl: &mut RaylibHandle, thread: &RaylibThread) -> Self {
        let shader = rl.load_shader_from_memory(thread, Some(SPRITE_VS), Some(SPRITE_FS));
        let location = shader.get_shader_location(FRAME_MATRIX_UNIFORM);
        let frame_location = if location < 0 {
            log::warn!(
                "Sprite shader has no '{}' uniform, slicing frames on the CPU",
                FRAME_MATRIX_UNIFORM
            );
            None
        } else {
            Some(location)
        };
        Self {
            shader,
            frame_location,
            sheets: FxHashMap::default(),
        }
    }

    pub fn add_sheet(&mut self, key: &'static str, sheet: SpriteSheet) {
        self.sheets.insert(key, sheet);
    }

    /// Draw `frame` of `sheet` at `transform`. Returns `false` if the sheet is unknown.
    ///
    /// With the shader path the whole texture is passed as source and the
    /// uniform narrows it to the frame; each draw gets its own shader scope so
    /// the batch is flushed before the uniform changes again.
    pub fn draw_frame<D: RaylibDraw + RaylibShaderModeExt>(
        &mut self,
        d: &mut D,
        sheet: &str,
        frame: usize,
        transform: &Transform2D,
        field: &Playfield,
    ) -> bool {
        let Some(sheet) = self.sheets.get(sheet) else {
            return false;
        };
        let tex_w = sheet.texture.width as f32;
        let tex_h = sheet.texture.height as f32;
        let frame_matrix = sheet.layout.frame_matrix(frame);
        let (dest, origin) = transform.dest_rect(
            sheet.layout.frame_width,
            sheet.layout.frame_height,
            field.h,
        );

        match self.frame_location {
            Some(location) => {
                let src = Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: tex_w,
                    height: tex_h,
                };
                self.shader
                    .set_shader_value_matrix(location, frame_matrix.to_matrix());
                let mut sd = d.begin_shader_mode(&mut self.shader);
                sd.draw_texture_pro(
                    &sheet.texture,
                    src,
                    dest,
                    origin,
                    transform.rotation,
                    Color::WHITE,
                );
            }
            None => {
                let src = frame_matrix.source_rect(tex_w, tex_h);
                d.draw_texture_pro(
                    &sheet.texture,
                    src,
                    dest,
                    origin,
                    transform.rotation,
                    Color::WHITE,
                );
            }
        }
        true
    }
}
