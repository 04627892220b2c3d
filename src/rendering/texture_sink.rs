use macroquad::prelude::*;

use super::{DisplaySink, PixelBuffer};

/// Uploads each frame into a streaming texture and stretches it over the window
pub struct TextureSink {
    texture: Texture2D,
    dimensions: (usize, usize),
}

impl TextureSink {
    /// Needs a live macroquad context
    pub fn new(width: usize, height: usize) -> Self {
        let blank = PixelBuffer::new(width, height);
        Self {
            texture: Self::create_texture(&blank),
            dimensions: (width, height),
        }
    }

    fn create_texture(frame: &PixelBuffer) -> Texture2D {
        let (width, height) = frame.dimensions();
        let texture = Texture2D::from_rgba8(width as u16, height as u16, frame.as_bytes());
        // keep cells crisp when scaled up
        texture.set_filter(FilterMode::Nearest);
        texture
    }
}

impl DisplaySink for TextureSink {
    fn present(&mut self, frame: &PixelBuffer) {
        debug_assert_eq!(frame.dimensions(), self.dimensions);
        let (width, height) = self.dimensions;
        self.texture
            .update_from_bytes(width as u32, height as u32, frame.as_bytes());

        clear_background(BLACK);
        draw_texture_ex(
            &self.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );
    }
}
