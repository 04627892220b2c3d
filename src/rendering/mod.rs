//! Projects the grid into an RGBA pixel buffer and hands it to a display sink.

mod texture_sink;

pub use texture_sink::TextureSink;

use crate::domain::Grid;

pub const BYTES_PER_PIXEL: usize = 4;

/// Foreground and background colours, RGBA
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub alive: [u8; 4],
    pub dead: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: [255, 255, 255, 255],
            dead: [0, 0, 0, 255],
        }
    }
}

/// Flat row-major RGBA buffer, one pixel per cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Zeroed buffer of `width * height` pixels
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bytes: vec![0; width * height * BYTES_PER_PIXEL],
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * BYTES_PER_PIXEL;
        self.bytes[start..start + BYTES_PER_PIXEL].try_into().ok()
    }

    /// Overwrite every pixel from the grid. Buffer and grid share fixed dimensions.
    pub fn paint(&mut self, grid: &Grid, palette: &Palette) {
        debug_assert_eq!(grid.dimensions(), self.dimensions());

        self.bytes
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(grid.iter_cells())
            .for_each(|(pixel, (_, _, cell))| {
                let color = if cell.is_alive() { palette.alive } else { palette.dead };
                pixel.copy_from_slice(&color);
            });
    }
}

/// Receives one complete frame per generation
pub trait DisplaySink {
    fn present(&mut self, frame: &PixelBuffer);
}

/// Owns the frame buffer so it is reused from one generation to the next
pub struct Renderer {
    palette: Palette,
    frame: PixelBuffer,
}

impl Renderer {
    pub fn new(width: usize, height: usize, palette: Palette) -> Self {
        Self {
            palette,
            frame: PixelBuffer::new(width, height),
        }
    }

    /// Paint the grid into the owned frame and return it
    pub fn paint(&mut self, grid: &Grid) -> &PixelBuffer {
        self.frame.paint(grid, &self.palette);
        &self.frame
    }

    /// Paint the grid and forward the frame to `sink`
    pub fn render(&mut self, grid: &Grid, sink: &mut impl DisplaySink) {
        self.frame.paint(grid, &self.palette);
        sink.present(&self.frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<PixelBuffer>,
    }

    impl DisplaySink for RecordingSink {
        fn present(&mut self, frame: &PixelBuffer) {
            self.frames.push(frame.clone());
        }
    }

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 128];

    #[test]
    fn test_paint_maps_cells_to_palette() {
        let mut grid = Grid::new(4, 3);
        grid.set(1, 2, true);
        grid.set(3, 0, true);

        let mut frame = PixelBuffer::new(4, 3);
        frame.paint(&grid, &Palette { alive: RED, dead: BLUE });

        assert_eq!(frame.as_bytes().len(), 4 * 3 * 4);
        for y in 0..3 {
            for x in 0..4 {
                let expected = if grid.alive(x as i64, y as i64) { RED } else { BLUE };
                assert_eq!(frame.pixel(x, y), Some(expected));
            }
        }
        // row-major: (1, 2) lives at byte (2 * 4 + 1) * 4
        assert_eq!(&frame.as_bytes()[36..40], &RED);
    }

    #[test]
    fn test_pixel_out_of_range() {
        assert_eq!(PixelBuffer::new(2, 2).pixel(2, 0), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_paint_rejects_mismatched_grid() {
        let mut frame = PixelBuffer::new(1, 1);
        frame.paint(&Grid::new(5, 2), &Palette::default());
    }

    #[test]
    fn test_blank_grid_paints_background() {
        let mut frame = PixelBuffer::new(5, 2);
        frame.paint(&Grid::new(5, 2), &Palette::default());
        assert!(frame.as_bytes().chunks(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn test_renderer_presents_every_frame() {
        let mut grid = Grid::new(3, 3);
        let mut renderer = Renderer::new(3, 3, Palette::default());
        let mut sink = RecordingSink::default();

        renderer.render(&grid, &mut sink);
        grid.set(0, 0, true);
        renderer.render(&grid, &mut sink);

        assert_eq!(sink.frames.len(), 2);
        assert_eq!(sink.frames[0].pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(sink.frames[1].pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(renderer.paint(&grid), &sink.frames[1]);
    }
}
